//! Per-variant labels for waypoints.
//!
//! A map variant (for example a particular seed of a procedurally arranged
//! map) decides what occupies each location. The table is keyed by an
//! opaque variant string and maps waypoint names to display labels.

use std::collections::BTreeMap;

use thiserror::Error;

/// Errors returned while decoding a [`LabelTable`].
#[derive(Debug, Error)]
pub enum LabelTableError {
    /// The JSON document was malformed.
    #[cfg(feature = "serde")]
    #[error("invalid label table JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// A variant key was empty.
    #[error("label table contains an empty variant key")]
    EmptyVariant,
}

/// Variant-keyed labels: `variant -> waypoint -> label`.
///
/// # Examples
/// ```rust
/// use waypath_core::LabelTable;
///
/// let table = LabelTable::from_entries([(
///     "Gladius-Default-0",
///     vec![("Stormhill", "Bell Bearing Hunter")],
/// )])?;
/// assert_eq!(
///     table.label("Gladius-Default-0", "Stormhill"),
///     Some("Bell Bearing Hunter")
/// );
/// assert_eq!(table.label("Gladius-Default-0", "Mistwood"), None);
/// # Ok::<(), waypath_core::LabelTableError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(
        try_from = "BTreeMap<String, BTreeMap<String, String>>",
        into = "BTreeMap<String, BTreeMap<String, String>>"
    )
)]
pub struct LabelTable {
    variants: BTreeMap<String, BTreeMap<String, String>>,
}

impl LabelTable {
    /// Build a table from `(variant, [(waypoint, label)])` entries.
    pub fn from_entries<I, V, L, W, T>(entries: I) -> Result<Self, LabelTableError>
    where
        I: IntoIterator<Item = (V, L)>,
        V: Into<String>,
        L: IntoIterator<Item = (W, T)>,
        W: Into<String>,
        T: Into<String>,
    {
        let variants = entries
            .into_iter()
            .map(|(variant, labels)| {
                let named = labels
                    .into_iter()
                    .map(|(waypoint, label)| (waypoint.into(), label.into()))
                    .collect();
                (variant.into(), named)
            })
            .collect();
        Self::checked(variants)
    }

    fn checked(
        variants: BTreeMap<String, BTreeMap<String, String>>,
    ) -> Result<Self, LabelTableError> {
        if variants.keys().any(String::is_empty) {
            return Err(LabelTableError::EmptyVariant);
        }
        Ok(Self { variants })
    }

    /// Decode `{"variant": {"waypoint": "label"}}` JSON.
    #[cfg(feature = "serde")]
    pub fn from_json_reader<R: std::io::Read>(reader: R) -> Result<Self, LabelTableError> {
        let table: Self = serde_json::from_reader(reader)?;
        log::debug!("loaded labels for {} map variants", table.variants.len());
        Ok(table)
    }

    /// All labels recorded for `variant`.
    #[must_use]
    pub fn labels_for(&self, variant: &str) -> Option<&BTreeMap<String, String>> {
        self.variants.get(variant)
    }

    /// Label of `waypoint` on `variant`, if recorded.
    #[must_use]
    pub fn label(&self, variant: &str, waypoint: &str) -> Option<&str> {
        self.labels_for(variant)
            .and_then(|labels| labels.get(waypoint))
            .map(String::as_str)
    }

    /// Known variant keys in sorted order.
    pub fn variants(&self) -> impl Iterator<Item = &str> + '_ {
        self.variants.keys().map(String::as_str)
    }
}

impl TryFrom<BTreeMap<String, BTreeMap<String, String>>> for LabelTable {
    type Error = LabelTableError;

    fn try_from(variants: BTreeMap<String, BTreeMap<String, String>>) -> Result<Self, Self::Error> {
        Self::checked(variants)
    }
}

impl From<LabelTable> for BTreeMap<String, BTreeMap<String, String>> {
    fn from(table: LabelTable) -> Self {
        table.variants
    }
}
