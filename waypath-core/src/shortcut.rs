//! Declared low-cost jumps between two waypoints.

/// A one-shot fast connection from `entry` to `exit`.
///
/// Both ends are ordinary waypoints with coordinates; the graph builder
/// gives the pair a fixed weight regardless of how far apart they are.
/// Construction does not validate the pair; a shortcut whose ends match
/// is rejected when a graph is built from it.
///
/// # Examples
/// ```rust
/// use waypath_core::Shortcut;
///
/// let bird = Shortcut::new("BirdStart1", "BirdEnd1");
/// assert!(bird.connects("BirdEnd1", "BirdStart1"));
/// assert!(!bird.is_degenerate());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Shortcut {
    /// Waypoint where the jump starts.
    pub entry: String,
    /// Waypoint where the jump lands.
    pub exit: String,
}

impl Shortcut {
    /// Pair `entry` with `exit`.
    pub fn new(entry: impl Into<String>, exit: impl Into<String>) -> Self {
        Self {
            entry: entry.into(),
            exit: exit.into(),
        }
    }

    /// Whether both ends name the same waypoint.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.entry == self.exit
    }

    /// Whether this shortcut joins `a` and `b`, in either direction.
    #[must_use]
    pub fn connects(&self, a: &str, b: &str) -> bool {
        (self.entry == a && self.exit == b) || (self.entry == b && self.exit == a)
    }

    /// Both ends, entry first.
    #[must_use]
    pub fn endpoints(&self) -> [&str; 2] {
        [self.entry.as_str(), self.exit.as_str()]
    }
}

impl<A, B> From<(A, B)> for Shortcut
where
    A: Into<String>,
    B: Into<String>,
{
    fn from((entry, exit): (A, B)) -> Self {
        Self::new(entry, exit)
    }
}
