//! Visiting orders through target waypoints.
//!
//! A route is an open path: it never returns to its first stop.

use std::fmt;

/// Ordered, non-repeating sequence of waypoint names.
///
/// Serialises as a plain JSON array of strings.
///
/// # Examples
/// ```rust
/// use waypath_core::Route;
///
/// let route = Route::new(vec!["Mistwood".into(), "Stormhill".into()]);
/// assert_eq!(route.len(), 2);
/// assert_eq!(route.to_string(), "Mistwood -> Stormhill");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Route {
    waypoints: Vec<String>,
}

impl Route {
    /// Construct a route from names in visiting order.
    #[must_use]
    pub const fn new(waypoints: Vec<String>) -> Self {
        Self { waypoints }
    }

    /// Construct an empty route.
    ///
    /// # Examples
    /// ```rust
    /// use waypath_core::Route;
    ///
    /// assert!(Route::empty().is_empty());
    /// ```
    #[must_use]
    pub const fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Names in visiting order.
    #[must_use]
    pub fn waypoints(&self) -> &[String] {
        &self.waypoints
    }

    /// Number of stops.
    #[must_use]
    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    /// Whether the route has no stops.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    /// First stop, if any.
    #[must_use]
    pub fn start(&self) -> Option<&str> {
        self.waypoints.first().map(String::as_str)
    }

    /// Last stop, if any.
    #[must_use]
    pub fn end(&self) -> Option<&str> {
        self.waypoints.last().map(String::as_str)
    }

    /// Consecutive `(from, to)` legs.
    pub fn legs(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.waypoints
            .windows(2)
            .filter_map(|pair| match pair {
                [from, to] => Some((from.as_str(), to.as_str())),
                _ => None,
            })
    }

    /// Consume the route, yielding its names.
    #[must_use]
    pub fn into_waypoints(self) -> Vec<String> {
        self.waypoints
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.waypoints.join(" -> "))
    }
}

impl From<Vec<String>> for Route {
    fn from(waypoints: Vec<String>) -> Self {
        Self::new(waypoints)
    }
}
