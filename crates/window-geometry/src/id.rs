//! Stable identifiers for tracked window slots.

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};

/// Identifier for a window slot.
///
/// Identifiers are assigned by the application and stay the same across
/// restarts, so a dialog reopened in a later session finds the geometry it
/// had before. The registry never invents identifiers on its own.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WindowId(String);

impl WindowId {
    /// Construct an identifier from any string-like value.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for WindowId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for WindowId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<WindowId> for String {
    fn from(value: WindowId) -> Self {
        value.0
    }
}

impl AsRef<str> for WindowId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for WindowId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_order_lexically() {
        let mut ids = vec![WindowId::from("main"), WindowId::from("dialog"), "about".into()];
        ids.sort();
        let names: Vec<&str> = ids.iter().map(WindowId::as_str).collect();
        assert_eq!(names, ["about", "dialog", "main"]);
    }

    #[test]
    fn string_conversions_preserve_text() {
        let id = WindowId::new(String::from("settings"));
        assert_eq!(id.to_string(), "settings");
        assert_eq!(id.as_ref(), "settings");
        assert_eq!(String::from(id), "settings");
    }
}
