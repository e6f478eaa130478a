//! Case-insensitive person, department and token names.
//!
//! Every lookup, grouping and set operation over names goes through
//! [`fold_name`], either directly or through the [`Name`] key type. Nothing
//! else in the workspace lower-cases a name.

use serde::{Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Fold a name to its canonical comparison form.
pub fn fold_name(name: &str) -> String {
    name.to_lowercase()
}

/// Returns true when two names are equal ignoring case.
pub fn names_match(a: &str, b: &str) -> bool {
    a.eq_ignore_ascii_case(b) || fold_name(a) == fold_name(b)
}

/// A name that compares, hashes and orders by its folded form.
///
/// The display form is whatever casing the name was first built with. When
/// a `Name` is used as a map key, the first inserted key wins, so a counter
/// keyed by `Name` reports the first-seen casing of each person.
#[derive(Debug, Clone)]
pub struct Name {
    display: String,
    folded: String,
}

impl Name {
    pub fn new(display: impl Into<String>) -> Self {
        let display = display.into();
        let folded = fold_name(&display);
        Self { display, folded }
    }

    /// The name as it appeared in the source.
    pub fn as_str(&self) -> &str {
        &self.display
    }

    /// The canonical comparison key.
    pub fn folded(&self) -> &str {
        &self.folded
    }

    pub fn is_empty(&self) -> bool {
        self.display.is_empty()
    }

    /// Returns true when `other` names the same thing.
    pub fn matches(&self, other: &str) -> bool {
        self.folded == fold_name(other)
    }

    pub fn into_string(self) -> String {
        self.display
    }
}

impl PartialEq for Name {
    fn eq(&self, other: &Self) -> bool {
        self.folded == other.folded
    }
}

impl Eq for Name {}

impl Hash for Name {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.folded.hash(state);
    }
}

impl PartialOrd for Name {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Name {
    fn cmp(&self, other: &Self) -> Ordering {
        self.folded.cmp(&other.folded)
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display)
    }
}

impl From<&str> for Name {
    fn from(s: &str) -> Self {
        Name::new(s)
    }
}

impl From<String> for Name {
    fn from(s: String) -> Self {
        Name::new(s)
    }
}

impl Serialize for Name {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.display)
    }
}
