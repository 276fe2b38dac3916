//! Known vulnerable and fixed React versions

use serde::{Deserialize, Serialize};

/// React versions affected by the defect
pub const DEFAULT_VULNERABLE_VERSIONS: [&str; 4] = ["19.0", "19.1.0", "19.1.1", "19.2.0"];

/// React versions carrying the fix
pub const DEFAULT_FIXED_VERSIONS: [&str; 3] = ["19.0.1", "19.1.2", "19.2.1"];

/// The two version lists a classifier compares against
///
/// Entries are either full versions (`19.1.0`) or a `MAJOR.MINOR` line
/// (`19.0`) that covers every patch release of that line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VersionLists {
    pub vulnerable: Vec<String>,
    pub fixed: Vec<String>,
}

impl VersionLists {
    pub fn new<V, F>(vulnerable: V, fixed: F) -> Self
    where
        V: IntoIterator,
        V::Item: Into<String>,
        F: IntoIterator,
        F::Item: Into<String>,
    {
        Self {
            vulnerable: vulnerable.into_iter().map(Into::into).collect(),
            fixed: fixed.into_iter().map(Into::into).collect(),
        }
    }

    /// Entries listed as both vulnerable and fixed
    ///
    /// Classification still works with overlapping lists (the vulnerable
    /// entry wins), but an overlap is almost always a configuration mistake.
    pub fn overlapping(&self) -> Vec<&str> {
        self.vulnerable
            .iter()
            .filter(|v| self.fixed.contains(v))
            .map(String::as_str)
            .collect()
    }
}

impl Default for VersionLists {
    fn default() -> Self {
        Self::new(DEFAULT_VULNERABLE_VERSIONS, DEFAULT_FIXED_VERSIONS)
    }
}
