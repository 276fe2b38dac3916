//! React version classification
//!
//! A raw version is matched against the vulnerable and fixed lists in two
//! ways:
//! - exact: the version without its range-operator prefix equals the entry
//!   (`^19.1.0` matches `19.1.0`)
//! - line: the normalized `MAJOR.MINOR` form equals the entry
//!   (`19.0.4` matches `19.0`)
//!
//! The most specific match decides the result, so a fixed patch release of
//! a vulnerable line (`19.0.1` against `19.0`) is reported as fixed. When a
//! vulnerable and a fixed entry match with the same specificity, vulnerable
//! wins.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::version::lists::VersionLists;
use crate::version::normalize::{UNKNOWN_VERSION, normalize, strip_range_operator};

/// Classification of a React version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Classification {
    Vulnerable,
    Fixed,
    Unknown,
}

impl Classification {
    pub fn as_str(&self) -> &'static str {
        match self {
            Classification::Vulnerable => "VULNERABLE",
            Classification::Fixed => "FIXED",
            Classification::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How closely a list entry matched; later variants are more specific
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Specificity {
    Line,
    Exact,
}

/// Classifies raw React versions against an injected set of lists
#[derive(Debug, Clone, Default)]
pub struct VersionClassifier {
    lists: VersionLists,
}

impl VersionClassifier {
    pub fn new(lists: VersionLists) -> Self {
        Self { lists }
    }

    pub fn lists(&self) -> &VersionLists {
        &self.lists
    }

    /// Returns true if the version classifies as [`Classification::Vulnerable`]
    pub fn is_vulnerable(&self, raw: &str) -> bool {
        self.status(raw) == Classification::Vulnerable
    }

    /// Classify a raw version string
    pub fn status(&self, raw: &str) -> Classification {
        if raw.is_empty() || raw == UNKNOWN_VERSION {
            return Classification::Unknown;
        }

        let exact = strip_range_operator(raw);
        let line = normalize(raw);

        let vulnerable = best_match(&self.lists.vulnerable, exact, &line);
        let fixed = best_match(&self.lists.fixed, exact, &line);

        match (vulnerable, fixed) {
            (Some(v), Some(f)) if f > v => Classification::Fixed,
            (Some(_), _) => Classification::Vulnerable,
            (None, Some(_)) => Classification::Fixed,
            (None, None) => Classification::Unknown,
        }
    }
}

fn best_match(entries: &[String], exact: &str, line: &str) -> Option<Specificity> {
    entries
        .iter()
        .filter_map(|entry| {
            if entry == exact {
                Some(Specificity::Exact)
            } else if entry == line {
                Some(Specificity::Line)
            } else {
                None
            }
        })
        .max()
}
