//! Version classification layer
//!
//! Pure functions and values that decide whether a React version is
//! affected by the defect. Nothing here performs I/O.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  raw version│────▶│  Normalize  │────▶│ Classifier  │──▶ VULNERABLE / FIXED / UNKNOWN
//! │  (^19.1.0)  │     │  (19.1)     │     │             │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!                                                ▲
//!                                         ┌─────────────┐
//!                                         │VersionLists │
//!                                         │ (injected)  │
//!                                         └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`normalize`]: range-operator stripping and `MAJOR.MINOR` reduction
//! - [`lists`]: the vulnerable and fixed version lists
//! - [`classifier`]: most-specific-match classification

pub mod classifier;
pub mod lists;
pub mod normalize;

pub use classifier::{Classification, VersionClassifier};
pub use lists::VersionLists;
pub use normalize::{UNKNOWN_VERSION, normalize};
