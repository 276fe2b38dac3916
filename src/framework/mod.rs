//! Framework mode resolution layer
//!
//! Decides which framework variant is active, where its dependency manifest
//! lives, and how non-API requests are served.
//!
//! # Modules
//!
//! - [`file_probe`]: filesystem collaborator trait and its std implementation
//! - [`layout`]: marker, manifest, and build output locations
//! - [`mode`]: marker parsing into [`FrameworkMode`]
//! - [`serving`]: [`ServingStrategy`] selection
//! - [`resolver`]: one-shot detection combining the above

pub mod file_probe;
pub mod layout;
pub mod mode;
pub mod resolver;
pub mod serving;

pub use file_probe::{FileProbe, LocalFileProbe};
pub use layout::ProjectLayout;
pub use mode::{FrameworkMode, resolve_mode};
pub use resolver::{ModeResolver, ResolvedFramework};
pub use serving::{ServingStrategy, resolve_serving_strategy};
