//! Dependency manifest layer
//! - package_json.rs: typed package.json schema with `unknown` fallbacks
//! - report.rs: version report returned by the version endpoint

pub mod package_json;
pub mod report;

pub use package_json::{Dependencies, PackageManifest};
pub use report::VersionReport;
