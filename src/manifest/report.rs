//! Version report for a deployment

use serde::{Deserialize, Serialize};

use crate::framework::mode::FrameworkMode;
use crate::manifest::package_json::PackageManifest;
use crate::version::classifier::{Classification, VersionClassifier};

/// Versions declared by the active framework and the React classification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionReport {
    pub react: String,
    pub react_dom: String,
    pub node: String,
    /// Present only in Next.js mode
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nextjs: Option<String>,
    pub vulnerable: bool,
    pub status: Classification,
}

impl VersionReport {
    pub fn build(
        manifest: &PackageManifest,
        mode: FrameworkMode,
        runtime: &str,
        classifier: &VersionClassifier,
    ) -> Self {
        let react = manifest.react_version();
        let status = classifier.status(react);

        let nextjs = match mode {
            FrameworkMode::Nextjs => Some(manifest.next_version().to_string()),
            FrameworkMode::Vite => None,
        };

        Self {
            react: react.to_string(),
            react_dom: manifest.react_dom_version().to_string(),
            node: runtime.to_string(),
            nextjs,
            vulnerable: status == Classification::Vulnerable,
            status,
        }
    }
}
