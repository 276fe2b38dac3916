//! package.json manifest

use std::path::Path;

use serde::Deserialize;
use tracing::warn;

use crate::error::ManifestError;
use crate::framework::file_probe::FileProbe;
use crate::version::normalize::UNKNOWN_VERSION;

/// The subset of package.json needed to report framework versions
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PackageManifest {
    pub name: Option<String>,
    pub dependencies: Option<Dependencies>,
}

/// Declared versions of the packages this tool reports
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Dependencies {
    pub react: Option<String>,
    #[serde(rename = "react-dom")]
    pub react_dom: Option<String>,
    pub next: Option<String>,
}

impl PackageManifest {
    /// Parse manifest content
    pub fn parse(content: &str) -> Result<Self, ManifestError> {
        serde_json::from_str(content).map_err(|e| {
            warn!("Failed to parse package.json: {}", e);
            ManifestError::Parse(e)
        })
    }

    /// Load and parse the manifest at `path`
    pub fn load(probe: &dyn FileProbe, path: &Path) -> Result<Self, ManifestError> {
        if !probe.file_exists(path) {
            return Err(ManifestError::NotFound(path.to_path_buf()));
        }

        let content = probe
            .read_text_file(path)
            .map_err(|source| ManifestError::Read {
                path: path.to_path_buf(),
                source,
            })?;

        Self::parse(&content)
    }

    /// Declared `react` version, or `unknown`
    pub fn react_version(&self) -> &str {
        self.dependency(|deps| deps.react.as_deref())
    }

    /// Declared `react-dom` version, or `unknown`
    pub fn react_dom_version(&self) -> &str {
        self.dependency(|deps| deps.react_dom.as_deref())
    }

    /// Declared `next` version, or `unknown`
    pub fn next_version(&self) -> &str {
        self.dependency(|deps| deps.next.as_deref())
    }

    fn dependency<'a>(&'a self, select: impl Fn(&'a Dependencies) -> Option<&'a str>) -> &'a str {
        self.dependencies
            .as_ref()
            .and_then(select)
            .filter(|version| !version.is_empty())
            .unwrap_or(UNKNOWN_VERSION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::file_probe::MockFileProbe;
    use std::io;
    use std::path::PathBuf;

    #[test]
    fn parse_extracts_dependencies() {
        let content = r#"{
  "name": "vite-react",
  "dependencies": {
    "react": "^19.1.0",
    "react-dom": "^19.1.0",
    "lodash": "4.17.21"
  },
  "devDependencies": {
    "vite": "^6.0.0"
  }
}"#;

        let manifest = PackageManifest::parse(content).unwrap();

        assert_eq!(manifest.name.as_deref(), Some("vite-react"));
        assert_eq!(manifest.react_version(), "^19.1.0");
        assert_eq!(manifest.react_dom_version(), "^19.1.0");
        assert_eq!(manifest.next_version(), "unknown");
    }

    #[test]
    fn parse_extracts_next_version() {
        let content = r#"{"dependencies": {"next": "15.0.4", "react": "19.0.0"}}"#;

        let manifest = PackageManifest::parse(content).unwrap();

        assert_eq!(manifest.next_version(), "15.0.4");
        assert_eq!(manifest.react_version(), "19.0.0");
        assert_eq!(manifest.react_dom_version(), "unknown");
    }

    #[test]
    fn missing_or_null_dependencies_fall_back_to_unknown() {
        for content in [r#"{}"#, r#"{"dependencies": null}"#, r#"{"dependencies": {}}"#] {
            let manifest = PackageManifest::parse(content).unwrap();
            assert_eq!(manifest.react_version(), "unknown");
            assert_eq!(manifest.react_dom_version(), "unknown");
        }
    }

    #[test]
    fn empty_version_falls_back_to_unknown() {
        let manifest = PackageManifest::parse(r#"{"dependencies": {"react": ""}}"#).unwrap();

        assert_eq!(manifest.react_version(), "unknown");
    }

    #[test]
    fn parse_rejects_invalid_json() {
        let result = PackageManifest::parse("{ not json");

        assert!(matches!(result, Err(ManifestError::Parse(_))));
    }

    #[test]
    fn load_returns_not_found_without_reading() {
        let mut probe = MockFileProbe::new();
        probe.expect_file_exists().return_const(false);
        probe.expect_read_text_file().never();

        let result = PackageManifest::load(&probe, Path::new("/missing/package.json"));

        assert!(
            matches!(result, Err(ManifestError::NotFound(path)) if path == PathBuf::from("/missing/package.json"))
        );
    }

    #[test]
    fn load_returns_read_error_when_file_is_unreadable() {
        let mut probe = MockFileProbe::new();
        probe.expect_file_exists().return_const(true);
        probe
            .expect_read_text_file()
            .returning(|_| Err(io::Error::other("disk failure")));

        let result = PackageManifest::load(&probe, Path::new("/app/package.json"));

        assert!(matches!(result, Err(ManifestError::Read { .. })));
    }

    #[test]
    fn load_parses_file_content() {
        let mut probe = MockFileProbe::new();
        probe.expect_file_exists().return_const(true);
        probe
            .expect_read_text_file()
            .returning(|_| Ok(r#"{"dependencies": {"react": "19.2.1"}}"#.to_string()));

        let manifest = PackageManifest::load(&probe, Path::new("/app/package.json")).unwrap();

        assert_eq!(manifest.react_version(), "19.2.1");
    }
}
