//! Project directory layout

use std::path::{Path, PathBuf};

use crate::framework::mode::FrameworkMode;

/// Name of the file recording the active framework
pub const MARKER_FILE: &str = ".framework-mode";

/// Directory holding the production build
pub const BUILD_OUTPUT_DIR: &str = "dist";

/// Root document served for unmatched paths
pub const INDEX_DOCUMENT: &str = "index.html";

/// Locations of the marker, manifests, and build output under a project root
///
/// ```text
/// <root>/
/// ├── .framework-mode
/// ├── dist/index.html
/// └── frameworks/
///     ├── vite-react/package.json
///     └── nextjs/package.json
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    root: PathBuf,
}

impl ProjectLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn marker_path(&self) -> PathBuf {
        self.root.join(MARKER_FILE)
    }

    pub fn build_output_dir(&self) -> PathBuf {
        self.root.join(BUILD_OUTPUT_DIR)
    }

    pub fn index_document(&self) -> PathBuf {
        self.build_output_dir().join(INDEX_DOCUMENT)
    }

    /// Manifest holding the dependency versions for the mode
    ///
    /// No fallback to the other mode's manifest is attempted.
    pub fn resolve_manifest_path(&self, mode: FrameworkMode) -> PathBuf {
        let framework_dir = match mode {
            FrameworkMode::Vite => "vite-react",
            FrameworkMode::Nextjs => "nextjs",
        };
        self.root
            .join("frameworks")
            .join(framework_dir)
            .join("package.json")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(FrameworkMode::Vite, "/srv/app/frameworks/vite-react/package.json")]
    #[case(FrameworkMode::Nextjs, "/srv/app/frameworks/nextjs/package.json")]
    fn resolve_manifest_path_returns_expected(#[case] mode: FrameworkMode, #[case] expected: &str) {
        let layout = ProjectLayout::new("/srv/app");

        assert_eq!(layout.resolve_manifest_path(mode), PathBuf::from(expected));
    }

    #[test]
    fn layout_places_marker_and_build_under_root() {
        let layout = ProjectLayout::new("/srv/app");

        assert_eq!(layout.marker_path(), PathBuf::from("/srv/app/.framework-mode"));
        assert_eq!(layout.build_output_dir(), PathBuf::from("/srv/app/dist"));
        assert_eq!(
            layout.index_document(),
            PathBuf::from("/srv/app/dist/index.html")
        );
    }
}
