//! One-shot framework detection at startup

use std::path::PathBuf;

use tracing::info;

use crate::framework::file_probe::FileProbe;
use crate::framework::layout::ProjectLayout;
use crate::framework::mode::{FrameworkMode, read_mode};
use crate::framework::serving::{ServingStrategy, resolve_serving_strategy};

/// Result of framework detection, shared read-only by all request handlers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedFramework {
    pub mode: FrameworkMode,
    pub strategy: ServingStrategy,
    pub manifest_path: PathBuf,
}

/// Resolves framework mode, manifest location, and serving strategy
pub struct ModeResolver<'a> {
    layout: &'a ProjectLayout,
    probe: &'a dyn FileProbe,
}

impl<'a> ModeResolver<'a> {
    pub fn new(layout: &'a ProjectLayout, probe: &'a dyn FileProbe) -> Self {
        Self { layout, probe }
    }

    pub fn mode(&self) -> FrameworkMode {
        read_mode(self.probe, &self.layout.marker_path())
    }

    pub fn build_output_exists(&self) -> bool {
        self.probe.file_exists(&self.layout.build_output_dir())
    }

    /// Read the marker and probe the build output once
    pub fn detect(&self) -> ResolvedFramework {
        let mode = self.mode();
        let build_output_exists = self.build_output_exists();
        let strategy = resolve_serving_strategy(mode, build_output_exists);
        let manifest_path = self.layout.resolve_manifest_path(mode);

        info!(
            "Framework mode: {}, build output present: {}, serving strategy: {}",
            mode, build_output_exists, strategy
        );

        ResolvedFramework {
            mode,
            strategy,
            manifest_path,
        }
    }
}
