//! Framework mode resolution from the persisted marker

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::framework::file_probe::FileProbe;

/// Marker content that selects Next.js mode; anything else means Vite
pub const NEXTJS_MARKER: &str = "nextjs";

/// Frontend framework variant the deployment was set up for
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FrameworkMode {
    /// Vite + React single-page app (build-tool mode)
    #[default]
    Vite,
    /// Next.js app (framework mode)
    Nextjs,
}

impl FrameworkMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            FrameworkMode::Vite => "vite",
            FrameworkMode::Nextjs => "nextjs",
        }
    }
}

impl fmt::Display for FrameworkMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolve the mode from the marker content
///
/// Only the exact, case-sensitive content `nextjs` (surrounding whitespace
/// ignored) selects [`FrameworkMode::Nextjs`]. A missing marker, an empty
/// one, or any other value selects [`FrameworkMode::Vite`].
pub fn resolve_mode(marker_content: Option<&str>) -> FrameworkMode {
    match marker_content.map(str::trim) {
        Some(NEXTJS_MARKER) => FrameworkMode::Nextjs,
        _ => FrameworkMode::Vite,
    }
}

/// Read the marker through the probe and resolve the mode
///
/// A marker that cannot be read is treated the same as a missing one.
pub fn read_mode(probe: &dyn FileProbe, marker_path: &Path) -> FrameworkMode {
    if !probe.file_exists(marker_path) {
        debug!("No framework marker at {:?}, using default mode", marker_path);
        return resolve_mode(None);
    }

    let content = probe
        .read_text_file(marker_path)
        .inspect_err(|e| {
            debug!(
                "Failed to read framework marker {:?}: {}, using default mode",
                marker_path, e
            )
        })
        .ok();

    resolve_mode(content.as_deref())
}
