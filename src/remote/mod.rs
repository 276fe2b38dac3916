//! Probing a running deployment
//!
//! Fetches the version report a deployment serves and classifies the
//! reported React version locally, so a deployment whose own verdict is
//! stale or wrong is still flagged.

pub mod endpoint;

pub use endpoint::{HttpVersionEndpoint, VersionEndpoint};

use serde::Serialize;
use tracing::{info, warn};

use crate::error::ProbeError;
use crate::manifest::report::VersionReport;
use crate::version::classifier::{Classification, VersionClassifier};

/// Report served by the deployment together with the local verdict
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProbeOutcome {
    pub url: String,
    pub reported: VersionReport,
    pub local_status: Classification,
}

impl ProbeOutcome {
    /// Returns true if the deployment and the local classifier agree
    pub fn agrees(&self) -> bool {
        self.reported.status == self.local_status
    }

    /// Returns true if either verdict is vulnerable
    pub fn is_vulnerable(&self) -> bool {
        self.local_status == Classification::Vulnerable || self.reported.vulnerable
    }
}

/// Probe the deployment at `base_url`
pub async fn probe_deployment(
    endpoint: &dyn VersionEndpoint,
    base_url: &str,
    classifier: &VersionClassifier,
) -> Result<ProbeOutcome, ProbeError> {
    let reported = endpoint.fetch_report(base_url).await?;
    let local_status = classifier.status(&reported.react);

    let outcome = ProbeOutcome {
        url: base_url.to_string(),
        reported,
        local_status,
    };

    if outcome.agrees() {
        info!(
            "{} reports react {} ({})",
            base_url, outcome.reported.react, outcome.local_status
        );
    } else {
        warn!(
            "{} reports react {} as {}, local classification is {}",
            base_url, outcome.reported.react, outcome.reported.status, outcome.local_status
        );
    }

    Ok(outcome)
}
