//! Serving strategy selection

use std::fmt;

use crate::framework::mode::FrameworkMode;

/// How this process handles requests that are not API calls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServingStrategy {
    /// A production build exists; serve it with single-page-app fallback
    ServeStaticBuild,
    /// Vite mode without a build; the Vite dev server serves the frontend
    DelegateToDevServer,
    /// Next.js mode without a build; the Next.js runtime serves the frontend
    DelegateToFrameworkRuntime,
}

impl ServingStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            ServingStrategy::ServeStaticBuild => "serve_static_build",
            ServingStrategy::DelegateToDevServer => "delegate_to_dev_server",
            ServingStrategy::DelegateToFrameworkRuntime => "delegate_to_framework_runtime",
        }
    }
}

impl fmt::Display for ServingStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Select the serving strategy
///
/// Evaluated once at startup. A build produced while the server is running
/// is only picked up after a restart.
pub fn resolve_serving_strategy(mode: FrameworkMode, build_output_exists: bool) -> ServingStrategy {
    match (build_output_exists, mode) {
        (true, _) => ServingStrategy::ServeStaticBuild,
        (false, FrameworkMode::Vite) => ServingStrategy::DelegateToDevServer,
        (false, FrameworkMode::Nextjs) => ServingStrategy::DelegateToFrameworkRuntime,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(FrameworkMode::Vite, true, ServingStrategy::ServeStaticBuild)]
    #[case(FrameworkMode::Nextjs, true, ServingStrategy::ServeStaticBuild)]
    #[case(FrameworkMode::Vite, false, ServingStrategy::DelegateToDevServer)]
    #[case(FrameworkMode::Nextjs, false, ServingStrategy::DelegateToFrameworkRuntime)]
    fn resolve_serving_strategy_returns_expected(
        #[case] mode: FrameworkMode,
        #[case] build_output_exists: bool,
        #[case] expected: ServingStrategy,
    ) {
        assert_eq!(resolve_serving_strategy(mode, build_output_exists), expected);
    }
}
