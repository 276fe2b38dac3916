//! HTTP server layer
//!
//! Exposes the version endpoint and serves the frontend according to the
//! [`ServingStrategy`] detected at startup.
//!
//! # Modules
//!
//! - [`error`]: handler errors and their JSON responses
//! - [`handlers`]: endpoint handlers and the CORS middleware

pub mod error;
pub mod handlers;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::Router;
use axum::handler::Handler;
use axum::middleware;
use axum::routing::get;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::config::ServerConfig;
use crate::framework::{
    FileProbe, LocalFileProbe, ModeResolver, ProjectLayout, ResolvedFramework, ServingStrategy,
};
use crate::version::VersionClassifier;

/// State shared by all handlers; never mutated after startup
pub struct AppState {
    pub classifier: VersionClassifier,
    pub framework: ResolvedFramework,
    pub probe: Arc<dyn FileProbe>,
    pub runtime: String,
}

impl AppState {
    pub fn new(
        classifier: VersionClassifier,
        framework: ResolvedFramework,
        probe: Arc<dyn FileProbe>,
        runtime: impl Into<String>,
    ) -> Self {
        Self {
            classifier,
            framework,
            probe,
            runtime: runtime.into(),
        }
    }
}

/// Build the application router
pub fn router(state: Arc<AppState>, layout: &ProjectLayout) -> Router {
    let api = Router::new()
        .route("/api/version", get(handlers::version_info))
        .route("/api/hello", get(handlers::hello));

    let app = match state.framework.strategy {
        ServingStrategy::ServeStaticBuild => {
            let index_document = Arc::new(layout.index_document());
            let build_output = ServeDir::new(layout.build_output_dir())
                .fallback(handlers::spa_index.with_state(index_document));
            api.fallback_service(build_output)
        }
        ServingStrategy::DelegateToDevServer | ServingStrategy::DelegateToFrameworkRuntime => {
            api.route("/", get(handlers::root_info))
        }
    };

    app.with_state(state)
        .layer(middleware::from_fn(handlers::cors))
        .layer(TraceLayer::new_for_http())
}

/// Detect the framework, bind the listener, and serve until Ctrl-C
pub async fn run_server(config: ServerConfig) -> anyhow::Result<()> {
    let layout = ProjectLayout::new(&config.project_root);
    let probe: Arc<dyn FileProbe> = Arc::new(LocalFileProbe);
    let framework = ModeResolver::new(&layout, probe.as_ref()).detect();

    match framework.strategy {
        ServingStrategy::ServeStaticBuild => {
            info!("Serving build output from {:?}", layout.build_output_dir())
        }
        ServingStrategy::DelegateToDevServer => info!(
            "No build output found; serving API only, frontend is expected on the Vite dev server"
        ),
        ServingStrategy::DelegateToFrameworkRuntime => warn!(
            "Next.js mode without build output; Next.js normally serves this app, serving API only"
        ),
    }

    if !probe.file_exists(&framework.manifest_path) {
        warn!(
            "Framework package.json not found at {:?}; /api/version will fail",
            framework.manifest_path
        );
    }

    let classifier = VersionClassifier::new(config.versions.clone());
    let overlapping = classifier.lists().overlapping();
    if !overlapping.is_empty() {
        warn!(
            "Versions listed as both vulnerable and fixed (classified vulnerable): {:?}",
            overlapping
        );
    }

    let state = Arc::new(AppState::new(
        classifier,
        framework,
        probe.clone(),
        config.runtime.clone(),
    ));
    let app = router(state, &layout);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("Server running on http://localhost:{}", config.port);
    info!("API endpoint: http://localhost:{}/api/hello", config.port);
    info!("Version endpoint: http://localhost:{}/api/version", config.port);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutting down gracefully");
}
