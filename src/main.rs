use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use react_version_probe::config::ServerConfig;
use react_version_probe::logging::init_logging;
use react_version_probe::remote::{HttpVersionEndpoint, probe_deployment};
use react_version_probe::server::run_server;
use react_version_probe::version::{Classification, VersionClassifier};

/// Exit code when the probed or classified version is vulnerable
const EXIT_VULNERABLE: u8 = 2;

#[derive(Parser)]
#[command(name = "react-version-probe")]
#[command(version, about = "Report and classify the React version of a Vite or Next.js deployment")]
struct Cli {
    /// Config file (defaults to $XDG_CONFIG_HOME/react-version-probe/config.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Serve the version API (default)
    Serve {
        /// Listen port (overrides PORT and the config file)
        #[arg(short, long)]
        port: Option<u16>,

        /// Project root holding .framework-mode, frameworks/ and dist/
        #[arg(long)]
        project_root: Option<PathBuf>,
    },

    /// Fetch /api/version from a running deployment and classify it
    Probe {
        /// Base URL of the deployment (e.g. http://localhost:3000)
        url: String,
    },

    /// Classify a React version string
    Classify {
        /// Version as written in package.json (e.g. ^19.1.0)
        version: String,
    },
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let config = ServerConfig::load(cli.config.as_deref())?
        .with_port_env(std::env::var("PORT").ok());

    let _guard = init_logging(config.log_file.as_deref())?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    match cli.command {
        None => {
            runtime.block_on(run_server(config))?;
            Ok(ExitCode::SUCCESS)
        }
        Some(Command::Serve { port, project_root }) => {
            let mut config = config;
            if let Some(port) = port {
                config.port = port;
            }
            if let Some(project_root) = project_root {
                config.project_root = project_root;
            }
            runtime.block_on(run_server(config))?;
            Ok(ExitCode::SUCCESS)
        }
        Some(Command::Probe { url }) => {
            let classifier = VersionClassifier::new(config.versions);
            let endpoint = HttpVersionEndpoint::new()?;
            let outcome = runtime.block_on(probe_deployment(&endpoint, &url, &classifier))?;

            println!("{}", serde_json::to_string_pretty(&outcome)?);
            Ok(exit_code(outcome.is_vulnerable()))
        }
        Some(Command::Classify { version }) => {
            let classifier = VersionClassifier::new(config.versions);
            let status = classifier.status(&version);

            println!("{}", status);
            Ok(exit_code(status == Classification::Vulnerable))
        }
    }
}

fn exit_code(vulnerable: bool) -> ExitCode {
    if vulnerable {
        ExitCode::from(EXIT_VULNERABLE)
    } else {
        ExitCode::SUCCESS
    }
}
