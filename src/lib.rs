pub mod config;
pub mod error;
pub mod framework;
pub mod logging;
pub mod manifest;
pub mod remote;
pub mod server;
pub mod version;
