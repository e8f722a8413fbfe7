//! Configuration for Beacon, loaded from TOML with env-var expansion

mod env;
pub mod health;
mod loader;
pub mod server;
pub mod telemetry;

use serde::Deserialize;

pub use health::HealthConfig;
pub use server::ServerConfig;
pub use telemetry::{ExportProtocol, ExporterConfig, TelemetryConfig};

/// Top-level Beacon configuration
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Telemetry configuration
    #[serde(default)]
    pub telemetry: Option<TelemetryConfig>,
}
