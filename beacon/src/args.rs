use std::path::PathBuf;

use clap::Parser;

/// Beacon error-handling gateway
#[derive(Debug, Parser)]
#[command(name = "beacon", about = "Error classification gateway with trace correlation")]
pub struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "beacon.toml", env = "BEACON_CONFIG")]
    pub config: PathBuf,

    /// Override the listen address
    #[arg(long, env = "BEACON_LISTEN")]
    pub listen: Option<std::net::SocketAddr>,
}
