//! CLI argument parsing: one subcommand per pool.

use bluegreen_core::config::{Config, DEFAULT_HOST, DEFAULT_PORT, DEFAULT_SHUTDOWN_TIMEOUT};
use bluegreen_core::pool::Pool;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "bluegreen", version, about = "Blue/green deployment demo service")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the blue pool
    Blue(RunArgs),
    /// Run the green pool
    Green(RunArgs),
}

impl Command {
    pub fn into_parts(self) -> (Pool, RunArgs) {
        match self {
            Self::Blue(args) => (Pool::Blue, args),
            Self::Green(args) => (Pool::Green, args),
        }
    }
}

#[derive(Parser, Debug)]
pub struct RunArgs {
    /// Listen host
    #[arg(long, default_value = DEFAULT_HOST, env = "HOST")]
    pub host: String,

    /// Listen port (empty means the default)
    #[arg(long, default_value_t = DEFAULT_PORT, env = "PORT", value_parser = parse_port)]
    pub port: u16,

    /// Release id reported by /version (defaults to `<pool>-v1`)
    #[arg(long, env = "RELEASE_ID")]
    pub release_id: Option<String>,

    /// Log level
    #[arg(long, default_value = "info", env = "LOG_LEVEL")]
    pub log_level: String,

    /// Write logs to a daily rotating file in this directory instead of stderr
    #[arg(long, env = "LOG_DIR")]
    pub log_dir: Option<String>,

    /// Graceful shutdown timeout in seconds
    #[arg(long, default_value_t = DEFAULT_SHUTDOWN_TIMEOUT, env = "SHUTDOWN_TIMEOUT")]
    pub shutdown_timeout: u64,
}

impl RunArgs {
    /// Resolve the validated configuration for `pool`.
    pub fn to_config(&self, pool: Pool) -> Config {
        Config {
            host: self.host.clone(),
            port: self.port,
            logging_to_file: self.log_dir.is_some(),
            log_dir: self.log_dir.clone(),
            shutdown_timeout: self.shutdown_timeout,
            ..Config::for_pool(pool)
        }
        .with_release_id(self.release_id.as_deref())
    }
}

/// Parse a port, treating an empty value (e.g. `PORT=` from an unset
/// compose variable) as the default.
fn parse_port(value: &str) -> Result<u16, String> {
    if value.is_empty() {
        return Ok(DEFAULT_PORT);
    }
    value
        .parse::<u16>()
        .map_err(|e| format!("invalid port {value:?}: {e}"))
}
