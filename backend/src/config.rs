use std::{path::PathBuf, time::Duration};

use clap::Parser;

/// Task tracking HTTP service backed by a single SQLite file.
#[derive(Parser, Debug, Clone)]
#[command(name = "backend")]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Host address to bind the server to
    #[arg(long, short = 'H', default_value = "0.0.0.0", env = "HOST")]
    pub host: String,

    /// Port to listen on
    #[arg(long, short, default_value_t = 3000, env = "PORT")]
    pub port: u16,

    /// Path to the SQLite database file, created if missing. Relative paths
    /// resolve against the working directory, not the executable.
    #[arg(long, default_value = "database.db", env = "DATABASE_PATH")]
    pub database: PathBuf,

    /// How long a connection waits on a locked database before failing
    #[arg(long, default_value_t = 5000, env = "BUSY_TIMEOUT_MS")]
    pub busy_timeout_ms: u64,

    /// Log every SQL statement at debug level
    #[arg(long, env = "ECHO_SQL")]
    pub echo_sql: bool,
}

impl Config {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn busy_timeout(&self) -> Duration {
        Duration::from_millis(self.busy_timeout_ms)
    }
}
