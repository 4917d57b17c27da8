pub mod ami;
pub mod check;
pub mod json_output;
pub mod logging;
pub mod verify;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "filegate",
    version,
    about = "Config and login checks for the filegate file portal"
)]
pub struct Cli {
    /// Output results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Append log output to this file instead of stderr
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Load a config file and summarize it
    Check {
        /// Path to the JSON config
        #[arg(long, env = "FILEGATE_CONFIG", default_value = filegate::config::DEFAULT_CONFIG_PATH)]
        config: PathBuf,
    },

    /// Parse <DIR>/config.ini and print the ami registry
    Ami {
        /// The ami directory (the `amipath` config value)
        dir: String,
    },

    /// Log in, resolve the session and log out again (reads password from stdin)
    Verify {
        /// Username to log in as
        username: String,
        /// Path to the JSON config
        #[arg(long, env = "FILEGATE_CONFIG", default_value = filegate::config::DEFAULT_CONFIG_PATH)]
        config: PathBuf,
        /// Remote address recorded for the login
        #[arg(long, default_value = "127.0.0.1:0")]
        addr: String,
    },
}
