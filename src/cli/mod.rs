//! CLI 模块

pub mod serve;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "daytab")]
#[command(version)]
#[command(about = "Personal task tracker (terminal UI + REST API)")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the terminal UI (default)
    Tui {
        /// API base URL (overrides DAYTAB_API_URL)
        #[arg(long)]
        api: Option<String>,
    },
    /// Start the REST API server
    Serve {
        /// Port to listen on (overrides the PORT env var)
        #[arg(short, long)]
        port: Option<u16>,
    },
}
