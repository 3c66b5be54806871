//! CLI argument definitions

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "agent-router")]
#[command(
    version,
    about = "Routes employee questions to a directory agent and an HR records agent"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Serve the employee directory (POST /tasks/send)
    Directory {
        /// Listen port (default: DIRECTORY_PORT or 8000)
        #[arg(long)]
        port: Option<u16>,
    },

    /// Serve the HR records (POST /hr-tasks/send)
    Records {
        /// Listen port (default: RECORDS_PORT or 8001)
        #[arg(long)]
        port: Option<u16>,
    },

    /// Interactive client that routes questions to both services
    Client {
        /// Use LLM assistance without asking (requires API_URL)
        #[arg(long)]
        llm: Option<bool>,
    },
}
