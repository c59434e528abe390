use crate::commands::Commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "pl")]
#[command(about = "PeerLearn command-line client")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Server URL
    #[arg(long, global = true, default_value = "http://127.0.0.1:5000")]
    pub server: String,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,
}
