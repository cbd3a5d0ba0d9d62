use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "pairdiff",
    about = "pairdiff: compare left/right submissions over HTTP",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Start the diff server
    Serve(ServeArgs),
    /// Print the request body that submits TEXT
    Encode(EncodeArgs),
    /// Compare two strings locally
    Diff(DiffArgs),
}

#[derive(Args)]
pub struct ServeArgs {
    /// TOML config file; flags below override its values
    #[arg(long)]
    pub config: Option<PathBuf>,
    #[arg(long)]
    pub bind: Option<SocketAddr>,
    #[arg(long)]
    pub shards: Option<usize>,
}

#[derive(Args)]
pub struct EncodeArgs {
    pub text: String,
    /// Wrap the body in double quotes
    #[arg(long)]
    pub quoted: bool,
}

#[derive(Args)]
pub struct DiffArgs {
    pub left: String,
    pub right: String,
}
