//! CLI argument definitions using Clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// A thermal-aware Hugging Face model search CLI
#[derive(Parser, Debug)]
#[command(name = "thermal-scout")]
#[command(version, about = "🔥 A thermal-aware Hugging Face model search CLI")]
#[command(arg_required_else_help = true, propagate_version = true)]
pub struct Cli {
    /// Config file path
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search Hugging Face Hub for models with thermal awareness
    Search(SearchArgs),

    /// Show one model's thermal cost
    Show(ShowArgs),

    /// Show information about Thermal Scout
    About,

    /// Start the HTTP API server
    Serve(ServeArgs),
}

/// Arguments for the search subcommand
#[derive(clap::Args, Debug)]
pub struct SearchArgs {
    /// Search query for models
    pub query: String,

    /// Number of results to show
    #[arg(short, long, default_value_t = 10)]
    pub limit: usize,

    /// Filter by model type/task
    #[arg(short = 't', long = "type")]
    pub model_type: Option<String>,

    /// Disable thermal-aware sorting
    #[arg(long)]
    pub no_thermal: bool,

    /// Print results as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the show subcommand
#[derive(clap::Args, Debug)]
pub struct ShowArgs {
    /// Model id, e.g. distilbert-base-uncased
    pub model_id: String,

    /// Show how the score was reached
    #[arg(long)]
    pub explain: bool,
}

/// Arguments for the serve subcommand
#[derive(clap::Args, Debug)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Address to bind
    #[arg(short, long)]
    pub bind: Option<String>,
}
