use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "woundcare",
    version,
    about = "Wound photo risk assessment with history-aware trend detection"
)]
pub struct Cli {
    /// Config file. Defaults to `<config dir>/woundcare/config.json`.
    #[arg(long, global = true, env = "WOUNDCARE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Directory holding per-subject history.
    #[arg(long, global = true, env = "WOUNDCARE_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Emit logs as JSON lines on stderr.
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Assess a wound photo and record it in the subject's history.
    Assess(AssessArgs),
    /// Print the recorded history for a subject, newest last.
    History {
        subject: String,
        /// Only show the most recent N entries.
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Inspect or create the config file.
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
    /// List the classification rules in evaluation order.
    Rules,
}

#[derive(Debug, Args)]
pub struct AssessArgs {
    /// Photo to assess (PNG or JPEG).
    pub image: PathBuf,

    #[arg(long, short)]
    pub subject: String,

    #[arg(long)]
    pub age: Option<u32>,

    #[arg(long)]
    pub diabetes: Option<bool>,

    /// Self-reported pain, 0-10.
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=10))]
    pub pain: Option<u8>,

    #[arg(long)]
    pub notes: Option<String>,

    /// Do not append the result to history.
    #[arg(long)]
    pub no_record: bool,

    /// Print the plain-text clinician report instead of JSON.
    #[arg(long)]
    pub report: bool,
}

#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the effective config as JSON.
    Show,
    /// Write the default config to the config path.
    Init {
        /// Overwrite an existing file.
        #[arg(long)]
        force: bool,
    },
}
