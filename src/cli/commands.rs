use clap::{Args, Parser, Subcommand};

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("GIT_HASH"),
    ", built ",
    env!("BUILD_TIMESTAMP"),
    ")"
);

#[derive(Parser)]
#[command(
    name = "lumera",
    version,
    long_version = LONG_VERSION,
    about = "Terminal viewer for Lumera patient skin-analysis reports"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log verbosity (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Backend API origin (overrides LUMERA_API_URL and the config file)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// YAML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show a single skin-analysis report
    Report(ReportArgs),
    /// List historical scans for a patient
    History(HistoryArgs),
    /// Validate a configuration file
    Validate(ValidateArgs),
}

#[derive(Args, Clone)]
pub struct ReportArgs {
    /// Report identifier
    pub report_id: i64,

    /// View layout: detail, table
    #[arg(long)]
    pub view: Option<String>,

    /// Output the raw report as JSON
    #[arg(long)]
    pub json: bool,

    /// Re-fetch the report on an interval
    #[arg(long)]
    pub follow: bool,

    /// Poll interval in seconds
    #[arg(long, default_value = "10")]
    pub interval: u64,
}

#[derive(Args, Clone)]
pub struct HistoryArgs {
    /// Patient identifier
    pub patient_id: i64,

    /// Output the raw scan list as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Clone)]
pub struct ValidateArgs {
    /// Config file to validate
    pub config: String,
}

/// Global flags shared by every handler.
#[derive(Clone)]
pub struct GlobalOpts {
    pub quiet: bool,
    pub base_url: Option<String>,
    pub config: Option<String>,
}

impl GlobalOpts {
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            quiet: cli.quiet,
            base_url: cli.base_url.clone(),
            config: cli.config.clone(),
        }
    }
}
