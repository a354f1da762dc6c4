use clap::Parser;
use tracing_subscriber::EnvFilter;

use lumera::cli::{self, Cli, Commands, GlobalOpts};
use lumera::config;
use lumera::errors::LumeraError;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(!cli.no_color)
        .init();

    if cli.no_color {
        console::set_colors_enabled(false);
    }

    let globals = GlobalOpts::from_cli(&cli);
    let result = match cli.command {
        Commands::Report(args) => cli::report::handle_report(args, &globals).await,
        Commands::History(args) => cli::history::handle_history(args, &globals).await,
        Commands::Validate(args) => handle_validate(args).await,
    };

    match result {
        Ok(()) => {}
        Err(e) => {
            eprintln!("Error: {}", e);
            let exit_code = match &e {
                LumeraError::Config(_) => 2,
                LumeraError::Transport(_) => 3,
                _ => 1,
            };
            std::process::exit(exit_code);
        }
    }
}

async fn handle_validate(args: cli::commands::ValidateArgs) -> Result<(), LumeraError> {
    let path = std::path::PathBuf::from(&args.config);
    let _config = config::parse_config(&path).await?;
    println!("Configuration is valid: {}", args.config);
    Ok(())
}
