use std::path::PathBuf;
use std::time::Duration;

use tracing::info;

use crate::cli::commands::{GlobalOpts, ReportArgs};
use crate::client::ReportClient;
use crate::config::{self, LumeraConfig, ViewMode};
use crate::errors::LumeraError;
use crate::models::Report;
use crate::viewer::{render, ViewState, Viewer};

pub async fn handle_report(args: ReportArgs, globals: &GlobalOpts) -> Result<(), LumeraError> {
    let file_config = load_file_config(globals).await?;
    let view = match &args.view {
        Some(raw) => ViewMode::parse(raw)?,
        None => config::resolve_view(None, file_config.as_ref()),
    };

    let client = build_client(globals, file_config.as_ref())?;
    info!(report_id = args.report_id, view = %view, "Fetching report");

    let mut viewer: Viewer<Report> = Viewer::new();
    loop {
        let spinner = (!globals.quiet && !args.json)
            .then(|| render::loading_spinner("Loading report..."));

        let ticket = viewer.begin_load();
        let result = client.fetch_report(args.report_id).await;
        viewer.complete(ticket, result);

        if let Some(spinner) = spinner {
            spinner.finish_and_clear();
        }

        match viewer.state() {
            ViewState::Populated(report) => {
                if args.json {
                    println!("{}", serde_json::to_string_pretty(report)?);
                } else {
                    print!("{}", render::render_report(report, view));
                }
            }
            _ => print!("{}", render::render_report_not_found()),
        }

        if !args.follow {
            break;
        }
        tokio::time::sleep(Duration::from_secs(args.interval)).await;
    }

    Ok(())
}

pub async fn load_file_config(globals: &GlobalOpts) -> Result<Option<LumeraConfig>, LumeraError> {
    match &globals.config {
        Some(path) => Ok(Some(config::parse_config(&PathBuf::from(path)).await?)),
        None => Ok(None),
    }
}

pub fn build_client(
    globals: &GlobalOpts,
    file_config: Option<&LumeraConfig>,
) -> Result<ReportClient, LumeraError> {
    let env_url = std::env::var(config::BASE_URL_ENV).ok();
    let base_url = config::resolve_base_url(
        globals.base_url.as_deref(),
        env_url.as_deref(),
        file_config,
    );
    let timeout = config::resolve_timeout(file_config);
    ReportClient::new(&base_url, timeout)
}
