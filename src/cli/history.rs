use tracing::info;

use crate::cli::commands::{GlobalOpts, HistoryArgs};
use crate::cli::report::{build_client, load_file_config};
use crate::errors::LumeraError;
use crate::models::Report;
use crate::viewer::{render, ViewState, Viewer};

pub async fn handle_history(args: HistoryArgs, globals: &GlobalOpts) -> Result<(), LumeraError> {
    let file_config = load_file_config(globals).await?;
    let client = build_client(globals, file_config.as_ref())?;
    info!(patient_id = args.patient_id, "Fetching scan history");

    let spinner = (!globals.quiet && !args.json)
        .then(|| render::loading_spinner("Loading scan history..."));

    let mut viewer: Viewer<Vec<Report>> = Viewer::new();
    let ticket = viewer.begin_load();
    let result = client.fetch_history(args.patient_id).await;
    viewer.complete(ticket, result);

    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }

    match viewer.state() {
        ViewState::Populated(reports) => {
            if args.json {
                println!("{}", serde_json::to_string_pretty(reports)?);
            } else {
                print!("{}", render::render_history(reports));
            }
        }
        _ => print!("{}", render::render_history_not_found()),
    }

    Ok(())
}
