// src/main.rs
mod cli;
mod commands;
mod logging;

use clap::Parser;
use cli::{Args, is_config_operation};
use commands::{
    handle_config_update_command, handle_events_command, handle_label_date_command,
    handle_list_config_command, handle_short_name_command, handle_week_label_command,
};
use frc_events::error::AppError;
use logging::setup_logging;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    let (log_file_path, _guard) = setup_logging(&args).await?;
    tracing::info!("Logs are being written to: {log_file_path}");

    // Handle configuration operations first
    if args.list_config {
        return handle_list_config_command().await;
    }

    if is_config_operation(&args) {
        return handle_config_update_command(&args).await;
    }

    if let Some(name) = &args.short_name {
        handle_short_name_command(name);
        return Ok(());
    }

    if let (Some(week), Some(year)) = (args.week_label, args.year) {
        return handle_week_label_command(week, year).await;
    }

    if let Some(date) = &args.label_date {
        return handle_label_date_command(date).await;
    }

    match &args.events {
        Some(source) => handle_events_command(&args, source).await,
        None => Err(AppError::config_error(
            "Nothing to do: pass --events FILE (or '-' for stdin), or one of the helper flags. See --help.",
        )),
    }
}
