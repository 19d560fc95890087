use crate::cli::{Args, View};
use chrono::{Datelike, NaiveDate};
use frc_events::config::Config;
use frc_events::error::AppError;
use frc_events::events::{Event, mark_happening_on, short_name};
use frc_events::rendering::{ChannelSink, EventListRenderer, LiveEventUpdate, write_entries};
use frc_events::season::{SeasonCalendar, competition_week, label_from_week_number};
use std::io::{Write, stdout};
use tokio::io::AsyncReadExt;
use tokio::sync::mpsc::UnboundedReceiver;
use tracing::{debug, info};

const DATE_FORMAT: &str = "%Y-%m-%d";

fn parse_date(value: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|e| {
        AppError::datetime_parse_error(format!("'{value}' is not a YYYY-MM-DD date: {e}"))
    })
}

/// Reads the event array from a file, or from stdin when `source` is `-`.
pub async fn read_events(source: &str) -> Result<Vec<Event>, AppError> {
    let content = if source == "-" {
        let mut buffer = String::new();
        tokio::io::stdin().read_to_string(&mut buffer).await?;
        buffer
    } else {
        tokio::fs::read_to_string(source).await?
    };
    parse_events(&content)
}

/// Parses a JSON array of events.
pub fn parse_events(content: &str) -> Result<Vec<Event>, AppError> {
    let events: Vec<Event> = serde_json::from_str(content)?;
    debug!("Parsed {} events", events.len());
    Ok(events)
}

/// Renders `events` in the requested view to `out`, then lists the live
/// events reported during the render.
pub fn render_events<C, W>(
    calendar: C,
    events: &[Event],
    view: View,
    colors: bool,
    out: &mut W,
) -> Result<(), AppError>
where
    C: SeasonCalendar,
    W: Write,
{
    let (sink, mut receiver) = ChannelSink::channel();
    let renderer = EventListRenderer::with_sink(calendar, sink);

    let entries = match view {
        View::Team => renderer.render_for_team_schedule(events),
        View::Week => renderer.render_for_week(events),
        View::District => renderer.render_for_district(events),
    };
    drop(renderer);

    write_entries(out, &entries, colors)?;
    for update in drain_updates(&mut receiver) {
        writeln!(out, "Live: {}", update.event.key)?;
    }
    out.flush()?;
    Ok(())
}

fn drain_updates(receiver: &mut UnboundedReceiver<LiveEventUpdate>) -> Vec<LiveEventUpdate> {
    let mut updates = Vec::new();
    while let Ok(update) = receiver.try_recv() {
        updates.push(update);
    }
    updates
}

/// Handles the --events command.
pub async fn handle_events_command(args: &Args, source: &str) -> Result<(), AppError> {
    let config = Config::load().await?;
    let mut events = read_events(source).await?;

    if let Some(live_on) = &args.live_on {
        let date = parse_date(live_on)?;
        mark_happening_on(&mut events, date);
    }

    info!("Rendering {} events as {:?} view", events.len(), args.view);
    render_events(
        config.season_calendar(),
        &events,
        args.view,
        !args.plain,
        &mut stdout().lock(),
    )
}

/// Handles the --short-name command.
pub fn handle_short_name_command(name: &str) {
    println!("{}", short_name(name));
}

/// Handles the --week-label command.
pub async fn handle_week_label_command(week: i32, year: i32) -> Result<(), AppError> {
    let config = Config::load().await?;
    println!(
        "{}",
        label_from_week_number(&config.season_calendar(), year, Some(week))
    );
    Ok(())
}

/// Describes the competition week a date falls in, e.g. `2019-03-04: week 1 (Week 1)`.
pub fn describe_date<C: SeasonCalendar>(calendar: &C, date: NaiveDate) -> String {
    let week = competition_week(calendar, date);
    let label = label_from_week_number(calendar, date.year(), Some(week));
    format!("{}: week {week} ({label})", date.format(DATE_FORMAT))
}

/// Handles the --label-date command.
pub async fn handle_label_date_command(value: &str) -> Result<(), AppError> {
    let config = Config::load().await?;
    let date = parse_date(value)?;
    println!("{}", describe_date(&config.season_calendar(), date));
    Ok(())
}

/// Handles the --list-config command.
pub async fn handle_list_config_command() -> Result<(), AppError> {
    Config::display().await
}

/// Applies a log file change to the config file at `path`, keeping every
/// other setting in it.
pub async fn update_config_file(
    path: &str,
    new_log_file_path: Option<&str>,
    clear_log_file_path: bool,
) -> Result<Config, AppError> {
    let mut config = Config::load_for_update(path).await?;

    if let Some(new_log_path) = new_log_file_path {
        config.log_file_path = Some(new_log_path.to_string());
    } else if clear_log_file_path {
        config.log_file_path = None;
    }

    config.validate()?;
    config.save_to_path(path).await?;
    Ok(config)
}

/// Handles configuration update commands (--set-log-file, --clear-log-file).
pub async fn handle_config_update_command(args: &Args) -> Result<(), AppError> {
    update_config_file(
        &Config::get_config_path(),
        args.new_log_file_path.as_deref(),
        args.clear_log_file_path,
    )
    .await?;

    if args.new_log_file_path.is_none() && args.clear_log_file_path {
        println!("Custom log file path cleared. Using default location.");
    }
    println!("Config updated successfully!");

    Ok(())
}
