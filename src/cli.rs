use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{Parser, ValueEnum};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Which list layout to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum View {
    /// Grouped by event type, district events split per district
    #[default]
    Team,
    /// Same grouping as the team view
    Week,
    /// Date order with a header per competition week
    District,
}

/// Determines if the arguments only touch the configuration file
pub fn is_config_operation(args: &Args) -> bool {
    args.list_config || args.new_log_file_path.is_some() || args.clear_log_file_path
}

/// FRC event list tool
///
/// Reads a JSON array of events and prints them grouped into sections,
/// the way a team schedule, a week page or a district page lists them.
/// Also exposes the short-name and week-label helpers directly.
///
/// Events currently in progress are reported after the list.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(styles = get_styles())]
pub struct Args {
    /// JSON file with an array of events. Use '-' to read from stdin.
    #[arg(long = "events", short = 'e', value_name = "FILE")]
    pub events: Option<String>,

    /// List layout used for --events.
    #[arg(
        long = "view",
        value_enum,
        default_value_t = View::Team,
        help_heading = "Display Options"
    )]
    pub view: View,

    /// Mark events whose date window contains this date (YYYY-MM-DD) as live.
    #[arg(long = "live-on", value_name = "DATE", help_heading = "Display Options")]
    pub live_on: Option<String>,

    /// Plain text output without terminal colors.
    #[arg(long = "plain", short = 'p', help_heading = "Display Options")]
    pub plain: bool,

    /// Print the short display name for a full event name.
    #[arg(long = "short-name", value_name = "NAME", help_heading = "Helpers")]
    pub short_name: Option<String>,

    /// Print the section label for a competition week number. Requires --year.
    #[arg(
        long = "week-label",
        value_name = "WEEK",
        requires = "year",
        allow_negative_numbers = true,
        help_heading = "Helpers"
    )]
    pub week_label: Option<i32>,

    /// Season year used by --week-label.
    #[arg(long = "year", value_name = "YEAR", help_heading = "Helpers")]
    pub year: Option<i32>,

    /// Print the competition week and its label for a date (YYYY-MM-DD).
    #[arg(long = "label-date", value_name = "DATE", help_heading = "Helpers")]
    pub label_date: Option<String>,

    /// Update log file path in config. This sets a persistent custom log file location.
    #[arg(long = "set-log-file", help_heading = "Configuration")]
    pub new_log_file_path: Option<String>,

    /// Clear the custom log file path from config. This reverts to using the default log location.
    #[arg(long = "clear-log-file", help_heading = "Configuration")]
    pub clear_log_file_path: bool,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Also write logs to stdout.
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}
