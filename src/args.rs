//! Command-line argument parsing using clap.
//!
//! Dates are given as `YYYY-MM-DD`; the interaction to replay is a comma
//! separated command script.

use chrono::NaiveDate;
use clap::{Parser, ValueHint};
use std::io::IsTerminal;

use crate::calendar::CalendarConfig;
use crate::error::CalNavError;
use crate::filter::DateFilter;
use crate::types::{COLOR_ENABLED_BY_DEFAULT, Command, ViewMode, YearGrid, parse_script};

#[derive(Parser, Debug)]
#[command(name = "calnav")]
#[command(about = "Navigates a date picker calendar from the keyboard", long_about = None)]
#[command(version)]
#[command(after_help = HELP_MESSAGE)]
pub struct Args {
    /// Date focused when the calendar opens (default: today).
    #[arg(long, help_heading = "Calendar options", value_name = "date", value_hint = ValueHint::Other)]
    pub start_at: Option<String>,

    /// Earliest date that can be focused or selected.
    #[arg(long = "min", help_heading = "Calendar options", value_name = "date")]
    pub min_date: Option<String>,

    /// Latest date that can be focused or selected.
    #[arg(long = "max", help_heading = "Calendar options", value_name = "date")]
    pub max_date: Option<String>,

    /// Initially selected date.
    #[arg(long, help_heading = "Calendar options", value_name = "date")]
    pub selected: Option<String>,

    /// Filter expression for selectable dates (e.g. "even&not-month:11").
    #[arg(short = 'f', long, help_heading = "Calendar options", value_name = "expr")]
    pub filter: Option<String>,

    /// Week starts on Sunday (default is Monday).
    #[arg(short = 's', long, help_heading = "Calendar options", overrides_with = "monday")]
    pub sunday: bool,

    /// Week starts on Monday (default).
    #[arg(short = 'm', long, help_heading = "Calendar options", overrides_with = "sunday")]
    pub monday: bool,

    /// Open the calendar in year view.
    #[arg(short = 'y', long, help_heading = "Display options")]
    pub year_view: bool,

    /// Lay out the year view in seven columns with the year label in the first row.
    #[arg(long, help_heading = "Display options")]
    pub seven_column: bool,

    /// Comma separated commands to replay (e.g. "left,left,enter").
    #[arg(short = 'k', long, help_heading = "Input options", value_name = "script")]
    pub keys: Option<String>,

    /// Disable colorized output.
    #[arg(long, help_heading = "Output options")]
    pub no_color: bool,
}

/// Help message displayed with --help.
const HELP_MESSAGE: &str = "Commands:
  left right up down home end pageup pagedown enter
  alt+pageup alt+pagedown   Jump by a year (month view) or ten years (year view)
  period                    Toggle between month and year view
  prev next                 Previous/next period buttons
  day:N                     Click day N in month view
  month:N                   Click month N (number or name) in year view
  goto:YYYY-MM-DD           Move the focus programmatically

Filter terms (joined with &, negated with ! or not-):
  even odd weekday weekend month:N day:N weekday:NAME

Examples:
  calnav --start-at 2017-01-31 -k left,enter
  calnav --start-at 2017-01-01 -f 'even&not-month:11' -k day:1,day:2
  calnav --min 2016-01-01 --max 2018-01-01 --start-at 2000-01-01";

impl Args {
    pub fn parse() -> Self {
        Parser::parse()
    }
}

/// Everything the binary needs to run: the calendar inputs, the script to
/// replay and output options.
#[derive(Debug)]
pub struct Settings {
    pub config: CalendarConfig,
    pub script: Vec<Command>,
    pub color: bool,
}

impl Settings {
    pub fn new(args: &Args) -> Result<Self, CalNavError> {
        let config = CalendarConfig::from_args(args)?;
        let script = match args.keys.as_deref() {
            Some(keys) => parse_script(keys)?,
            None => Vec::new(),
        };
        let color = !args.no_color && COLOR_ENABLED_BY_DEFAULT && std::io::stdout().is_terminal();

        Ok(Settings {
            config,
            script,
            color,
        })
    }
}

impl CalendarConfig {
    pub fn from_args(args: &Args) -> Result<Self, CalNavError> {
        let min_date = args.min_date.as_deref().map(parse_date).transpose()?;
        let max_date = args.max_date.as_deref().map(parse_date).transpose()?;

        if let (Some(min), Some(max)) = (min_date, max_date)
            && min > max
        {
            return Err(CalNavError::InvertedBounds { min, max });
        }

        let date_filter = args.filter.as_deref().map(DateFilter::parse).transpose()?;

        Ok(CalendarConfig {
            start_at: args.start_at.as_deref().map(parse_date).transpose()?,
            min_date,
            max_date,
            selected: args.selected.as_deref().map(parse_date).transpose()?,
            date_filter,
            start_view: if args.year_view {
                ViewMode::Year
            } else {
                ViewMode::Month
            },
            year_grid: if args.seven_column {
                YearGrid::SevenColumn
            } else {
                YearGrid::FourColumn
            },
            week_start: if args.sunday && !args.monday {
                chrono::Weekday::Sun
            } else {
                chrono::Weekday::Mon
            },
            today: get_today_date(),
            locale: crate::formatter::get_system_locale(),
        })
    }
}

/// Parse a `YYYY-MM-DD` date.
pub fn parse_date(s: &str) -> Result<NaiveDate, CalNavError> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| CalNavError::InvalidDate(s.trim().to_string()))
}

/// Get today's date, respecting CALNAV_TEST_TIME environment variable for testing.
pub fn get_today_date() -> NaiveDate {
    if let Ok(test_time) = std::env::var("CALNAV_TEST_TIME")
        && let Ok(date) = NaiveDate::parse_from_str(&test_time, "%Y-%m-%d")
    {
        return date;
    }
    chrono::Local::now().date_naive()
}
