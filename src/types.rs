//! Type definitions and constants shared by the calendar views.

use std::str::FromStr;

use chrono::NaiveDate;

use crate::error::CalNavError;

/// Display granularity of the calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    /// Grid of days for the active month.
    #[default]
    Month,
    /// Grid of months for the active year.
    Year,
}

impl ViewMode {
    pub fn toggled(self) -> Self {
        match self {
            ViewMode::Month => ViewMode::Year,
            ViewMode::Year => ViewMode::Month,
        }
    }
}

/// Layout of the month grid in year view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum YearGrid {
    /// Three full rows of four months.
    #[default]
    FourColumn,
    /// Seven columns with the year label occupying the first two slots.
    SevenColumn,
}

impl YearGrid {
    pub fn num_cols(self) -> usize {
        match self {
            YearGrid::FourColumn => 4,
            YearGrid::SevenColumn => 7,
        }
    }

    /// Number of label slots preceding January in every year.
    pub fn leading_slots(self) -> usize {
        match self {
            YearGrid::FourColumn => 0,
            YearGrid::SevenColumn => 2,
        }
    }
}

/// Keys understood by the calendar body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
    PageUp,
    PageDown,
    Enter,
}

/// A key together with the modifier state that changes its meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    pub key: Key,
    pub alt: bool,
}

impl KeyPress {
    pub fn new(key: Key) -> Self {
        KeyPress { key, alt: false }
    }

    pub fn with_alt(key: Key) -> Self {
        KeyPress { key, alt: true }
    }
}

impl From<Key> for KeyPress {
    fn from(key: Key) -> Self {
        KeyPress::new(key)
    }
}

/// One user interaction with the calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Keyboard input on the calendar body.
    Key(KeyPress),
    /// Click on the period button (month/year toggle).
    TogglePeriod,
    /// Click on the previous-period button.
    Previous,
    /// Click on the next-period button.
    Next,
    /// Click on a day cell of the month view.
    ClickDay(u32),
    /// Click on a month cell of the year view.
    ClickMonth(u32),
    /// Programmatic assignment of the active date.
    Goto(NaiveDate),
}

impl FromStr for Command {
    type Err = CalNavError;

    /// Parse one script word: `left`, `alt+pageup`, `day:12`, `month:nov`, ...
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let word = s.trim().to_lowercase();
        let invalid = || CalNavError::InvalidCommand(s.trim().to_string());

        if let Some((name, arg)) = word.split_once(':') {
            return match name {
                "day" => arg
                    .parse::<u32>()
                    .ok()
                    .filter(|d| (1..=31).contains(d))
                    .map(Command::ClickDay)
                    .ok_or_else(invalid),
                "month" => crate::formatter::parse_month(arg)
                    .map(Command::ClickMonth)
                    .ok_or_else(invalid),
                "goto" => crate::args::parse_date(arg).map(Command::Goto),
                _ => Err(invalid()),
            };
        }

        let command = match word.as_str() {
            "left" => Command::Key(Key::Left.into()),
            "right" => Command::Key(Key::Right.into()),
            "up" => Command::Key(Key::Up.into()),
            "down" => Command::Key(Key::Down.into()),
            "home" => Command::Key(Key::Home.into()),
            "end" => Command::Key(Key::End.into()),
            "pageup" => Command::Key(Key::PageUp.into()),
            "pagedown" => Command::Key(Key::PageDown.into()),
            "alt+pageup" => Command::Key(KeyPress::with_alt(Key::PageUp)),
            "alt+pagedown" => Command::Key(KeyPress::with_alt(Key::PageDown)),
            "enter" => Command::Key(Key::Enter.into()),
            "period" => Command::TogglePeriod,
            "prev" | "previous" => Command::Previous,
            "next" => Command::Next,
            _ => return Err(invalid()),
        };
        Ok(command)
    }
}

/// Parse a comma separated command script. Empty words are skipped.
pub fn parse_script(script: &str) -> Result<Vec<Command>, CalNavError> {
    script
        .split(',')
        .filter(|word| !word.trim().is_empty())
        .map(str::parse)
        .collect()
}

/// Events emitted by the calendar towards its host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarEvent {
    /// The committed selection changed to this date.
    SelectedChange(NaiveDate),
    /// A month was committed in year view; the calendar is back in month view.
    MonthEntered(NaiveDate),
}

pub const DAYS_PER_WEEK: usize = 7;
pub const MONTHS_PER_YEAR: u32 = 12;

// Free leading cells needed before a view label shares the first grid row
pub const MONTH_LABEL_MIN_CELLS: usize = 3;
pub const YEAR_LABEL_MIN_CELLS: usize = 2;

// Rendered cell widths
pub const DAY_CELL_WIDTH: usize = 4;
pub const MONTH_CELL_WIDTH: usize = 5;

// Color is enabled by default when writing to a terminal
pub const COLOR_ENABLED_BY_DEFAULT: bool = true;

// ANSI color codes
pub const COLOR_RESET: &str = "\x1b[0m";
pub const COLOR_REVERSE: &str = "\x1b[7m";
pub const COLOR_DIM: &str = "\x1b[2m";
pub const COLOR_TEAL: &str = "\x1b[96m";
pub const COLOR_SAND_YELLOW: &str = "\x1b[93m";
