//! Calendar controller: the month/year navigation state machine.

use chrono::{Datelike, Locale, NaiveDate, Weekday};
use log::debug;

use crate::body::vertical_month_delta;
use crate::dates::{
    add_days, add_months, add_years, clamp_date, date_clamped, days_of_month, first_of_month,
    last_of_month, same_month, same_year, with_month, within_bounds,
};
use crate::filter::DateFilter;
use crate::month_view::MonthView;
use crate::types::{CalendarEvent, Command, DAYS_PER_WEEK, Key, KeyPress, ViewMode, YearGrid};
use crate::year_view::YearView;

/// Inputs of a calendar.
#[derive(Debug)]
pub struct CalendarConfig {
    /// Date focused when the calendar opens; today if unset.
    pub start_at: Option<NaiveDate>,
    pub min_date: Option<NaiveDate>,
    pub max_date: Option<NaiveDate>,
    /// Initial value of the two-way bound selection.
    pub selected: Option<NaiveDate>,
    pub date_filter: Option<DateFilter>,
    pub start_view: ViewMode,
    pub year_grid: YearGrid,
    pub week_start: Weekday,
    pub today: NaiveDate,
    /// Locale of month names in labels.
    pub locale: Locale,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        CalendarConfig {
            start_at: None,
            min_date: None,
            max_date: None,
            selected: None,
            date_filter: None,
            start_view: ViewMode::Month,
            year_grid: YearGrid::FourColumn,
            week_start: Weekday::Mon,
            today: crate::args::get_today_date(),
            locale: crate::formatter::get_system_locale(),
        }
    }
}

/// Calendar state: focused date, view mode, committed selection and the
/// constraints they obey.
///
/// The active date always lies within the bounds. The selection, when
/// present, always passes the filter and the bounds.
#[derive(Debug)]
pub struct Calendar {
    active_date: NaiveDate,
    view: ViewMode,
    selected: Option<NaiveDate>,
    min_date: Option<NaiveDate>,
    max_date: Option<NaiveDate>,
    date_filter: Option<DateFilter>,
    year_grid: YearGrid,
    week_start: Weekday,
    today: NaiveDate,
    locale: Locale,
}

impl Calendar {
    pub fn new(config: CalendarConfig) -> Self {
        let start = config.start_at.unwrap_or(config.today);
        let mut calendar = Calendar {
            active_date: clamp_date(start, config.min_date, config.max_date),
            view: config.start_view,
            selected: None,
            min_date: config.min_date,
            max_date: config.max_date,
            date_filter: config.date_filter,
            year_grid: config.year_grid,
            week_start: config.week_start,
            today: config.today,
            locale: config.locale,
        };
        if let Some(selected) = config.selected {
            calendar.set_selected(Some(selected));
        }
        debug!(
            "calendar opened at {} in {:?} view",
            calendar.active_date, calendar.view
        );
        calendar
    }

    pub fn active_date(&self) -> NaiveDate {
        self.active_date
    }

    /// Move the focus, clamped to the bounds.
    pub fn set_active_date(&mut self, date: NaiveDate) {
        self.active_date = clamp_date(date, self.min_date, self.max_date);
    }

    pub fn view(&self) -> ViewMode {
        self.view
    }

    pub fn is_month_view(&self) -> bool {
        self.view == ViewMode::Month
    }

    pub fn selected(&self) -> Option<NaiveDate> {
        self.selected
    }

    /// Two-way bound selection input. Dates that fail the filter or the
    /// bounds are rejected and leave the selection untouched.
    pub fn set_selected(&mut self, date: Option<NaiveDate>) -> bool {
        match date {
            Some(date) if !self.is_selectable(date) => {
                debug!("rejected selection of {}", date);
                false
            }
            _ => {
                self.selected = date;
                true
            }
        }
    }

    pub fn min_date(&self) -> Option<NaiveDate> {
        self.min_date
    }

    pub fn max_date(&self) -> Option<NaiveDate> {
        self.max_date
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn week_start(&self) -> Weekday {
        self.week_start
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn year_grid(&self) -> YearGrid {
        self.year_grid
    }

    /// Whether `date` may become the selection.
    pub fn is_selectable(&self, date: NaiveDate) -> bool {
        self.date_filter.as_ref().is_none_or(|f| f.accepts(date))
            && within_bounds(date, self.min_date, self.max_date)
    }

    /// Whether the month containing `date` has at least one selectable day.
    pub fn is_month_enabled(&self, date: NaiveDate) -> bool {
        if self.date_filter.is_none()
            && within_bounds(first_of_month(date), self.min_date, None)
            && within_bounds(last_of_month(date), None, self.max_date)
        {
            return true;
        }
        days_of_month(date).any(|day| self.is_selectable(day))
    }

    /// Period button: flip between month and year view.
    pub fn toggle_view(&mut self) {
        self.view = self.view.toggled();
        debug!("switched to {:?} view", self.view);
    }

    /// Label of the period button: short month and year, or the year alone.
    pub fn period_label(&self) -> String {
        match self.view {
            ViewMode::Month => format!(
                "{} {}",
                crate::formatter::get_month_short_name(self.active_date.month(), self.locale),
                self.active_date.year()
            )
            .to_uppercase(),
            ViewMode::Year => self.active_date.year().to_string(),
        }
    }

    fn same_view(&self, a: NaiveDate, b: NaiveDate) -> bool {
        match self.view {
            ViewMode::Month => same_month(a, b),
            ViewMode::Year => same_year(a, b),
        }
    }

    pub fn previous_enabled(&self) -> bool {
        self.min_date
            .is_none_or(|min| !self.same_view(self.active_date, min))
    }

    pub fn next_enabled(&self) -> bool {
        self.max_date
            .is_none_or(|max| !self.same_view(self.active_date, max))
    }

    /// Previous-period button: one month back in month view, one year in year view.
    pub fn previous(&mut self) {
        if !self.previous_enabled() {
            return;
        }
        let date = match self.view {
            ViewMode::Month => add_months(self.active_date, -1),
            ViewMode::Year => add_years(self.active_date, -1),
        };
        self.set_active_date(date);
    }

    /// Next-period button: one month forward in month view, one year in year view.
    pub fn next(&mut self) {
        if !self.next_enabled() {
            return;
        }
        let date = match self.view {
            ViewMode::Month => add_months(self.active_date, 1),
            ViewMode::Year => add_years(self.active_date, 1),
        };
        self.set_active_date(date);
    }

    /// Keyboard input on the calendar body.
    pub fn handle_key(&mut self, press: KeyPress) -> Option<CalendarEvent> {
        let event = match self.view {
            ViewMode::Month => self.handle_key_in_month_view(press),
            ViewMode::Year => self.handle_key_in_year_view(press),
        };
        debug!("{:?} -> active {}", press, self.active_date);
        event
    }

    fn handle_key_in_month_view(&mut self, press: KeyPress) -> Option<CalendarEvent> {
        let active = self.active_date;
        let week = DAYS_PER_WEEK as i64;
        let target = match press.key {
            Key::Left => add_days(active, -1),
            Key::Right => add_days(active, 1),
            Key::Up => add_days(active, -week),
            Key::Down => add_days(active, week),
            Key::Home => first_of_month(active),
            Key::End => last_of_month(active),
            Key::PageUp if press.alt => add_years(active, -1),
            Key::PageUp => add_months(active, -1),
            Key::PageDown if press.alt => add_years(active, 1),
            Key::PageDown => add_months(active, 1),
            Key::Enter => {
                if !self.is_selectable(active) {
                    debug!("{} is disabled, ignoring enter", active);
                    return None;
                }
                return self.date_selected(active);
            }
        };
        self.set_active_date(target);
        None
    }

    fn handle_key_in_year_view(&mut self, press: KeyPress) -> Option<CalendarEvent> {
        let active = self.active_date;
        let target = match press.key {
            Key::Left => add_months(active, -1),
            Key::Right => add_months(active, 1),
            Key::Up => add_months(
                active,
                vertical_month_delta(self.year_grid, active.month0(), -1),
            ),
            Key::Down => add_months(
                active,
                vertical_month_delta(self.year_grid, active.month0(), 1),
            ),
            Key::Home => with_month(active, 1),
            Key::End => with_month(active, 12),
            Key::PageUp => add_years(active, if press.alt { -10 } else { -1 }),
            Key::PageDown => add_years(active, if press.alt { 10 } else { 1 }),
            // Disabled months can still be entered from the keyboard.
            Key::Enter => return Some(self.month_selected(active)),
        };
        self.set_active_date(target);
        None
    }

    /// Click on a day cell of the month view.
    pub fn click_day(&mut self, day: u32) -> Option<CalendarEvent> {
        if !self.is_month_view() {
            debug!("day click ignored outside month view");
            return None;
        }
        let view = self.month_view();
        let (row, col) = view.body.position_of(day)?;
        let day = view.body.cell_clicked(row, col)?;
        let date = view.date_for_day(day)?;
        self.date_selected(date)
    }

    /// Click on a month cell of the year view.
    pub fn click_month(&mut self, month: u32) -> Option<CalendarEvent> {
        if self.is_month_view() {
            debug!("month click ignored outside year view");
            return None;
        }
        let view = self.year_view();
        let (row, col) = view.body.position_of(month)?;
        let month = view.body.cell_clicked(row, col)?;
        let date = date_clamped(self.active_date.year(), month, self.active_date.day())?;
        Some(self.month_selected(date))
    }

    /// Commit a date; emits a change only when it differs from the selection.
    fn date_selected(&mut self, date: NaiveDate) -> Option<CalendarEvent> {
        if self.selected == Some(date) {
            return None;
        }
        self.selected = Some(date);
        debug!("selected {}", date);
        Some(CalendarEvent::SelectedChange(date))
    }

    /// Commit a month in year view and return to month view.
    fn month_selected(&mut self, date: NaiveDate) -> CalendarEvent {
        self.set_active_date(date);
        self.view = ViewMode::Month;
        debug!("entered month view at {}", self.active_date);
        CalendarEvent::MonthEntered(self.active_date)
    }

    /// Run one scripted interaction.
    pub fn apply(&mut self, command: Command) -> Option<CalendarEvent> {
        match command {
            Command::Key(press) => self.handle_key(press),
            Command::TogglePeriod => {
                self.toggle_view();
                None
            }
            Command::Previous => {
                self.previous();
                None
            }
            Command::Next => {
                self.next();
                None
            }
            Command::ClickDay(day) => self.click_day(day),
            Command::ClickMonth(month) => self.click_month(month),
            Command::Goto(date) => {
                self.set_active_date(date);
                None
            }
        }
    }

    pub fn month_view(&self) -> MonthView {
        MonthView::new(self)
    }

    pub fn year_view(&self) -> YearView {
        YearView::new(self)
    }
}
