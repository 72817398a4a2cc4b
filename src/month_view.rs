//! Month view: a grid of the days of the active month.

use chrono::{Datelike, NaiveDate};

use crate::body::{CalendarBody, CalendarCell};
use crate::calendar::Calendar;
use crate::dates::{days_of_month, first_week_offset, same_month};
use crate::types::{DAYS_PER_WEEK, MONTH_LABEL_MIN_CELLS};

/// Grid model for the month containing the active date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthView {
    pub year: i32,
    pub month: u32,
    /// Blank cells before day 1 in the first week row.
    pub first_week_offset: usize,
    pub body: CalendarBody,
}

impl MonthView {
    /// Build calendar body for the month of the calendar's active date.
    pub fn new(calendar: &Calendar) -> Self {
        let active = calendar.active_date();
        let first_week_offset = first_week_offset(active, calendar.week_start());

        let cells = days_of_month(active)
            .map(|date| {
                CalendarCell::new(
                    date.day(),
                    date.day().to_string(),
                    calendar.is_selectable(date),
                )
            })
            .collect();

        let day_in_month =
            |date: Option<NaiveDate>| date.filter(|d| same_month(*d, active)).map(|d| d.day());

        let body = CalendarBody {
            label: crate::formatter::get_month_short_name(active.month(), calendar.locale())
                .to_uppercase(),
            rows: CalendarBody::layout(cells, DAYS_PER_WEEK, first_week_offset),
            num_cols: DAYS_PER_WEEK,
            label_min_required_cells: MONTH_LABEL_MIN_CELLS,
            active_cell: active.day0() as usize,
            selected_value: day_in_month(calendar.selected()),
            today_value: day_in_month(Some(calendar.today())),
        };

        MonthView {
            year: active.year(),
            month: active.month(),
            first_week_offset,
            body,
        }
    }

    pub fn date_for_day(&self, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, day)
    }
}
