//! Year view: a grid of the twelve months of the active year.

use chrono::{Datelike, NaiveDate};

use crate::body::{CalendarBody, CalendarCell};
use crate::calendar::Calendar;
use crate::dates::{same_year, with_month};
use crate::types::{MONTHS_PER_YEAR, YEAR_LABEL_MIN_CELLS, YearGrid};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearView {
    pub year: i32,
    pub grid: YearGrid,
    pub body: CalendarBody,
}

impl YearView {
    pub fn new(calendar: &Calendar) -> Self {
        let active = calendar.active_date();
        let grid = calendar.year_grid();

        // A month is enabled when any of its days can be selected.
        let cells = (1..=MONTHS_PER_YEAR)
            .map(|month| {
                CalendarCell::new(
                    month,
                    crate::formatter::get_month_short_name(month, calendar.locale())
                        .to_uppercase(),
                    calendar.is_month_enabled(with_month(active, month)),
                )
            })
            .collect();

        let month_in_year =
            |date: Option<NaiveDate>| date.filter(|d| same_year(*d, active)).map(|d| d.month());

        let body = CalendarBody {
            label: active.year().to_string(),
            rows: CalendarBody::layout(cells, grid.num_cols(), grid.leading_slots()),
            num_cols: grid.num_cols(),
            label_min_required_cells: YEAR_LABEL_MIN_CELLS,
            active_cell: active.month0() as usize,
            selected_value: month_in_year(calendar.selected()),
            today_value: month_in_year(Some(calendar.today())),
        };

        YearView {
            year: active.year(),
            grid,
            body,
        }
    }
}
