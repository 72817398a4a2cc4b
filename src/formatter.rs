//! Text rendering of the calendar with localization and color support.

use chrono::{Locale, NaiveDate, Weekday};
use unicode_width::UnicodeWidthStr;

use crate::body::{CalendarBody, CalendarCell};
use crate::calendar::Calendar;
use crate::month_view::MonthView;
use crate::types::{
    COLOR_DIM, COLOR_RESET, COLOR_REVERSE, COLOR_SAND_YELLOW, COLOR_TEAL, DAY_CELL_WIDTH,
    DAYS_PER_WEEK, MONTH_CELL_WIDTH, ViewMode,
};
use crate::year_view::YearView;

/// Get system locale from environment (LC_ALL > LC_TIME > LANG > en_US).
pub fn get_system_locale() -> Locale {
    std::env::var("LC_ALL")
        .or_else(|_| std::env::var("LC_TIME"))
        .or_else(|_| std::env::var("LANG"))
        .unwrap_or_else(|_| "en_US.UTF-8".to_string())
        .split('.')
        .next()
        .unwrap_or("en_US")
        .split('@')
        .next()
        .unwrap_or("en_US")
        .parse()
        .unwrap_or(Locale::en_US)
}

// Nominative forms; chrono renders Russian month names in the genitive case
const RU_MONTHS: [&str; 12] = [
    "Январь",
    "Февраль",
    "Март",
    "Апрель",
    "Май",
    "Июнь",
    "Июль",
    "Август",
    "Сентябрь",
    "Октябрь",
    "Ноябрь",
    "Декабрь",
];

/// Get three-letter month abbreviation (nominative for Russian).
pub fn get_month_short_name(month: u32, locale: Locale) -> String {
    let Some(date) = NaiveDate::from_ymd_opt(2000, month, 1) else {
        return month.to_string();
    };

    let name = match locale {
        Locale::ru_RU => RU_MONTHS[(month - 1) as usize].to_string(),
        _ => date.format_localized("%b", locale).to_string(),
    };
    name.trim_end_matches('.').chars().take(3).collect()
}

/// Parse month from string (numeric 1-12 or name in English/Russian).
pub fn parse_month(s: &str) -> Option<u32> {
    if let Ok(n) = s.parse::<u32>()
        && (1..=12).contains(&n)
    {
        return Some(n);
    }

    const ENGLISH: [&str; 12] = [
        "january",
        "february",
        "march",
        "april",
        "may",
        "june",
        "july",
        "august",
        "september",
        "october",
        "november",
        "december",
    ];

    let s_lower = s.trim().to_lowercase();
    if s_lower.chars().count() < 3 {
        return None;
    }

    // Full names or any prefix of at least three letters
    ENGLISH
        .iter()
        .position(|name| name.starts_with(&s_lower))
        .or_else(|| {
            RU_MONTHS
                .iter()
                .position(|name| name.to_lowercase().starts_with(&s_lower))
        })
        .map(|idx| idx as u32 + 1)
}

/// Center text within a specified width, accounting for Unicode character widths.
fn center_text(text: &str, width: usize) -> String {
    let text_width = text.width();
    if text_width >= width {
        return text.to_string();
    }
    let total_padding = width - text_width;
    let left_padding = total_padding.div_ceil(2);
    let right_padding = total_padding - left_padding;
    format!(
        "{}{}{}",
        " ".repeat(left_padding),
        text,
        " ".repeat(right_padding)
    )
}

fn pad_left(text: &str, width: usize) -> String {
    let padding = width.saturating_sub(text.width());
    format!("{}{}", " ".repeat(padding), text)
}

fn pad_right(text: &str, width: usize) -> String {
    let padding = width.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(padding))
}

/// Get weekday order based on week start day.
pub fn get_weekday_order(week_start: Weekday) -> [Weekday; 7] {
    let mut order = [week_start; 7];
    for i in 1..DAYS_PER_WEEK {
        order[i] = order[i - 1].succ();
    }
    order
}

/// Get 2-character weekday abbreviation for current locale.
pub fn get_weekday_short_name(weekday: Weekday, locale: Locale) -> String {
    let base_date = NaiveDate::from_ymd_opt(2000, 1, 3).unwrap_or_default();
    let offset = weekday.num_days_from_monday() as i64;
    let date = base_date + chrono::Duration::days(offset);
    let day_name = date.format_localized("%a", locale).to_string();
    day_name.chars().take(2).collect()
}

/// Format weekday header row aligned with day cells.
pub fn format_weekday_headers(week_start: Weekday, locale: Locale, color: bool) -> String {
    let names: String = get_weekday_order(week_start)
        .iter()
        .map(|&weekday| center_text(&get_weekday_short_name(weekday, locale), DAY_CELL_WIDTH))
        .collect();
    let names = names.trim_end();

    if color {
        format!("{}{}{}", COLOR_SAND_YELLOW, names, COLOR_RESET)
    } else {
        names.to_string()
    }
}

/// Format the navigation header: previous button, period label, next button.
///
/// Disabled buttons are drawn as blanks.
pub fn format_header(calendar: &Calendar, width: usize, color: bool) -> String {
    let prev = if calendar.previous_enabled() { "<" } else { " " };
    let next = if calendar.next_enabled() { ">" } else { " " };
    let label = center_text(&calendar.period_label(), width.saturating_sub(2));
    if color {
        format!("{}{}{}{}{}", prev, COLOR_TEAL, label, COLOR_RESET, next)
    } else {
        format!("{}{}{}", prev, label, next)
    }
}

/// Format one cell.
///
/// Without color the state is shown by markers: `[..]` active, `(..)`
/// selected, trailing `*` today, trailing `~` disabled.
fn format_cell(
    body: &CalendarBody,
    cell: &CalendarCell,
    active: bool,
    width: usize,
    color: bool,
) -> String {
    let selected = body.selected_value == Some(cell.value);
    let today = body.today_value == Some(cell.value);
    let text = pad_left(&cell.label, width - 2);

    if color {
        let mut style = String::new();
        if active {
            style.push_str(COLOR_REVERSE);
        }
        if selected {
            style.push_str(COLOR_TEAL);
        } else if today {
            style.push_str(COLOR_SAND_YELLOW);
        } else if !cell.enabled {
            style.push_str(COLOR_DIM);
        }
        if style.is_empty() {
            return format!(" {} ", text);
        }
        return format!(" {}{}{} ", style, text, COLOR_RESET);
    }

    if active {
        format!("[{}]", text)
    } else if selected {
        format!("({})", text)
    } else if today {
        format!(" {}*", text)
    } else if !cell.enabled {
        format!(" {}~", text)
    } else {
        format!(" {} ", text)
    }
}

/// Format the grid rows of a calendar body.
///
/// The body label shares the first row when enough leading cells are free,
/// otherwise it gets its own line.
pub fn format_body(body: &CalendarBody, cell_width: usize, color: bool) -> Vec<String> {
    let mut lines = Vec::with_capacity(body.rows.len() + 1);
    let offset = body.first_row_offset();
    let label = |text: String| {
        if color {
            format!("{}{}{}", COLOR_TEAL, text, COLOR_RESET)
        } else {
            text
        }
    };

    if !body.label_in_first_row() {
        lines.push(label(format!(" {}", body.label)));
    }

    let mut index = 0;
    for (row_idx, row) in body.rows.iter().enumerate() {
        let mut line = String::new();
        if row_idx == 0 && offset > 0 {
            let gap = offset * cell_width;
            if body.label_in_first_row() {
                line.push_str(&label(pad_right(&format!(" {}", body.label), gap)));
            } else {
                line.push_str(&" ".repeat(gap));
            }
        }
        for cell in row {
            let active = index == body.active_cell;
            line.push_str(&format_cell(body, cell, active, cell_width, color));
            index += 1;
        }
        lines.push(line.trim_end().to_string());
    }

    lines
}

pub fn format_month_view(
    view: &MonthView,
    week_start: Weekday,
    locale: Locale,
    color: bool,
) -> Vec<String> {
    let mut lines = vec![format_weekday_headers(week_start, locale, color)];
    lines.extend(format_body(&view.body, DAY_CELL_WIDTH, color));
    lines
}

pub fn format_year_view(view: &YearView, color: bool) -> Vec<String> {
    format_body(&view.body, MONTH_CELL_WIDTH, color)
}

/// Format the whole calendar: header followed by the grid of the current view.
pub fn format_calendar(calendar: &Calendar, color: bool) -> Vec<String> {
    match calendar.view() {
        ViewMode::Month => {
            let width = DAYS_PER_WEEK * DAY_CELL_WIDTH;
            let mut lines = vec![format_header(calendar, width, color)];
            lines.extend(format_month_view(
                &calendar.month_view(),
                calendar.week_start(),
                calendar.locale(),
                color,
            ));
            lines
        }
        ViewMode::Year => {
            let width = calendar.year_grid().num_cols() * MONTH_CELL_WIDTH;
            let mut lines = vec![format_header(calendar, width, color)];
            lines.extend(format_year_view(&calendar.year_view(), color));
            lines
        }
    }
}

pub fn print_calendar(calendar: &Calendar, color: bool) {
    for line in format_calendar(calendar, color) {
        println!("{}", line);
    }
}
