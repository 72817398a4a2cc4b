//! Unit tests for date arithmetic, grid layout, filters, parsing and formatting.

use chrono::{NaiveDate, Weekday};

use calnav::args::{Args, parse_date};
use calnav::body::{CalendarBody, CalendarCell, vertical_month_delta};
use calnav::calendar::CalendarConfig;
use calnav::dates::{
    add_days, add_months, add_years, clamp_date, days_in_month, first_week_offset,
    is_leap_year, last_of_month, within_bounds,
};
use calnav::error::CalNavError;
use calnav::filter::DateFilter;
use calnav::formatter::{format_body, get_weekday_order, parse_month};
use calnav::types::{Command, Key, KeyPress, ViewMode, YearGrid, parse_script};

use clap::Parser;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

// ===========================================================================
// Date arithmetic
// ===========================================================================

mod dates {
    use super::*;

    #[test]
    fn leap_years() {
        assert!(is_leap_year(2000));
        assert!(is_leap_year(2016));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2017));
    }

    #[test]
    fn month_lengths() {
        assert_eq!(days_in_month(2017, 1), 31);
        assert_eq!(days_in_month(2017, 2), 28);
        assert_eq!(days_in_month(2016, 2), 29);
        assert_eq!(days_in_month(2017, 11), 30);
    }

    #[test]
    fn add_days_crosses_years() {
        assert_eq!(add_days(date(2017, 1, 1), -1), date(2016, 12, 31));
        assert_eq!(add_days(date(2016, 12, 31), 7), date(2017, 1, 7));
    }

    #[test]
    fn add_days_saturates_at_range_limits() {
        assert_eq!(add_days(NaiveDate::MAX, 1), NaiveDate::MAX);
        assert_eq!(add_days(NaiveDate::MIN, -1), NaiveDate::MIN);
    }

    #[test]
    fn add_months_clamps_to_month_length() {
        assert_eq!(add_months(date(2017, 1, 31), 1), date(2017, 2, 28));
        assert_eq!(add_months(date(2016, 1, 31), 1), date(2016, 2, 29));
        assert_eq!(add_months(date(2017, 3, 31), -1), date(2017, 2, 28));
        assert_eq!(add_months(date(2017, 1, 15), -13), date(2015, 12, 15));
        assert_eq!(add_months(date(2017, 9, 30), 5), date(2018, 2, 28));
    }

    #[test]
    fn add_years_handles_leap_day() {
        assert_eq!(add_years(date(2016, 2, 29), 1), date(2017, 2, 28));
        assert_eq!(add_years(date(2016, 2, 29), -4), date(2012, 2, 29));
    }

    #[test]
    fn last_day_of_month() {
        assert_eq!(last_of_month(date(2017, 2, 3)), date(2017, 2, 28));
        assert_eq!(last_of_month(date(2017, 12, 31)), date(2017, 12, 31));
    }

    #[test]
    fn clamping() {
        let min = Some(date(2016, 1, 1));
        let max = Some(date(2018, 1, 1));
        assert_eq!(clamp_date(date(2000, 1, 1), min, max), date(2016, 1, 1));
        assert_eq!(clamp_date(date(2020, 1, 1), min, max), date(2018, 1, 1));
        assert_eq!(clamp_date(date(2017, 5, 5), min, max), date(2017, 5, 5));
        assert_eq!(clamp_date(date(2017, 5, 5), None, None), date(2017, 5, 5));
    }

    #[test]
    fn bounds_are_inclusive() {
        let min = Some(date(2016, 1, 1));
        assert!(within_bounds(date(2016, 1, 1), min, None));
        assert!(!within_bounds(date(2015, 12, 31), min, None));
        assert!(within_bounds(date(1, 1, 1), None, None));
    }

    #[test]
    fn week_offsets() {
        // January 2017 starts on a Sunday
        assert_eq!(first_week_offset(date(2017, 1, 20), Weekday::Mon), 6);
        assert_eq!(first_week_offset(date(2017, 1, 20), Weekday::Sun), 0);
        // February 2017 starts on a Wednesday
        assert_eq!(first_week_offset(date(2017, 2, 1), Weekday::Mon), 2);
        assert_eq!(first_week_offset(date(2017, 2, 1), Weekday::Sun), 3);
    }
}

// ===========================================================================
// Calendar body grid
// ===========================================================================

mod body {
    use super::*;

    fn cells(count: u32) -> Vec<CalendarCell> {
        (1..=count)
            .map(|v| CalendarCell::new(v, v.to_string(), v % 2 == 0))
            .collect()
    }

    fn body(count: u32, num_cols: usize, offset: usize) -> CalendarBody {
        CalendarBody {
            label: "LBL".to_string(),
            rows: CalendarBody::layout(cells(count), num_cols, offset),
            num_cols,
            label_min_required_cells: 3,
            active_cell: 0,
            selected_value: None,
            today_value: None,
        }
    }

    #[test]
    fn layout_shortens_first_row() {
        let body = body(10, 7, 3);
        assert_eq!(body.rows.len(), 2);
        assert_eq!(body.rows[0].len(), 4);
        assert_eq!(body.rows[1].len(), 6);
        assert_eq!(body.first_row_offset(), 3);
        assert!(body.label_in_first_row());
    }

    #[test]
    fn label_gets_own_row_when_first_row_is_full() {
        let body = body(10, 7, 0);
        assert_eq!(body.first_row_offset(), 0);
        assert!(!body.label_in_first_row());
    }

    #[test]
    fn active_cell_accounts_for_offset() {
        let mut body = body(10, 7, 3);
        assert!(body.is_active_cell(0, 3));
        assert!(!body.is_active_cell(0, 0));

        body.active_cell = 4;
        assert!(body.is_active_cell(1, 0));
        assert!(!body.is_active_cell(0, 4));
    }

    #[test]
    fn clicks_report_enabled_values_only() {
        let body = body(10, 7, 3);
        assert_eq!(body.cell_clicked(0, 3), None); // 1 is disabled
        assert_eq!(body.cell_clicked(0, 4), Some(2));
        assert_eq!(body.cell_clicked(0, 1), None); // blank
        assert_eq!(body.cell_clicked(1, 1), Some(6));
        assert_eq!(body.cell_clicked(5, 0), None);
    }

    #[test]
    fn positions_round_trip_through_clicks() {
        let body = body(10, 7, 3);
        assert_eq!(body.position_of(2), Some((0, 4)));
        assert_eq!(body.position_of(10), Some((1, 5)));
        assert_eq!(body.position_of(11), None);
    }

    #[test]
    fn four_column_rows_are_four_months() {
        for month0 in 0..12 {
            assert_eq!(vertical_month_delta(YearGrid::FourColumn, month0, -1), -4);
            assert_eq!(vertical_month_delta(YearGrid::FourColumn, month0, 1), 4);
        }
        assert_eq!(vertical_month_delta(YearGrid::FourColumn, 0, 2), 8);
    }

    #[test]
    fn seven_column_rows_skip_label_slots() {
        let grid = YearGrid::SevenColumn;
        assert_eq!(vertical_month_delta(grid, 0, -1), -5);
        assert_eq!(vertical_month_delta(grid, 4, -1), -5);
        assert_eq!(vertical_month_delta(grid, 5, -1), -12);
        assert_eq!(vertical_month_delta(grid, 6, -1), -12);
        assert_eq!(vertical_month_delta(grid, 11, -1), -7);

        assert_eq!(vertical_month_delta(grid, 0, 1), 7);
        assert_eq!(vertical_month_delta(grid, 5, 1), 12);
        assert_eq!(vertical_month_delta(grid, 6, 1), 12);
        assert_eq!(vertical_month_delta(grid, 8, 1), 5);
    }

    #[test]
    fn plain_rendering_marks_cell_states() {
        let mut body = body(10, 7, 3);
        body.active_cell = 3;
        body.selected_value = Some(6);
        body.today_value = Some(8);

        let lines = format_body(&body, 4, false);
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with(" LBL"));
        assert!(lines[0].contains("[ 4]"));
        assert!(lines[0].contains("  1~"));
        assert!(lines[1].contains("( 6)"));
        assert!(lines[1].contains("  8*"));
    }

    #[test]
    fn label_line_precedes_full_first_row() {
        let body = body(7, 7, 0);
        let lines = format_body(&body, 4, false);
        assert_eq!(
            lines,
            vec![" LBL".to_string(), "[ 1]  2   3~  4   5~  6   7~".to_string()]
        );
    }
}

// ===========================================================================
// Filters
// ===========================================================================

mod filter {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn even_day_outside_november() {
        let filter = DateFilter::parse("even & not-month:11").unwrap();
        assert!(filter.accepts(date(2017, 1, 2)));
        assert!(!filter.accepts(date(2017, 1, 1)));
        assert!(!filter.accepts(date(2017, 11, 2)));
    }

    #[test]
    fn bang_negates_term() {
        let filter = DateFilter::parse("!weekend").unwrap();
        assert!(filter.accepts(date(2026, 10, 16))); // Friday
        assert!(!filter.accepts(date(2026, 10, 17))); // Saturday
    }

    #[test]
    fn weekday_names_and_month_names() {
        let filter = DateFilter::parse("not-weekday:mon&month:feb").unwrap();
        assert!(filter.accepts(date(2017, 2, 7)));
        assert!(!filter.accepts(date(2017, 2, 6)));
        assert!(!filter.accepts(date(2017, 3, 7)));
    }

    #[test]
    fn empty_expression_accepts_everything() {
        let filter = DateFilter::parse("  ").unwrap();
        assert!(filter.accepts(date(2000, 1, 1)));
    }

    #[test]
    fn closures_are_filters() {
        let filter = DateFilter::new(|d| d.year() > 2000);
        assert!(filter.accepts(date(2001, 1, 1)));
        assert!(!filter.accepts(date(1999, 1, 1)));
    }

    #[test]
    fn unknown_terms_are_rejected() {
        assert_eq!(
            DateFilter::parse("even&fortnightly").unwrap_err(),
            CalNavError::InvalidFilter("fortnightly".to_string())
        );
        assert!(DateFilter::parse("day:32").is_err());
        assert!(DateFilter::parse("month:13").is_err());
        assert!(DateFilter::parse("weekday:someday").is_err());
    }
}

// ===========================================================================
// Command scripts
// ===========================================================================

mod commands {
    use super::*;

    #[test]
    fn keys() {
        assert_eq!("left".parse(), Ok(Command::Key(KeyPress::new(Key::Left))));
        assert_eq!(" PageDown ".parse(), Ok(Command::Key(KeyPress::new(Key::PageDown))));
        assert_eq!(
            "alt+pageup".parse(),
            Ok(Command::Key(KeyPress::with_alt(Key::PageUp)))
        );
        assert_eq!("enter".parse(), Ok(Command::Key(KeyPress::new(Key::Enter))));
    }

    #[test]
    fn buttons_and_clicks() {
        assert_eq!("period".parse(), Ok(Command::TogglePeriod));
        assert_eq!("prev".parse(), Ok(Command::Previous));
        assert_eq!("next".parse(), Ok(Command::Next));
        assert_eq!("day:12".parse(), Ok(Command::ClickDay(12)));
        assert_eq!("month:nov".parse(), Ok(Command::ClickMonth(11)));
        assert_eq!("month:3".parse(), Ok(Command::ClickMonth(3)));
        assert_eq!("goto:2017-06-01".parse(), Ok(Command::Goto(date(2017, 6, 1))));
    }

    #[test]
    fn invalid_commands() {
        assert_eq!(
            "jump".parse::<Command>(),
            Err(CalNavError::InvalidCommand("jump".to_string()))
        );
        assert!("day:0".parse::<Command>().is_err());
        assert!("month:smarch".parse::<Command>().is_err());
        assert!(matches!(
            "goto:2017-02-30".parse::<Command>(),
            Err(CalNavError::InvalidDate(_))
        ));
    }

    #[test]
    fn scripts_skip_empty_words() {
        let script = parse_script("left, ,enter,").unwrap();
        assert_eq!(
            script,
            vec![
                Command::Key(Key::Left.into()),
                Command::Key(Key::Enter.into())
            ]
        );
        assert!(parse_script("left,bogus").is_err());
    }
}

// ===========================================================================
// Month names and weekday order
// ===========================================================================

mod names {
    use super::*;

    #[test]
    fn month_numbers_and_names() {
        assert_eq!(parse_month("1"), Some(1));
        assert_eq!(parse_month("12"), Some(12));
        assert_eq!(parse_month("13"), None);
        assert_eq!(parse_month("january"), Some(1));
        assert_eq!(parse_month("Dec"), Some(12));
        assert_eq!(parse_month("jun"), Some(6));
        assert_eq!(parse_month("jul"), Some(7));
        assert_eq!(parse_month("май"), Some(5));
        assert_eq!(parse_month("ju"), None);
        assert_eq!(parse_month("xyz"), None);
    }

    #[test]
    fn weekday_order_from_start() {
        let monday = get_weekday_order(Weekday::Mon);
        assert_eq!(monday[0], Weekday::Mon);
        assert_eq!(monday[6], Weekday::Sun);

        let sunday = get_weekday_order(Weekday::Sun);
        assert_eq!(sunday[0], Weekday::Sun);
        assert_eq!(sunday[6], Weekday::Sat);
    }
}

// ===========================================================================
// Argument parsing
// ===========================================================================

mod args {
    use super::*;

    #[test]
    fn dates() {
        assert_eq!(parse_date("2017-01-31"), Ok(date(2017, 1, 31)));
        assert_eq!(
            parse_date("2017-13-01"),
            Err(CalNavError::InvalidDate("2017-13-01".to_string()))
        );
        assert!(parse_date("31/01/2017").is_err());
    }

    #[test]
    fn defaults() {
        let args = Args::parse_from(["calnav"]);
        let config = CalendarConfig::from_args(&args).unwrap();
        assert_eq!(config.start_at, None);
        assert_eq!(config.start_view, ViewMode::Month);
        assert_eq!(config.year_grid, YearGrid::FourColumn);
        assert_eq!(config.week_start, Weekday::Mon);
        assert!(config.date_filter.is_none());
    }

    #[test]
    fn calendar_options() {
        let args = Args::parse_from([
            "calnav",
            "--start-at",
            "2017-01-31",
            "--min",
            "2016-01-01",
            "--max",
            "2018-01-01",
            "-f",
            "even",
            "-y",
            "--seven-column",
            "-s",
        ]);
        let config = CalendarConfig::from_args(&args).unwrap();
        assert_eq!(config.start_at, Some(date(2017, 1, 31)));
        assert_eq!(config.min_date, Some(date(2016, 1, 1)));
        assert_eq!(config.max_date, Some(date(2018, 1, 1)));
        assert_eq!(config.start_view, ViewMode::Year);
        assert_eq!(config.year_grid, YearGrid::SevenColumn);
        assert_eq!(config.week_start, Weekday::Sun);
        assert!(config.date_filter.is_some());
    }

    #[test]
    fn last_week_start_flag_wins() {
        let args = Args::parse_from(["calnav", "-s", "-m"]);
        let config = CalendarConfig::from_args(&args).unwrap();
        assert_eq!(config.week_start, Weekday::Mon);

        let args = Args::parse_from(["calnav", "-m", "-s"]);
        let config = CalendarConfig::from_args(&args).unwrap();
        assert_eq!(config.week_start, Weekday::Sun);
    }

    #[test]
    fn inverted_bounds() {
        let args = Args::parse_from(["calnav", "--min", "2018-01-01", "--max", "2016-01-01"]);
        assert_eq!(
            CalendarConfig::from_args(&args).unwrap_err(),
            CalNavError::InvertedBounds {
                min: date(2018, 1, 1),
                max: date(2016, 1, 1),
            }
        );
    }

    #[test]
    fn invalid_inputs() {
        let args = Args::parse_from(["calnav", "--start-at", "yesterday"]);
        assert!(CalendarConfig::from_args(&args).is_err());

        let args = Args::parse_from(["calnav", "-f", "prime"]);
        assert!(CalendarConfig::from_args(&args).is_err());
    }
}
