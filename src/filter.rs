//! Date filter predicates.
//!
//! A filter decides which dates may be selected. Dates it rejects are still
//! shown and can still be focused; they are only disabled for selection.
//!
//! Filters are either built from a closure or parsed from a short
//! expression such as `even&not-month:11`.

use std::fmt;

use chrono::{Datelike, NaiveDate, Weekday};

use crate::error::CalNavError;

/// Predicate over dates deciding whether a date may be selected.
pub struct DateFilter {
    predicate: Box<dyn Fn(NaiveDate) -> bool>,
    description: String,
}

impl DateFilter {
    pub fn new(predicate: impl Fn(NaiveDate) -> bool + 'static) -> Self {
        DateFilter {
            predicate: Box::new(predicate),
            description: "custom".to_string(),
        }
    }

    pub fn accepts(&self, date: NaiveDate) -> bool {
        (self.predicate)(date)
    }

    /// Parse a filter expression: terms joined with `&`, each optionally
    /// negated with a leading `!`.
    pub fn parse(expr: &str) -> Result<Self, CalNavError> {
        let terms = expr
            .split('&')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(FilterTerm::parse)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(DateFilter {
            description: expr.trim().to_string(),
            predicate: Box::new(move |date| terms.iter().all(|term| term.matches(date))),
        })
    }
}

impl fmt::Debug for DateFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("DateFilter").field(&self.description).finish()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Condition {
    EvenDay,
    OddDay,
    Weekday,
    Weekend,
    Month(u32),
    Day(u32),
    DayOfWeek(Weekday),
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct FilterTerm {
    condition: Condition,
    negated: bool,
}

impl FilterTerm {
    fn parse(term: &str) -> Result<Self, CalNavError> {
        let invalid = || CalNavError::InvalidFilter(term.to_string());
        let lower = term.to_lowercase();

        let (negated, body) = if let Some(rest) = lower.strip_prefix('!') {
            (true, rest.trim())
        } else if let Some(rest) = lower.strip_prefix("not-") {
            (true, rest)
        } else {
            (false, lower.as_str())
        };

        let condition = match body.split_once(':') {
            None => match body {
                "even" => Condition::EvenDay,
                "odd" => Condition::OddDay,
                "weekday" => Condition::Weekday,
                "weekend" => Condition::Weekend,
                _ => return Err(invalid()),
            },
            Some(("month", arg)) => crate::formatter::parse_month(arg)
                .map(Condition::Month)
                .ok_or_else(invalid)?,
            Some(("day", arg)) => arg
                .parse::<u32>()
                .ok()
                .filter(|d| (1..=31).contains(d))
                .map(Condition::Day)
                .ok_or_else(invalid)?,
            Some(("weekday", arg)) => arg
                .parse::<Weekday>()
                .map(Condition::DayOfWeek)
                .map_err(|_| invalid())?,
            Some(_) => return Err(invalid()),
        };

        Ok(FilterTerm { condition, negated })
    }

    fn matches(&self, date: NaiveDate) -> bool {
        let hit = match self.condition {
            Condition::EvenDay => date.day() % 2 == 0,
            Condition::OddDay => date.day() % 2 == 1,
            Condition::Weekday => !matches!(date.weekday(), Weekday::Sat | Weekday::Sun),
            Condition::Weekend => matches!(date.weekday(), Weekday::Sat | Weekday::Sun),
            Condition::Month(month) => date.month() == month,
            Condition::Day(day) => date.day() == day,
            Condition::DayOfWeek(weekday) => date.weekday() == weekday,
        };
        hit != self.negated
    }
}

