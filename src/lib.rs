//! Date picker calendar with keyboard navigation.
//!
//! Features:
//! - Month and year views with a shared row/column grid
//! - Keyboard navigation that never leaves the min/max bounds
//! - Date filters that disable selection without blocking navigation
//! - Text rendering with localized month and weekday names

pub mod args;
pub mod body;
pub mod calendar;
pub mod dates;
pub mod error;
pub mod filter;
pub mod formatter;
pub mod month_view;
pub mod types;
pub mod year_view;
