//! Week-of-birthdays report.
//!
//! Collects the contacts whose birthdays fall within the current week and
//! buckets them by weekday. Saturday and Sunday birthdays are reported under
//! Monday.

use crate::book::AddressBook;
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use std::collections::HashMap;

/// Birthdays in the current week, bucketed by weekday.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekReport {
    /// The day the report was generated for
    pub today: NaiveDate,

    /// `(weekday label, contact names)` pairs in span order; weekend
    /// birthdays appear in the Monday bucket
    pub days: Vec<(String, Vec<String>)>,
}

impl WeekReport {
    /// Whether no contact has a birthday this week.
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

/// Collect the birthdays falling in the week around `today`.
///
/// The 7-day span starts two days back on a Monday and one day back on a
/// Sunday (so weekend birthdays just passed still land in the Monday
/// bucket), otherwise on `today` itself. Records without a birthday are
/// skipped.
pub fn birthdays_per_week(book: &AddressBook, today: NaiveDate) -> WeekReport {
    let span = week_span(today);

    let mut buckets: HashMap<&'static str, Vec<String>> = HashMap::new();

    for (name, record) in book.iter() {
        let Some(birthday) = record.birthday() else {
            continue;
        };

        let in_span = span
            .iter()
            .find(|date| date.month() == birthday.month() && date.day() == birthday.day());

        if let Some(date) = in_span {
            buckets
                .entry(observed_weekday(date.weekday()))
                .or_default()
                .push(name.to_string());
        }
    }

    // Emit buckets in span order, under each date's own weekday label; the
    // shifted weekend entries surface when the span reaches its Monday.
    let mut days = Vec::new();
    for date in &span {
        let label = weekday_name(date.weekday());
        if let Some(names) = buckets.remove(label) {
            days.push((label.to_string(), names));
        }
    }

    WeekReport { today, days }
}

/// The 7-day date range for the report.
fn week_span(today: NaiveDate) -> Vec<NaiveDate> {
    let start = match today.weekday() {
        Weekday::Mon => today - Duration::days(2),
        Weekday::Sun => today - Duration::days(1),
        _ => today,
    };

    (0..7).map(|offset| start + Duration::days(offset)).collect()
}

/// Weekday label with the weekend shifted to Monday.
fn observed_weekday(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Sat | Weekday::Sun => "Monday",
        other => weekday_name(other),
    }
}

fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}
