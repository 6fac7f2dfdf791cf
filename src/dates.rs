//! Day-granularity date predicates.
//!
//! List and calendar views badge tasks as due today, due tomorrow, or
//! overdue; those comparisons work on UTC calendar days, not exact
//! instants.

use chrono::{DateTime, Utc};

/// True when `date` falls on the current calendar day.
pub fn is_today(date: DateTime<Utc>) -> bool {
    date.date_naive() == Utc::now().date_naive()
}

/// True when `date` falls on the next calendar day.
pub fn is_tomorrow(date: DateTime<Utc>) -> bool {
    Utc::now()
        .date_naive()
        .succ_opt()
        .is_some_and(|tomorrow| date.date_naive() == tomorrow)
}

/// True when `date` falls on a calendar day that has already passed.
///
/// A due date later today is not overdue yet.
pub fn is_overdue(date: DateTime<Utc>) -> bool {
    date.date_naive() < Utc::now().date_naive()
}
