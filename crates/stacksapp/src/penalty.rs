//! Overdue fee calculation. Pure: both instants come from the caller.

use chrono::{DateTime, Duration, Utc};

/// Days a title may be held before fees accrue.
pub const LOAN_PERIOD_DAYS: i64 = 14;

/// Fee per whole overdue day, in integer currency units.
pub const DAILY_RATE: i64 = 1;

/// Flat fee owed at `now` for a title borrowed at `borrowed_at`: one unit
/// per whole day past the 14-day loan period, never negative.
pub fn overdue_penalty(borrowed_at: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    let due_date = borrowed_at + Duration::days(LOAN_PERIOD_DAYS);
    let overdue_days = (now - due_date).num_days();
    overdue_days.max(0) * DAILY_RATE
}
