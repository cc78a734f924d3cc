// SPDX-FileCopyrightText: 2026 Cadence contributors
//
// SPDX-License-Identifier: Apache-2.0

use chrono::{Datelike, Months, NaiveDate};

/// NOTE: Used in derived occurrence identifiers, so it should be stable
/// across different runs.
pub(crate) const STABLE_FORMAT_INSTANT: &str = "%Y-%m-%dT%H:%M:%S";

/// Weekday index of the date, 0 = Sunday through 6 = Saturday.
pub(crate) fn weekday_index(date: NaiveDate) -> u8 {
    // num_days_from_sunday is always < 7
    date.weekday().num_days_from_sunday() as u8
}

/// Whether the date falls on a Saturday or Sunday.
pub(crate) fn is_weekend(date: NaiveDate) -> bool {
    matches!(weekday_index(date), 0 | 6)
}

/// The number of days in the date's month, leap-year aware.
pub(crate) fn days_in_month(year: i32, month: u32) -> u32 {
    let first_of_next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    // Only out of range at the far edge of chrono's representable years
    first_of_next.and_then(|d| d.pred_opt()).map_or(28, |d| d.day())
}

/// Month arithmetic that preserves the day-of-month, clamping to the target
/// month's last day when it is shorter (Jan 31 + 1 month = Feb 28/29).
pub(crate) fn add_months_clamped(date: NaiveDate, months: u32) -> Option<NaiveDate> {
    date.checked_add_months(Months::new(months))
}

/// Year arithmetic preserving month and day. A Feb 29 anchor on a non-leap
/// target year clamps to Feb 28, consistent with the monthly clamp.
pub(crate) fn add_years_clamped(date: NaiveDate, years: u32) -> Option<NaiveDate> {
    date.checked_add_months(Months::new(years.checked_mul(12)?))
}

/// Which week of the month the date falls in, 1-based: `ceil(day / 7)`.
pub(crate) fn week_of_month(date: NaiveDate) -> u32 {
    date.day().div_ceil(7)
}

/// The `nth` occurrence (1-based) of the weekday (0 = Sunday) in the given
/// month. When the month has no nth such weekday, returns the last date in
/// the month with that weekday instead.
pub(crate) fn nth_weekday_of_month(
    year: i32,
    month: u32,
    weekday: u8,
    nth: u32,
) -> Option<NaiveDate> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let offset = u32::from((7 + weekday - weekday_index(first)) % 7);

    let mut day = 1 + offset + nth.saturating_sub(1) * 7;
    let last = days_in_month(year, month);
    while day > last {
        day -= 7;
    }

    NaiveDate::from_ymd_opt(year, month, day)
}
