//! Period window resolution
//!
//! Maps a `(PeriodKind, reference instant, month offset)` triple to the
//! concrete inclusive date range it denotes, and renders the short label for
//! that range. Everything here is a pure function of its arguments: the
//! reference instant is always passed in, never read from a clock.

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime};

use crate::locale::RangeLocale;
use crate::models::{DateRange, PeriodKind};

/// Resolve a period selection into a concrete inclusive date range
///
/// The reference instant is shifted by `month_offset` calendar months first
/// (day-of-month clamped when the target month is shorter). `FromFirst`
/// covers the adjusted month exactly; every other kind runs from its anchor
/// day in the month before the adjusted one through the day preceding the
/// anchor in the adjusted month. The window never depends on which day of
/// the month the reference falls on.
pub fn resolve_range(kind: PeriodKind, reference: NaiveDateTime, month_offset: i32) -> DateRange {
    let adjusted = shift_months(reference.date(), month_offset);

    let (first, last) = if kind.is_calendar_month() {
        (with_day_clamped(adjusted, 1), last_day_of_month(adjusted))
    } else {
        let anchor = kind.anchor_day();
        let previous = shift_months(adjusted, -1);
        (
            with_day_clamped(previous, anchor),
            with_day_clamped(adjusted, anchor - 1),
        )
    };

    DateRange::new(first.and_time(NaiveTime::MIN), end_of_day(last))
}

/// Render the short human-readable label for a resolved range
///
/// A range that covers one full calendar month renders as the bare month
/// name, suffixed with its year only when that differs from the reference's
/// year. Any other range renders as `"{day} {mon} - {day} {mon}"`, with the
/// start year inserted when it differs from the reference's year.
pub fn describe_range(
    kind: PeriodKind,
    reference: NaiveDateTime,
    month_offset: i32,
    locale: &RangeLocale,
) -> String {
    let range = resolve_range(kind, reference, month_offset);
    let current_year = reference.year();
    let start = range.start.date();
    let end = range.end.date();

    let full_month = start.day() == 1
        && end.day() == days_in_month(end.year(), end.month())
        && start.month() == end.month()
        && start.year() == end.year();

    if full_month {
        let name = locale.month_name(start.month());
        if start.year() != current_year {
            return format!("{} {}", name, start.year());
        }
        return name;
    }

    let start_part = format!("{} {}", start.day(), locale.month_abbrev(start.month()));
    let end_part = format!("{} {}", end.day(), locale.month_abbrev(end.month()));
    if start.year() != current_year {
        format!("{} {} - {}", start_part, start.year(), end_part)
    } else {
        format!("{} - {}", start_part, end_part)
    }
}

/// Shift a date by a number of calendar months
///
/// The day of month is preserved where possible and clamped to the target
/// month's last day otherwise (Jan 31 + 1 month = Feb 28/29).
pub fn shift_months(date: NaiveDate, offset: i32) -> NaiveDate {
    let months = date.year() * 12 + date.month() as i32 - 1 + offset;
    let year = months.div_euclid(12);
    let month = (months.rem_euclid(12) + 1) as u32;
    let target = NaiveDate::from_ymd_opt(year, month, 1).unwrap();
    with_day_clamped(target, date.day())
}

/// Number of days in a month
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

/// Check if a year is a leap year
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// The last representable moment of a calendar day (23:59:59.999)
pub fn end_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::from_hms_milli_opt(23, 59, 59, 999).unwrap())
}

fn last_day_of_month(date: NaiveDate) -> NaiveDate {
    with_day_clamped(date, days_in_month(date.year(), date.month()))
}

fn with_day_clamped(date: NaiveDate, day: u32) -> NaiveDate {
    let clamped = day
        .max(1)
        .min(days_in_month(date.year(), date.month()));
    date.with_day(clamped).unwrap()
}
