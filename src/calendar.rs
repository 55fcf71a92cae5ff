//! Calendar helpers on top of chrono's proleptic Gregorian calendar.
use crate::pattern::{PatternValueType, ValueSet};
use chrono::{Datelike, NaiveDate};

/// Returns `true` if provided year is leap.
#[inline]
pub(crate) fn is_leap_year(year: PatternValueType) -> bool {
    NaiveDate::from_yo_opt(year as i32, 366).is_some()
}

/// Returns number of days in specified month.
pub(crate) fn days_in_month(year: PatternValueType, month: PatternValueType) -> PatternValueType {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => panic!("Invalid month: {month}"),
    }
}

/// Calculates ISO day of week (Monday is 1, Sunday is 7) for specified date.
pub(crate) fn day_of_week(year: PatternValueType, month: PatternValueType, day: PatternValueType) -> PatternValueType {
    NaiveDate::from_ymd_opt(year as i32, month as u32, day as u32)
        .map(|date| date.weekday().number_from_monday() as PatternValueType)
        .unwrap_or_else(|| panic!("Invalid date: {year:04}-{month:02}-{day:02}"))
}

/// Returns all days of the month which fall on one of the `dows`.
pub(crate) fn days_of_week(year: PatternValueType, month: PatternValueType, dows: &ValueSet) -> ValueSet {
    (1..=days_in_month(year, month))
        .filter(|day| dows.contains(&day_of_week(year, month, *day)))
        .collect()
}

/// Returns day in the month for the last specified day of the week.
pub(crate) fn last_dow(year: PatternValueType, month: PatternValueType, dow: PatternValueType) -> PatternValueType {
    if !(1..=7).contains(&dow) {
        panic!("Invalid day of week: {dow}");
    }

    let last_day = days_in_month(year, month);
    let shift = (day_of_week(year, month, last_day) + 7 - dow) % 7;

    last_day - shift
}

/// Returns date (day in the month) of the specified N-th day of the week,
/// or `None` if the month has less than `n` such days.
pub(crate) fn nth_dow(
    year: PatternValueType,
    month: PatternValueType,
    dow: PatternValueType,
    n: PatternValueType,
) -> Option<PatternValueType> {
    if !(1..=7).contains(&dow) || n == 0 {
        panic!("Invalid day of week or nth occurrence: {dow}/{n}");
    }

    let first = 1 + (dow + 7 - day_of_week(year, month, 1)) % 7;
    let day = first + (n - 1) * 7;

    (day <= days_in_month(year, month)).then_some(day)
}

/// Returns date of the weekday (not Sunday or Saturday) nearest to the specified date in the same month,
/// or `None` if the month is shorter than `day`.
///
/// Saturday moves back to Friday unless it's the first day of the month,
/// Sunday moves forward to Monday unless it's the last day of the month.
pub(crate) fn nearest_weekday(
    year: PatternValueType,
    month: PatternValueType,
    day: PatternValueType,
) -> Option<PatternValueType> {
    let days_in_month = days_in_month(year, month);
    if day == 0 || day > days_in_month {
        return None;
    }

    let weekday = match day_of_week(year, month, day) {
        // saturday
        6 if day == 1 => day + 2,
        6 => day - 1,
        // sunday
        7 if day == days_in_month => day - 2,
        7 => day + 1,
        _ => day,
    };

    Some(weekday)
}
