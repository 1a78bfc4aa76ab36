//! Calendar dates and the year with the day-of-year codes (`YYYY.DDD`)

use chrono::{Datelike, NaiveDate, TimeDelta};
use lazy_static::lazy_static;
use regex::Regex;

mod errors;

pub use errors::ParseDoyError;

lazy_static! {
    // the dot separator is optional
    static ref RE_YYYYDOY: Regex =
        Regex::new(r"^(?P<year>\d{4})\.?(?P<doy>\d{3})$").expect("YYYYDOY regex is valid");
}

/// Year and zero-padded ordinal day of the year separated with the dot.
///
/// ```
/// # use chrono::NaiveDate;
/// # use geoconv::date_to_yyyydoy;
/// let leap_day = NaiveDate::from_ymd_opt(2008, 2, 29).unwrap();
/// assert_eq!(date_to_yyyydoy(leap_day), "2008.060");
/// ```
///
/// Only the date-like values are accepted:
///
/// ```compile_fail
/// # use geoconv::date_to_yyyydoy;
/// let _ = date_to_yyyydoy("2020123");
/// ```
pub fn date_to_yyyydoy<D: Datelike>(date: D) -> String {
    format!("{:04}.{:03}", date.year(), date.ordinal())
}

/// Read the date from the `YYYY.DDD` or `YYYYDDD` code.
///
/// The date is the first of January of the year shifted by `DDD - 1` days,
/// so the day numbers beyond the year's length go on into the next year.
///
/// # Errors
/// - the code is not made of the four digits of the year and the three digits
///   of the day (with the optional dot in between);
/// - the resulting date is out of the supported calendar range.
///
/// ```
/// # use chrono::NaiveDate;
/// # use geoconv::yyyydoy_to_date;
/// let expected = NaiveDate::from_ymd_opt(2020, 1, 4).unwrap();
/// assert_eq!(yyyydoy_to_date("2020.004").unwrap(), expected);
/// assert_eq!(yyyydoy_to_date("2020004").unwrap(), expected);
/// assert!(yyyydoy_to_date("2020.12").is_err());
/// ```
pub fn yyyydoy_to_date(code: &str) -> Result<NaiveDate, ParseDoyError> {
    let caps = RE_YYYYDOY.captures(code).ok_or_else(|| {
        log::debug!("not a YYYYDOY code: {code:?}");
        ParseDoyError::Notation
    })?;

    let year: i32 = caps["year"].parse()?;
    let day: i64 = caps["doy"].parse()?;

    NaiveDate::from_ymd_opt(year, 1, 1)
        .zip(TimeDelta::try_days(day - 1))
        .and_then(|(new_year, offset)| new_year.checked_add_signed(offset))
        .ok_or(ParseDoyError::OutOfCalendar)
}
