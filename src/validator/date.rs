//! Date predicates.
//!
//! Dates are compared as naive UTC moments. Inputs are anything that
//! implements [`AsDate`]: strings in common notations or chrono values.

use super::error::ValidatorError;
use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use std::fmt::Debug;

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%B %d, %Y",
    "%B %d %Y",
    "%d %B %Y",
];

/// A value that can be read as a calendar moment.
///
/// # Example
///
/// ```rust
/// use pureform::validator::AsDate;
/// use chrono::NaiveDate;
///
/// let parsed = "2024-03-01".as_date();
/// let expected = NaiveDate::from_ymd_opt(2024, 3, 1)
///     .and_then(|d| d.and_hms_opt(0, 0, 0));
/// assert_eq!(parsed, expected);
/// assert!("2024-02-30".as_date().is_none());
/// ```
pub trait AsDate {
    /// The moment this value denotes, or `None` if it is not a valid date.
    fn as_date(&self) -> Option<NaiveDateTime>;
}

impl AsDate for str {
    fn as_date(&self) -> Option<NaiveDateTime> {
        parse_date(self)
    }
}

impl AsDate for String {
    fn as_date(&self) -> Option<NaiveDateTime> {
        parse_date(self)
    }
}

impl AsDate for NaiveDate {
    fn as_date(&self) -> Option<NaiveDateTime> {
        self.and_hms_opt(0, 0, 0)
    }
}

impl AsDate for NaiveDateTime {
    fn as_date(&self) -> Option<NaiveDateTime> {
        Some(*self)
    }
}

impl<Tz: TimeZone> AsDate for DateTime<Tz> {
    fn as_date(&self) -> Option<NaiveDateTime> {
        Some(self.naive_utc())
    }
}

impl<T: AsDate + ?Sized> AsDate for &T {
    fn as_date(&self) -> Option<NaiveDateTime> {
        (**self).as_date()
    }
}

fn parse_date(input: &str) -> Option<NaiveDateTime> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    if let Ok(moment) = DateTime::parse_from_rfc3339(input) {
        return Some(moment.naive_utc());
    }

    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(input, fmt).ok())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(input, fmt).ok())
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}

fn require_date<D: AsDate + Debug + ?Sized>(input: &D) -> Result<NaiveDateTime, ValidatorError> {
    input.as_date().ok_or_else(|| ValidatorError::InvalidArgument {
        input: format!("{input:?}"),
    })
}

/// Check whether the input can be read as a valid calendar date.
///
/// ```rust
/// use pureform::validator::is_date;
///
/// assert!(is_date("2016-12-25"));
/// assert!(is_date("December 25, 2016"));
/// assert!(!is_date("2016-13-01"));
/// assert!(!is_date("yesterday"));
/// ```
pub fn is_date<D: AsDate + ?Sized>(input: &D) -> bool {
    input.as_date().is_some()
}

/// Check whether `input` is strictly before `reference`.
///
/// # Errors
///
/// Returns [`ValidatorError::InvalidArgument`] if either operand is not a
/// date. Check with [`is_date`] first to avoid the failure path.
///
/// ```rust
/// use pureform::validator::is_before_date;
///
/// assert_eq!(is_before_date("2016-01-01", "2016-01-02"), Ok(true));
/// assert!(is_before_date("2016-01-01", "soon").is_err());
/// ```
pub fn is_before_date<A, B>(input: &A, reference: &B) -> Result<bool, ValidatorError>
where
    A: AsDate + Debug + ?Sized,
    B: AsDate + Debug + ?Sized,
{
    let input = require_date(input)?;
    let reference = require_date(reference)?;
    Ok(input < reference)
}

/// Check whether `input` is strictly after `reference`.
///
/// # Errors
///
/// Returns [`ValidatorError::InvalidArgument`] if either operand is not a
/// date.
pub fn is_after_date<A, B>(input: &A, reference: &B) -> Result<bool, ValidatorError>
where
    A: AsDate + Debug + ?Sized,
    B: AsDate + Debug + ?Sized,
{
    let input = require_date(input)?;
    let reference = require_date(reference)?;
    Ok(input > reference)
}

/// Check whether `input` is before the moment of the call.
///
/// # Errors
///
/// Returns [`ValidatorError::InvalidArgument`] if `input` is not a date.
pub fn is_before_today<D: AsDate + Debug + ?Sized>(input: &D) -> Result<bool, ValidatorError> {
    is_before_date(input, &Utc::now())
}

/// Check whether `input` is after the moment of the call.
///
/// # Errors
///
/// Returns [`ValidatorError::InvalidArgument`] if `input` is not a date.
pub fn is_after_today<D: AsDate + Debug + ?Sized>(input: &D) -> Result<bool, ValidatorError> {
    is_after_date(input, &Utc::now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn parses_common_notations() {
        let expected = ymd(2020, 7, 4).and_hms_opt(0, 0, 0);

        assert_eq!("2020-07-04".as_date(), expected);
        assert_eq!("2020/07/04".as_date(), expected);
        assert_eq!("07/04/2020".as_date(), expected);
        assert_eq!("July 4, 2020".as_date(), expected);
        assert_eq!("Jul 4, 2020".as_date(), expected);
        assert_eq!("4 July 2020".as_date(), expected);
        assert_eq!(" 2020-07-04 ".as_date(), expected);
    }

    #[test]
    fn parses_date_times() {
        let expected = ymd(2020, 7, 4).and_hms_opt(13, 30, 0);

        assert_eq!("2020-07-04T13:30:00".as_date(), expected);
        assert_eq!("2020-07-04 13:30".as_date(), expected);
        assert_eq!("2020-07-04T15:30:00+02:00".as_date(), expected);
        assert_eq!("2020-07-04T13:30:00Z".as_date(), expected);
    }

    #[test]
    fn rejects_impossible_calendar_dates() {
        assert!(!is_date("2021-02-29"));
        assert!(!is_date("2021-04-31"));
        assert!(is_date("2020-02-29"));
    }

    #[test]
    fn rejects_non_dates() {
        assert!(!is_date(""));
        assert!(!is_date("hello"));
        assert!(!is_date("2020-07"));
    }

    #[test]
    fn chrono_values_are_dates() {
        assert!(is_date(&ymd(1999, 12, 31)));
        assert!(is_date(&Utc::now()));
        assert!(is_date(&String::from("1999-12-31")));
    }

    #[test]
    fn before_and_after_are_strict() {
        assert_eq!(is_before_date("2020-01-01", "2020-01-02"), Ok(true));
        assert_eq!(is_before_date("2020-01-02", "2020-01-01"), Ok(false));
        assert_eq!(is_before_date("2020-01-01", "2020-01-01"), Ok(false));

        assert_eq!(is_after_date("2020-01-02", "2020-01-01"), Ok(true));
        assert_eq!(is_after_date("2020-01-01", "2020-01-02"), Ok(false));
        assert_eq!(is_after_date("2020-01-01", "2020-01-01"), Ok(false));
    }

    #[test]
    fn comparison_mixes_strings_and_chrono_values() {
        let reference = ymd(2020, 6, 1);
        assert_eq!(is_before_date("2020-05-31", &reference), Ok(true));
        assert_eq!(is_after_date(&reference, "May 31, 2020"), Ok(true));
    }

    #[test]
    fn invalid_operand_is_an_error() {
        let err = is_before_date("2020-01-01", "tomorrow").unwrap_err();
        assert!(matches!(err, ValidatorError::InvalidArgument { .. }));

        let err = is_after_date("nope", "2020-01-01").unwrap_err();
        assert_eq!(
            err,
            ValidatorError::InvalidArgument {
                input: "\"nope\"".to_string()
            }
        );
    }

    #[test]
    fn today_comparisons() {
        let past = Utc::now() - Duration::days(2);
        let future = Utc::now() + Duration::days(2);

        assert_eq!(is_before_today(&past), Ok(true));
        assert_eq!(is_after_today(&future), Ok(true));
        assert_eq!(is_before_today("1990-01-01"), Ok(true));
        assert!(is_after_today("31/31/2020").is_err());
    }
}
