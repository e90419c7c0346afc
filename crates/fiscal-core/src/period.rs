//! Calendar periods.
//!
//! A [`Period`] is one calendar interval at a given [`Granularity`]: a year, a
//! quarter, a month, a day, or an intraday slice down to the millisecond. Periods
//! are immutable values built through granularity-specific factories that
//! validate their calendar fields.
//!
//! Periods are ordered by start instant, so periods of different granularities
//! compare naturally (`2025` sorts before `2025-02`). Two periods are only equal
//! when both granularity and start coincide.
//!
//! Every period renders as a compact label that parses back:
//!
//! | granularity   | label                     |
//! |---------------|---------------------------|
//! | annual        | `2025`                    |
//! | quarterly     | `2025-Q1`                 |
//! | monthly       | `2025-03`                 |
//! | daily         | `2025-03-15`              |
//! | hourly        | `2025-03-15T14`           |
//! | minute        | `2025-03-15T14:05`        |
//! | second        | `2025-03-15T14:05:09`     |
//! | millisecond   | `2025-03-15T14:05:09.123` |

use std::cmp::Ordering;
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use chrono::{Datelike, Months, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::{
    error::{Result, SeriesError},
    granularity::Granularity,
};

/// One calendar interval.
///
/// The end instant is exclusive: it is the start of the following period of the
/// same granularity, so `start < end` always holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawPeriod")]
pub struct Period {
    granularity: Granularity,
    start: NaiveDateTime,
    end: NaiveDateTime,
}

/// Wire form of a period. The end is re-derived on decode.
#[derive(Deserialize)]
struct RawPeriod {
    granularity: Granularity,
    start: NaiveDateTime,
}

impl TryFrom<RawPeriod> for Period {
    type Error = SeriesError;

    fn try_from(raw: RawPeriod) -> Result<Self> {
        let period = Self::containing(raw.granularity, raw.start)?;
        if period.start != raw.start {
            return Err(SeriesError::InvalidPeriod(format!(
                "{} is not the start of a {:?} period",
                raw.start, raw.granularity
            )));
        }
        Ok(period)
    }
}

impl Period {
    /// The calendar year `year`.
    ///
    /// # Errors
    /// Returns [`SeriesError::InvalidPeriod`] if the year is outside the supported calendar.
    pub fn annual(year: i32) -> Result<Self> {
        let start = first_of_month(year, 1)
            .ok_or_else(|| SeriesError::InvalidPeriod(format!("year {year} is out of range")))?;
        Self::from_start(Granularity::Annual, start)
    }

    /// Quarter `quarter` (1-4) of `year`.
    ///
    /// # Errors
    /// Returns [`SeriesError::InvalidPeriod`] if the quarter is not in 1-4.
    pub fn quarterly(year: i32, quarter: u32) -> Result<Self> {
        check_field("quarter", quarter, 1..=4)?;
        let start = first_of_month(year, (quarter - 1) * 3 + 1)
            .ok_or_else(|| SeriesError::InvalidPeriod(format!("year {year} is out of range")))?;
        Self::from_start(Granularity::Quarterly, start)
    }

    /// Month `month` (1-12) of `year`.
    ///
    /// # Errors
    /// Returns [`SeriesError::InvalidPeriod`] if the month is not in 1-12.
    pub fn monthly(year: i32, month: u32) -> Result<Self> {
        check_field("month", month, 1..=12)?;
        let start = first_of_month(year, month)
            .ok_or_else(|| SeriesError::InvalidPeriod(format!("year {year} is out of range")))?;
        Self::from_start(Granularity::Monthly, start)
    }

    /// The calendar day `year-month-day`.
    ///
    /// # Errors
    /// Returns [`SeriesError::InvalidPeriod`] if the fields do not name a real date.
    pub fn daily(year: i32, month: u32, day: u32) -> Result<Self> {
        check_field("month", month, 1..=12)?;
        let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
            SeriesError::InvalidPeriod(format!(
                "{year:04}-{month:02}-{day:02} is not a calendar date"
            ))
        })?;
        Self::from_start(Granularity::Daily, date.and_time(NaiveTime::MIN))
    }

    /// Hour `hour` (0-23) of `date`.
    ///
    /// # Errors
    /// Returns [`SeriesError::InvalidPeriod`] if the hour is out of range.
    pub fn hourly(date: NaiveDate, hour: u32) -> Result<Self> {
        Self::intraday(Granularity::Hourly, date, hour, 0, 0, 0)
    }

    /// Minute `hour:minute` of `date`.
    ///
    /// # Errors
    /// Returns [`SeriesError::InvalidPeriod`] if a field is out of range.
    pub fn minute(date: NaiveDate, hour: u32, minute: u32) -> Result<Self> {
        Self::intraday(Granularity::Minute, date, hour, minute, 0, 0)
    }

    /// Second `hour:minute:second` of `date`.
    ///
    /// # Errors
    /// Returns [`SeriesError::InvalidPeriod`] if a field is out of range.
    pub fn second(date: NaiveDate, hour: u32, minute: u32, second: u32) -> Result<Self> {
        Self::intraday(Granularity::Second, date, hour, minute, second, 0)
    }

    /// Millisecond `hour:minute:second.millis` of `date`.
    ///
    /// # Errors
    /// Returns [`SeriesError::InvalidPeriod`] if a field is out of range.
    pub fn millisecond(
        date: NaiveDate,
        hour: u32,
        minute: u32,
        second: u32,
        millis: u32,
    ) -> Result<Self> {
        Self::intraday(Granularity::Millisecond, date, hour, minute, second, millis)
    }

    /// The period of `granularity` that contains `instant`.
    ///
    /// # Errors
    /// Returns [`SeriesError::InvalidPeriod`] if the period would leave the supported
    /// calendar, or if a millisecond period is asked for inside a leap second.
    pub fn containing(granularity: Granularity, instant: NaiveDateTime) -> Result<Self> {
        // Leap seconds carry nanoseconds past 1e9, which no millisecond slot holds.
        if granularity == Granularity::Millisecond && instant.nanosecond() >= 1_000_000_000 {
            return Err(SeriesError::InvalidPeriod(format!(
                "{instant} falls inside a leap second"
            )));
        }
        let date = instant.date();
        let start = match granularity {
            Granularity::Millisecond => {
                instant.with_nanosecond(instant.nanosecond() / 1_000_000 * 1_000_000)
            }
            Granularity::Second => instant.with_nanosecond(0),
            Granularity::Minute => date.and_hms_opt(instant.hour(), instant.minute(), 0),
            Granularity::Hourly => date.and_hms_opt(instant.hour(), 0, 0),
            Granularity::Daily => Some(date.and_time(NaiveTime::MIN)),
            Granularity::Monthly => first_of_month(date.year(), date.month()),
            Granularity::Quarterly => first_of_month(date.year(), date.month0() / 3 * 3 + 1),
            Granularity::Annual => first_of_month(date.year(), 1),
        }
        .ok_or_else(|| {
            SeriesError::InvalidPeriod(format!("no {granularity:?} period contains {instant}"))
        })?;
        Self::from_start(granularity, start)
    }

    fn intraday(
        granularity: Granularity,
        date: NaiveDate,
        hour: u32,
        minute: u32,
        second: u32,
        millis: u32,
    ) -> Result<Self> {
        check_field("hour", hour, 0..=23)?;
        check_field("minute", minute, 0..=59)?;
        check_field("second", second, 0..=59)?;
        check_field("millisecond", millis, 0..=999)?;
        let start = date
            .and_hms_milli_opt(hour, minute, second, millis)
            .ok_or_else(|| {
                SeriesError::InvalidPeriod(format!(
                    "{date}T{hour:02}:{minute:02}:{second:02}.{millis:03} is not a valid time"
                ))
            })?;
        Self::from_start(granularity, start)
    }

    fn from_start(granularity: Granularity, start: NaiveDateTime) -> Result<Self> {
        let end = shift(granularity, start, 1).ok_or_else(|| {
            SeriesError::InvalidPeriod(format!(
                "{granularity:?} period starting {start} has no representable end"
            ))
        })?;
        Ok(Self {
            granularity,
            start,
            end,
        })
    }

    /// Returns the granularity of this period.
    #[must_use]
    pub const fn granularity(&self) -> Granularity {
        self.granularity
    }

    /// Returns the first instant of this period.
    #[must_use]
    pub const fn start(&self) -> NaiveDateTime {
        self.start
    }

    /// Returns the exclusive end of this period (the start of the next one).
    #[must_use]
    pub const fn end(&self) -> NaiveDateTime {
        self.end
    }

    /// Returns the calendar year the period starts in.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.start.year()
    }

    /// Returns the quarter (1-4) the period starts in.
    #[must_use]
    pub fn quarter(&self) -> u32 {
        self.start.month0() / 3 + 1
    }

    /// Returns the month (1-12) the period starts in.
    #[must_use]
    pub fn month(&self) -> u32 {
        self.start.month()
    }

    /// Returns the day of month the period starts on.
    #[must_use]
    pub fn day(&self) -> u32 {
        self.start.day()
    }

    /// Returns the number of whole days spanned (zero for intraday periods).
    #[must_use]
    pub fn days(&self) -> i64 {
        self.end.signed_duration_since(self.start).num_days()
    }

    /// Returns the period `n` steps away at the same granularity (negative `n` goes back).
    ///
    /// # Errors
    /// Returns [`SeriesError::InvalidPeriod`] if the target leaves the supported calendar.
    pub fn offset(&self, n: i64) -> Result<Self> {
        let start = shift(self.granularity, self.start, n).ok_or_else(|| {
            SeriesError::InvalidPeriod(format!("{self} offset by {n} is out of range"))
        })?;
        Self::from_start(self.granularity, start)
    }

    /// Returns the following period.
    ///
    /// # Errors
    /// Returns [`SeriesError::InvalidPeriod`] at the end of the supported calendar.
    pub fn next(&self) -> Result<Self> {
        self.offset(1)
    }

    /// Returns the preceding period.
    ///
    /// # Errors
    /// Returns [`SeriesError::InvalidPeriod`] at the start of the supported calendar.
    pub fn previous(&self) -> Result<Self> {
        self.offset(-1)
    }

    /// Consecutive periods from `first` through `last`, inclusive.
    ///
    /// Returns an empty list when `last` precedes `first`.
    ///
    /// # Errors
    /// Returns [`SeriesError::MixedGranularity`] if the endpoints differ in granularity.
    pub fn range(first: Self, last: Self) -> Result<Vec<Self>> {
        if first.granularity != last.granularity {
            return Err(SeriesError::MixedGranularity {
                first: first.granularity,
                last: last.granularity,
            });
        }

        let mut periods = Vec::new();
        let mut current = first;
        while current <= last {
            periods.push(current);
            if current == last {
                break;
            }
            current = current.next()?;
        }
        Ok(periods)
    }
}

impl Ord for Period {
    fn cmp(&self, other: &Self) -> Ordering {
        self.start
            .cmp(&other.start)
            .then_with(|| self.granularity.cmp(&other.granularity))
    }
}

impl PartialOrd for Period {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = &self.start;
        let (year, month, day) = (s.year(), s.month(), s.day());
        let (hour, minute, second) = (s.hour(), s.minute(), s.second());
        match self.granularity {
            Granularity::Annual => write!(f, "{year:04}"),
            Granularity::Quarterly => write!(f, "{year:04}-Q{}", self.quarter()),
            Granularity::Monthly => write!(f, "{year:04}-{month:02}"),
            Granularity::Daily => write!(f, "{year:04}-{month:02}-{day:02}"),
            Granularity::Hourly => write!(f, "{year:04}-{month:02}-{day:02}T{hour:02}"),
            Granularity::Minute => {
                write!(f, "{year:04}-{month:02}-{day:02}T{hour:02}:{minute:02}")
            }
            Granularity::Second => write!(
                f,
                "{year:04}-{month:02}-{day:02}T{hour:02}:{minute:02}:{second:02}"
            ),
            Granularity::Millisecond => write!(
                f,
                "{year:04}-{month:02}-{day:02}T{hour:02}:{minute:02}:{second:02}.{:03}",
                s.nanosecond() / 1_000_000
            ),
        }
    }
}

impl FromStr for Period {
    type Err = SeriesError;

    fn from_str(s: &str) -> Result<Self> {
        let (date_part, time_part) = match s.split_once('T') {
            Some((date, time)) => (date, Some(time)),
            None => (s, None),
        };
        let fields: Vec<&str> = date_part.split('-').collect();

        match (fields.as_slice(), time_part) {
            ([year], None) => Self::annual(parse_field(s, year)?),
            ([year, quarter], None) if quarter.starts_with('Q') => {
                Self::quarterly(parse_field(s, year)?, parse_field(s, &quarter[1..])?)
            }
            ([year, month], None) => Self::monthly(parse_field(s, year)?, parse_field(s, month)?),
            ([year, month, day], time) => {
                let day = Self::daily(
                    parse_field(s, year)?,
                    parse_field(s, month)?,
                    parse_field(s, day)?,
                )?;
                match time {
                    Some(time) => parse_time(s, day.start.date(), time),
                    None => Ok(day),
                }
            }
            _ => Err(SeriesError::Parse(format!("unrecognised period label '{s}'"))),
        }
    }
}

fn parse_time(label: &str, date: NaiveDate, time: &str) -> Result<Period> {
    let fields: Vec<&str> = time.split(':').collect();
    match fields.as_slice() {
        [hour] => Period::hourly(date, parse_field(label, hour)?),
        [hour, minute] => Period::minute(date, parse_field(label, hour)?, parse_field(label, minute)?),
        [hour, minute, second] => {
            let hour = parse_field(label, hour)?;
            let minute = parse_field(label, minute)?;
            match second.split_once('.') {
                Some((whole, millis)) if millis.len() == 3 => Period::millisecond(
                    date,
                    hour,
                    minute,
                    parse_field(label, whole)?,
                    parse_field(label, millis)?,
                ),
                Some(_) => Err(SeriesError::Parse(format!(
                    "expected three millisecond digits in '{label}'"
                ))),
                None => Period::second(date, hour, minute, parse_field(label, second)?),
            }
        }
        _ => Err(SeriesError::Parse(format!("unrecognised period label '{label}'"))),
    }
}

/// Parses an unsigned run of ASCII digits.
fn parse_field<N: FromStr>(label: &str, field: &str) -> Result<N> {
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return Err(SeriesError::Parse(format!(
            "invalid field '{field}' in period label '{label}'"
        )));
    }
    field.parse().map_err(|_| {
        SeriesError::Parse(format!(
            "invalid field '{field}' in period label '{label}'"
        ))
    })
}

fn check_field(name: &str, value: u32, range: RangeInclusive<u32>) -> Result<()> {
    if range.contains(&value) {
        Ok(())
    } else {
        Err(SeriesError::InvalidPeriod(format!(
            "{name} {value} is out of range {}-{}",
            range.start(),
            range.end()
        )))
    }
}

fn first_of_month(year: i32, month: u32) -> Option<NaiveDateTime> {
    NaiveDate::from_ymd_opt(year, month, 1).map(|date| date.and_time(NaiveTime::MIN))
}

/// Moves a period start by `n` whole periods.
fn shift(granularity: Granularity, start: NaiveDateTime, n: i64) -> Option<NaiveDateTime> {
    match granularity.months() {
        Some(months) => {
            let total = n.checked_mul(i64::from(months))?;
            let step = Months::new(u32::try_from(total.unsigned_abs()).ok()?);
            if total >= 0 {
                start.checked_add_months(step)
            } else {
                start.checked_sub_months(step)
            }
        }
        None => {
            let delta = granularity
                .fixed_duration()?
                .checked_mul(i32::try_from(n).ok()?)?;
            start.checked_add_signed(delta)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_quarter_bounds() {
        let q1 = Period::quarterly(2025, 1).unwrap();
        assert_eq!(q1.start(), date(2025, 1, 1).and_time(NaiveTime::MIN));
        assert_eq!(q1.end(), date(2025, 4, 1).and_time(NaiveTime::MIN));
        assert_eq!(q1.days(), 90);

        let q4 = Period::quarterly(2024, 4).unwrap();
        assert_eq!(q4.end(), date(2025, 1, 1).and_time(NaiveTime::MIN));
        assert_eq!(q4.quarter(), 4);
        assert_eq!(q4.month(), 10);
    }

    #[test]
    fn test_factories_reject_out_of_range_fields() {
        assert!(matches!(
            Period::quarterly(2025, 0),
            Err(SeriesError::InvalidPeriod(_))
        ));
        assert!(matches!(
            Period::quarterly(2025, 5),
            Err(SeriesError::InvalidPeriod(_))
        ));
        assert!(matches!(
            Period::monthly(2025, 13),
            Err(SeriesError::InvalidPeriod(_))
        ));
        assert!(matches!(
            Period::daily(2025, 2, 29),
            Err(SeriesError::InvalidPeriod(_))
        ));
        assert!(Period::daily(2024, 2, 29).is_ok());
        assert!(matches!(
            Period::hourly(date(2025, 1, 1), 24),
            Err(SeriesError::InvalidPeriod(_))
        ));
        assert!(matches!(
            Period::millisecond(date(2025, 1, 1), 0, 0, 0, 1000),
            Err(SeriesError::InvalidPeriod(_))
        ));
        assert!(matches!(
            Period::annual(i32::MAX),
            Err(SeriesError::InvalidPeriod(_))
        ));
    }

    #[test]
    fn test_start_precedes_end() {
        let day = date(2025, 3, 15);
        let periods = [
            Period::annual(2025).unwrap(),
            Period::quarterly(2025, 2).unwrap(),
            Period::monthly(2025, 2).unwrap(),
            Period::daily(2025, 3, 15).unwrap(),
            Period::hourly(day, 23).unwrap(),
            Period::minute(day, 23, 59).unwrap(),
            Period::second(day, 23, 59, 59).unwrap(),
            Period::millisecond(day, 23, 59, 59, 999).unwrap(),
        ];
        for period in periods {
            assert!(period.start() < period.end(), "{period}");
        }
    }

    #[test]
    fn test_equality_requires_same_granularity() {
        let year = Period::annual(2025).unwrap();
        let q1 = Period::quarterly(2025, 1).unwrap();
        let jan = Period::monthly(2025, 1).unwrap();
        assert_eq!(year.start(), q1.start());
        assert_ne!(year, q1);
        assert_ne!(q1, jan);
        assert_eq!(q1, Period::quarterly(2025, 1).unwrap());
    }

    #[test]
    fn test_ordering_by_start_across_granularities() {
        let q1 = Period::quarterly(2025, 1).unwrap();
        let feb = Period::monthly(2025, 2).unwrap();
        let q2 = Period::quarterly(2025, 2).unwrap();
        let prior_year = Period::annual(2024).unwrap();
        assert!(prior_year < q1);
        assert!(q1 < feb);
        assert!(feb < q2);

        let mut periods = vec![q2, feb, q1, prior_year];
        periods.sort();
        assert_eq!(periods, vec![prior_year, q1, feb, q2]);
    }

    #[test]
    fn test_next_and_previous() {
        let q4 = Period::quarterly(2024, 4).unwrap();
        assert_eq!(q4.next().unwrap(), Period::quarterly(2025, 1).unwrap());
        assert_eq!(
            Period::monthly(2025, 1).unwrap().previous().unwrap(),
            Period::monthly(2024, 12).unwrap()
        );
        assert_eq!(
            Period::daily(2024, 2, 28).unwrap().next().unwrap(),
            Period::daily(2024, 2, 29).unwrap()
        );
        assert_eq!(
            Period::hourly(date(2025, 1, 1), 0).unwrap().offset(-1).unwrap(),
            Period::hourly(date(2024, 12, 31), 23).unwrap()
        );
        assert_eq!(
            Period::annual(2020).unwrap().offset(5).unwrap(),
            Period::annual(2025).unwrap()
        );
    }

    #[test]
    fn test_range() {
        let first = Period::quarterly(2024, 3).unwrap();
        let last = Period::quarterly(2025, 2).unwrap();
        let range = Period::range(first, last).unwrap();
        let labels: Vec<String> = range.iter().map(ToString::to_string).collect();
        assert_eq!(labels, vec!["2024-Q3", "2024-Q4", "2025-Q1", "2025-Q2"]);

        assert!(Period::range(last, first).unwrap().is_empty());
        assert_eq!(Period::range(first, first).unwrap(), vec![first]);
        assert!(matches!(
            Period::range(first, Period::annual(2025).unwrap()),
            Err(SeriesError::MixedGranularity { .. })
        ));
    }

    #[test]
    fn test_containing() {
        let instant = date(2025, 8, 17).and_hms_milli_opt(13, 45, 12, 678).unwrap();
        assert_eq!(
            Period::containing(Granularity::Quarterly, instant).unwrap(),
            Period::quarterly(2025, 3).unwrap()
        );
        assert_eq!(
            Period::containing(Granularity::Monthly, instant).unwrap(),
            Period::monthly(2025, 8).unwrap()
        );
        assert_eq!(
            Period::containing(Granularity::Minute, instant).unwrap(),
            Period::minute(date(2025, 8, 17), 13, 45).unwrap()
        );
        assert_eq!(
            Period::containing(Granularity::Millisecond, instant).unwrap(),
            Period::millisecond(date(2025, 8, 17), 13, 45, 12, 678).unwrap()
        );
    }

    #[test]
    fn test_containing_leap_second() {
        let leap = date(2016, 12, 31)
            .and_hms_milli_opt(23, 59, 59, 1_500)
            .unwrap();
        assert!(matches!(
            Period::containing(Granularity::Millisecond, leap),
            Err(SeriesError::InvalidPeriod(_))
        ));

        let second = Period::containing(Granularity::Second, leap).unwrap();
        assert_eq!(second, Period::second(date(2016, 12, 31), 23, 59, 59).unwrap());
        assert_eq!(second.to_string().parse::<Period>().unwrap(), second);

        let wire = r#"{"granularity":"millisecond","start":"2016-12-31T23:59:60.500"}"#;
        assert!(serde_json::from_str::<Period>(wire).is_err());
    }

    #[test]
    fn test_labels_parse_back() {
        let day = date(2025, 3, 15);
        let cases = [
            (Period::annual(2025).unwrap(), "2025"),
            (Period::quarterly(2025, 1).unwrap(), "2025-Q1"),
            (Period::monthly(2025, 3).unwrap(), "2025-03"),
            (Period::daily(2025, 3, 15).unwrap(), "2025-03-15"),
            (Period::hourly(day, 14).unwrap(), "2025-03-15T14"),
            (Period::minute(day, 14, 5).unwrap(), "2025-03-15T14:05"),
            (Period::second(day, 14, 5, 9).unwrap(), "2025-03-15T14:05:09"),
            (
                Period::millisecond(day, 14, 5, 9, 123).unwrap(),
                "2025-03-15T14:05:09.123",
            ),
        ];
        for (period, label) in cases {
            assert_eq!(period.to_string(), label);
            assert_eq!(label.parse::<Period>().unwrap(), period);
        }
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            "2025-Q7".parse::<Period>(),
            Err(SeriesError::InvalidPeriod(_))
        ));
        assert!(matches!(
            "2025-ab".parse::<Period>(),
            Err(SeriesError::Parse(_))
        ));
        assert!(matches!("".parse::<Period>(), Err(SeriesError::Parse(_))));
        assert!(matches!(
            "2025-03-15T14:05:09.1".parse::<Period>(),
            Err(SeriesError::Parse(_))
        ));
        assert!(matches!(
            "2025-03T14".parse::<Period>(),
            Err(SeriesError::Parse(_))
        ));
    }

    #[test]
    fn test_serde_roundtrip_and_validation() {
        let period = Period::monthly(2025, 6).unwrap();
        let json = serde_json::to_string(&period).unwrap();
        let back: Period = serde_json::from_str(&json).unwrap();
        assert_eq!(back, period);
        assert_eq!(back.end(), period.end());

        let misaligned = r#"{"granularity":"monthly","start":"2025-06-15T00:00:00"}"#;
        assert!(serde_json::from_str::<Period>(misaligned).is_err());
    }
}
