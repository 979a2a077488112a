//! Time windows for statistics queries
//!
//! A window is edited through two local date-time inputs. The inputs hold
//! minute-precision text (`YYYY-MM-DDTHH:MM`); queries carry second
//! precision (`YYYY-MM-DDTHH:MM:SS`). Neither format carries a timezone
//! offset, so the API interprets both bounds in its own local time.
//!
//! Presets step back from an absolute instant and only then take the wall
//! clock reading of each bound, so a 7 day window spans 168 hours even when
//! a daylight saving change falls inside it.

use chrono::{DateTime, Duration, NaiveDateTime, TimeZone};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Layout of the date-time input fields
pub const INPUT_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Layout of the `start`/`end` query parameters
pub const QUERY_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Errors raised while turning window inputs into a [`TimeWindow`]
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum WindowError {
    /// One of the two inputs is empty
    #[error("Please select a time period")]
    MissingBound,

    /// An input does not hold a date-time
    #[error("Invalid date-time: {0}")]
    InvalidInput(String),
}

/// A preset name that is not one of the shortcuts
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Unknown preset: {0}. Use: 24h, 7d, 30d, reset")]
pub struct PresetParseError(pub String);

/// The `[start, end]` range used for statistics queries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl TimeWindow {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self { start, end }
    }

    /// Window of the given length ending at `now`, in `now`'s local time
    pub fn last<Tz: TimeZone>(duration: Duration, now: &DateTime<Tz>) -> Self {
        let start = now.clone() - duration;
        Self {
            start: start.naive_local(),
            end: now.naive_local(),
        }
    }

    /// The default window: the 24 hours before `now`
    pub fn default_at<Tz: TimeZone>(now: &DateTime<Tz>) -> Self {
        Self::last(Duration::hours(24), now)
    }

    /// Length of the window
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// Both bounds in query-parameter layout
    pub fn query_bounds(&self) -> (String, String) {
        (format_query(self.start), format_query(self.end))
    }
}

impl fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} .. {}", format_query(self.start), format_query(self.end))
    }
}

/// Window shortcuts offered next to the inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preset {
    Last24Hours,
    Last7Days,
    Last30Days,
    /// Back to the default window
    Reset,
}

impl Preset {
    /// How far back the window reaches
    pub fn duration(&self) -> Duration {
        match self {
            Preset::Last24Hours | Preset::Reset => Duration::hours(24),
            Preset::Last7Days => Duration::days(7),
            Preset::Last30Days => Duration::days(30),
        }
    }

    /// Window anchored at `now`
    pub fn window<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> TimeWindow {
        TimeWindow::last(self.duration(), now)
    }

    /// Button label
    pub fn label(&self) -> &'static str {
        match self {
            Preset::Last24Hours => "24 hours",
            Preset::Last7Days => "7 days",
            Preset::Last30Days => "30 days",
            Preset::Reset => "Reset",
        }
    }
}

impl FromStr for Preset {
    type Err = PresetParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "24h" | "1d" | "day" => Ok(Preset::Last24Hours),
            "7d" | "1w" | "week" => Ok(Preset::Last7Days),
            "30d" | "month" => Ok(Preset::Last30Days),
            "reset" | "default" => Ok(Preset::Reset),
            other => Err(PresetParseError(other.to_string())),
        }
    }
}

/// Raw contents of the two date-time inputs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WindowInputs {
    pub start: String,
    pub end: String,
}

impl WindowInputs {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    /// Inputs showing `window` (seconds are dropped, as the fields only hold minutes)
    pub fn from_window(window: &TimeWindow) -> Self {
        Self {
            start: format_input(window.start),
            end: format_input(window.end),
        }
    }

    /// Validate both inputs and build the window they describe.
    ///
    /// Bound order is not checked; the API answers an inverted window with
    /// an empty result.
    pub fn to_window(&self) -> Result<TimeWindow, WindowError> {
        if self.start.trim().is_empty() || self.end.trim().is_empty() {
            return Err(WindowError::MissingBound);
        }

        Ok(TimeWindow {
            start: parse_input(&self.start)?,
            end: parse_input(&self.end)?,
        })
    }
}

/// Format a date-time for an input field
pub fn format_input(time: NaiveDateTime) -> String {
    time.format(INPUT_FORMAT).to_string()
}

/// Format a date-time for a query parameter
pub fn format_query(time: NaiveDateTime) -> String {
    time.format(QUERY_FORMAT).to_string()
}

/// Parse an input field; seconds default to `:00` when omitted
pub fn parse_input(raw: &str) -> Result<NaiveDateTime, WindowError> {
    let raw = raw.trim();

    NaiveDateTime::parse_from_str(raw, QUERY_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(&format!("{raw}:00"), QUERY_FORMAT))
        .map_err(|_| WindowError::InvalidInput(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, LocalResult, NaiveDate, Utc};

    fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, s)
            .unwrap()
    }

    fn utc(time: NaiveDateTime) -> DateTime<Utc> {
        Utc.from_utc_datetime(&time)
    }

    /// US Eastern time with the 2024 daylight saving rules
    #[derive(Debug, Clone, Copy)]
    struct Eastern2024;

    impl Eastern2024 {
        fn standard() -> FixedOffset {
            FixedOffset::west_opt(5 * 3600).unwrap()
        }

        fn daylight() -> FixedOffset {
            FixedOffset::west_opt(4 * 3600).unwrap()
        }

        fn offset_at(utc: &NaiveDateTime) -> FixedOffset {
            let begins = at(2024, 3, 10, 7, 0, 0);
            let ends = at(2024, 11, 3, 6, 0, 0);
            if *utc >= begins && *utc < ends {
                Self::daylight()
            } else {
                Self::standard()
            }
        }
    }

    impl TimeZone for Eastern2024 {
        type Offset = FixedOffset;

        fn from_offset(_offset: &FixedOffset) -> Self {
            Eastern2024
        }

        fn offset_from_local_date(&self, local: &NaiveDate) -> LocalResult<FixedOffset> {
            self.offset_from_local_datetime(&local.and_hms_opt(0, 0, 0).unwrap())
        }

        fn offset_from_local_datetime(&self, local: &NaiveDateTime) -> LocalResult<FixedOffset> {
            let candidates: Vec<FixedOffset> = [Self::daylight(), Self::standard()]
                .into_iter()
                .filter(|offset| {
                    let utc = *local - Duration::seconds(offset.local_minus_utc() as i64);
                    Self::offset_at(&utc) == *offset
                })
                .collect();

            match candidates.as_slice() {
                [] => LocalResult::None,
                [single] => LocalResult::Single(*single),
                [earliest, latest, ..] => LocalResult::Ambiguous(*earliest, *latest),
            }
        }

        fn offset_from_utc_date(&self, utc: &NaiveDate) -> FixedOffset {
            Self::offset_at(&utc.and_hms_opt(0, 0, 0).unwrap())
        }

        fn offset_from_utc_datetime(&self, utc: &NaiveDateTime) -> FixedOffset {
            Self::offset_at(utc)
        }
    }

    fn eastern(time: NaiveDateTime) -> DateTime<Eastern2024> {
        Eastern2024.from_local_datetime(&time).single().unwrap()
    }

    #[test]
    fn test_default_window_is_24_hours() {
        let now = utc(at(2024, 5, 1, 12, 0, 0));
        let window = TimeWindow::default_at(&now);
        assert_eq!(window.end, at(2024, 5, 1, 12, 0, 0));
        assert_eq!(window.start, at(2024, 4, 30, 12, 0, 0));
        assert_eq!(window.duration(), Duration::hours(24));
    }

    #[test]
    fn test_preset_windows() {
        let now = utc(at(2024, 5, 31, 8, 30, 0));
        assert_eq!(Preset::Last7Days.window(&now).start, at(2024, 5, 24, 8, 30, 0));
        assert_eq!(Preset::Last30Days.window(&now).start, at(2024, 5, 1, 8, 30, 0));
        assert_eq!(Preset::Reset.window(&now), TimeWindow::default_at(&now));
    }

    #[test]
    fn test_presets_span_absolute_time_across_spring_forward() {
        let now = eastern(at(2024, 3, 12, 12, 0, 0));

        let week = Preset::Last7Days.window(&now);
        assert_eq!(week.end, at(2024, 3, 12, 12, 0, 0));
        assert_eq!(week.start, at(2024, 3, 5, 11, 0, 0));
        assert_eq!(
            eastern(week.end).signed_duration_since(eastern(week.start)),
            Duration::hours(168)
        );

        let day = Preset::Last24Hours.window(&eastern(at(2024, 3, 10, 12, 0, 0)));
        assert_eq!(day.start, at(2024, 3, 9, 11, 0, 0));
    }

    #[test]
    fn test_presets_span_absolute_time_across_fall_back() {
        let now = eastern(at(2024, 11, 3, 12, 0, 0));

        let day = TimeWindow::default_at(&now);
        assert_eq!(day.start, at(2024, 11, 2, 13, 0, 0));

        let month = Preset::Last30Days.window(&now);
        assert_eq!(month.start, at(2024, 10, 4, 13, 0, 0));
    }

    #[test]
    fn test_preset_from_str() {
        assert_eq!("7d".parse::<Preset>().unwrap(), Preset::Last7Days);
        assert_eq!("24H".parse::<Preset>().unwrap(), Preset::Last24Hours);
        assert_eq!("reset".parse::<Preset>().unwrap(), Preset::Reset);
        assert_eq!(
            "1y".parse::<Preset>(),
            Err(PresetParseError("1y".to_string()))
        );
    }

    #[test]
    fn test_input_formatting_zero_pads() {
        let time = at(2024, 1, 2, 3, 4, 5);
        assert_eq!(format_input(time), "2024-01-02T03:04");
        assert_eq!(format_query(time), "2024-01-02T03:04:05");
    }

    #[test]
    fn test_parse_input_appends_seconds() {
        assert_eq!(parse_input("2024-01-02T03:04").unwrap(), at(2024, 1, 2, 3, 4, 0));
        assert_eq!(
            parse_input("2024-01-02T03:04:59").unwrap(),
            at(2024, 1, 2, 3, 4, 59)
        );
        assert!(matches!(
            parse_input("02/01/2024"),
            Err(WindowError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_inputs_require_both_bounds() {
        let inputs = WindowInputs::new("", "2024-01-02T03:04");
        assert_eq!(inputs.to_window(), Err(WindowError::MissingBound));

        let inputs = WindowInputs::new("2024-01-02T03:04", "  ");
        assert_eq!(inputs.to_window(), Err(WindowError::MissingBound));
    }

    #[test]
    fn test_inputs_round_trip_at_minute_precision() {
        let window = TimeWindow::new(at(2024, 1, 1, 0, 0, 59), at(2024, 1, 2, 23, 59, 1));
        let inputs = WindowInputs::from_window(&window);
        let parsed = inputs.to_window().unwrap();

        assert_eq!(parsed.start, at(2024, 1, 1, 0, 0, 0));
        assert_eq!(parsed.end, at(2024, 1, 2, 23, 59, 0));
    }
}
