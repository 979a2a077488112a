//! Display formatting
//!
//! Temperatures always show two decimals. Dates use a day-first layout
//! (`16.10.2026, 14:03:05`); chart labels show time of day only.

use crate::model::Reading;

/// Shown in place of an absent value
pub const PLACEHOLDER: &str = "--";

/// Full date and time of a reading (table rows, "updated" line)
pub const DATE_TIME_FORMAT: &str = "%d.%m.%Y, %H:%M:%S";

/// Time of day of a reading (chart labels)
pub const TIME_OF_DAY_FORMAT: &str = "%H:%M:%S";

/// Temperature unit suffix
pub const UNIT: &str = "°C";

/// `21.5` → `"21.50"`
pub fn temperature(value: f64) -> String {
    format!("{:.2}", value)
}

/// `21.5` → `"21.50 °C"`
pub fn temperature_with_unit(value: f64) -> String {
    format!("{:.2} {}", value, UNIT)
}

/// Two decimals, or the placeholder when absent
pub fn optional_temperature(value: Option<f64>) -> String {
    value
        .map(temperature)
        .unwrap_or_else(|| PLACEHOLDER.to_string())
}

/// Date and time of a reading; unparseable timestamps are shown verbatim
pub fn date_time(reading: &Reading) -> String {
    reading
        .local_time()
        .map(|t| t.format(DATE_TIME_FORMAT).to_string())
        .unwrap_or_else(|| reading.timestamp.clone())
}

/// Time of day of a reading; unparseable timestamps are shown verbatim
pub fn time_of_day(reading: &Reading) -> String {
    reading
        .local_time()
        .map(|t| t.format(TIME_OF_DAY_FORMAT).to_string())
        .unwrap_or_else(|| reading.timestamp.clone())
}

/// "Updated: ..." line under the current temperature
pub fn updated_label(reading: &Reading) -> String {
    format!("Updated: {}", date_time(reading))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temperature_formatting() {
        assert_eq!(temperature(21.5), "21.50");
        assert_eq!(temperature(19.999), "20.00");
        assert_eq!(temperature_with_unit(7.0), "7.00 °C");
    }

    #[test]
    fn test_optional_temperature() {
        assert_eq!(optional_temperature(Some(0.0)), "0.00");
        assert_eq!(optional_temperature(None), "--");
    }

    #[test]
    fn test_reading_dates() {
        let reading = Reading::new("2024-01-02T03:04:05", 20.0);
        assert_eq!(date_time(&reading), "02.01.2024, 03:04:05");
        assert_eq!(time_of_day(&reading), "03:04:05");
        assert_eq!(updated_label(&reading), "Updated: 02.01.2024, 03:04:05");
    }

    #[test]
    fn test_unparseable_timestamp_shown_verbatim() {
        let reading = Reading::new("not a time", 20.0);
        assert_eq!(date_time(&reading), "not a time");
        assert_eq!(time_of_day(&reading), "not a time");
    }
}
