use chrono::{Duration, NaiveDate};

/// A date-only value carried as whole and fractional days since 1970-01-01.
///
/// The engine treats this kind as opaque and persists it as a float, exactly
/// like [`Value::Float`](crate::Value::Float). Calendar and timezone
/// adjustments are the caller's concern.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DayCount(f64);

impl DayCount {
    #[must_use]
    pub const fn new(days: f64) -> Self {
        Self(days)
    }

    /// Day count of a calendar date, at midnight.
    #[must_use]
    pub fn from_date(date: NaiveDate) -> Self {
        // NaiveDate::default() is 1970-01-01.
        let days = date.signed_duration_since(NaiveDate::default()).num_days();
        Self(days as f64)
    }

    /// The raw day count that gets bound and persisted.
    #[must_use]
    pub const fn days(self) -> f64 {
        self.0
    }

    /// The calendar date, truncating any fractional day.
    #[must_use]
    pub fn date(self) -> NaiveDate {
        let whole = self.0.floor() as i64;
        NaiveDate::default() + Duration::days(whole)
    }
}

impl From<NaiveDate> for DayCount {
    fn from(date: NaiveDate) -> Self {
        Self::from_date(date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_a_calendar_date() {
        let date = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        let day = DayCount::from_date(date);
        assert_eq!(day.date(), date);
    }

    #[test]
    fn epoch_is_day_zero() {
        let epoch = NaiveDate::from_ymd_opt(1970, 1, 1).unwrap();
        assert_eq!(DayCount::from_date(epoch).days(), 0.0);
    }

    #[test]
    fn fractional_days_truncate_to_the_date() {
        let day = DayCount::new(19_782.75);
        assert_eq!(day.date(), DayCount::new(19_782.0).date());
    }
}
