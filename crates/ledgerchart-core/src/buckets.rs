//! Sample dates for chart series

use chrono::{Days, Months, NaiveDate};
use ledgerchart_config::Interval;

use crate::error::{CoreError, CoreResult};

/// Date `steps` intervals after `start`, or `None` past chrono's range.
///
/// Months are added to the original start so the day of month is clamped
/// per step without drifting (Jan 31, Feb 28, Mar 31).
fn advance(start: NaiveDate, interval: Interval, steps: u32) -> Option<NaiveDate> {
    match interval {
        Interval::Day => start.checked_add_days(Days::new(steps as u64)),
        Interval::Week => start.checked_add_days(Days::new(7 * steps as u64)),
        Interval::Month => start.checked_add_months(Months::new(steps)),
    }
}

/// Generate bucket dates from `start` stepping by `interval` while `<= end`
pub fn make_bucket_dates(
    interval: Interval,
    start: NaiveDate,
    end: NaiveDate,
) -> CoreResult<Vec<NaiveDate>> {
    if start > end {
        return Err(CoreError::InvalidRange {
            start: start.to_string(),
            end: end.to_string(),
        });
    }

    let mut buckets = Vec::new();
    let mut steps = 0;
    while let Some(bucket) = advance(start, interval, steps) {
        if bucket > end {
            break;
        }
        buckets.push(bucket);
        steps += 1;
    }

    Ok(buckets)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn dates(values: &[&str]) -> Vec<NaiveDate> {
        values.iter().map(|d| date(d)).collect()
    }

    fn buckets(interval: Interval, start: &str, end: &str) -> Vec<NaiveDate> {
        make_bucket_dates(interval, date(start), date(end)).unwrap()
    }

    #[test]
    fn test_daily_buckets() {
        assert_eq!(
            buckets(Interval::Day, "2021-12-14", "2021-12-17"),
            dates(&["2021-12-14", "2021-12-15", "2021-12-16", "2021-12-17"])
        );
    }

    #[test]
    fn test_weekly_buckets() {
        assert_eq!(
            buckets(Interval::Week, "2021-12-01", "2021-12-29"),
            dates(&["2021-12-01", "2021-12-08", "2021-12-15", "2021-12-22", "2021-12-29"])
        );
        assert_eq!(
            buckets(Interval::Week, "2021-12-01", "2021-12-07"),
            dates(&["2021-12-01"])
        );
    }

    #[test]
    fn test_monthly_buckets_clamp_day() {
        assert_eq!(
            buckets(Interval::Month, "2024-01-31", "2024-05-30"),
            dates(&["2024-01-31", "2024-02-29", "2024-03-31", "2024-04-30"])
        );
    }

    #[test]
    fn test_monthly_buckets_across_year() {
        assert_eq!(
            buckets(Interval::Month, "2021-11-01", "2022-02-01"),
            dates(&["2021-11-01", "2021-12-01", "2022-01-01", "2022-02-01"])
        );
    }

    #[test]
    fn test_single_day_range() {
        assert_eq!(
            buckets(Interval::Month, "2021-12-14", "2021-12-14"),
            dates(&["2021-12-14"])
        );
    }

    #[test]
    fn test_inverted_range() {
        let result = make_bucket_dates(Interval::Day, date("2021-12-14"), date("2021-12-13"));
        assert!(matches!(result, Err(CoreError::InvalidRange { .. })));
    }
}
