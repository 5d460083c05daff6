use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::domain::RawAggregateRow;
use crate::errors::ReportError;

/// Report bucket granularity.
///
/// Serde rejects any name outside this set at the boundary, so an
/// unknown granularity never reaches the engine.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Interval {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl Interval {
    /// Ordered, de-duplicated bucket keys covering `[start, end]`
    /// inclusive.
    ///
    /// `start == end` yields exactly one bucket; an inverted range
    /// yields none.
    pub fn range_inclusive(self, start: NaiveDate, end: NaiveDate, week_start: Weekday) -> Vec<String> {
        if start > end {
            return Vec::new();
        }
        match self {
            Interval::Daily => {
                let mut keys = Vec::new();
                let mut cursor = start;
                while cursor <= end {
                    keys.push(day_key(cursor));
                    cursor = cursor + Duration::days(1);
                }
                keys
            }
            Interval::Weekly => {
                let mut keys = Vec::new();
                let mut cursor = start_of_week(start, week_start);
                let last = start_of_week(end, week_start);
                while cursor <= last {
                    keys.push(day_key(cursor));
                    cursor = cursor + Duration::days(7);
                }
                keys
            }
            Interval::Monthly => {
                let mut keys = Vec::new();
                let mut cursor = (start.year(), start.month());
                let last = (end.year(), end.month());
                while cursor <= last {
                    keys.push(format!("{:04}-{:02}", cursor.0, cursor.1));
                    cursor = if cursor.1 == 12 {
                        (cursor.0 + 1, 1)
                    } else {
                        (cursor.0, cursor.1 + 1)
                    };
                }
                keys
            }
            Interval::Yearly => (start.year()..=end.year())
                .map(|year| format!("{year:04}"))
                .collect(),
        }
    }

    /// The bucket key a calendar date falls into.
    pub fn bucket_key(self, date: NaiveDate, week_start: Weekday) -> String {
        match self {
            Interval::Daily => day_key(date),
            Interval::Weekly => day_key(start_of_week(date, week_start)),
            Interval::Monthly => format!("{:04}-{:02}", date.year(), date.month()),
            Interval::Yearly => format!("{:04}", date.year()),
        }
    }

    /// Rebuckets weekly rows so their dates join the generated key
    /// sequence by equality. Other granularities already share the
    /// canonical bucket representation with the query layer.
    pub fn remap_row_dates(
        self,
        mut rows: Vec<RawAggregateRow>,
        week_start: Weekday,
    ) -> Result<Vec<RawAggregateRow>, ReportError> {
        if self != Interval::Weekly {
            return Ok(rows);
        }
        for row in rows.iter_mut() {
            let date = NaiveDate::parse_from_str(&row.date, "%Y-%m-%d").map_err(|err| {
                ReportError::Source(format!("unparseable row date '{}': {err}", row.date))
            })?;
            row.date = self.bucket_key(date, week_start);
        }
        Ok(rows)
    }
}

fn day_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Shifts a date back to the start of its week.
fn start_of_week(date: NaiveDate, week_start: Weekday) -> NaiveDate {
    let offset = (7 + date.weekday().num_days_from_sunday() as i64
        - week_start.num_days_from_sunday() as i64)
        % 7;
    date - Duration::days(offset)
}

/// Converts the 0-6 Sunday-based preference index carried by report
/// definitions into a concrete weekday, rejecting out-of-range values
/// eagerly.
pub fn week_start_from_index(index: u8) -> Result<Weekday, ReportError> {
    match index {
        0 => Ok(Weekday::Sun),
        1 => Ok(Weekday::Mon),
        2 => Ok(Weekday::Tue),
        3 => Ok(Weekday::Wed),
        4 => Ok(Weekday::Thu),
        5 => Ok(Weekday::Fri),
        6 => Ok(Weekday::Sat),
        other => Err(ReportError::InvalidConfig(format!(
            "first day of week index out of range: {other}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn monthly_range_covers_partial_months_inclusive() {
        let keys = Interval::Monthly.range_inclusive(date(2024, 1, 15), date(2024, 3, 10), Weekday::Sun);
        assert_eq!(keys, vec!["2024-01", "2024-02", "2024-03"]);
    }

    #[test]
    fn monthly_range_crosses_year_boundary() {
        let keys = Interval::Monthly.range_inclusive(date(2023, 11, 1), date(2024, 2, 1), Weekday::Sun);
        assert_eq!(keys, vec!["2023-11", "2023-12", "2024-01", "2024-02"]);
    }

    #[test]
    fn equal_start_and_end_yield_one_bucket() {
        let day = date(2024, 6, 5);
        for interval in [Interval::Daily, Interval::Weekly, Interval::Monthly, Interval::Yearly] {
            let keys = interval.range_inclusive(day, day, Weekday::Mon);
            assert_eq!(keys.len(), 1, "{interval:?}");
        }
    }

    #[test]
    fn inverted_range_yields_no_buckets() {
        let keys = Interval::Daily.range_inclusive(date(2024, 3, 2), date(2024, 3, 1), Weekday::Sun);
        assert!(keys.is_empty());
    }

    #[test]
    fn weekly_buckets_share_the_week_start_key() {
        // 2024-06-02 is a Sunday, 2024-06-03 the following Monday; with
        // Monday as week start the Sunday belongs to the prior week.
        let sunday = date(2024, 6, 2);
        let monday = date(2024, 6, 3);
        assert_eq!(Interval::Weekly.bucket_key(sunday, Weekday::Mon), "2024-05-27");
        assert_eq!(Interval::Weekly.bucket_key(monday, Weekday::Mon), "2024-06-03");

        // Sunday 2024-06-09 and Monday 2024-06-03 share a Monday-started
        // week and must resolve to the same generated bucket.
        let same_week_sunday = date(2024, 6, 9);
        let keys = Interval::Weekly.range_inclusive(monday, same_week_sunday, Weekday::Mon);
        assert_eq!(keys, vec!["2024-06-03"]);
        assert_eq!(
            Interval::Weekly.bucket_key(same_week_sunday, Weekday::Mon),
            keys[0]
        );
    }

    #[test]
    fn yearly_range_uses_year_keys() {
        let keys = Interval::Yearly.range_inclusive(date(2022, 7, 1), date(2024, 1, 1), Weekday::Sun);
        assert_eq!(keys, vec!["2022", "2023", "2024"]);
    }

    #[test]
    fn week_start_index_rejects_out_of_range() {
        assert!(week_start_from_index(6).is_ok());
        assert!(matches!(
            week_start_from_index(7),
            Err(ReportError::InvalidConfig(_))
        ));
    }
}
