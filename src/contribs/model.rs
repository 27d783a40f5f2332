use crate::error::{ContribsError, Result};
use chrono::NaiveDate;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Activity intensity for a single day, 0 (none) through 4 (most).
///
/// Only constructible through `TryFrom<u8>`, so every `Level` in a record is
/// a valid index into the density ramp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(try_from = "u8")]
pub struct Level(u8);

impl Level {
    pub const MAX: u8 = 4;
    pub const COUNT: usize = Self::MAX as usize + 1;

    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// All levels in ascending order.
    pub fn all() -> impl Iterator<Item = Level> {
        (0..=Self::MAX).map(Level)
    }
}

impl TryFrom<u8> for Level {
    type Error = String;

    fn try_from(value: u8) -> std::result::Result<Self, Self::Error> {
        if value <= Self::MAX {
            Ok(Level(value))
        } else {
            Err(format!(
                "contribution level {} is outside 0..={}",
                value,
                Self::MAX
            ))
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Day of the week, 0 = Sunday through 6 = Saturday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(try_from = "u8")]
pub struct Weekday(u8);

impl Weekday {
    pub const COUNT: usize = 7;

    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub fn label(self) -> &'static str {
        WEEKDAY_LABELS[self.index()]
    }

    /// Sunday first, matching the row order of the grid.
    pub fn all() -> impl Iterator<Item = Weekday> {
        (0..Self::COUNT as u8).map(Weekday)
    }
}

impl TryFrom<u8> for Weekday {
    type Error = String;

    fn try_from(value: u8) -> std::result::Result<Self, Self::Error> {
        if (value as usize) < Self::COUNT {
            Ok(Weekday(value))
        } else {
            Err(format!("weekday {} is outside 0..=6", value))
        }
    }
}

/// A calendar month, parsed from `YYYY-MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(try_from = "String")]
pub struct YearMonth(NaiveDate);

impl YearMonth {
    /// Three-letter English month name, e.g. `Jan`.
    pub fn abbrev(&self) -> String {
        self.0.format("%b").to_string()
    }
}

impl FromStr for YearMonth {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        NaiveDate::parse_from_str(&format!("{}-01", s.trim()), "%Y-%m-%d")
            .map(YearMonth)
            .map_err(|e| format!("invalid month '{}': {}", s, e))
    }
}

impl TryFrom<String> for YearMonth {
    type Error = String;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Day {
    pub weekday: Weekday,
    pub level: Level,
}

/// One grid column. Days are in chronological order and a partial week
/// (first or last of the range) simply has fewer entries.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Week {
    #[serde(rename = "contribution_days")]
    pub days: Vec<Day>,
}

impl Week {
    pub fn day(&self, weekday: Weekday) -> Option<&Day> {
        self.days.iter().find(|d| d.weekday == weekday)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MonthInfo {
    pub month: YearMonth,
    /// Number of week columns that fall, even partially, in this month.
    pub total_weeks: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ContributionRecord {
    pub from: NaiveDate,
    pub to: NaiveDate,
    #[serde(rename = "total_contributions")]
    pub total: u64,
    pub weeks: Vec<Week>,
    pub months: Vec<MonthInfo>,
}

impl ContributionRecord {
    /// Deserializes and validates a record from an upstream JSON body.
    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        let record: ContributionRecord = serde_json::from_value(value)?;
        record.validate()?;
        Ok(record)
    }

    /// Checks the invariants serde cannot express: one entry per weekday
    /// within a week, and month spans that account for every week.
    pub fn validate(&self) -> Result<()> {
        for (i, week) in self.weeks.iter().enumerate() {
            let mut seen = [false; Weekday::COUNT];
            for day in &week.days {
                let slot = &mut seen[day.weekday.index()];
                if *slot {
                    return Err(ContribsError::MalformedResponse(format!(
                        "week {} lists {} more than once",
                        i,
                        day.weekday.label()
                    )));
                }
                *slot = true;
            }
        }

        if self.weeks.is_empty() {
            return Ok(());
        }

        let spanned: usize = self.months.iter().map(|m| m.total_weeks).sum();
        if spanned != self.weeks.len() {
            return Err(ContribsError::MalformedResponse(format!(
                "months span {} weeks but the record has {}",
                spanned,
                self.weeks.len()
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record_json() -> serde_json::Value {
        json!({
            "from": "2024-01-01",
            "to": "2024-01-14",
            "total_contributions": 7,
            "weeks": [
                { "contribution_days": [
                    { "weekday": 1, "level": 0, "date": "2024-01-01", "count": 0 },
                    { "weekday": 2, "level": 4, "date": "2024-01-02", "count": 7 }
                ]},
                { "contribution_days": [] }
            ],
            "months": [ { "month": "2024-01", "total_weeks": 2 } ]
        })
    }

    #[test]
    fn test_parse_valid_record() {
        let record = ContributionRecord::from_value(record_json()).unwrap();
        assert_eq!(record.total, 7);
        assert_eq!(record.from, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(record.weeks.len(), 2);
        assert_eq!(record.weeks[0].days[1].level.index(), 4);
        assert_eq!(record.months[0].month.abbrev(), "Jan");
    }

    #[test]
    fn test_level_bounds() {
        assert!(Level::try_from(0).is_ok());
        assert!(Level::try_from(4).is_ok());
        assert!(Level::try_from(5).is_err());
        assert_eq!(Level::all().count(), Level::COUNT);
    }

    #[test]
    fn test_out_of_range_level_is_malformed() {
        let mut body = record_json();
        body["weeks"][0]["contribution_days"][0]["level"] = json!(5);
        let err = ContributionRecord::from_value(body).unwrap_err();
        assert!(matches!(err, ContribsError::MalformedResponse(_)));
    }

    #[test]
    fn test_out_of_range_weekday_is_malformed() {
        let mut body = record_json();
        body["weeks"][0]["contribution_days"][0]["weekday"] = json!(7);
        assert!(ContributionRecord::from_value(body).is_err());
    }

    #[test]
    fn test_missing_field_is_malformed() {
        let mut body = record_json();
        body.as_object_mut().unwrap().remove("total_contributions");
        let err = ContributionRecord::from_value(body).unwrap_err();
        assert!(matches!(err, ContribsError::MalformedResponse(_)));
    }

    #[test]
    fn test_duplicate_weekday_is_malformed() {
        let mut body = record_json();
        body["weeks"][0]["contribution_days"][1]["weekday"] = json!(1);
        let err = ContributionRecord::from_value(body).unwrap_err();
        assert!(err.to_string().contains("Mon more than once"));
    }

    #[test]
    fn test_month_span_mismatch_is_malformed() {
        let mut body = record_json();
        body["months"][0]["total_weeks"] = json!(3);
        let err = ContributionRecord::from_value(body).unwrap_err();
        assert!(err.to_string().contains("span 3 weeks"));
    }

    #[test]
    fn test_empty_weeks_skip_span_check() {
        let mut body = record_json();
        body["weeks"] = json!([]);
        let record = ContributionRecord::from_value(body).unwrap();
        assert!(record.weeks.is_empty());
    }

    #[test]
    fn test_year_month_parse() {
        let ym: YearMonth = "2023-11".parse().unwrap();
        assert_eq!(ym.abbrev(), "Nov");
        assert_eq!(ym.to_string(), "2023-11");
        assert!("2023-13".parse::<YearMonth>().is_err());
    }

    #[test]
    fn test_week_day_lookup() {
        let week = Week {
            days: vec![Day {
                weekday: Weekday::try_from(3).unwrap(),
                level: Level::try_from(2).unwrap(),
            }],
        };
        let wed = Weekday::try_from(3).unwrap();
        let thu = Weekday::try_from(4).unwrap();
        assert_eq!(week.day(wed).map(|d| d.level.index()), Some(2));
        assert!(week.day(thu).is_none());
        assert_eq!(wed.label(), "Wed");
    }
}
