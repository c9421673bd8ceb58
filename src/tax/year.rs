use super::error::TaxError;
use chrono::{Datelike, NaiveDate};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Indian financial year (runs 1 April to 31 March).
///
/// Only the years with published slab schedules are representable, so an
/// unmapped year can never reach the calculators.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
pub enum FiscalYear {
    #[serde(rename = "2024-25")]
    Fy2024_25,
    #[serde(rename = "2025-26")]
    Fy2025_26,
}

impl FiscalYear {
    pub const ALL: [FiscalYear; 2] = [FiscalYear::Fy2024_25, FiscalYear::Fy2025_26];

    /// Calendar year in which the financial year starts
    pub fn start_year(&self) -> i32 {
        match self {
            FiscalYear::Fy2024_25 => 2024,
            FiscalYear::Fy2025_26 => 2025,
        }
    }

    /// Financial year containing the given date
    pub fn from_date(date: NaiveDate) -> Result<Self, TaxError> {
        let year = date.year();
        // Before 1 April the date still belongs to the year that started last April
        let start_year = if date.month() < 4 { year - 1 } else { year };
        Self::ALL
            .into_iter()
            .find(|fy| fy.start_year() == start_year)
            .ok_or_else(|| {
                TaxError::InvalidConfiguration(format!(
                    "no tax schedule for financial year {}-{:02} (date {})",
                    start_year,
                    (start_year + 1) % 100,
                    date
                ))
            })
    }

    /// First day of the financial year (1 April)
    pub fn start_date(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.start_year(), 4, 1).unwrap_or(NaiveDate::MIN)
    }

    /// Last day of the financial year (31 March)
    pub fn end_date(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.start_year() + 1, 3, 31).unwrap_or(NaiveDate::MAX)
    }

    /// Assessment year in which income of this financial year is assessed, e.g. "2025-26"
    pub fn assessment_year(&self) -> String {
        let ay = self.start_year() + 1;
        format!("{}-{:02}", ay, (ay + 1) % 100)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FiscalYear::Fy2024_25 => "2024-25",
            FiscalYear::Fy2025_26 => "2025-26",
        }
    }
}

impl fmt::Display for FiscalYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FiscalYear {
    type Err = TaxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|fy| fy.as_str() == s)
            .ok_or_else(|| {
                TaxError::InvalidConfiguration(format!(
                    "unsupported fiscal year '{}' (expected one of: 2024-25, 2025-26)",
                    s
                ))
            })
    }
}

/// Tax regime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Regime {
    Old,
    New,
}

impl Regime {
    /// Sheet name used in exported statements
    pub fn sheet_name(&self) -> &'static str {
        match self {
            Regime::Old => "Old Regime",
            Regime::New => "New Regime",
        }
    }
}

impl fmt::Display for Regime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Regime::Old => f.write_str("Old"),
            Regime::New => f.write_str("New"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn parse_supported_years() {
        assert_eq!("2024-25".parse::<FiscalYear>(), Ok(FiscalYear::Fy2024_25));
        assert_eq!(" 2025-26 ".parse::<FiscalYear>(), Ok(FiscalYear::Fy2025_26));
    }

    #[test]
    fn unsupported_year_is_invalid_configuration() {
        for s in ["2023-24", "2026-27", "2025", ""] {
            assert!(matches!(
                s.parse::<FiscalYear>(),
                Err(TaxError::InvalidConfiguration(_))
            ));
        }
    }

    #[test]
    fn display_round_trips() {
        for fy in FiscalYear::ALL {
            assert_eq!(fy.to_string().parse::<FiscalYear>(), Ok(fy));
        }
    }

    #[test]
    fn from_date_on_april_1() {
        assert_eq!(FiscalYear::from_date(date(2024, 4, 1)), Ok(FiscalYear::Fy2024_25));
    }

    #[test]
    fn from_date_on_march_31() {
        assert_eq!(FiscalYear::from_date(date(2025, 3, 31)), Ok(FiscalYear::Fy2024_25));
        assert_eq!(FiscalYear::from_date(date(2026, 3, 31)), Ok(FiscalYear::Fy2025_26));
    }

    #[test]
    fn from_date_outside_modeled_years() {
        assert!(FiscalYear::from_date(date(2024, 3, 31)).is_err());
        assert!(FiscalYear::from_date(date(2026, 4, 1)).is_err());
    }

    #[test]
    fn start_end_dates() {
        let fy = FiscalYear::Fy2025_26;
        assert_eq!(fy.start_date(), date(2025, 4, 1));
        assert_eq!(fy.end_date(), date(2026, 3, 31));
    }

    #[test]
    fn assessment_years() {
        assert_eq!(FiscalYear::Fy2024_25.assessment_year(), "2025-26");
        assert_eq!(FiscalYear::Fy2025_26.assessment_year(), "2026-27");
    }

    #[test]
    fn serde_uses_year_labels() {
        let json = serde_json::to_string(&FiscalYear::Fy2024_25).unwrap();
        assert_eq!(json, "\"2024-25\"");
        let fy: FiscalYear = serde_json::from_str("\"2025-26\"").unwrap();
        assert_eq!(fy, FiscalYear::Fy2025_26);
    }


    #[test]
    fn sheet_names() {
        assert_eq!(Regime::Old.sheet_name(), "Old Regime");
        assert_eq!(Regime::New.sheet_name(), "New Regime");
    }
}
