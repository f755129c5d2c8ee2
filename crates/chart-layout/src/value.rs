// File: crates/chart-layout/src/value.rs
// Summary: Raw data values (numbers, categorical strings, dates) and collection predicates.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

/// A raw value as supplied by a data series or an axis declaration.
#[derive(Clone, Debug, PartialEq)]
pub enum Datum {
    Number(f64),
    Text(String),
    Date(DateTime<Utc>),
}

impl Datum {
    /// Numeric position of the value; dates map to epoch milliseconds.
    /// Text has no position of its own (see `StringMap`).
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Datum::Number(v) => Some(*v),
            Datum::Date(d) => Some(d.timestamp_millis() as f64),
            Datum::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Datum::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn is_text(&self) -> bool { matches!(self, Datum::Text(_)) }

    pub fn is_date(&self) -> bool { matches!(self, Datum::Date(_)) }

    /// Parse a raw cell: number first, then RFC 3339 or `YYYY-MM-DD` dates, else text.
    pub fn parse(raw: &str) -> Self {
        let s = raw.trim();
        if let Ok(v) = s.parse::<f64>() {
            if v.is_finite() {
                return Datum::Number(v);
            }
        }
        if let Ok(d) = DateTime::parse_from_rfc3339(s) {
            return Datum::Date(d.with_timezone(&Utc));
        }
        if let Some(naive) = NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .ok()
            .and_then(|d| d.and_hms_opt(0, 0, 0))
        {
            return Datum::Date(Utc.from_utc_datetime(&naive));
        }
        Datum::Text(s.to_string())
    }
}

impl From<f64> for Datum {
    fn from(v: f64) -> Self { Datum::Number(v) }
}

impl From<i32> for Datum {
    fn from(v: i32) -> Self { Datum::Number(v as f64) }
}

impl From<&str> for Datum {
    fn from(s: &str) -> Self { Datum::Text(s.to_string()) }
}

impl From<String> for Datum {
    fn from(s: String) -> Self { Datum::Text(s) }
}

impl From<DateTime<Utc>> for Datum {
    fn from(d: DateTime<Utc>) -> Self { Datum::Date(d) }
}

/// True when the collection is non-empty and every entry is text.
pub fn contains_only_strings(values: &[Datum]) -> bool {
    !values.is_empty() && values.iter().all(Datum::is_text)
}

pub fn contains_strings(values: &[Datum]) -> bool {
    values.iter().any(Datum::is_text)
}

pub fn contains_dates(values: &[Datum]) -> bool {
    values.iter().any(Datum::is_date)
}
