//! Dataset records and their text rendering.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use thiserror::Error;

use super::source::FetchError;

/// Placeholder for fields a record does not carry.
const MISSING: &str = "N/A";

/// Number of example pairs shown in the dataset summary.
const SUMMARY_EXAMPLES: usize = 3;

/// One entry of the CostofEquity dataset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SecurityRecord {
    #[serde(default, deserialize_with = "lenient_string")]
    pub isin: Option<String>,

    /// As-of date, `YYYY-MM-DD`.
    #[serde(default, deserialize_with = "lenient_string")]
    pub date: Option<String>,

    /// Market value in millions.
    #[serde(rename = "MV", default, deserialize_with = "lenient_number")]
    pub mv: Option<f64>,

    #[serde(default, deserialize_with = "lenient_number")]
    pub ddm_3: Option<f64>,

    #[serde(default, deserialize_with = "lenient_number")]
    pub rim_3: Option<f64>,

    /// Weighted blend of `ddm_3` and `rim_3`.
    #[serde(default, deserialize_with = "lenient_number")]
    pub gewichtet_3: Option<f64>,
}

/// Keeps strings; any other value becomes `None`.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

/// Accepts numbers, numeric strings and null. Anything else becomes `None`.
fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}

/// Problems with a successfully fetched body.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DataError {
    #[error("The API returned no data.")]
    Empty,

    #[error("The API returned malformed data: {0}")]
    Malformed(String),
}

/// Interpret a response body as a non-empty list of records.
pub fn parse_records(body: Value) -> Result<Vec<SecurityRecord>, DataError> {
    match body {
        Value::Null => Err(DataError::Empty),
        Value::Array(items) if items.is_empty() => Err(DataError::Empty),
        Value::Array(items) => items
            .into_iter()
            .enumerate()
            .map(|(i, item)| {
                serde_json::from_value(item)
                    .map_err(|e| DataError::Malformed(format!("record {}: {}", i + 1, e)))
            })
            .collect(),
        other => Err(DataError::Malformed(format!(
            "expected a list of records, got {}",
            json_kind(&other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}

/// Text shown when the fetch itself failed.
pub fn describe_fetch_error(err: &FetchError) -> String {
    match err {
        FetchError::Status(_) => err.to_string(),
        _ => format!("Error fetching data ({}): {}", err.category(), err),
    }
}

/// Arithmetic mean of `gewichtet_3` over the records that carry it.
pub fn mean_weighted(records: &[SecurityRecord]) -> Option<f64> {
    let values: Vec<f64> = records.iter().filter_map(|r| r.gewichtet_3).collect();
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}

/// First record whose ISIN equals the already normalized identifier.
pub fn find_by_isin<'a>(records: &'a [SecurityRecord], isin: &str) -> Option<&'a SecurityRecord> {
    records.iter().find(|r| r.isin.as_deref() == Some(isin))
}

/// Normalize a date to `YYYY-MM-DD`; values that do not parse are shown as is.
pub fn format_date(date: Option<&str>) -> String {
    match date {
        Some(raw) => raw
            .get(..10)
            .and_then(|prefix| NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok())
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| raw.to_string()),
        None => MISSING.to_string(),
    }
}

fn fmt_percent(value: Option<f64>) -> String {
    value
        .map(|v| format!("{:.2}%", v))
        .unwrap_or_else(|| MISSING.to_string())
}

fn fmt_text(value: Option<&str>) -> &str {
    value.unwrap_or(MISSING)
}

fn fmt_market_value(value: Option<f64>) -> String {
    value
        .map(|v| format!("{:.2} million", v))
        .unwrap_or_else(|| MISSING.to_string())
}

/// Summary of the whole dataset: count, as-of date, mean and examples.
pub fn render_summary(records: &[SecurityRecord]) -> String {
    let as_of = format_date(records.first().and_then(|r| r.date.as_deref()));
    let mean = mean_weighted(records)
        .map(|m| format!("{:.2}%", m))
        .unwrap_or_else(|| MISSING.to_string());

    let mut out = format!("MarktTrendite cost of equity data (as of {}):\n", as_of);
    out.push_str(&format!("- Total records: {}\n", records.len()));
    out.push_str(&format!("- Average weighted 3-year cost of equity: {}\n", mean));
    out.push_str("\nExamples:\n");
    for record in records.iter().take(SUMMARY_EXAMPLES) {
        out.push_str(&format!(
            "- {}: {}\n",
            fmt_text(record.isin.as_deref()),
            fmt_percent(record.gewichtet_3)
        ));
    }
    out
}

/// Details of a single security.
pub fn render_match(record: &SecurityRecord) -> String {
    format!(
        "Cost of equity for {} (as of {}):\n\
         - Weighted 3-year: {}\n\
         - DDM 3-year: {}\n\
         - RIM 3-year: {}\n\
         - Market Value: {}\n",
        fmt_text(record.isin.as_deref()),
        format_date(record.date.as_deref()),
        fmt_percent(record.gewichtet_3),
        fmt_percent(record.ddm_3),
        fmt_percent(record.rim_3),
        fmt_market_value(record.mv),
    )
}

/// Message for an identifier with no matching record.
pub fn render_not_found(isin: &str, scanned: usize) -> String {
    format!(
        "No data found for ISIN '{}' (searched {} records).",
        isin, scanned
    )
}

/// Labelled block for one record of the listing.
pub fn render_block(index: usize, record: &SecurityRecord) -> String {
    format!(
        "**Record {}:**\n\
         - ISIN: {}\n\
         - Date: {}\n\
         - Market Value: {}\n\
         - DDM 3-year: {}\n\
         - RIM 3-year: {}\n\
         - Weighted 3-year: {}\n",
        index,
        fmt_text(record.isin.as_deref()),
        fmt_text(record.date.as_deref()),
        fmt_market_value(record.mv),
        fmt_percent(record.ddm_3),
        fmt_percent(record.rim_3),
        fmt_percent(record.gewichtet_3),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::time::Duration;

    fn sample() -> Vec<SecurityRecord> {
        parse_records(json!([
            {"isin": "AT1", "date": "2025-01-31", "MV": 1200.5, "ddm_3": 4.0, "rim_3": 6.0, "gewichtet_3": 5.0},
            {"isin": "AT2", "date": "2025-01-31", "MV": 300, "ddm_3": 8.0, "rim_3": 6.0, "gewichtet_3": 7.0}
        ]))
        .unwrap()
    }

    #[test]
    fn test_parse_records() {
        let records = sample();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].isin.as_deref(), Some("AT1"));
        assert_eq!(records[0].mv, Some(1200.5));
        assert_eq!(records[1].mv, Some(300.0));
    }

    #[test]
    fn test_parse_partial_and_lenient_fields() {
        let records = parse_records(json!([
            {"isin": "DE1", "gewichtet_3": "6.5", "MV": null, "ddm_3": "n/a"}
        ]))
        .unwrap();
        assert_eq!(records[0].gewichtet_3, Some(6.5));
        assert_eq!(records[0].mv, None);
        assert_eq!(records[0].ddm_3, None);
        assert_eq!(records[0].date, None);
    }

    #[test]
    fn test_odd_identifier_degrades_to_missing() {
        let records = parse_records(json!([
            {"isin": "AT1", "date": "2025-01-31", "gewichtet_3": 5.0},
            {"isin": 12345, "date": ["2025"], "gewichtet_3": 7.0},
            {"isin": "AT2", "date": 20250131, "gewichtet_3": 6.0}
        ]))
        .unwrap();

        assert_eq!(records.len(), 3);
        assert_eq!(records[1].isin, None);
        assert_eq!(records[1].date, None);
        assert_eq!(records[2].date, None);
        assert_eq!(mean_weighted(&records), Some(6.0));
        assert_eq!(find_by_isin(&records, "AT2").unwrap().gewichtet_3, Some(6.0));
        assert!(render_match(&records[1]).contains("Cost of equity for N/A"));
    }

    #[test]
    fn test_parse_empty_and_malformed() {
        assert_eq!(parse_records(json!([])), Err(DataError::Empty));
        assert_eq!(parse_records(Value::Null), Err(DataError::Empty));
        assert!(matches!(
            parse_records(json!({"isin": "AT1"})),
            Err(DataError::Malformed(_))
        ));
        assert!(matches!(
            parse_records(json!([1, 2])),
            Err(DataError::Malformed(_))
        ));
    }

    #[test]
    fn test_mean_weighted() {
        assert_eq!(mean_weighted(&sample()), Some(6.0));
        assert_eq!(mean_weighted(&[SecurityRecord::default()]), None);
    }

    #[test]
    fn test_find_by_isin_first_match() {
        let mut records = sample();
        records.push(SecurityRecord {
            isin: Some("AT1".into()),
            gewichtet_3: Some(99.0),
            ..Default::default()
        });
        let found = find_by_isin(&records, "AT1").unwrap();
        assert_eq!(found.gewichtet_3, Some(5.0));
        assert!(find_by_isin(&records, "ZZ9").is_none());
    }

    #[test]
    fn test_render_summary() {
        let text = render_summary(&sample());
        assert!(text.contains("as of 2025-01-31"));
        assert!(text.contains("Total records: 2"));
        assert!(text.contains("6.00%"));
        assert!(text.contains("- AT1: 5.00%"));
        assert!(text.contains("- AT2: 7.00%"));
    }

    #[test]
    fn test_render_summary_limits_examples() {
        let records: Vec<_> = (0..5)
            .map(|i| SecurityRecord {
                isin: Some(format!("AT{}", i)),
                gewichtet_3: Some(i as f64),
                ..Default::default()
            })
            .collect();
        let text = render_summary(&records);
        assert!(text.contains("- AT2:"));
        assert!(!text.contains("- AT3:"));
        assert!(text.contains("as of N/A"));
    }

    #[test]
    fn test_render_match_and_missing_fields() {
        let text = render_match(&sample()[0]);
        assert!(text.contains("AT1"));
        assert!(text.contains("Weighted 3-year: 5.00%"));
        assert!(text.contains("DDM 3-year: 4.00%"));
        assert!(text.contains("1200.50 million"));

        let text = render_match(&SecurityRecord {
            isin: Some("AT9".into()),
            ..Default::default()
        });
        assert!(text.contains("RIM 3-year: N/A"));
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(Some("2025-01-31")), "2025-01-31");
        assert_eq!(format_date(Some("2025-01-31T00:00:00")), "2025-01-31");
        assert_eq!(format_date(Some("last week")), "last week");
        assert_eq!(format_date(None), "N/A");
    }

    #[test]
    fn test_describe_fetch_error() {
        assert!(describe_fetch_error(&FetchError::Status(500)).contains("500"));
        let text = describe_fetch_error(&FetchError::Timeout(Duration::from_secs(10)));
        assert!(text.contains("timeout"));
    }
}
