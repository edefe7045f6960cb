use crate::errors::ReportError;
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use common::extract::Validate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Suites that publish reports. Declaration order is the listing order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum TestType {
    Integration,
    System,
    Component,
    Regression,
    Sanity,
}

impl TestType {
    pub const ALL: [TestType; 5] = [
        TestType::Integration,
        TestType::System,
        TestType::Component,
        TestType::Regression,
        TestType::Sanity,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            TestType::Integration => "integration",
            TestType::System => "system",
            TestType::Component => "component",
            TestType::Regression => "regression",
            TestType::Sanity => "sanity",
        }
    }
}

impl fmt::Display for TestType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TestType {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TestType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| ReportError::UnknownTestType(s.to_string()))
    }
}

/// Listing entry for one `test_results_<id>.json` file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReportEntry {
    pub id: String,
    pub timestamp: String,
    pub test_type: TestType,
    pub summary: Value,
    pub json_file: String,
    pub html_file: String,
    pub total_results: usize,
}

impl ReportEntry {
    /// Build an entry from a parsed report. Missing fields default to an
    /// empty timestamp, an empty summary and zero results.
    #[must_use]
    pub fn from_report(test_type: TestType, id: &str, report: &Value) -> Self {
        Self {
            id: id.to_string(),
            timestamp: report
                .get("timestamp")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
            test_type,
            summary: report
                .get("summary")
                .cloned()
                .unwrap_or_else(|| Value::Object(Map::new())),
            json_file: results_file_name(id),
            html_file: html_file_name(id),
            total_results: report
                .get("results")
                .and_then(Value::as_array)
                .map_or(0, Vec::len),
        }
    }

    fn summary_count(&self, key: &str) -> i64 {
        self.summary.get(key).and_then(Value::as_i64).unwrap_or(0)
    }
}

pub const RESULTS_PREFIX: &str = "test_results_";
pub const RESULTS_SUFFIX: &str = ".json";
pub const HTML_PREFIX: &str = "test_report_";
pub const HTML_SUFFIX: &str = ".html";

#[must_use]
pub fn results_file_name(id: &str) -> String {
    format!("{RESULTS_PREFIX}{id}{RESULTS_SUFFIX}")
}

#[must_use]
pub fn html_file_name(id: &str) -> String {
    format!("{HTML_PREFIX}{id}{HTML_SUFFIX}")
}

/// The id embedded in a results file name, if it is one.
#[must_use]
pub fn report_id_from_file_name(file_name: &str) -> Option<&str> {
    file_name
        .strip_prefix(RESULTS_PREFIX)?
        .strip_suffix(RESULTS_SUFFIX)
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct TypeSummary {
    pub latest: Option<ReportEntry>,
    pub total_reports: usize,
    pub has_reports: bool,
}

#[derive(Debug, Serialize)]
pub struct ReportsForType {
    pub test_type: TestType,
    pub reports: Vec<ReportEntry>,
    pub total: usize,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct HistoryPoint {
    pub timestamp: String,
    pub formatted_time: String,
    pub summary: Value,
}

impl HistoryPoint {
    /// `None` when the entry's timestamp does not parse.
    #[must_use]
    pub fn from_entry(entry: &ReportEntry) -> Option<Self> {
        let parsed = parse_timestamp(&entry.timestamp)?;
        Some(Self {
            timestamp: entry.timestamp.clone(),
            formatted_time: parsed.format("%m/%d %H:%M").to_string(),
            summary: entry.summary.clone(),
        })
    }
}

#[derive(Debug, Serialize)]
pub struct History {
    pub test_type: TestType,
    pub history: Vec<HistoryPoint>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct OverallSummary {
    pub total_tests: i64,
    pub passed: i64,
    pub failed: i64,
    pub pass_rate: String,
}

#[derive(Debug, Serialize)]
pub struct Stats {
    pub total_reports: usize,
    pub by_type: BTreeMap<TestType, Value>,
    pub overall_summary: OverallSummary,
}

impl Stats {
    /// Aggregate over the latest report of each type.
    #[must_use]
    pub fn from_latest(latest: &[ReportEntry]) -> Self {
        let total_tests: i64 = latest.iter().map(|r| r.summary_count("total")).sum();
        let passed: i64 = latest.iter().map(|r| r.summary_count("passed")).sum();
        let failed: i64 = latest.iter().map(|r| r.summary_count("failed")).sum();

        #[allow(clippy::cast_precision_loss)]
        let pass_rate = if total_tests > 0 {
            format!("{:.1}%", passed as f64 / total_tests as f64 * 100.0)
        } else {
            "0%".to_string()
        };

        Self {
            total_reports: latest.len(),
            by_type: latest
                .iter()
                .map(|r| (r.test_type, r.summary.clone()))
                .collect(),
            overall_summary: OverallSummary {
                total_tests,
                passed,
                failed,
                pass_rate,
            },
        }
    }
}

/// `?limit=N`, defaulting per endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct LimitQuery {
    pub limit: Option<usize>,
}

impl Validate for LimitQuery {}

/// Accept ISO 8601 with or without an offset, or a bare date. Offset-aware
/// values keep their local wall time.
fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_local());
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}
