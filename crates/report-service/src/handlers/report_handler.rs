use super::AppState;
use crate::errors::ReportError;
use crate::models::{
    History, HistoryPoint, LimitQuery, ReportEntry, ReportsForType, Stats, TestType, TypeSummary,
};
use crate::repositories::MAX_COUNTED_REPORTS;
use axum::{
    extract::{Path, State},
    http::header,
    response::IntoResponse,
    Json,
};
use common::extract::ValidatedQuery;
use serde_json::{json, Value};
use std::collections::BTreeMap;
use std::sync::Arc;

const DEFAULT_LIST_LIMIT: usize = 10;
const DEFAULT_HISTORY_LIMIT: usize = 20;

/// Service description and endpoint map
///
/// GET /
pub async fn handle_root() -> Json<Value> {
    Json(json!({
        "message": "Test Reports API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "summary": "/api/reports/summary",
            "all_reports": "/api/reports",
            "by_type": "/api/reports/{test_type}",
            "history": "/api/reports/{test_type}/history",
            "specific_report": "/api/reports/{test_type}/{report_id}",
            "html_report": "/api/reports/{test_type}/{report_id}/html",
            "stats": "/api/stats"
        }
    }))
}

/// Latest report and report count for every type
///
/// GET /api/reports/summary
pub async fn handle_summary(State(state): State<Arc<AppState>>) -> Json<BTreeMap<TestType, TypeSummary>> {
    let mut summary = BTreeMap::new();

    for test_type in TestType::ALL {
        let latest = state.store.latest(test_type).await;
        let total_reports = if latest.is_some() {
            state.store.list(test_type, MAX_COUNTED_REPORTS).await.len()
        } else {
            0
        };

        summary.insert(
            test_type,
            TypeSummary {
                has_reports: latest.is_some(),
                latest,
                total_reports,
            },
        );
    }

    Json(summary)
}

/// Recent reports of every type; types without reports are omitted
///
/// GET /api/reports?limit=10
pub async fn handle_all_reports(
    State(state): State<Arc<AppState>>,
    ValidatedQuery(query): ValidatedQuery<LimitQuery>,
) -> Json<BTreeMap<TestType, Vec<ReportEntry>>> {
    let limit = query.limit.unwrap_or(DEFAULT_LIST_LIMIT);
    let mut all = BTreeMap::new();

    for test_type in TestType::ALL {
        let reports = state.store.list(test_type, limit).await;
        if !reports.is_empty() {
            all.insert(test_type, reports);
        }
    }

    Json(all)
}

/// GET /api/reports/:test_type?limit=10
pub async fn handle_reports_by_type(
    State(state): State<Arc<AppState>>,
    Path(test_type): Path<String>,
    ValidatedQuery(query): ValidatedQuery<LimitQuery>,
) -> Result<Json<ReportsForType>, ReportError> {
    let test_type: TestType = test_type.parse()?;
    let reports = state
        .store
        .list(test_type, query.limit.unwrap_or(DEFAULT_LIST_LIMIT))
        .await;

    Ok(Json(ReportsForType {
        test_type,
        total: reports.len(),
        reports,
    }))
}

/// Oldest-first summaries for trend charts
///
/// GET /api/reports/:test_type/history?limit=20
pub async fn handle_history(
    State(state): State<Arc<AppState>>,
    Path(test_type): Path<String>,
    ValidatedQuery(query): ValidatedQuery<LimitQuery>,
) -> Result<Json<History>, ReportError> {
    let test_type: TestType = test_type.parse()?;
    let reports = state
        .store
        .list(test_type, query.limit.unwrap_or(DEFAULT_HISTORY_LIMIT))
        .await;

    let history = reports
        .iter()
        .rev()
        .filter_map(HistoryPoint::from_entry)
        .collect();

    Ok(Json(History { test_type, history }))
}

/// GET /api/reports/:test_type/:report_id
pub async fn handle_report(
    State(state): State<Arc<AppState>>,
    Path((test_type, report_id)): Path<(String, String)>,
) -> Result<Json<Value>, ReportError> {
    let test_type: TestType = test_type.parse()?;
    Ok(Json(state.store.get_report(test_type, &report_id).await?))
}

/// GET /api/reports/:test_type/:report_id/html
pub async fn handle_html_report(
    State(state): State<Arc<AppState>>,
    Path((test_type, report_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, ReportError> {
    let test_type: TestType = test_type.parse()?;
    let html = state.store.get_html(test_type, &report_id).await?;

    Ok(([(header::CONTENT_TYPE, "text/html; charset=utf-8")], html))
}

/// Totals over the latest report of each type
///
/// GET /api/stats
pub async fn handle_stats(State(state): State<Arc<AppState>>) -> Json<Stats> {
    let mut latest = Vec::new();
    for test_type in TestType::ALL {
        if let Some(report) = state.store.latest(test_type).await {
            latest.push(report);
        }
    }

    Json(Stats::from_latest(&latest))
}
