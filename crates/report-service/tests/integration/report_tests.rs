//! Report listings, history, raw reports and stats.

use crate::harness::{spawn_report_server, ReportFixture};
use serde_json::{json, Value};
use service_test_utils::assert_detail;

fn report(timestamp: &str, total: i64, passed: i64) -> Value {
    json!({
        "timestamp": timestamp,
        "summary": { "total": total, "passed": passed, "failed": total - passed },
        "results": (0..total).map(|i| json!({ "name": format!("case_{i}") })).collect::<Vec<_>>()
    })
}

async fn seeded() -> Result<ReportFixture, anyhow::Error> {
    let fixture = spawn_report_server().await?;
    fixture.write_report("integration", "20250110_100000", &report("2025-01-10T10:00:00", 4, 4))?;
    fixture.write_report("integration", "20250112_083000", &report("2025-01-12T08:30:00", 4, 3))?;
    fixture.write_report("integration", "20250111_120000", &report("not a time", 4, 2))?;
    fixture.write_report("sanity", "20250105_070000", &report("2025-01-05T07:00:00", 6, 5))?;
    fixture.write_html("sanity", "20250105_070000", "<html><body>sanity</body></html>")?;
    Ok(fixture)
}

#[tokio::test]
async fn test_root_describes_endpoints() -> Result<(), anyhow::Error> {
    let fixture = spawn_report_server().await?;

    let (status, body) = fixture.get_json("/").await?;

    assert_eq!(status, 200);
    assert_eq!(body["message"], "Test Reports API");
    assert_eq!(body["endpoints"]["summary"], "/api/reports/summary");

    Ok(())
}

#[tokio::test]
async fn test_summary_covers_every_type() -> Result<(), anyhow::Error> {
    let fixture = seeded().await?;

    let (status, body) = fixture.get_json("/api/reports/summary").await?;

    assert_eq!(status, 200);
    assert_eq!(body["integration"]["has_reports"], true);
    assert_eq!(body["integration"]["total_reports"], 3);
    assert_eq!(body["integration"]["latest"]["id"], "20250112_083000");
    assert_eq!(body["sanity"]["total_reports"], 1);
    for empty in ["system", "component", "regression"] {
        assert_eq!(
            body[empty],
            json!({ "latest": null, "total_reports": 0, "has_reports": false })
        );
    }

    Ok(())
}

#[tokio::test]
async fn test_all_reports_omits_empty_types() -> Result<(), anyhow::Error> {
    let fixture = seeded().await?;

    let (_, body) = fixture.get_json("/api/reports?limit=2").await?;

    let keys: Vec<_> = body
        .as_object()
        .map(|o| o.keys().cloned().collect())
        .unwrap_or_default();
    assert_eq!(keys.len(), 2);
    assert_eq!(body["integration"].as_array().map(Vec::len), Some(2));
    assert_eq!(body["sanity"][0]["html_file"], "test_report_20250105_070000.html");
    assert_eq!(body["sanity"][0]["total_results"], 6);

    Ok(())
}

#[tokio::test]
async fn test_reports_by_type() -> Result<(), anyhow::Error> {
    let fixture = seeded().await?;

    let (status, body) = fixture.get_json("/api/reports/integration").await?;
    assert_eq!(status, 200);
    assert_eq!(body["test_type"], "integration");
    assert_eq!(body["total"], 3);
    assert_eq!(body["reports"][0]["id"], "20250112_083000");
    assert_eq!(body["reports"][2]["id"], "20250110_100000");

    let (_, body) = fixture.get_json("/api/reports/system").await?;
    assert_eq!(body, json!({ "test_type": "system", "reports": [], "total": 0 }));

    let (status, body) = fixture.get_json("/api/reports/smoke").await?;
    assert_eq!(status, 404);
    assert_detail(&body, "Test type 'smoke' not found");

    let (status, _) = fixture.get_json("/api/reports/integration?limit=-1").await?;
    assert_eq!(status, 422);

    Ok(())
}

#[tokio::test]
async fn test_history_is_oldest_first_and_skips_bad_timestamps() -> Result<(), anyhow::Error> {
    let fixture = seeded().await?;

    let (status, body) = fixture.get_json("/api/reports/integration/history").await?;

    assert_eq!(status, 200);
    assert_eq!(body["test_type"], "integration");
    assert_eq!(
        body["history"],
        json!([
            {
                "timestamp": "2025-01-10T10:00:00",
                "formatted_time": "01/10 10:00",
                "summary": { "total": 4, "passed": 4, "failed": 0 }
            },
            {
                "timestamp": "2025-01-12T08:30:00",
                "formatted_time": "01/12 08:30",
                "summary": { "total": 4, "passed": 3, "failed": 1 }
            }
        ])
    );

    let (status, _) = fixture.get_json("/api/reports/smoke/history").await?;
    assert_eq!(status, 404);

    Ok(())
}

#[tokio::test]
async fn test_specific_report_and_html() -> Result<(), anyhow::Error> {
    let fixture = seeded().await?;

    let (status, body) = fixture.get_json("/api/reports/sanity/20250105_070000").await?;
    assert_eq!(status, 200);
    assert_eq!(body, report("2025-01-05T07:00:00", 6, 5));

    let (status, body) = fixture.get_json("/api/reports/sanity/19990101_000000").await?;
    assert_eq!(status, 404);
    assert_detail(&body, "Report '19990101_000000' not found");

    let response = fixture
        .server
        .client()
        .get(fixture.server.url_for("/api/reports/sanity/20250105_070000/html"))
        .send()
        .await?;
    assert_eq!(response.status(), 200);
    assert!(response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.starts_with("text/html")));
    assert_eq!(response.text().await?, "<html><body>sanity</body></html>");

    let (status, body) = fixture
        .get_json("/api/reports/integration/20250110_100000/html")
        .await?;
    assert_eq!(status, 404);
    assert_detail(&body, "HTML report '20250110_100000' not found");

    Ok(())
}

#[tokio::test]
async fn test_unreadable_report_is_skipped_in_listings() -> Result<(), anyhow::Error> {
    let fixture = seeded().await?;
    fixture.write_raw("sanity", "test_results_20250106_070000.json", "{ broken")?;

    let (_, body) = fixture.get_json("/api/reports/sanity").await?;
    assert_eq!(body["total"], 1);
    assert_eq!(body["reports"][0]["id"], "20250105_070000");

    let (status, body) = fixture.get_json("/api/reports/sanity/20250106_070000").await?;
    assert_eq!(status, 500);
    assert_detail(&body, "Internal server error");

    Ok(())
}

#[tokio::test]
async fn test_stats_over_latest_reports() -> Result<(), anyhow::Error> {
    let fixture = seeded().await?;

    let (status, body) = fixture.get_json("/api/stats").await?;

    assert_eq!(status, 200);
    assert_eq!(body["total_reports"], 2);
    assert_eq!(body["by_type"]["integration"]["passed"], 3);
    assert_eq!(body["by_type"]["sanity"]["passed"], 5);
    assert_eq!(
        body["overall_summary"],
        json!({ "total_tests": 10, "passed": 8, "failed": 2, "pass_rate": "80.0%" })
    );

    Ok(())
}

#[tokio::test]
async fn test_stats_without_reports() -> Result<(), anyhow::Error> {
    let fixture = spawn_report_server().await?;

    let (_, body) = fixture.get_json("/api/stats").await?;

    assert_eq!(
        body,
        json!({
            "total_reports": 0,
            "by_type": {},
            "overall_summary": { "total_tests": 0, "passed": 0, "failed": 0, "pass_rate": "0%" }
        })
    );

    Ok(())
}
