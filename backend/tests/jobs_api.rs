use axum::{Json, Router, extract::Query, http::StatusCode, routing::get};
use backend::api::jobs::list_jobs_from;
use common::{filter_state::FilterState, job_listing::JobSearchQuery};

async fn spawn_mock_api(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

#[tokio::test]
async fn list_jobs_forwards_derived_filters() {
    let app = Router::new().route(
        "/jobs",
        get(|Query(pairs): Query<Vec<(String, String)>>| async move {
            let echo = |key: &str| pairs.iter().find(|(k, _)| k == key).map(|(_, v)| v.clone()).unwrap_or_default();
            Json(serde_json::json!({
                "jobs": [{
                    "job_id": "j-1",
                    "title": echo("workType"),
                    "company_name": echo("salaryMin"),
                    "salary_min": null,
                    "salary_max": null,
                    "posted_at": echo("offset"),
                }],
                "total": 41,
            }))
        }),
    );
    let base_url = spawn_mock_api(app).await;

    let mut state = FilterState::for_job_search();
    state.select_option("workType", "Full time");
    state.move_range_min("salary", 80_000);
    let query = JobSearchQuery::default().with_filters(state.derived_query());

    let listing = list_jobs_from(&base_url, query.clone(), 1).await.unwrap();
    assert_eq!(listing.total_count, 41);
    assert_eq!(listing.page_number, 1);
    assert_eq!(listing.query, query);
    assert_eq!(listing.jobs[0].title, "Full time");
    assert_eq!(listing.jobs[0].company_name, "80000");
    assert_eq!(listing.jobs[0].posted_at, "20");
    assert!(!listing.jobs[0].urgent_hiring);
}

#[tokio::test]
async fn list_jobs_surfaces_upstream_errors() {
    let app = Router::new().route("/jobs", get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "listing down") }));
    let base_url = spawn_mock_api(app).await;

    let err = list_jobs_from(&base_url, JobSearchQuery::default(), 0).await.unwrap_err();
    assert!(err.to_string().contains("listing down"));
}
