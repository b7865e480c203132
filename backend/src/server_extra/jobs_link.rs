//! Shareable listing links: plain query strings in, listing state out.

use axum::{Json, extract::Query, http::StatusCode, response::IntoResponse};
use common::{derived_query::DerivedQuery, job_filters::job_filter_descriptors, job_listing::JobSearchQuery};
use tracing::info;

use crate::api::jobs::list_jobs;

/// Reads `keyword`, `location` and the filter keys from raw pairs.
/// Anything the filter panel could not have produced is dropped.
pub fn job_search_query_from_pairs(pairs: &[(String, String)]) -> JobSearchQuery {
    let find = |key: &str| pairs.iter().find(|(k, _)| k == key).map(|(_, v)| v.trim().to_string()).unwrap_or_default();
    let filters = DerivedQuery::from_query_pairs(&job_filter_descriptors(), pairs.iter().map(|(k, v)| (k.as_str(), v.as_str())));
    JobSearchQuery {
        keyword: find("keyword"),
        location: find("location"),
        filters,
    }
}

/// `GET /_jobs_feed?workType=Full+time&page=1` returns the listing page as JSON.
pub async fn jobs_feed(Query(pairs): Query<Vec<(String, String)>>) -> impl IntoResponse {
    let query = job_search_query_from_pairs(&pairs);
    let page = pairs.iter().find(|(k, _)| k == "page").and_then(|(_, v)| v.parse::<u64>().ok()).unwrap_or(0);
    info!("Jobs feed: {} filters, page {}", query.filters.len(), page);
    match list_jobs(query, page).await {
        Ok(listing) => Json(listing).into_response(),
        Err(e) => {
            tracing::error!("Jobs feed failed: {:#}", e);
            (StatusCode::BAD_GATEWAY, e.to_string()).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use common::derived_query::QueryValue;

    use super::*;

    #[test]
    fn parses_shared_link() {
        let pairs = vec![
            ("keyword".to_string(), " designer ".to_string()),
            ("workShift".to_string(), "Night shift".to_string()),
            ("hiringMultiple".to_string(), "true".to_string()),
            ("salaryMin".to_string(), "abc".to_string()),
            ("salaryMax".to_string(), "90000".to_string()),
        ];
        let query = job_search_query_from_pairs(&pairs);
        assert_eq!(query.keyword, "designer");
        assert_eq!(query.location, "");
        assert_eq!(query.filters.get("workShift"), Some(&QueryValue::Text("Night shift".to_string())));
        assert_eq!(query.filters.get("hiringMultiple"), Some(&QueryValue::Text("true".to_string())));
        assert_eq!(query.filters.get("salaryMax"), None);
    }
}
