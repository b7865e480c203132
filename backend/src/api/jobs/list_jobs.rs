//! Listing fetch for the jobs page.

use common::job_listing::{JobListingPage, JobSearchQuery, JobSummary};
use serde::{Deserialize, Serialize};

use crate::api::jobs::listing_params::{LISTING_PATH, build_listing_params, clamp_page};
use crate::http_utils::jobs_api_client::jobs_api_get_from;
use crate::http_utils::jobs_api_config::get_jobs_api_base_url;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct ListJobsResponse {
    jobs: Vec<JobSummary>,
    #[serde(alias = "total_count")]
    total: u64,
}

pub async fn list_jobs(query: JobSearchQuery, page: u64) -> anyhow::Result<JobListingPage> {
    list_jobs_from(&get_jobs_api_base_url(), query, page).await
}

pub async fn list_jobs_from(base_url: &str, query: JobSearchQuery, page: u64) -> anyhow::Result<JobListingPage> {
    let page = clamp_page(page);
    let params = build_listing_params(&query, page);
    tracing::info!(filters = query.filters.len(), page, "listing jobs");
    let response = jobs_api_get_from::<ListJobsResponse>(base_url, LISTING_PATH, &params).await?;
    Ok(JobListingPage {
        query,
        jobs: response.jobs,
        total_count: response.total,
        page_number: page,
    })
}
