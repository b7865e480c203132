//! Client API calls for the job listing endpoint.

use common::job_listing::{JobListingPage, JobSearchQuery};
use dioxus::prelude::*;


#[server]
pub async fn list_jobs(input: JobSearchQuery, current_page: u64) -> Result<JobListingPage, ServerFnError> {
    let x = backend::api::jobs::list_jobs(input, current_page).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}
