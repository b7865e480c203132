//! Client API calls for employer profile and posted jobs.

use common::employer::{EmployerProfile, PostedJob, SessionContext};
use dioxus::prelude::*;


#[server]
pub async fn get_employer_profile(session: SessionContext) -> Result<EmployerProfile, ServerFnError> {
    let x = backend::api::employer::get_employer_profile(session).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}

#[server]
pub async fn save_employer_profile(session: SessionContext, profile: EmployerProfile) -> Result<EmployerProfile, ServerFnError> {
    let x = backend::api::employer::save_employer_profile(session, profile).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}

#[server]
pub async fn list_posted_jobs(session: SessionContext) -> Result<Vec<PostedJob>, ServerFnError> {
    let x = backend::api::employer::list_posted_jobs(session).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}

#[server]
pub async fn delete_posted_job(session: SessionContext, job_id: String) -> Result<(), ServerFnError> {
    let x = backend::api::employer::delete_posted_job(session, job_id).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}
