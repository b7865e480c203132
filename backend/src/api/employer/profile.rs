use common::employer::{EmployerProfile, SessionContext};

use crate::api::employer::employer_path;
use crate::http_utils::jobs_api_client::{jobs_api_get, jobs_api_send_json};

pub async fn get_employer_profile(session: SessionContext) -> anyhow::Result<EmployerProfile> {
    let path = employer_path(&session, "/profile")?;
    jobs_api_get::<EmployerProfile>(&path, &[]).await
}

pub async fn save_employer_profile(session: SessionContext, profile: EmployerProfile) -> anyhow::Result<EmployerProfile> {
    if profile.company_name.trim().is_empty() {
        anyhow::bail!("Company name is required");
    }
    let path = employer_path(&session, "/profile")?;
    tracing::info!("Saving employer profile for {}", session.employer_id);
    jobs_api_send_json(reqwest::Method::PUT, &path, &profile).await
}
