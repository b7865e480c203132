use common::employer::{PostedJob, SessionContext};

use crate::api::employer::employer_path;
use crate::http_utils::jobs_api_client::{jobs_api_delete, jobs_api_get};

pub async fn list_posted_jobs(session: SessionContext) -> anyhow::Result<Vec<PostedJob>> {
    let path = employer_path(&session, "/jobs")?;
    let mut jobs = jobs_api_get::<Vec<PostedJob>>(&path, &[]).await?;
    jobs.sort_by(|a, b| b.posted_at.cmp(&a.posted_at));
    Ok(jobs)
}

pub async fn delete_posted_job(session: SessionContext, job_id: String) -> anyhow::Result<()> {
    if job_id.trim().is_empty() || job_id.contains('/') {
        anyhow::bail!("Invalid job id: {:?}", job_id);
    }
    let path = employer_path(&session, &format!("/jobs/{}", job_id))?;
    tracing::info!("Deleting job {} for employer {}", job_id, session.employer_id);
    jobs_api_delete(&path).await
}
