//! Employer profile and manage-jobs endpoints.

mod profile;
pub use profile::{get_employer_profile, save_employer_profile};

mod posted_jobs;
pub use posted_jobs::{delete_posted_job, list_posted_jobs};

use common::employer::SessionContext;

fn employer_path(session: &SessionContext, suffix: &str) -> anyhow::Result<String> {
    let employer_id = session.employer_id.trim();
    if employer_id.is_empty() || employer_id.contains('/') {
        anyhow::bail!("Invalid employer id: {:?}", session.employer_id);
    }
    Ok(format!("/employers/{}{}", employer_id, suffix))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn employer_path_rejects_bad_ids() {
        assert_eq!(employer_path(&SessionContext::new("e42"), "/jobs").unwrap(), "/employers/e42/jobs");
        assert!(employer_path(&SessionContext::new(""), "/jobs").is_err());
        assert!(employer_path(&SessionContext::new("../admin"), "/jobs").is_err());
    }
}
