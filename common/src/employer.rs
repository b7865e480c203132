//! Employer profile and posted-job models.

use serde::{Deserialize, Serialize};

/// Identity of the signed-in employer, handed to pages explicitly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Hash)]
pub struct SessionContext {
    pub employer_id: String,
}

impl SessionContext {
    pub fn new(employer_id: impl Into<String>) -> Self {
        Self { employer_id: employer_id.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct EmployerProfile {
    pub company_name: String,
    pub contact_name: String,
    pub contact_email: String,
    pub phone: String,
    pub website: String,
    pub location: String,
    pub about: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostedJob {
    pub job_id: String,
    pub title: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub applicant_count: u64,
    #[serde(default)]
    pub posted_at: String,
}
