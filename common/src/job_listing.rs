//! Shared job listing request and response models.

use serde::{Deserialize, Serialize};

use crate::derived_query::DerivedQuery;
use crate::listing_const::{MAX_PAGINATION_JOB_LIMIT, PAGE_SIZE};


#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct JobSearchQuery {
    pub keyword: String,
    pub location: String,
    pub filters: DerivedQuery,
}

impl JobSearchQuery {
    pub fn from_keyword(keyword: impl Into<String>) -> Self {
        Self { keyword: keyword.into(), ..Default::default() }
    }

    pub fn with_filters(&self, filters: DerivedQuery) -> Self {
        Self { filters, ..self.clone() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobSummary {
    pub job_id: String,
    pub title: String,
    pub company_name: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub work_type: String,
    #[serde(default)]
    pub work_shift: String,
    pub salary_min: Option<i64>,
    pub salary_max: Option<i64>,
    #[serde(default)]
    pub posted_at: String,
    #[serde(default)]
    pub urgent_hiring: bool,
    #[serde(default)]
    pub hiring_multiple: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobListingPage {
    pub query: JobSearchQuery,
    pub jobs: Vec<JobSummary>,
    pub total_count: u64,
    pub page_number: u64,
}

impl JobListingPage {
    /// Pages reachable through pagination, capped at the pagination limit.
    pub fn page_count(&self) -> u64 {
        page_count_for(self.total_count)
    }
}

pub fn page_count_for(total_count: u64) -> u64 {
    let total_count = total_count.min(MAX_PAGINATION_JOB_LIMIT);
    total_count.div_ceil(PAGE_SIZE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_count_rounds_up_and_caps() {
        assert_eq!(page_count_for(0), 0);
        assert_eq!(page_count_for(1), 1);
        assert_eq!(page_count_for(PAGE_SIZE), 1);
        assert_eq!(page_count_for(PAGE_SIZE + 1), 2);
        assert_eq!(page_count_for(u64::MAX), MAX_PAGINATION_JOB_LIMIT / PAGE_SIZE);
    }

    #[test]
    fn missing_fields_default() {
        let query: JobSearchQuery = serde_json::from_str(r#"{"keyword":"rust"}"#).unwrap();
        assert_eq!(query, JobSearchQuery::from_keyword("rust"));
    }
}
