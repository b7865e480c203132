pub mod jobs_api;
pub mod employer_api;
