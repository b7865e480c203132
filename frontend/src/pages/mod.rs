pub mod home_page;
pub mod jobs_page;
pub mod manage_jobs_page;
pub mod employer_profile_page;
