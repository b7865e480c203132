pub mod error_boundary;
pub mod suspend_boundary;
pub mod navbar;
pub mod filter_components;
pub mod job_components;
pub mod employer_components;
