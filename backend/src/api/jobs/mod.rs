//! Job listing endpoints and module exports.

mod list_jobs;
pub use list_jobs::{list_jobs, list_jobs_from};

pub mod listing_params;
