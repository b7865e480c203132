//! Job listing and employer endpoints.

pub mod jobs;
pub mod employer;
