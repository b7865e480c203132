//! Common library exports shared between frontend and backend.

extern crate serde;


pub mod filter_dimension;
pub mod salary_range;
pub mod job_filters;
pub mod derived_query;
pub mod filter_state;
pub mod listing_const;
pub mod job_listing;
pub mod employer;
