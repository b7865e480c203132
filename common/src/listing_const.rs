//! Paging constants shared by the listing endpoint client and the page controls.

pub const PAGE_SIZE: u64 = 20;
pub const MAX_PAGINATION_JOB_LIMIT: u64 = 2000;
