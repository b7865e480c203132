pub mod job_listing_view;
pub mod job_card;
pub mod listing_controls;
pub mod job_search_top_bar;
