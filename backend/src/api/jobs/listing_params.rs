//! Query-string builder for the remote listing endpoint.

use common::{job_listing::{JobSearchQuery, page_count_for}, listing_const::{MAX_PAGINATION_JOB_LIMIT, PAGE_SIZE}};

pub const LISTING_PATH: &str = "/jobs";

/// Pages past the pagination limit fold back onto the last reachable page.
pub fn clamp_page(page: u64) -> u64 {
    page.min(page_count_for(MAX_PAGINATION_JOB_LIMIT).saturating_sub(1))
}

/// Flattens the search into the listing endpoint's query vocabulary.
///
/// Keyword and location are trimmed and omitted when blank; filter tokens are
/// forwarded exactly as derived.
pub fn build_listing_params(query: &JobSearchQuery, page: u64) -> Vec<(String, String)> {
    let mut params = Vec::new();
    let keyword = query.keyword.trim();
    if !keyword.is_empty() {
        params.push(("keyword".to_string(), keyword.to_string()));
    }
    let location = query.location.trim();
    if !location.is_empty() {
        params.push(("location".to_string(), location.to_string()));
    }
    params.extend(query.filters.to_query_pairs());
    params.push(("limit".to_string(), PAGE_SIZE.to_string()));
    params.push(("offset".to_string(), (clamp_page(page) * PAGE_SIZE).to_string()));
    params
}

#[cfg(test)]
mod tests {
    use common::filter_state::FilterState;

    use super::*;

    fn value_of<'a>(params: &'a [(String, String)], key: &str) -> Option<&'a str> {
        params.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }

    #[test]
    fn carries_filters_and_paging() {
        let mut state = FilterState::for_job_search();
        state.select_option("workType", "Full time");
        state.move_range_min("salary", 80_000);
        let query = JobSearchQuery::from_keyword("  rust developer ").with_filters(state.derived_query());

        let params = build_listing_params(&query, 2);
        assert_eq!(value_of(&params, "keyword"), Some("rust developer"));
        assert_eq!(value_of(&params, "location"), None);
        assert_eq!(value_of(&params, "workType"), Some("Full time"));
        assert_eq!(value_of(&params, "salaryMin"), Some("80000"));
        assert_eq!(value_of(&params, "salaryMax"), Some("150000"));
        assert_eq!(value_of(&params, "offset"), Some((2 * PAGE_SIZE).to_string().as_str()));
    }

    #[test]
    fn empty_search_only_pages() {
        let params = build_listing_params(&JobSearchQuery::default(), 0);
        assert_eq!(params, vec![("limit".to_string(), PAGE_SIZE.to_string()), ("offset".to_string(), "0".to_string())]);
    }

    #[test]
    fn huge_pages_stop_at_the_pagination_limit() {
        let last_offset = (MAX_PAGINATION_JOB_LIMIT - PAGE_SIZE).to_string();
        for page in [u64::MAX / 10, u64::MAX, 100, 5_000] {
            let params = build_listing_params(&JobSearchQuery::default(), page);
            assert_eq!(value_of(&params, "offset"), Some(last_offset.as_str()));
        }
        assert_eq!(clamp_page(99), 99);
        assert_eq!(clamp_page(3), 3);
    }
}
