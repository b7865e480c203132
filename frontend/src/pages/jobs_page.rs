use dioxus::prelude::*;

use common::{filter_state::{FilterChange, FilterState}, job_listing::JobSearchQuery};
use crate::{
    components::{
        filter_components::{FilterContext, desktop_filters::DesktopFilters, mobile_filters::MobileFilters},
        job_components::{job_listing_view::JobListingView, job_search_top_bar::JobSearchTopBar},
    },
    data_definitions::url_param::UrlParam,
    routes::Route,
};


fn page_title(query: &JobSearchQuery) -> String {
    let keyword = query.keyword.trim();
    if keyword.is_empty() {
        return "Jobs".to_string();
    }
    if keyword.chars().count() > 20 {
        format!("Jobs: {}...", keyword.chars().take(18).collect::<String>())
    } else {
        format!("Jobs: {}", keyword)
    }
}

/// Job search with filters. The url holds the whole query, filters included.
#[component]
pub fn JobsPage(query: UrlParam<JobSearchQuery>, current_page: u64) -> Element {
    rsx! {
        Title { "{page_title(&query.0)}" }
        JobsPageRootComponent {
            query: query.0.clone(),
            current_page,
        }
    }
}

#[component]
fn JobsPageRootComponent(query: ReadSignal<JobSearchQuery>, current_page: ReadSignal<u64>) -> Element {
    let mut filter_state = use_signal(|| {
        let mut state = FilterState::for_job_search();
        state.apply_derived_query(&query.peek().filters);
        state
    });

    // back / forward: the url moved, so the container follows
    use_effect(move || {
        let url_filters = query.read().filters.clone();
        if filter_state.peek().derived_query() != url_filters {
            filter_state.write().apply_derived_query(&url_filters);
        }
    });

    // every accepted change re-derives the query and lands on page one
    let derived_query = use_memo(move || filter_state.read().derived_query());
    use_effect(move || {
        let filters = derived_query();
        let current = query.peek().clone();
        if current.filters != filters {
            navigator().replace(Route::jobs_page_from_query(current.with_filters(filters)));
        }
    });

    let on_change = Callback::new(move |change: FilterChange| {
        dioxus::logger::tracing::info!(
            target: "analytics",
            dimension = %change.dimension_id,
            value = %change.value,
            "filter changed"
        );
    });
    use_context_provider(move || FilterContext { filter_state, on_change });

    rsx! {
        div {
            id: "x-jobs-page-root-component",
            style: r#"
                height: 100%;
                width: 100%;
                display: flex;
                flex-direction: column;
            "#,
            div {
                id: "x-jobs-top-bar",
                style: "
                    border-bottom: 1px solid rgb(164, 164, 164);
                    background-color: #F8FCFF;
                    flex-shrink: 0;
                    display: flex;
                    flex-direction: row;
                    align-items: center;
                    height: 76px;
                    width: 100%;
                ",
                JobSearchTopBar { original_query: query }
            }
            MobileFilters {}

            div {
                id: "x-jobs-bottom-space",
                style: r#"
                    width: 100%;
                    display: flex;
                    flex-direction: row;
                    flex-grow: 1;
                    min-height: 0;
                "#,
                DesktopFilters {}
                div {
                    id: "x-jobs-results-panel",
                    style: "
                        height: 100%;
                        background-color: #ECEEF2;
                        flex-grow: 1;
                        min-width: 0;
                    ",
                    JobListingView { query, current_page }
                }
            }
        }
    }
}
