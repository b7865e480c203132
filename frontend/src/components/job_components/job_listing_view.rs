//! Job results panel: fetches the listing for the current query and page.

use common::job_listing::{JobListingPage, JobSearchQuery};
use dioxus::prelude::*;

use crate::{
    api::jobs_api::list_jobs,
    components::{error_boundary::ComponentErrorDisplay, job_components::{job_card::JobCard, listing_controls::ListingControls}, suspend_boundary::{LoadingIndicator, SuspendWrapper}},
    routes::Route,
};

/// Slider drags emit a burst of queries; only the last one is fetched.
#[cfg(target_arch = "wasm32")]
const LISTING_DEBOUNCE_MS: u32 = 250;

#[derive(Copy, Clone)]
pub struct JobListingState {
    pub listing: ReadSignal<Option<Result<JobListingPage, ServerFnError>>>,
    pub current_page: ReadSignal<u64>,
    pub set_current_page: Callback<u64>,
}

#[component]
pub fn JobListingView(query: ReadSignal<JobSearchQuery>, current_page: ReadSignal<u64>) -> Element {

    let mut listing = use_resource(move || {
        let q = query.read().clone();
        let page = *current_page.read();
        async move {
            #[cfg(target_arch = "wasm32")]
            gloo_timers::future::TimeoutFuture::new(LISTING_DEBOUNCE_MS).await;
            list_jobs(q, page).await
        }
    });
    // the resource re-runs by itself; only drop the stale page from the screen
    use_effect(move || {
        let _ = query.read();
        let _ = current_page.read();
        listing.clear();
    });

    let set_current_page = Callback::new(move |page: u64| {
        let route = Route::JobsPage {
            query: query.read().clone().into(),
            current_page: page,
        };
        navigator().push(route);
    });
    use_context_provider(move || JobListingState {
        listing: listing.into(),
        current_page,
        set_current_page,
    });

    rsx! {
        div {
            id: "x-job-listing-wrapper",
            style: "
                display: flex;
                flex-direction: column;
                gap: 1px;
                padding: 7px;
                padding-top: 0px;
                height: 100%;
                width: 100%;
                min-width: 0;
            ",
            ListingControls {}

            div {
                style: "
                flex-grow: 1;
                width: 100%;
                min-height: 0;
                ",
                SuspendWrapper {
                    JobResultsList { }
                }
            }
        }
    }
}

#[component]
fn JobResultsList() -> Element {
    let listing_state = use_context::<JobListingState>();
    let listing = listing_state.listing.read();
    let listing = match listing.as_ref() {
        Some(Err(e)) => return rsx! {ComponentErrorDisplay { error_txt: format!("{:#?}", e) }},
        Some(Ok(s)) => s,
        None => return rsx! { LoadingIndicator{} },
    };

    if listing.jobs.is_empty() {
        return rsx! {
            div {
                style: "padding: 40px; text-align: center; color: #6B7280; font-size: 18px;",
                "No jobs match these filters. Try clearing a few."
            }
        };
    }

    rsx! {
        ul {
            id: "x-job-results",
            style: "
                list-style: none;
                margin: 0;
                padding: 0;
                width: 100%;
                height: 100%;
                overflow-y: auto;
                display: flex;
                flex-direction: column;
                gap: 10px;
            ",
            for job in listing.jobs.iter().cloned() {
                li {
                    key: "{job.job_id}",
                    JobCard { job }
                }
            }
        }
    }
}
