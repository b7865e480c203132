use dioxus::prelude::*;
use common::job_listing::JobSearchQuery;
use dioxus_free_icons::{Icon, icons::{md_action_icons::MdSearch, md_communication_icons::MdLocationOn}};
use crate::routes::Route;


/// Keyword and location boxes above the listing. Filters are carried over unchanged.
#[component]
pub fn JobSearchTopBar(original_query: ReadSignal<JobSearchQuery>) -> Element {
    let mut modified_search_query = use_signal(|| original_query.read().clone());
    // navigation does not reset local signals, so follow the url
    use_effect(move || {
        let new_query = original_query.read().clone();
        modified_search_query.set(new_query);
    });
    let query_has_changed = use_memo(move || {
        let modified = modified_search_query.read();
        let original = original_query.read();
        modified.keyword != original.keyword || modified.location != original.location
    });
    let search_button_color = use_memo(move || if query_has_changed() { "#4F46E5" } else { "#6B7280" });
    let trigger_search = move |_: ()| {
        let modified = modified_search_query.read().clone();
        let query = JobSearchQuery {
            keyword: modified.keyword.trim().to_string(),
            location: modified.location.trim().to_string(),
            filters: original_query.read().filters.clone(),
        };
        navigator().push(Route::jobs_page_from_query(query));
    };
    let on_enter = move |event: Event<KeyboardData>| {
        if event.key() == Key::Enter {
            trigger_search(());
        }
    };
    rsx! {
        div {
            id: "x-job-search-box",
            style: "
                display:flex;
                align-items:center;
                gap: 12px;
                background-color: white;
                border-radius: 9999px;
                padding: 6px 14px;
                height: 44px;
                color: #111827;
                border: 1px solid rgba(101, 101, 101, 0.8);
                max-width: 640px;
                flex-grow: 1;
                margin: 0 16px;
            ",

            button {
                title: "Search",
                style: "
                    border: none;
                    background: none;
                    cursor: pointer;
                ",
                onclick: move |_| {
                    trigger_search(())
                },
                Icon { icon: MdSearch, style: "width: 20px; height: 20px; color:{search_button_color()};" }
            }
            input {
                r#type: "text",
                placeholder: "Job title, skill or company",
                aria_label: "Keyword",
                style: "
                    flex: 3;
                    min-width: 0;
                    border: none;
                    outline: none;
                    background: transparent;
                    color: #111827;
                    font-size: 17px;
                ",
                value: "{modified_search_query.read().keyword}",
                oninput: move |event: Event<FormData>| modified_search_query.write().keyword = event.value(),
                onkeydown: on_enter,
            }
            div { style: "width: 1px; height: 24px; background: #D1D5DB;" }
            Icon { icon: MdLocationOn, style: "width: 18px; height: 18px; color:#6B7280;" }
            input {
                r#type: "text",
                placeholder: "City or area",
                aria_label: "Location",
                style: "
                    flex: 2;
                    min-width: 0;
                    border: none;
                    outline: none;
                    background: transparent;
                    color: #111827;
                    font-size: 17px;
                ",
                value: "{modified_search_query.read().location}",
                oninput: move |event: Event<FormData>| modified_search_query.write().location = event.value(),
                onkeydown: on_enter,
            }
        }
    }
}
