use dioxus::prelude::*;
use dioxus_free_icons::icons::md_action_icons::{MdSearch, MdWork};
use dioxus_free_icons::icons::md_communication_icons::MdLocationOn;
use dioxus_free_icons::Icon;

use common::filter_state::FilterState;
use common::job_filters::{URGENT_HIRING, WORK_SHIFT, WORK_TYPE};
use common::job_listing::JobSearchQuery;
use crate::routes::Route;


/// Home page
#[component]
pub fn HomePage() -> Element {
    rsx! {
        Title { "Find jobs near you" }
        div {
            id: "x-home-container",
            style: "
                display:flex;
                flex-direction: column;
                gap: 20px;
                width: 100%;
                height: 100%;
                padding: 36px 40px;
                background: #F5F6F8;
                overflow: auto;
            ",

            MainTitle {}

            div {
                style: "
                    display:flex;
                    flex-direction: row;
                    gap: 20px;
                    flex-wrap: wrap;
                    align-items: stretch;
                    margin-top: 10px;
                ",
                JobSearchCard {}
                EmployerCard {}
            }

            QuickFilterRow {}
        }
    }
}

#[component]
fn MainTitle() -> Element {
    rsx! {
        div {
            style: "
                display:flex;
                align-items: center;
                gap: 10px;
                color: #0F172A;
                font-size: 42px;
                font-weight: 500;
                letter-spacing: -0.02em;
            ",
            img {
                src: asset!("/assets/favicon.svg"),
                alt: "Logo",
                style: "width: 42px; height: 42px;",
            },
            span { "Find your next" }
            span { style: "color:#4F46E5;", "job" }
        }
    }
}

#[component]
fn JobSearchCard() -> Element {
    let mut keyword = use_signal(String::new);
    let mut location = use_signal(String::new);
    let start_search = move |_: ()| {
        let query = JobSearchQuery {
            keyword: keyword.read().trim().to_string(),
            location: location.read().trim().to_string(),
            ..Default::default()
        };
        navigator().push(Route::jobs_page_from_query(query));
    };
    let on_enter = move |e: Event<KeyboardData>| {
        if e.key() == Key::Enter {
            e.prevent_default();
            start_search(());
        }
    };

    rsx! {
        div {
            id: "x-card-job-search",
            style: "
                display:flex;
                flex-direction: column;
                gap: 14px;
                width: 520px;
                max-width: 100%;
                border-radius: 22px;
                padding: 22px 22px 26px 22px;
                background: linear-gradient(135deg, #2D208A 0%, #5B3DF5 100%);
                color: white;
                box-shadow: 0 8px 24px rgba(0,0,0,0.12);
            ",
            div { style: "font-size: 28px; font-weight: 500;", "Search jobs" }
            div {
                style: "font-size: 18px; line-height: 1.5; color: rgba(255,255,255,0.92);",
                "Type a role or skill and where you want to work. You can narrow results by salary, shift and more on the next page."
            }
            HeroInput {
                icon_kind: HeroIcon::Search,
                placeholder: "Job title, skill or company",
                value: keyword,
                on_enter,
            }
            HeroInput {
                icon_kind: HeroIcon::Location,
                placeholder: "City or area",
                value: location,
                on_enter,
            }
            button {
                style: "
                    height: 42px;
                    border: none;
                    border-radius: 9999px;
                    background: white;
                    color: #2D208A;
                    font-size: 16px;
                    font-weight: 500;
                    cursor: pointer;
                ",
                onclick: move |_| start_search(()),
                "Show jobs"
            }
        }
    }
}

#[derive(Clone, Copy, PartialEq)]
enum HeroIcon {
    Search,
    Location,
}

#[component]
fn HeroInput(icon_kind: HeroIcon, placeholder: &'static str, mut value: Signal<String>, on_enter: Callback<Event<KeyboardData>>) -> Element {
    rsx! {
        div {
            style: "
                display:flex;
                align-items:center;
                gap: 10px;
                background-color: white;
                border-radius: 9999px;
                padding: 10px 14px;
                height: 42px;
                color: #111827;
            ",
            match icon_kind {
                HeroIcon::Search => rsx! { Icon { icon: MdSearch, style: "width: 20px; height: 20px; color:#6B7280;" } },
                HeroIcon::Location => rsx! { Icon { icon: MdLocationOn, style: "width: 20px; height: 20px; color:#6B7280;" } },
            }
            input {
                r#type: "text",
                placeholder,
                style: "
                    flex:1;
                    border: none;
                    outline: none;
                    background: transparent;
                    color: #111827;
                    font-size: 15px;
                ",
                value: "{value}",
                oninput: move |e| value.set(e.value()),
                onkeypress: move |e| on_enter.call(e),
            }
        }
    }
}

#[component]
fn EmployerCard() -> Element {
    let mut employer_id = use_signal(String::new);
    let open_dashboard = move |_: ()| {
        let id = employer_id.read().trim().to_string();
        if !id.is_empty() {
            navigator().push(Route::ManageJobsPage { employer_id: id });
        }
    };

    rsx! {
        div {
            id: "x-card-employer",
            style: "
                display:flex;
                flex-direction: column;
                gap: 12px;
                width: 420px;
                max-width: 100%;
                border-radius: 22px;
                padding: 22px 22px 26px 22px;
                background: white;
                color: #111827;
                border: 1px solid #E5E7EB;
                box-shadow: 0 6px 16px rgba(0,0,0,0.06);
            ",
            div {
                style: "display:flex; flex-direction: row; align-items: center; gap: 10px; font-size: 24px; font-weight: 500;",
                Icon { icon: MdWork, style: "width: 24px; height: 24px; color: #4F46E5;" }
                "Hiring?"
            }
            div {
                style: "font-size: 17px; line-height: 1.5; color: #374151;",
                "Manage the jobs you posted and keep your company profile up to date."
            }
            input {
                r#type: "text",
                placeholder: "Employer ID",
                aria_label: "Employer ID",
                style: "height: 40px; font-size: 15px; padding: 0 12px; border: 1px solid #D1D5DB; border-radius: 8px;",
                value: "{employer_id}",
                oninput: move |e| employer_id.set(e.value()),
                onkeypress: move |e| {
                    if e.key() == Key::Enter {
                        open_dashboard(());
                    }
                },
            }
            button {
                disabled: employer_id.read().trim().is_empty(),
                style: "
                    height: 40px;
                    border-radius: 8px;
                    background: white;
                    color: #4F46E5;
                    border: 1px solid #4F46E5;
                    font-size: 15px;
                    cursor: pointer;
                ",
                onclick: move |_| open_dashboard(()),
                "Open employer dashboard"
            }
        }
    }
}

/// One-click searches with a single filter already applied.
fn quick_filter_query(apply: impl FnOnce(&mut FilterState)) -> JobSearchQuery {
    let mut state = FilterState::for_job_search();
    apply(&mut state);
    JobSearchQuery::default().with_filters(state.derived_query())
}

#[component]
fn QuickFilterRow() -> Element {
    let shortcuts = [
        ("Urgent hiring", quick_filter_query(|s| { s.set_flag(URGENT_HIRING, true); })),
        ("Part time", quick_filter_query(|s| { s.select_option(WORK_TYPE, "Part time"); })),
        ("Internships", quick_filter_query(|s| { s.select_option(WORK_TYPE, "Internship"); })),
        ("Night shift", quick_filter_query(|s| { s.select_option(WORK_SHIFT, "Night shift"); })),
    ];
    rsx! {
        div {
            style: "display:flex; flex-direction: row; flex-wrap: wrap; gap: 12px;",
            for (label, query) in shortcuts {
                Link {
                    key: "{label}",
                    to: Route::jobs_page_from_query(query),
                    class: "x-hover-shadow-background",
                    style: "
                        padding: 8px 16px;
                        border-radius: 9999px;
                        background: white;
                        border: 1px solid #D1D5DB;
                        color: #111827;
                        text-decoration: none;
                        font-size: 15px;
                    ",
                    "{label}"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::derived_query::QueryValue;

    #[test]
    fn quick_filters_carry_one_dimension() {
        let query = quick_filter_query(|s| { s.select_option(WORK_SHIFT, "Night shift"); });
        assert_eq!(query.filters.len(), 1);
        assert_eq!(query.filters.get(WORK_SHIFT), Some(&QueryValue::Text("Night shift".to_string())));
        assert!(query.keyword.is_empty());
    }
}
