//! Left navigation rail shared by every page.

use dioxus::prelude::*;
use dioxus_free_icons::icons::md_action_icons::{MdHome, MdSearch, MdWork};
use dioxus_free_icons::icons::md_social_icons::MdPerson;
use dioxus_free_icons::{Icon, IconShape};

use common::job_listing::JobSearchQuery;
use crate::components::error_boundary::GlobalErrorBoundary;
use crate::routes::Route;

#[component]
pub fn Navbar() -> Element {
    rsx! {
        div {
            id:"x-nav-container",
            style:"
                display:flex;
                flex-direction: row;
                width: 100%;
                height: 100%;
            ",

            nav {
                id:"x-nav-sidebar",
                style:"
                    display:flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 40px;
                    width: 70px;
                    flex-shrink: 0;
                    height: 100%;
                    background-color: #1C212D;
                    padding: 16px;
                ",

                NavbarTopLogo{},
                NavbarTopIconLinks{},

                // empty space
                div {
                    style: "flex-grow:1;"
                }
                NavbarEmployerIconLinks{},
            },

            div {
                id:"x-page-container",
                style: "flex-grow:1; min-width: 0;",
                GlobalErrorBoundary {
                    boundary_name: "Page".to_string(),
                    Outlet::<Route> {}
                }
            }
        }
    }
}

#[component]
fn NavbarTopLogo() -> Element {
    rsx! {
        Link {
            to: Route::HomePage { },
            img { src: asset!("/assets/favicon.svg"), alt: "Home", style: "width: 38px; height: 38px;" }
        }
    }
}

#[component]
fn NavbarTopIconLinks() -> Element {
    rsx! {
        div {
            style: "
                display:flex;
                flex-direction: column;
                gap: 24px;
                width: 38px;
                align-items: center;
            ",
            IconLink { to: Route::HomePage { }, icon: MdHome, label: "Home" }
            IconLink { to: Route::jobs_page_from_query(JobSearchQuery::default()), icon: MdSearch, label: "Find jobs" }
        }
    }
}

/// Employer links only show up while browsing an employer's pages.
#[component]
fn NavbarEmployerIconLinks() -> Element {
    let route = use_route::<Route>();
    let Some(employer_id) = route.employer_id() else {
        return rsx! {};
    };

    rsx! {
        div {
            style: "
                display:flex;
                flex-direction: column;
                gap: 24px;
                width: 38px;
                align-items: center;
            ",
            IconLink { to: Route::ManageJobsPage { employer_id: employer_id.clone() }, icon: MdWork, label: "Posted jobs" }
            IconLink { to: Route::EmployerProfilePage { employer_id }, icon: MdPerson, label: "Company profile" }
        }
    }
}

#[component]
fn IconLink<T: IconShape + Clone + PartialEq + 'static> (to: Route, icon: T, label: String) -> Element {
    rsx! {
        Link {
            to: to,
            span {
                title: "{label}",
                aria_label: "{label}",
                style: "color:white;",
                Icon { icon: icon, style: "width: 26px; height: 26px;" }
            }
        }
    }
}
