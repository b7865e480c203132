use dioxus::prelude::*;

use common::employer::SessionContext;
use crate::{components::{employer_components::employer_profile_form::EmployerProfileForm, suspend_boundary::SuspendWrapper}, routes::Route};

#[component]
pub fn EmployerProfilePage(employer_id: String) -> Element {
    let session = SessionContext::new(employer_id.clone());
    rsx! {
        Title { "Company profile" }
        div {
            id: "x-employer-profile-page",
            style: "
                display: flex;
                flex-direction: column;
                gap: 18px;
                width: 100%;
                height: 100%;
                padding: 28px 36px;
                background: #F5F6F8;
                overflow-y: auto;
            ",
            div {
                style: "display: flex; flex-direction: row; align-items: center; gap: 16px;",
                h1 { style: "font-size: 30px; font-weight: 500; margin: 0; color: #0F172A;", "Company profile" }
                div { style: "flex-grow: 1;" }
                Link {
                    to: Route::ManageJobsPage { employer_id },
                    style: "color: #4F46E5; font-size: 15px;",
                    "Back to posted jobs"
                }
            }
            SuspendWrapper {
                EmployerProfileForm { session }
            }
        }
    }
}
