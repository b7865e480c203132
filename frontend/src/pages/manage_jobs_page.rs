use dioxus::prelude::*;

use common::employer::SessionContext;
use crate::{components::{employer_components::posted_jobs_list::PostedJobsList, suspend_boundary::SuspendWrapper}, routes::Route};

/// Jobs posted by one employer.
#[component]
pub fn ManageJobsPage(employer_id: String) -> Element {
    let session = SessionContext::new(employer_id.clone());
    rsx! {
        Title { "Posted jobs" }
        div {
            id: "x-manage-jobs-page",
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
                h1 { style: "font-size: 30px; font-weight: 500; margin: 0; color: #0F172A;", "Posted jobs" }
                div { style: "flex-grow: 1;" }
                Link {
                    to: Route::EmployerProfilePage { employer_id },
                    style: "color: #4F46E5; font-size: 15px;",
                    "Edit company profile"
                }
            }
            SuspendWrapper {
                PostedJobsList { session }
            }
        }
    }
}
