pub mod posted_jobs_list;
pub mod employer_profile_form;

use dioxus::prelude::*;

use crate::data_definitions::request_status::RequestStatus;

#[component]
pub fn RequestStatusLine(status: ReadSignal<RequestStatus>) -> Element {
    let status = status.read();
    let Some((message, color)) = status.message() else {
        return rsx! {};
    };
    rsx! {
        div {
            role: "status",
            style: "font-size: 14px; color: {color};",
            "{message}"
        }
    }
}
