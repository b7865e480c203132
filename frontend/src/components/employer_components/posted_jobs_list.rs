//! Jobs an employer has posted, newest first, with removal.

use common::employer::{PostedJob, SessionContext};
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::{md_action_icons::MdDelete, md_social_icons::MdPeople}};

use crate::{
    api::employer_api::{delete_posted_job, list_posted_jobs},
    components::{employer_components::RequestStatusLine, error_boundary::ComponentErrorDisplay, suspend_boundary::LoadingIndicator},
    data_definitions::request_status::RequestStatus,
};

#[component]
pub fn PostedJobsList(session: ReadSignal<SessionContext>) -> Element {
    let mut posted_jobs = use_resource(move || {
        let session = session.read().clone();
        async move { list_posted_jobs(session).await }
    });
    let mut delete_status = use_signal(RequestStatus::default);

    let on_delete = Callback::new(move |job_id: String| {
        if delete_status.read().is_pending() {
            return;
        }
        delete_status.set(RequestStatus::Pending);
        spawn(async move {
            let session = session.read().clone();
            match delete_posted_job(session, job_id.clone()).await {
                Ok(()) => {
                    delete_status.set(RequestStatus::Succeeded(format!("Removed job {}", job_id)));
                    posted_jobs.restart();
                }
                Err(e) => {
                    dioxus::logger::tracing::warn!("delete of job {} failed: {}", job_id, e);
                    delete_status.set(RequestStatus::Failed(e.to_string()));
                }
            }
        });
    });

    let posted_jobs = posted_jobs.read();
    let jobs = match posted_jobs.as_ref() {
        Some(Err(e)) => return rsx! { ComponentErrorDisplay { error_txt: e.to_string() } },
        Some(Ok(jobs)) => jobs.clone(),
        None => return rsx! { LoadingIndicator {} },
    };

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 12px;",
            RequestStatusLine { status: delete_status }
            if jobs.is_empty() {
                div {
                    style: "padding: 30px; color: #6B7280; font-size: 17px;",
                    "No jobs posted yet."
                }
            }
            for job in jobs {
                PostedJobRow {
                    key: "{job.job_id}",
                    job,
                    disabled: delete_status.read().is_pending(),
                    on_delete,
                }
            }
        }
    }
}

#[component]
fn PostedJobRow(job: PostedJob, disabled: bool, on_delete: Callback<String>) -> Element {
    let job_id = job.job_id.clone();
    rsx! {
        div {
            class: "x-hover-shadow-background",
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                gap: 16px;
                padding: 14px 18px;
                background: white;
                border: 1px solid #E5E7EB;
                border-radius: 12px;
            ",
            div {
                style: "display: flex; flex-direction: column; gap: 4px; flex-grow: 1; min-width: 0;",
                div { style: "font-size: 17px; font-weight: 500; color: #111827;", "{job.title}" }
                div {
                    style: "font-size: 13px; color: #6B7280;",
                    "Posted {job.posted_at}"
                    if !job.status.is_empty() {
                        " · {job.status}"
                    }
                }
            }
            div {
                title: "Applicants",
                style: "display: flex; flex-direction: row; align-items: center; gap: 4px; color: #374151; font-size: 15px;",
                Icon { icon: MdPeople, style: "width: 18px; height: 18px;" }
                "{job.applicant_count}"
            }
            button {
                title: "Remove job",
                aria_label: "Remove job {job.title}",
                disabled,
                style: "border: none; background: none; color: #B91C1C; cursor: pointer;",
                onclick: move |_| on_delete.call(job_id.clone()),
                Icon { icon: MdDelete, style: "width: 22px; height: 22px;" }
            }
        }
    }
}
