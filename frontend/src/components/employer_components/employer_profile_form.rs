//! Editable company profile.

use common::employer::{EmployerProfile, SessionContext};
use dioxus::prelude::*;

use crate::{
    api::employer_api::{get_employer_profile, save_employer_profile},
    components::{employer_components::RequestStatusLine, error_boundary::ComponentErrorDisplay},
    data_definitions::request_status::RequestStatus,
};

#[component]
pub fn EmployerProfileForm(session: ReadSignal<SessionContext>) -> Element {
    let profile = use_resource(move || {
        let session = session.read().clone();
        get_employer_profile(session)
    }).suspend()?.cloned();
    let saved_profile = match profile {
        Err(e) => return rsx! {ComponentErrorDisplay { error_txt: e.to_string() }},
        Ok(p) => p,
    };

    rsx! {
        ProfileEditor { session, saved_profile }
    }
}

#[component]
fn ProfileEditor(session: ReadSignal<SessionContext>, saved_profile: ReadSignal<EmployerProfile>) -> Element {
    let mut baseline = use_signal(|| saved_profile.read().clone());
    let mut draft = use_signal(|| saved_profile.read().clone());
    // a reload or another employer's page replaces the draft
    use_effect(move || {
        let loaded = saved_profile.read().clone();
        baseline.set(loaded.clone());
        draft.set(loaded);
    });
    let mut save_status = use_signal(RequestStatus::default);
    let is_dirty = use_memo(move || *draft.read() != *baseline.read());

    let on_save = move |_| {
        if save_status.read().is_pending() {
            return;
        }
        let profile = draft.read().clone();
        if profile.company_name.trim().is_empty() {
            save_status.set(RequestStatus::Failed("Company name is required".to_string()));
            return;
        }
        save_status.set(RequestStatus::Pending);
        spawn(async move {
            match save_employer_profile(session.read().clone(), profile).await {
                Ok(saved) => {
                    baseline.set(saved.clone());
                    draft.set(saved);
                    save_status.set(RequestStatus::Succeeded("Profile saved".to_string()));
                }
                Err(e) => save_status.set(RequestStatus::Failed(e.to_string())),
            }
        });
    };

    rsx! {
        form {
            style: "display: flex; flex-direction: column; gap: 14px; max-width: 640px;",
            onsubmit: move |e| e.prevent_default(),
            ProfileTextField {
                label: "Company name",
                value: draft.read().company_name.clone(),
                on_input: move |v: String| draft.write().company_name = v,
            }
            ProfileTextField {
                label: "Contact person",
                value: draft.read().contact_name.clone(),
                on_input: move |v: String| draft.write().contact_name = v,
            }
            ProfileTextField {
                label: "Contact email",
                value: draft.read().contact_email.clone(),
                on_input: move |v: String| draft.write().contact_email = v,
            }
            ProfileTextField {
                label: "Phone",
                value: draft.read().phone.clone(),
                on_input: move |v: String| draft.write().phone = v,
            }
            ProfileTextField {
                label: "Website",
                value: draft.read().website.clone(),
                on_input: move |v: String| draft.write().website = v,
            }
            ProfileTextField {
                label: "Location",
                value: draft.read().location.clone(),
                on_input: move |v: String| draft.write().location = v,
            }
            label {
                style: "display: flex; flex-direction: column; gap: 6px; font-size: 14px; color: #374151;",
                "About the company"
                textarea {
                    rows: "6",
                    style: "font-size: 15px; padding: 8px 10px; border: 1px solid #D1D5DB; border-radius: 8px; resize: vertical;",
                    value: "{draft.read().about}",
                    oninput: move |e| draft.write().about = e.value(),
                }
            }
            div {
                style: "display: flex; flex-direction: row; align-items: center; gap: 14px;",
                button {
                    r#type: "button",
                    disabled: !is_dirty() || save_status.read().is_pending(),
                    style: "height: 40px; padding: 0 20px; border: none; border-radius: 8px; background: #4F46E5; color: white; font-size: 15px; cursor: pointer;",
                    onclick: on_save,
                    "Save profile"
                }
                button {
                    r#type: "button",
                    disabled: !is_dirty(),
                    style: "height: 40px; padding: 0 16px; border: 1px solid #D1D5DB; border-radius: 8px; background: white; font-size: 15px; cursor: pointer;",
                    onclick: move |_| {
                        draft.set(baseline.read().clone());
                        save_status.set(RequestStatus::Idle);
                    },
                    "Discard changes"
                }
                RequestStatusLine { status: save_status }
            }
        }
    }
}

#[component]
fn ProfileTextField(label: &'static str, value: String, on_input: Callback<String>) -> Element {
    rsx! {
        label {
            style: "display: flex; flex-direction: column; gap: 6px; font-size: 14px; color: #374151;",
            "{label}"
            input {
                r#type: "text",
                style: "height: 38px; font-size: 15px; padding: 0 10px; border: 1px solid #D1D5DB; border-radius: 8px;",
                value: "{value}",
                oninput: move |e: Event<FormData>| on_input.call(e.value()),
            }
        }
    }
}
