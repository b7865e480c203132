use dioxus::prelude::*;

use crate::components::error_boundary::ComponentErrorBoundary;

/// Shows a spinner while children are suspended on a resource, and catches their errors.
#[component]
pub fn SuspendWrapper(children: Element) -> Element {
    rsx! {
        SuspenseBoundary {
            fallback: |_s: SuspenseContext| rsx! {
                div {
                    width: "100%",
                    height: "100%",
                    display: "flex",
                    align_items: "center",
                    justify_content: "center",
                    LoadingIndicator {}
                }
            },
            ComponentErrorBoundary {
                children
            }
        }
    }
}

#[component]
pub fn LoadingIndicator() -> Element {
    rsx! {
        div {
            role: "status",
            style: "display: flex; flex-direction: row; align-items: center; gap: 10px; color: #6B7280; font-size: 18px; padding: 24px;",
            div { class: "x-spinner" }
            "Loading..."
        }
    }
}
