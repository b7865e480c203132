//! Sidebar filter panel for wide screens.

use dioxus::prelude::*;

use crate::components::filter_components::{ActiveFilterHeading, FilterContext, filter_sections::FilterSectionList};

#[component]
pub fn DesktopFilters() -> Element {
    let filter_context = use_context::<FilterContext>();
    let has_active = filter_context.filter_state.read().active_count() > 0;

    rsx! {
        aside {
            id: "x-desktop-filters",
            class: "x-desktop-only",
            style: "
                flex-direction: column;
                width: 300px;
                flex-shrink: 0;
                height: 100%;
                overflow-y: auto;
                padding: 16px 20px;
                background: white;
                border-right: 1px solid #E5E7EB;
            ",
            div {
                style: "display: flex; flex-direction: row; align-items: center; justify-content: space-between; padding-bottom: 8px; border-bottom: 1px solid #E5E7EB;",
                ActiveFilterHeading {}
                button {
                    disabled: !has_active,
                    style: "border: none; background: none; color: #4F46E5; font-size: 14px; cursor: pointer;",
                    onclick: move |_| filter_context.reset_all(),
                    "Clear all"
                }
            }
            FilterSectionList { panel: "desktop" }
        }
    }
}
