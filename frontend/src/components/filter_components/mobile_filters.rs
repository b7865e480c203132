//! Full-screen filter sheet for narrow screens. Edits the same container as the sidebar.

use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::{md_image_icons::MdTune, md_navigation_icons::MdClose}};

use crate::components::filter_components::{ActiveFilterHeading, FilterContext, filter_sections::FilterSectionList};

#[component]
pub fn MobileFilters() -> Element {
    let filter_context = use_context::<FilterContext>();
    let mut is_open = use_signal(|| false);
    let button_label = filter_context.filter_state.read().active_count_label("Filters");

    rsx! {
        div {
            class: "x-mobile-only",
            style: "flex-direction: row; padding: 8px 12px;",
            button {
                style: "
                    display: flex;
                    flex-direction: row;
                    align-items: center;
                    gap: 6px;
                    border: 1px solid #D1D5DB;
                    border-radius: 9999px;
                    background: white;
                    padding: 6px 14px;
                    font-size: 15px;
                    cursor: pointer;
                ",
                onclick: move |_| is_open.set(true),
                Icon { icon: MdTune, style: "width: 18px; height: 18px;" }
                "{button_label}"
            }
        }
        if is_open() {
            div {
                id: "x-mobile-filters-sheet",
                style: "
                    position: fixed;
                    inset: 0;
                    z-index: 1000;
                    display: flex;
                    flex-direction: column;
                    background: white;
                ",
                div {
                    style: "display: flex; flex-direction: row; align-items: center; justify-content: space-between; padding: 14px 16px; border-bottom: 1px solid #E5E7EB;",
                    ActiveFilterHeading {}
                    button {
                        style: "border: none; background: none; cursor: pointer;",
                        aria_label: "Close filters",
                        onclick: move |_| is_open.set(false),
                        Icon { icon: MdClose, style: "width: 24px; height: 24px;" }
                    }
                }
                div {
                    style: "flex-grow: 1; overflow-y: auto; padding: 0 16px;",
                    FilterSectionList { panel: "mobile" }
                }
                div {
                    style: "display: flex; flex-direction: row; gap: 12px; padding: 12px 16px; border-top: 1px solid #E5E7EB;",
                    button {
                        style: "flex: 1; height: 42px; border-radius: 8px; border: 1px solid #D1D5DB; background: white; font-size: 15px; cursor: pointer;",
                        onclick: move |_| filter_context.reset_all(),
                        "Clear all"
                    }
                    button {
                        style: "flex: 1; height: 42px; border-radius: 8px; border: none; background: #4F46E5; color: white; font-size: 15px; cursor: pointer;",
                        onclick: move |_| is_open.set(false),
                        "Show results"
                    }
                }
            }
        }
    }
}
