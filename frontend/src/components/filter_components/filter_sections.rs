//! Collapsible filter sections driven by the descriptor table.

use common::job_filters::{FilterSection, job_filter_sections};
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_navigation_icons::{MdExpandLess, MdExpandMore}};

use crate::components::filter_components::{FieldInput, FilterContext, filter_field::FilterField};

/// `panel` prefixes radio names and input ids.
#[component]
pub fn FilterSectionList(panel: &'static str) -> Element {
    rsx! {
        div {
            style: "display: flex; flex-direction: column;",
            for section in job_filter_sections() {
                FilterSectionBlock { key: "{section.id}", panel, section: section.clone() }
            }
        }
    }
}

#[component]
fn FilterSectionBlock(panel: &'static str, section: FilterSection) -> Element {
    let filter_context = use_context::<FilterContext>();
    let filter_state = filter_context.filter_state;
    let section_id = section.id;
    let title = section.title;
    let dimension_ids = section.dimension_ids.clone();
    let clear_ids = section.dimension_ids.clone();

    let is_expanded = filter_state.read().is_expanded(section_id);
    let any_active = dimension_ids.iter().any(|id| filter_state.read().is_active(id));

    rsx! {
        div {
            style: "border-bottom: 1px solid #E5E7EB; padding: 12px 0;",
            div {
                style: "display: flex; flex-direction: row; align-items: center; gap: 8px;",
                button {
                    style: "
                        flex-grow: 1;
                        display: flex;
                        flex-direction: row;
                        align-items: center;
                        justify-content: space-between;
                        border: none;
                        background: none;
                        padding: 0;
                        cursor: pointer;
                        font-size: 16px;
                        font-weight: 500;
                        color: #111827;
                    ",
                    aria_expanded: "{is_expanded}",
                    onclick: move |_| filter_context.toggle_section(section_id),
                    "{title}"
                    if is_expanded {
                        Icon { icon: MdExpandLess, style: "width: 22px; height: 22px;" }
                    } else {
                        Icon { icon: MdExpandMore, style: "width: 22px; height: 22px;" }
                    }
                }
                if any_active {
                    button {
                        style: "border: none; background: none; cursor: pointer; color: #4F46E5; font-size: 13px; padding: 0;",
                        onclick: move |_| filter_context.reset_dimensions(&clear_ids),
                        "Clear"
                    }
                }
            }
            if is_expanded {
                div {
                    style: "display: flex; flex-direction: column; gap: 8px; padding-top: 10px;",
                    for dimension_id in dimension_ids {
                        FilterFieldSlot { key: "{dimension_id}", panel, dimension_id }
                    }
                }
            }
        }
    }
}

/// Connects one [`FilterField`] to the container: reads the value, routes input back.
#[component]
fn FilterFieldSlot(panel: &'static str, dimension_id: &'static str) -> Element {
    let filter_context = use_context::<FilterContext>();
    let state = filter_context.filter_state.read();
    let (Some(descriptor), Some(value)) = (state.descriptor(dimension_id).cloned(), state.value(dimension_id).cloned()) else {
        return rsx! {};
    };
    drop(state);
    let on_input = Callback::new(move |input: FieldInput| filter_context.apply_input(dimension_id, input));
    rsx! {
        FilterField { panel, descriptor, value, on_input }
    }
}
