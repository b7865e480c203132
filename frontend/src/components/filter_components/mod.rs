//! Job filter panel: the shared container context and its renderers.

pub mod filter_field;
pub mod salary_range_field;
pub mod filter_sections;
pub mod desktop_filters;
pub mod mobile_filters;

use common::filter_state::{FilterChange, FilterState};
use dioxus::prelude::*;

/// What a field reports back on interaction. Fields never touch the state.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldInput {
    Select(String),
    Flag(bool),
    RangeMin(i64),
    RangeMax(i64),
}

/// Handle to the page's filter container, shared by the desktop and mobile panels.
#[derive(Clone, Copy)]
pub struct FilterContext {
    pub filter_state: Signal<FilterState>,
    pub on_change: Callback<FilterChange>,
}

impl FilterContext {
    pub fn apply_input(&self, dimension_id: &str, input: FieldInput) {
        self.update(|state| match input {
            FieldInput::Select(token) => state.select_option(dimension_id, &token),
            FieldInput::Flag(checked) => state.set_flag(dimension_id, checked),
            FieldInput::RangeMin(raw) => state.move_range_min(dimension_id, raw),
            FieldInput::RangeMax(raw) => state.move_range_max(dimension_id, raw),
        });
    }

    pub fn update(&self, f: impl FnOnce(&mut FilterState) -> Option<FilterChange>) {
        let mut filter_state = self.filter_state;
        let change = {
            let mut state = filter_state.write();
            f(&mut *state)
        };
        if let Some(change) = change {
            self.on_change.call(change);
        }
    }

    pub fn reset_dimensions(&self, dimension_ids: &[&str]) {
        let mut filter_state = self.filter_state;
        let changes = {
            let mut state = filter_state.write();
            dimension_ids.iter().filter_map(|id| state.reset_dimension(id)).collect::<Vec<_>>()
        };
        for change in changes {
            self.on_change.call(change);
        }
    }

    pub fn reset_all(&self) {
        let mut filter_state = self.filter_state;
        let changes = filter_state.write().reset_all();
        for change in changes {
            self.on_change.call(change);
        }
    }

    pub fn toggle_section(&self, section_id: &str) {
        let mut filter_state = self.filter_state;
        filter_state.write().toggle_section(section_id);
    }
}

/// `Filters` / `Filters (n)` heading, recomputed from the live values.
#[component]
pub fn ActiveFilterHeading() -> Element {
    let filter_context = use_context::<FilterContext>();
    let label = filter_context.filter_state.read().active_count_label("Filters");
    rsx! {
        h2 {
            style: "font-size: 20px; font-weight: 500; margin: 0; color: #0F172A;",
            "{label}"
        }
    }
}
