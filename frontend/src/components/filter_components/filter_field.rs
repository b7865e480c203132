//! Generic, fully controlled renderer for one filter dimension.

use common::filter_dimension::{DimensionDescriptor, DimensionKind, DimensionOption, DimensionValue, FLAG_ON};
use dioxus::prelude::*;

use crate::components::filter_components::{FieldInput, salary_range_field::SalaryRangeField};

/// Radio `name` for one dimension inside one panel.
fn radio_group_name(panel: &str, dimension_id: &str) -> String {
    format!("{}-{}", panel, dimension_id)
}

fn radio_input_id(group_name: &str, token: &str) -> String {
    format!("x-filter-{}-{}", group_name, token.replace(' ', "-"))
}

/// `panel` names the filter panel the field lives in, e.g. `desktop` or `mobile`.
#[component]
pub fn FilterField(panel: &'static str, descriptor: DimensionDescriptor, value: DimensionValue, on_input: Callback<FieldInput>) -> Element {
    match descriptor.kind.clone() {
        DimensionKind::SingleSelect { options } => {
            let selected = value.as_token().unwrap_or("").to_string();
            rsx! {
                RadioGroupField { name: radio_group_name(panel, &descriptor.id), options, selected, on_input }
            }
        }
        DimensionKind::BooleanFlag => {
            let checked = value.as_token() == Some(FLAG_ON);
            rsx! {
                CheckboxField { label: descriptor.label.clone(), checked, on_input }
            }
        }
        DimensionKind::BoundedRange { bounds, .. } => {
            let (min, max) = value.as_range().unwrap_or((bounds.min, bounds.max));
            rsx! {
                SalaryRangeField { bounds, min, max, on_input }
            }
        }
    }
}

#[component]
fn RadioGroupField(name: String, options: Vec<DimensionOption>, selected: String, on_input: Callback<FieldInput>) -> Element {
    rsx! {
        div {
            role: "radiogroup",
            style: "display: flex; flex-direction: column; gap: 6px;",
            RadioOption {
                name: name.clone(),
                token: "".to_string(),
                label: "All".to_string(),
                checked: selected.is_empty(),
                on_input,
            }
            for option in options.iter() {
                RadioOption {
                    key: "{name}-{option.token}",
                    name: name.clone(),
                    token: option.token.clone(),
                    label: option.label.clone(),
                    checked: option.token == selected,
                    on_input,
                }
            }
        }
    }
}

#[component]
fn RadioOption(name: String, token: String, label: String, checked: bool, on_input: Callback<FieldInput>) -> Element {
    let input_id = radio_input_id(&name, &token);
    rsx! {
        label {
            r#for: "{input_id}",
            style: "display: flex; flex-direction: row; align-items: center; gap: 8px; cursor: pointer; font-size: 15px; color: #111827;",
            input {
                id: "{input_id}",
                r#type: "radio",
                name: "{name}",
                checked,
                style: "accent-color: #4F46E5; width: 16px; height: 16px;",
                onchange: move |_| {
                    // already-selected option stays selected
                    if !checked {
                        on_input.call(FieldInput::Select(token.clone()));
                    }
                },
            }
            "{label}"
        }
    }
}

#[component]
fn CheckboxField(label: String, checked: bool, on_input: Callback<FieldInput>) -> Element {
    rsx! {
        label {
            style: "display: flex; flex-direction: row; align-items: center; gap: 8px; cursor: pointer; font-size: 15px; color: #111827;",
            input {
                r#type: "checkbox",
                checked,
                style: "accent-color: #4F46E5; width: 16px; height: 16px;",
                onchange: move |_| on_input.call(FieldInput::Flag(!checked)),
            }
            "{label}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panels_get_distinct_radio_names_and_ids() {
        let desktop = radio_group_name("desktop", "workType");
        let mobile = radio_group_name("mobile", "workType");
        assert_ne!(desktop, mobile);
        assert_eq!(radio_input_id(&desktop, "Full time"), "x-filter-desktop-workType-Full-time");
        assert_eq!(radio_input_id(&mobile, "Full time"), "x-filter-mobile-workType-Full-time");
    }
}
