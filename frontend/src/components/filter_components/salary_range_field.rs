//! Two-handle salary slider.
//!
//! Both handles are range inputs stacked on one track. Each reports its raw
//! position; clamping happens in the filter container, and the re-rendered
//! value snaps the handle back if it crossed the other one.

use common::filter_dimension::RangeBounds;
use common::salary_range::{fill_percent, format_salary};
use dioxus::prelude::*;

use crate::components::filter_components::FieldInput;

#[component]
pub fn SalaryRangeField(bounds: RangeBounds, min: i64, max: i64, on_input: Callback<FieldInput>) -> Element {
    let fill_left = fill_percent(min, bounds);
    let fill_right = 100.0 - fill_percent(max, bounds);
    let min_label = format_salary(min);
    let max_label = format_salary(max);

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 12px; padding: 4px 2px;",
            div {
                style: "display: flex; flex-direction: row; justify-content: space-between; font-size: 14px; color: #374151;",
                span { "{min_label}" }
                span { "{max_label}" }
            }
            div {
                style: "position: relative; height: 18px;",
                // track
                div {
                    style: "
                        position: absolute;
                        top: 7px;
                        left: 0;
                        right: 0;
                        height: 4px;
                        border-radius: 2px;
                        background: #E5E7EB;
                    ",
                }
                // selected span between the handles
                div {
                    style: "
                        position: absolute;
                        top: 7px;
                        left: {fill_left}%;
                        right: {fill_right}%;
                        height: 4px;
                        border-radius: 2px;
                        background: #4F46E5;
                    ",
                }
                input {
                    class: "x-salary-range-input",
                    r#type: "range",
                    aria_label: "Minimum salary",
                    min: "{bounds.min}",
                    max: "{bounds.max}",
                    step: "{bounds.step}",
                    value: "{min}",
                    oninput: move |e: Event<FormData>| {
                        if let Ok(raw) = e.value().parse::<i64>() {
                            on_input.call(FieldInput::RangeMin(raw));
                        }
                    },
                }
                input {
                    class: "x-salary-range-input",
                    r#type: "range",
                    aria_label: "Maximum salary",
                    min: "{bounds.min}",
                    max: "{bounds.max}",
                    step: "{bounds.step}",
                    value: "{max}",
                    oninput: move |e: Event<FormData>| {
                        if let Ok(raw) = e.value().parse::<i64>() {
                            on_input.call(FieldInput::RangeMax(raw));
                        }
                    },
                }
            }
        }
    }
}
