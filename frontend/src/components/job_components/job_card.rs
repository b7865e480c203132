//! Job listing card.

use common::{job_listing::JobSummary, salary_range::format_salary};
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::{md_action_icons::MdWork, md_communication_icons::MdLocationOn}};

fn salary_text(job: &JobSummary) -> Option<String> {
    match (job.salary_min, job.salary_max) {
        (Some(min), Some(max)) => Some(format!("{} - {}", format_salary(min), format_salary(max))),
        (Some(min), None) => Some(format!("From {}", format_salary(min))),
        (None, Some(max)) => Some(format!("Up to {}", format_salary(max))),
        (None, None) => None,
    }
}

#[component]
pub fn JobCard(job: ReadSignal<JobSummary>) -> Element {
    let job = job.read().clone();
    let salary = salary_text(&job);
    rsx! {
        div {
            class: "x-hover-shadow-background",
            style: "
                display: flex;
                flex-direction: column;
                gap: 8px;
                padding: 16px 18px;
                background: white;
                border-radius: 12px;
                border: 1px solid #E5E7EB;
            ",
            div {
                style: "font-size: 19px; font-weight: 500; color: #0F172A;",
                "{job.title}"
            }
            div {
                style: "font-size: 15px; color: #374151;",
                "{job.company_name}"
            }
            div {
                style: "display: flex; flex-direction: row; flex-wrap: wrap; gap: 14px; font-size: 14px; color: #4B5563; align-items: center;",
                if !job.location.is_empty() {
                    span {
                        style: "display: flex; align-items: center; gap: 4px;",
                        Icon { icon: MdLocationOn, style: "width: 16px; height: 16px;" }
                        "{job.location}"
                    }
                }
                if !job.work_type.is_empty() {
                    span {
                        style: "display: flex; align-items: center; gap: 4px;",
                        Icon { icon: MdWork, style: "width: 16px; height: 16px;" }
                        "{job.work_type}"
                    }
                }
                if !job.work_shift.is_empty() {
                    span { "{job.work_shift}" }
                }
                if let Some(salary) = salary {
                    span { style: "font-weight: 500; color: #111827;", "{salary}" }
                }
            }
            div {
                style: "display: flex; flex-direction: row; gap: 8px; align-items: center;",
                if job.urgent_hiring {
                    JobBadge { text: "Urgent hiring", color: "#B91C1C" }
                }
                if job.hiring_multiple {
                    JobBadge { text: "Hiring multiple candidates", color: "#047857" }
                }
                div { style: "flex-grow: 1;" }
                if !job.posted_at.is_empty() {
                    span { style: "font-size: 13px; color: #6B7280;", "Posted {job.posted_at}" }
                }
            }
        }
    }
}

#[component]
fn JobBadge(text: &'static str, color: &'static str) -> Element {
    rsx! {
        span {
            style: "
                font-size: 12px;
                padding: 2px 8px;
                border-radius: 9999px;
                border: 1px solid {color};
                color: {color};
            ",
            "{text}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job(salary_min: Option<i64>, salary_max: Option<i64>) -> JobSummary {
        JobSummary {
            job_id: "j".to_string(),
            title: "Cook".to_string(),
            company_name: "Canteen".to_string(),
            location: String::new(),
            work_type: String::new(),
            work_shift: String::new(),
            salary_min,
            salary_max,
            posted_at: String::new(),
            urgent_hiring: false,
            hiring_multiple: false,
        }
    }

    #[test]
    fn salary_text_covers_open_ends() {
        assert_eq!(salary_text(&job(Some(20_000), Some(120_000))), Some("₹20K - ₹1.2L".to_string()));
        assert_eq!(salary_text(&job(Some(20_000), None)), Some("From ₹20K".to_string()));
        assert_eq!(salary_text(&job(None, Some(50_000))), Some("Up to ₹50K".to_string()));
        assert_eq!(salary_text(&job(None, None)), None);
    }
}
