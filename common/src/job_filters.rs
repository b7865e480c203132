//! Descriptor table for the job search filter panel.

use crate::filter_dimension::{DimensionDescriptor, DimensionOption};
use crate::salary_range::SALARY_BOUNDS;

pub const SORT_BY: &str = "sortBy";
pub const DATE_POSTED: &str = "datePosted";
pub const DISTANCE: &str = "distance";
pub const SALARY: &str = "salary";
pub const SALARY_MIN_KEY: &str = "salaryMin";
pub const SALARY_MAX_KEY: &str = "salaryMax";
pub const WORK_TYPE: &str = "workType";
pub const WORK_SHIFT: &str = "workShift";
pub const HIRING_MULTIPLE: &str = "hiringMultiple";
pub const URGENT_HIRING: &str = "urgentHiring";
pub const JOB_PRIORITY: &str = "jobPriority";

/// A collapsible group in the filter panel. Most sections hold one dimension;
/// the job feature checkboxes share one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSection {
    pub id: &'static str,
    pub title: &'static str,
    pub dimension_ids: Vec<&'static str>,
}

pub fn job_filter_descriptors() -> Vec<DimensionDescriptor> {
    vec![
        DimensionDescriptor::single_select(
            SORT_BY,
            "Sort By",
            vec![
                DimensionOption::same("Relevant"),
                DimensionOption::same("Salary - High to low"),
                DimensionOption::same("Date posted - New to Old"),
            ],
        ),
        DimensionDescriptor::single_select(
            DATE_POSTED,
            "Date Posted",
            vec![
                DimensionOption::same("Last 24 hours"),
                DimensionOption::same("Last 3 days"),
                DimensionOption::same("Last 7 days"),
            ],
        ),
        DimensionDescriptor::single_select(
            DISTANCE,
            "Distance",
            vec![
                DimensionOption::new("5", "Within 5 km"),
                DimensionOption::new("10", "Within 10 km"),
                DimensionOption::new("20", "Within 20 km"),
                DimensionOption::new("50", "Within 50 km"),
            ],
        ),
        DimensionDescriptor::bounded_range(SALARY, "Salary Range", SALARY_BOUNDS, SALARY_MIN_KEY, SALARY_MAX_KEY),
        DimensionDescriptor::single_select(
            WORK_TYPE,
            "Work Type",
            vec![
                DimensionOption::same("Full time"),
                DimensionOption::same("Part time"),
                DimensionOption::same("Internship"),
                DimensionOption::same("Contract"),
            ],
        ),
        DimensionDescriptor::single_select(
            WORK_SHIFT,
            "Work Shift",
            vec![
                DimensionOption::same("Day shift"),
                DimensionOption::same("Night shift"),
                DimensionOption::same("Rotational shift"),
            ],
        ),
        DimensionDescriptor::boolean_flag(HIRING_MULTIPLE, "Hiring multiple candidates"),
        DimensionDescriptor::boolean_flag(URGENT_HIRING, "Urgent hiring"),
        DimensionDescriptor::boolean_flag(JOB_PRIORITY, "High priority job"),
    ]
}

pub fn job_filter_sections() -> Vec<FilterSection> {
    let single = |id: &'static str, title: &'static str| FilterSection { id, title, dimension_ids: vec![id] };
    vec![
        single(SORT_BY, "Sort By"),
        single(DATE_POSTED, "Date Posted"),
        single(DISTANCE, "Distance"),
        single(SALARY, "Salary Range"),
        single(WORK_TYPE, "Work Type"),
        single(WORK_SHIFT, "Work Shift"),
        FilterSection {
            id: "jobFeatures",
            title: "Job Features",
            dimension_ids: vec![HIRING_MULTIPLE, URGENT_HIRING, JOB_PRIORITY],
        },
    ]
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;

    #[test]
    fn every_section_dimension_has_a_descriptor() {
        let ids = job_filter_descriptors().into_iter().map(|d| d.id).collect::<BTreeSet<_>>();
        for section in job_filter_sections() {
            for id in section.dimension_ids {
                assert!(ids.contains(id), "missing descriptor for {id}");
            }
        }
    }

    #[test]
    fn distance_and_work_shift_are_separate_keys() {
        let descriptors = job_filter_descriptors();
        let keys = descriptors.iter().flat_map(|d| d.query_keys()).collect::<Vec<_>>();
        let unique = keys.iter().copied().collect::<BTreeSet<&str>>();
        assert_eq!(keys.len(), unique.len());
        assert!(unique.contains(DISTANCE) && unique.contains(WORK_SHIFT));
    }
}
