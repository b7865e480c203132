//! Filter state container.
//!
//! Owns the value of every dimension plus the per-section expansion flags.
//! Values change only through the setters below; counts and the derived query
//! are computed from the live values on every call.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::derived_query::{DerivedQuery, QueryValue, build_derived_query};
use crate::filter_dimension::{DimensionDescriptor, DimensionKind, DimensionValue, FLAG_ON};
use crate::job_filters::{job_filter_descriptors, job_filter_sections};
use crate::salary_range::{clamp_max_handle, clamp_min_handle};

/// An accepted mutation, reported back to the caller for analytics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterChange {
    pub dimension_id: String,
    pub value: DimensionValue,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FilterState {
    descriptors: Vec<DimensionDescriptor>,
    values: BTreeMap<String, DimensionValue>,
    expanded: BTreeMap<String, bool>,
}

impl FilterState {
    /// All dimensions at their defaults, all `section_ids` expanded.
    pub fn new(descriptors: Vec<DimensionDescriptor>, section_ids: impl IntoIterator<Item = impl Into<String>>) -> Self {
        let values = descriptors.iter().map(|d| (d.id.clone(), d.default_value())).collect();
        let expanded = section_ids.into_iter().map(|id| (id.into(), true)).collect();
        Self { descriptors, values, expanded }
    }

    pub fn for_job_search() -> Self {
        Self::new(job_filter_descriptors(), job_filter_sections().into_iter().map(|s| s.id))
    }

    pub fn descriptors(&self) -> &[DimensionDescriptor] {
        &self.descriptors
    }

    pub fn descriptor(&self, id: &str) -> Option<&DimensionDescriptor> {
        self.descriptors.iter().find(|d| d.id == id)
    }

    pub fn value(&self, id: &str) -> Option<&DimensionValue> {
        self.values.get(id)
    }

    pub fn is_active(&self, id: &str) -> bool {
        match (self.descriptor(id), self.values.get(id)) {
            (Some(d), Some(v)) => *v != d.default_value(),
            _ => false,
        }
    }

    /// Stores `value` if the dimension exists and accepts it.
    ///
    /// Returns `None` when the value was ignored or did not change anything.
    pub fn set_dimension(&mut self, id: &str, value: DimensionValue) -> Option<FilterChange> {
        let descriptor = self.descriptor(id)?;
        if !descriptor.accepts(&value) {
            return None;
        }
        let slot = self.values.get_mut(id)?;
        if *slot == value {
            return None;
        }
        *slot = value.clone();
        Some(FilterChange { dimension_id: id.to_string(), value })
    }

    /// Radio click. Picking the active option again keeps it selected.
    pub fn select_option(&mut self, id: &str, token: &str) -> Option<FilterChange> {
        self.set_dimension(id, DimensionValue::token(token))
    }

    pub fn set_flag(&mut self, id: &str, checked: bool) -> Option<FilterChange> {
        let token = if checked { FLAG_ON } else { "" };
        self.set_dimension(id, DimensionValue::token(token))
    }

    pub fn is_flag_set(&self, id: &str) -> bool {
        self.values.get(id).and_then(|v| v.as_token()) == Some(FLAG_ON)
    }

    pub fn move_range_min(&mut self, id: &str, raw: i64) -> Option<FilterChange> {
        let bounds = self.descriptor(id)?.range_bounds()?;
        let (_, max) = self.values.get(id)?.as_range()?;
        let min = clamp_min_handle(raw, max, bounds);
        self.set_dimension(id, DimensionValue::Range(min, max))
    }

    pub fn move_range_max(&mut self, id: &str, raw: i64) -> Option<FilterChange> {
        let bounds = self.descriptor(id)?.range_bounds()?;
        let (min, _) = self.values.get(id)?.as_range()?;
        let max = clamp_max_handle(raw, min, bounds);
        self.set_dimension(id, DimensionValue::Range(min, max))
    }

    pub fn reset_dimension(&mut self, id: &str) -> Option<FilterChange> {
        let default = self.descriptor(id)?.default_value();
        self.set_dimension(id, default)
    }

    /// Every dimension back to default. Section expansion is left alone.
    pub fn reset_all(&mut self) -> Vec<FilterChange> {
        let ids = self.descriptors.iter().map(|d| d.id.clone()).collect::<Vec<_>>();
        ids.iter().filter_map(|id| self.reset_dimension(id)).collect()
    }

    pub fn toggle_section(&mut self, section_id: &str) {
        let entry = self.expanded.entry(section_id.to_string()).or_insert(true);
        *entry = !*entry;
    }

    /// Unknown sections count as expanded.
    pub fn is_expanded(&self, section_id: &str) -> bool {
        self.expanded.get(section_id).copied().unwrap_or(true)
    }

    pub fn active_count(&self) -> usize {
        active_filter_count(&self.descriptors, &self.values)
    }

    /// Panel heading: `Filters`, or `Filters (n)` when anything is active.
    pub fn active_count_label(&self, heading: &str) -> String {
        match self.active_count() {
            0 => heading.to_string(),
            n => format!("{} ({})", heading, n),
        }
    }

    pub fn derived_query(&self) -> DerivedQuery {
        build_derived_query(&self.descriptors, &self.values)
    }

    /// Replaces all values with the ones carried by `query`.
    ///
    /// Dimensions absent from the query go back to default; entries that would
    /// be rejected by [`FilterState::set_dimension`] are skipped.
    pub fn apply_derived_query(&mut self, query: &DerivedQuery) -> Vec<FilterChange> {
        let mut changes = Vec::new();
        let descriptors = self.descriptors.clone();
        for descriptor in &descriptors {
            let incoming = match &descriptor.kind {
                DimensionKind::BoundedRange { min_key, max_key, .. } => match (query.get(min_key), query.get(max_key)) {
                    (Some(QueryValue::Int(min)), Some(QueryValue::Int(max))) => DimensionValue::Range(*min, *max),
                    _ => descriptor.default_value(),
                },
                _ => match query.get(&descriptor.id) {
                    Some(QueryValue::Text(token)) => DimensionValue::token(token.clone()),
                    Some(QueryValue::Int(i)) => DimensionValue::token(i.to_string()),
                    None => descriptor.default_value(),
                },
            };
            let incoming = if descriptor.accepts(&incoming) { incoming } else { descriptor.default_value() };
            if let Some(change) = self.set_dimension(&descriptor.id, incoming) {
                changes.push(change);
            }
        }
        changes
    }
}

/// Number of dimensions whose value differs from the default.
pub fn active_filter_count(descriptors: &[DimensionDescriptor], values: &BTreeMap<String, DimensionValue>) -> usize {
    descriptors
        .iter()
        .filter(|d| values.get(&d.id).is_some_and(|v| *v != d.default_value()))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::job_filters::{DISTANCE, HIRING_MULTIPLE, SALARY, SORT_BY, WORK_SHIFT, WORK_TYPE};

    #[test]
    fn starts_inactive_and_expanded() {
        let state = FilterState::for_job_search();
        assert_eq!(state.active_count(), 0);
        assert!(state.derived_query().is_empty());
        assert!(state.is_expanded(SORT_BY));
        assert!(state.is_expanded("jobFeatures"));
        assert_eq!(state.active_count_label("Filters"), "Filters");
    }

    #[test]
    fn each_new_active_dimension_adds_one() {
        let mut state = FilterState::for_job_search();
        state.select_option(WORK_TYPE, "Full time");
        assert_eq!(state.active_count(), 1);
        state.select_option(WORK_TYPE, "Part time");
        assert_eq!(state.active_count(), 1);
        state.set_flag(HIRING_MULTIPLE, true);
        assert_eq!(state.active_count(), 2);
        state.move_range_max(SALARY, 100_000);
        assert_eq!(state.active_count(), 3);
        assert_eq!(state.active_count_label("Filters"), "Filters (3)");
    }

    #[test]
    fn reselecting_active_option_is_noop() {
        let mut state = FilterState::for_job_search();
        assert!(state.select_option(SORT_BY, "Relevant").is_some());
        assert!(state.select_option(SORT_BY, "Relevant").is_none());
        assert_eq!(state.value(SORT_BY), Some(&DimensionValue::token("Relevant")));
    }

    #[test]
    fn ignores_out_of_kind_values() {
        let mut state = FilterState::for_job_search();
        state.select_option(WORK_TYPE, "Contract");
        assert!(state.set_dimension(WORK_TYPE, DimensionValue::Range(0, 10)).is_none());
        assert!(state.set_dimension(WORK_TYPE, DimensionValue::token("Freelance")).is_none());
        assert!(state.set_dimension(SALARY, DimensionValue::token("50000")).is_none());
        assert!(state.set_dimension(SALARY, DimensionValue::Range(90_000, 60_000)).is_none());
        assert!(state.set_dimension("nope", DimensionValue::token("x")).is_none());
        assert_eq!(state.value(WORK_TYPE), Some(&DimensionValue::token("Contract")));
        assert_eq!(state.value(SALARY), Some(&DimensionValue::Range(0, 150_000)));
    }

    #[test]
    fn distance_does_not_touch_work_shift() {
        let mut state = FilterState::for_job_search();
        state.select_option(DISTANCE, "10");
        state.select_option(WORK_SHIFT, "Night shift");
        assert_eq!(state.value(DISTANCE), Some(&DimensionValue::token("10")));
        assert_eq!(state.value(WORK_SHIFT), Some(&DimensionValue::token("Night shift")));
        assert_eq!(state.active_count(), 2);
    }

    #[test]
    fn flag_toggles_back_to_default() {
        let mut state = FilterState::for_job_search();
        state.set_flag(HIRING_MULTIPLE, true);
        assert!(state.is_flag_set(HIRING_MULTIPLE));
        let change = state.set_flag(HIRING_MULTIPLE, false);
        assert_eq!(change.map(|c| c.value), Some(DimensionValue::token("")));
        assert!(state.derived_query().is_empty());
    }

    #[test]
    fn sections_toggle_independently() {
        let mut state = FilterState::for_job_search();
        state.toggle_section(SORT_BY);
        assert!(!state.is_expanded(SORT_BY));
        assert!(state.is_expanded(WORK_TYPE));
        state.toggle_section(WORK_TYPE);
        state.toggle_section(SORT_BY);
        assert!(state.is_expanded(SORT_BY));
        assert!(!state.is_expanded(WORK_TYPE));
        state.select_option(WORK_TYPE, "Internship");
        state.reset_all();
        assert!(!state.is_expanded(WORK_TYPE));
    }

    #[test]
    fn reset_all_reports_changes() {
        let mut state = FilterState::for_job_search();
        state.select_option(DISTANCE, "50");
        state.move_range_min(SALARY, 30_000);
        let changes = state.reset_all();
        assert_eq!(changes.len(), 2);
        assert_eq!(state.active_count(), 0);
        assert!(state.derived_query().is_empty());
    }

    #[test]
    fn apply_derived_query_restores_state() {
        let mut source = FilterState::for_job_search();
        source.select_option(WORK_SHIFT, "Day shift");
        source.move_range_min(SALARY, 45_000);
        source.set_flag(HIRING_MULTIPLE, true);

        let mut target = FilterState::for_job_search();
        target.select_option(SORT_BY, "Relevant");
        target.apply_derived_query(&source.derived_query());
        assert_eq!(target.derived_query(), source.derived_query());
        assert!(!target.is_active(SORT_BY));
    }

    #[test]
    fn apply_derived_query_rejects_wrapping_salary() {
        let mut state = FilterState::for_job_search();
        let mut crafted = DerivedQuery::default();
        crafted.0.insert("salaryMin".to_string(), QueryValue::Int(0));
        crafted.0.insert("salaryMax".to_string(), QueryValue::Int(i64::MIN));
        assert!(state.apply_derived_query(&crafted).is_empty());
        assert_eq!(state.value("salary"), Some(&DimensionValue::Range(0, 150_000)));
        assert_eq!(state.active_count(), 0);

        // handles still move normally afterwards
        assert!(state.move_range_min("salary", 80_000).is_some());
        assert_eq!(state.value("salary"), Some(&DimensionValue::Range(80_000, 150_000)));
    }
}
