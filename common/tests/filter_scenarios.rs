use common::derived_query::QueryValue;
use common::filter_dimension::DimensionValue;
use common::filter_state::FilterState;
use common::job_filters::{DATE_POSTED, JOB_PRIORITY, SALARY, URGENT_HIRING, WORK_SHIFT, WORK_TYPE};
use common::salary_range::SALARY_STEP;

#[test]
fn work_type_then_salary_scenario() {
    let mut state = FilterState::for_job_search();
    assert_eq!(state.active_count(), 0);

    state.select_option(WORK_TYPE, "Full time");
    assert_eq!(state.active_count(), 1);
    let query = state.derived_query();
    assert_eq!(query.len(), 1);
    assert_eq!(query.get("workType"), Some(&QueryValue::Text("Full time".to_string())));

    state.move_range_min(SALARY, 80_000);
    assert_eq!(state.value(SALARY), Some(&DimensionValue::Range(80_000, 150_000)));
    assert_eq!(state.active_count(), 2);
    let query = state.derived_query();
    assert_eq!(query.get("salaryMin"), Some(&QueryValue::Int(80_000)));
    assert_eq!(query.get("salaryMax"), Some(&QueryValue::Int(150_000)));
    assert_eq!(query.get("workType"), Some(&QueryValue::Text("Full time".to_string())));
}

#[test]
fn set_unset_leaves_no_trace() {
    let mut state = FilterState::for_job_search();
    state.select_option(DATE_POSTED, "Last 3 days");
    assert!(state.derived_query().get("datePosted").is_some());
    state.select_option(DATE_POSTED, "");
    assert!(state.derived_query().get("datePosted").is_none());
    assert_eq!(state.active_count(), 0);
}

#[test]
fn derived_query_is_stable_between_mutations() {
    let mut state = FilterState::for_job_search();
    state.set_flag(URGENT_HIRING, true);
    state.select_option(WORK_SHIFT, "Rotational shift");
    assert_eq!(state.derived_query(), state.derived_query());
}

#[test]
fn reset_all_clears_everything() {
    let mut state = FilterState::for_job_search();
    state.select_option(WORK_TYPE, "Internship");
    state.set_flag(JOB_PRIORITY, true);
    state.move_range_max(SALARY, 60_000);
    state.reset_all();
    assert_eq!(state.active_count(), 0);
    assert!(state.derived_query().is_empty());
}

#[test]
fn salary_handles_never_cross() {
    let mut state = FilterState::for_job_search();
    let moves: [(bool, i64); 10] = [
        (true, 140_000),
        (false, 10_000),
        (true, 150_000),
        (false, 0),
        (true, 75_000),
        (false, 75_000),
        (true, 200_000),
        (false, -50_000),
        (true, 5_000),
        (false, 5_000),
    ];
    for (is_min, raw) in moves {
        if is_min {
            state.move_range_min(SALARY, raw);
        } else {
            state.move_range_max(SALARY, raw);
        }
        let (min, max) = state.value(SALARY).and_then(|v| v.as_range()).unwrap();
        assert!(min <= max - SALARY_STEP, "{min}..{max} after {raw}");
        assert!(max >= min + SALARY_STEP, "{min}..{max} after {raw}");
    }
}
