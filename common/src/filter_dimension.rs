//! Filter dimension descriptors and values.
//!
//! A dimension is one independently controlled axis of the job listing query.
//! Descriptors are declarative: the renderer and the query builder both walk the
//! same table instead of hand-coding each filter section.

use serde::{Deserialize, Serialize};

/// Token stored by a boolean flag when it is checked.
pub const FLAG_ON: &str = "true";

/// Shared numeric bounds of a bounded-range dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Hash)]
pub struct RangeBounds {
    pub min: i64,
    pub max: i64,
    pub step: i64,
}

impl RangeBounds {
    pub const fn new(min: i64, max: i64, step: i64) -> Self {
        Self { min, max, step }
    }

    /// Checks the pair against the bounds and the one-step gap between handles.
    pub fn accepts(&self, min: i64, max: i64) -> bool {
        min >= self.min && max <= self.max && min.checked_add(self.step).is_some_and(|lowest_max| lowest_max <= max)
    }
}

/// One selectable choice of a single-select dimension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Hash)]
pub struct DimensionOption {
    pub token: String,
    pub label: String,
}

impl DimensionOption {
    pub fn new(token: impl Into<String>, label: impl Into<String>) -> Self {
        Self { token: token.into(), label: label.into() }
    }

    /// Option whose label is the token itself.
    pub fn same(token: impl Into<String>) -> Self {
        let token = token.into();
        Self { label: token.clone(), token }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Hash)]
pub enum DimensionKind {
    /// Radio group. The empty token is the "All" choice.
    SingleSelect { options: Vec<DimensionOption> },
    /// Checkbox holding either the empty token or [`FLAG_ON`].
    BooleanFlag,
    /// Two endpoints emitted under separate query keys.
    BoundedRange { bounds: RangeBounds, min_key: String, max_key: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Hash, PartialOrd, Ord)]
pub enum DimensionValue {
    Token(String),
    Range(i64, i64),
}

impl DimensionValue {
    pub fn token(token: impl Into<String>) -> Self {
        Self::Token(token.into())
    }

    pub fn as_token(&self) -> Option<&str> {
        match self {
            Self::Token(t) => Some(t.as_str()),
            Self::Range(..) => None,
        }
    }

    pub fn as_range(&self) -> Option<(i64, i64)> {
        match self {
            Self::Range(min, max) => Some((*min, *max)),
            Self::Token(_) => None,
        }
    }
}

impl std::fmt::Display for DimensionValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Token(t) => write!(f, "{}", t),
            Self::Range(min, max) => write!(f, "{}..{}", min, max),
        }
    }
}

/// Static description of a dimension: what it is called, how it is edited,
/// and which value means "no filter".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Hash)]
pub struct DimensionDescriptor {
    pub id: String,
    pub label: String,
    pub kind: DimensionKind,
}

impl DimensionDescriptor {
    pub fn single_select(id: impl Into<String>, label: impl Into<String>, options: Vec<DimensionOption>) -> Self {
        Self { id: id.into(), label: label.into(), kind: DimensionKind::SingleSelect { options } }
    }

    pub fn boolean_flag(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self { id: id.into(), label: label.into(), kind: DimensionKind::BooleanFlag }
    }

    pub fn bounded_range(
        id: impl Into<String>,
        label: impl Into<String>,
        bounds: RangeBounds,
        min_key: impl Into<String>,
        max_key: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            kind: DimensionKind::BoundedRange { bounds, min_key: min_key.into(), max_key: max_key.into() },
        }
    }

    pub fn default_value(&self) -> DimensionValue {
        match &self.kind {
            DimensionKind::SingleSelect { .. } | DimensionKind::BooleanFlag => DimensionValue::Token(String::new()),
            DimensionKind::BoundedRange { bounds, .. } => DimensionValue::Range(bounds.min, bounds.max),
        }
    }

    /// Whether `value` can be stored in this dimension.
    ///
    /// Single-select tokens must be the empty token or one of the options,
    /// flags must be empty or [`FLAG_ON`], and ranges must stay inside the
    /// bounds with at least one step between the endpoints.
    pub fn accepts(&self, value: &DimensionValue) -> bool {
        match (&self.kind, value) {
            (DimensionKind::SingleSelect { options }, DimensionValue::Token(t)) => {
                t.is_empty() || options.iter().any(|o| &o.token == t)
            }
            (DimensionKind::BooleanFlag, DimensionValue::Token(t)) => t.is_empty() || t == FLAG_ON,
            (DimensionKind::BoundedRange { bounds, .. }, DimensionValue::Range(min, max)) => bounds.accepts(*min, *max),
            _ => false,
        }
    }

    pub fn range_bounds(&self) -> Option<RangeBounds> {
        match &self.kind {
            DimensionKind::BoundedRange { bounds, .. } => Some(*bounds),
            _ => None,
        }
    }

    /// Query-string keys this dimension writes when active.
    pub fn query_keys(&self) -> Vec<&str> {
        match &self.kind {
            DimensionKind::BoundedRange { min_key, max_key, .. } => vec![min_key.as_str(), max_key.as_str()],
            _ => vec![self.id.as_str()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn work_type() -> DimensionDescriptor {
        DimensionDescriptor::single_select(
            "workType",
            "Work Type",
            vec![DimensionOption::same("Full time"), DimensionOption::same("Part time")],
        )
    }

    #[test]
    fn defaults_follow_kind() {
        assert_eq!(work_type().default_value(), DimensionValue::token(""));
        assert_eq!(DimensionDescriptor::boolean_flag("urgentHiring", "Urgent").default_value(), DimensionValue::token(""));
        let salary = DimensionDescriptor::bounded_range("salary", "Salary", RangeBounds::new(0, 150_000, 5_000), "salaryMin", "salaryMax");
        assert_eq!(salary.default_value(), DimensionValue::Range(0, 150_000));
        assert_eq!(salary.query_keys(), vec!["salaryMin", "salaryMax"]);
    }

    #[test]
    fn rejects_out_of_kind_values() {
        let d = work_type();
        assert!(d.accepts(&DimensionValue::token("Full time")));
        assert!(d.accepts(&DimensionValue::token("")));
        assert!(!d.accepts(&DimensionValue::token("full time")));
        assert!(!d.accepts(&DimensionValue::Range(0, 10)));

        let flag = DimensionDescriptor::boolean_flag("jobPriority", "Priority");
        assert!(flag.accepts(&DimensionValue::token(FLAG_ON)));
        assert!(!flag.accepts(&DimensionValue::token("yes")));
    }

    #[test]
    fn range_needs_one_step_gap() {
        let bounds = RangeBounds::new(0, 150_000, 5_000);
        assert!(bounds.accepts(0, 5_000));
        assert!(!bounds.accepts(5_000, 5_000));
        assert!(!bounds.accepts(-5_000, 10_000));
        assert!(!bounds.accepts(0, 155_000));
        assert!(!bounds.accepts(0, i64::MIN));
        assert!(!bounds.accepts(i64::MAX, i64::MAX));
        assert!(!RangeBounds::new(i64::MIN, i64::MAX, 5_000).accepts(i64::MAX, i64::MAX));
    }
}
