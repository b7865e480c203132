//! Flat query built from the active filter dimensions.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::filter_dimension::{DimensionDescriptor, DimensionKind, DimensionValue};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Hash, PartialOrd, Ord)]
#[serde(untagged)]
pub enum QueryValue {
    Int(i64),
    Text(String),
}

impl std::fmt::Display for QueryValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Int(i) => write!(f, "{}", i),
            Self::Text(s) => write!(f, "{}", s),
        }
    }
}

/// Mapping from query key to value, holding active dimensions only.
///
/// Keys are kept sorted so equal queries compare and serialize equally; the
/// listing endpoint treats them as unordered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default, Hash)]
#[serde(transparent)]
pub struct DerivedQuery(pub BTreeMap<String, QueryValue>);

impl DerivedQuery {
    pub fn get(&self, key: &str) -> Option<&QueryValue> {
        self.0.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &QueryValue)> {
        self.0.iter()
    }

    /// String pairs ready for a query string. Encoding is left to the HTTP client.
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        self.0.iter().map(|(k, v)| (k.clone(), v.to_string())).collect()
    }

    /// Parses raw query-string pairs against the descriptor table.
    ///
    /// Unknown keys are dropped. Range keys must parse as integers and must
    /// come as a pair; a lone endpoint or a pair equal to the bounds is dropped.
    pub fn from_query_pairs<'a>(
        descriptors: &[DimensionDescriptor],
        pairs: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Self {
        let raw = pairs.into_iter().collect::<BTreeMap<&str, &str>>();
        let mut values = BTreeMap::new();
        for descriptor in descriptors {
            let value = match &descriptor.kind {
                DimensionKind::BoundedRange { min_key, max_key, .. } => {
                    let min = raw.get(min_key.as_str()).and_then(|v| v.trim().parse::<i64>().ok());
                    let max = raw.get(max_key.as_str()).and_then(|v| v.trim().parse::<i64>().ok());
                    match (min, max) {
                        (Some(min), Some(max)) => DimensionValue::Range(min, max),
                        _ => continue,
                    }
                }
                _ => match raw.get(descriptor.id.as_str()) {
                    Some(token) => DimensionValue::token(*token),
                    None => continue,
                },
            };
            if descriptor.accepts(&value) {
                values.insert(descriptor.id.clone(), value);
            }
        }
        build_derived_query(descriptors, &values)
    }
}

/// Maps the value set to its derived query.
///
/// Dimensions missing from `values` count as default. Ranges emit both
/// endpoints or neither.
pub fn build_derived_query(descriptors: &[DimensionDescriptor], values: &BTreeMap<String, DimensionValue>) -> DerivedQuery {
    let mut query = BTreeMap::new();
    for descriptor in descriptors {
        let Some(value) = values.get(&descriptor.id) else { continue };
        if *value == descriptor.default_value() {
            continue;
        }
        match (&descriptor.kind, value) {
            (DimensionKind::BoundedRange { min_key, max_key, .. }, DimensionValue::Range(min, max)) => {
                query.insert(min_key.clone(), QueryValue::Int(*min));
                query.insert(max_key.clone(), QueryValue::Int(*max));
            }
            (_, DimensionValue::Token(token)) => {
                query.insert(descriptor.id.clone(), QueryValue::Text(token.clone()));
            }
            _ => {}
        }
    }
    DerivedQuery(query)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::job_filters::job_filter_descriptors;

    #[test]
    fn range_pair_is_atomic() {
        let descriptors = job_filter_descriptors();
        let mut values = BTreeMap::new();
        values.insert("salary".to_string(), DimensionValue::Range(0, 120_000));
        let query = build_derived_query(&descriptors, &values);
        assert_eq!(query.get("salaryMin"), Some(&QueryValue::Int(0)));
        assert_eq!(query.get("salaryMax"), Some(&QueryValue::Int(120_000)));

        values.insert("salary".to_string(), DimensionValue::Range(0, 150_000));
        assert!(build_derived_query(&descriptors, &values).is_empty());
    }

    #[test]
    fn tokens_pass_through_untouched() {
        let descriptors = job_filter_descriptors();
        let mut values = BTreeMap::new();
        values.insert("workType".to_string(), DimensionValue::token("Full time"));
        let query = build_derived_query(&descriptors, &values);
        assert_eq!(query.to_query_pairs(), vec![("workType".to_string(), "Full time".to_string())]);
    }

    #[test]
    fn parses_pairs_and_drops_noise() {
        let descriptors = job_filter_descriptors();
        let query = DerivedQuery::from_query_pairs(
            &descriptors,
            [
                ("workType", "Part time"),
                ("salaryMin", "20000"),
                ("salaryMax", "90000"),
                ("utm_source", "newsletter"),
                ("distance", "7000"),
            ],
        );
        assert_eq!(query.len(), 3);
        assert_eq!(query.get("workType"), Some(&QueryValue::Text("Part time".to_string())));
        assert_eq!(query.get("salaryMin"), Some(&QueryValue::Int(20_000)));
        assert_eq!(query.get("distance"), None);

        let lone = DerivedQuery::from_query_pairs(&descriptors, [("salaryMin", "20000")]);
        assert!(lone.is_empty());
    }

    #[test]
    fn extreme_range_endpoints_are_dropped() {
        let descriptors = job_filter_descriptors();
        let wrapped = DerivedQuery::from_query_pairs(&descriptors, [("salaryMin", "0"), ("salaryMax", "-9223372036854775808")]);
        assert!(wrapped.is_empty());

        let max = i64::MAX.to_string();
        let huge = DerivedQuery::from_query_pairs(&descriptors, [("salaryMin", max.as_str()), ("salaryMax", max.as_str())]);
        assert!(huge.is_empty());

        let huge_max = DerivedQuery::from_query_pairs(&descriptors, [("salaryMin", "0"), ("salaryMax", max.as_str())]);
        assert!(huge_max.is_empty());
    }

    #[test]
    fn serializes_as_flat_object() {
        let descriptors = job_filter_descriptors();
        let query = DerivedQuery::from_query_pairs(&descriptors, [("urgentHiring", "true"), ("salaryMin", "5000"), ("salaryMax", "150000")]);
        let json = serde_json::to_value(&query).unwrap();
        assert_eq!(json, serde_json::json!({"salaryMax": 150000, "salaryMin": 5000, "urgentHiring": "true"}));
        let back: DerivedQuery = serde_json::from_value(json).unwrap();
        assert_eq!(back, query);
    }
}
