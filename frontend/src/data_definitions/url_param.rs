//! URL parameter helpers and types.

use std::{fmt::Display, str::FromStr};

use base64::engine::general_purpose::URL_SAFE;
use base64::Engine;
use serde::{Deserialize, Serialize};


/// Route segment carrying any serde value as URL-safe base64 CBOR.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct UrlParam<T>(pub T);

impl <T> From<T> for UrlParam<T> {
    fn from(value: T) -> Self {
        UrlParam(value)
    }
}

// Display must produce exactly what FromStr accepts
impl<T: Serialize> Display for UrlParam<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut serialized = Vec::new();
        if ciborium::into_writer(&self.0, &mut serialized).is_ok() {
            write!(f, "{}", URL_SAFE.encode(serialized))?;
        }
        Ok(())
    }
}

#[derive(Debug)]
pub enum StateParseError {
    DecodeError(base64::DecodeError),
    CiboriumError(ciborium::de::Error<std::io::Error>),
}

impl std::fmt::Display for StateParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DecodeError(err) => write!(f, "Failed to decode base64: {}", err),
            Self::CiboriumError(err) => write!(f, "Failed to deserialize: {}", err),
        }
    }
}

impl std::error::Error for StateParseError {}

impl<T: for<'de> Deserialize<'de>> FromStr for UrlParam<T> {
    type Err = StateParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let decoded = URL_SAFE
            .decode(s.as_bytes())
            .map_err(StateParseError::DecodeError)?;
        let parsed = ciborium::from_reader(std::io::Cursor::new(decoded))
            .map_err(StateParseError::CiboriumError)?;
        Ok(UrlParam(parsed))
    }
}

#[cfg(test)]
mod tests {
    use common::{filter_state::FilterState, job_listing::JobSearchQuery};

    use super::*;

    #[test]
    fn job_search_survives_the_url() {
        let mut state = FilterState::for_job_search();
        state.select_option("workType", "Full time");
        state.move_range_min("salary", 80_000);
        let query = JobSearchQuery::from_keyword("nurse").with_filters(state.derived_query());

        let segment = UrlParam::from(query.clone()).to_string();
        assert!(!segment.contains('/'));
        let parsed: UrlParam<JobSearchQuery> = segment.parse().unwrap();
        assert_eq!(parsed.0, query);
    }

    #[test]
    fn garbage_segment_is_an_error() {
        let parsed = "not base64!".parse::<UrlParam<JobSearchQuery>>();
        assert!(matches!(parsed, Err(StateParseError::DecodeError(_))));
    }
}
