// File: crates/graph-core/src/resolution.rs
// Summary: Time-bucket granularity tokens accepted by the metrics endpoint.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Granularity of the requested series. Exactly one resolution is active
/// per fetch; `minute` is the default when none is given.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Resolution {
    #[default]
    Minute,
    FiveMinutes,
    Hour,
}

impl Resolution {
    /// The token as it appears in the query string.
    pub fn token(&self) -> &'static str {
        match self {
            Resolution::Minute => "minute",
            Resolution::FiveMinutes => "five_minutes",
            Resolution::Hour => "hour",
        }
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("invalid resolution '{0}'; valid values are 'minute', 'five_minutes', 'hour'")]
pub struct ParseResolutionError(String);

impl FromStr for Resolution {
    type Err = ParseResolutionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "minute" => Ok(Resolution::Minute),
            "five_minutes" => Ok(Resolution::FiveMinutes),
            "hour" => Ok(Resolution::Hour),
            other => Err(ParseResolutionError(other.to_string())),
        }
    }
}
