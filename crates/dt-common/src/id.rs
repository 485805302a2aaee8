//! Query identity types.
//!
//! Each probability query handled by the server or CLI gets a short
//! identifier so log lines and error reports can be correlated.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Query ID for tracing individual probability queries.
///
/// Format: `qry-<date>-<time>-<random>`
/// Example: `qry-20260115-143022-abc123`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QueryId(pub String);

impl QueryId {
    /// Generate a new query ID.
    pub fn new() -> Self {
        let now = chrono::Utc::now();
        let random: String = uuid::Uuid::new_v4().to_string().chars().take(6).collect();
        QueryId(format!("qry-{}-{}", now.format("%Y%m%d-%H%M%S"), random))
    }

    /// Parse an existing query ID string.
    pub fn parse(s: &str) -> Option<Self> {
        if s.starts_with("qry-") && s.len() > 20 {
            Some(QueryId(s.to_string()))
        } else {
            None
        }
    }
}

impl Default for QueryId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for QueryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
