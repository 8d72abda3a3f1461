//! Shared types for graph construction and query results.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Separator placed between node names when a path is rendered.
pub const PATH_SEPARATOR: &str = "-->";

/// One undirected weighted edge as read from an edge list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeTriple {
    pub from: String,
    pub to: String,
    pub weight: u32,
}

impl EdgeTriple {
    pub fn new(from: impl Into<String>, to: impl Into<String>, weight: u32) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            weight,
        }
    }
}

impl<S: Into<String>> From<(S, S, u32)> for EdgeTriple {
    fn from((from, to, weight): (S, S, u32)) -> Self {
        Self::new(from, to, weight)
    }
}

/// How node names are normalized before they reach the registry.
///
/// The same policy is applied when edges are loaded and when queries are
/// resolved, so a graph never stores names that its own queries cannot find.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NameCase {
    /// ASCII upper-case every name (`yyc` and `YYC` are the same node).
    #[default]
    Upper,
    /// Use names exactly as given.
    Preserve,
}

impl NameCase {
    /// Apply this policy to a name.
    pub fn normalize(self, name: &str) -> String {
        match self {
            NameCase::Upper => name.to_ascii_uppercase(),
            NameCase::Preserve => name.to_string(),
        }
    }
}

impl FromStr for NameCase {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "upper" => Ok(NameCase::Upper),
            "preserve" => Ok(NameCase::Preserve),
            _ => Err(format!("Unknown name case: '{}'", s)),
        }
    }
}

/// Result of a successful shortest-path query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortestPath {
    /// Sum of edge weights along the path.
    pub cost: u64,
    /// Number of edges traversed.
    pub hops: usize,
    /// Node names from start to end, inclusive.
    pub path: Vec<String>,
}

impl ShortestPath {
    pub fn start(&self) -> &str {
        self.path.first().map(String::as_str).unwrap_or_default()
    }

    pub fn end(&self) -> &str {
        self.path.last().map(String::as_str).unwrap_or_default()
    }

    /// Path joined with `-->`.
    pub fn route(&self) -> String {
        self.path.join(PATH_SEPARATOR)
    }

    /// Canonical one-line rendering: `<cost> <hops> A-->B-->C\n`.
    pub fn to_line(&self) -> String {
        format!("{}\n", self)
    }
}

impl fmt::Display for ShortestPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.cost, self.hops, self.route())
    }
}
