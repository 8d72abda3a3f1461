//! Path command - cheapest route between two nodes
//!
//! `hops path YYC YUL` prints `<cost> <hops> YYC-->...-->YUL`.

use super::GraphSource;
use crate::output::{key_value_table, Output, OutputFormat, Outputter};
use anyhow::Result;
use hops_core::ShortestPath;
use serde::Serialize;

/// Rendered result of one path query
#[derive(Debug, Serialize)]
pub struct PathResult {
    pub from: String,
    pub to: String,
    #[serde(flatten)]
    pub result: ShortestPath,
}

impl PathResult {
    pub fn new(result: ShortestPath) -> Self {
        Self {
            from: result.start().to_string(),
            to: result.end().to_string(),
            result,
        }
    }
}

impl Outputter for PathResult {
    fn to_plain(&self) -> String {
        self.result.to_line()
    }

    fn to_table(&self) -> String {
        key_value_table(&[
            ("from", self.from.clone()),
            ("to", self.to.clone()),
            ("cost", self.result.cost.to_string()),
            ("hops", self.result.hops.to_string()),
            ("route", self.result.route()),
        ])
    }
}

pub fn run(source: &GraphSource, from: &str, to: &str, format: OutputFormat) -> Result<()> {
    let engine = source.load()?;
    let result = engine.shortest_path(from, to)?;
    Output::new(PathResult::new(result), format).render()
}
