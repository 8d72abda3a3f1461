//! Reach command - distance from one node to every other node

use super::GraphSource;
use crate::output::{grid_table, Output, OutputFormat, Outputter};
use anyhow::Result;
use hops_core::GraphEngine;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct DistanceRow {
    pub node: String,
    /// `None` when the node cannot be reached.
    pub distance: Option<u64>,
}

#[derive(Debug, Serialize)]
pub struct DistanceTable {
    pub from: String,
    pub rows: Vec<DistanceRow>,
}

impl DistanceTable {
    pub fn build(engine: &GraphEngine, from: &str) -> Result<Self> {
        let rows = engine
            .distances_from(from)?
            .into_iter()
            .map(|(node, distance)| DistanceRow { node, distance })
            .collect();
        Ok(Self {
            from: engine.name_case().normalize(from),
            rows,
        })
    }

    fn cell(distance: Option<u64>) -> String {
        distance.map_or_else(|| "-".to_string(), |d| d.to_string())
    }
}

impl Outputter for DistanceTable {
    fn to_plain(&self) -> String {
        self.rows
            .iter()
            .map(|row| format!("{}\t{}\n", row.node, Self::cell(row.distance)))
            .collect()
    }

    fn to_table(&self) -> String {
        let headers = ["node".to_string(), format!("distance from {}", self.from)];
        let rows: Vec<Vec<String>> = self
            .rows
            .iter()
            .map(|row| vec![row.node.clone(), Self::cell(row.distance)])
            .collect();
        grid_table(&headers, &rows)
    }
}

pub fn run(source: &GraphSource, from: &str, format: OutputFormat) -> Result<()> {
    let engine = source.load()?;
    Output::new(DistanceTable::build(&engine, from)?, format).render()
}
