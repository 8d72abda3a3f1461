//! Inspection commands - dump the loaded graph
//!
//! - `hops matrix` - the adjacency matrix, one row per node
//! - `hops nodes` - the node table (name and assigned index)

use super::GraphSource;
use crate::output::{grid_table, Output, OutputFormat, Outputter};
use anyhow::Result;
use hops_core::GraphEngine;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct MatrixView {
    pub nodes: Vec<String>,
    pub matrix: Vec<Vec<u32>>,
}

impl MatrixView {
    pub fn new(engine: &GraphEngine) -> Self {
        Self {
            nodes: engine
                .registry()
                .iter()
                .map(|(_, name)| name.to_string())
                .collect(),
            matrix: engine.matrix().to_vec(),
        }
    }
}

impl Outputter for MatrixView {
    fn to_plain(&self) -> String {
        let mut output = String::from("---");
        for name in &self.nodes {
            output.push('\t');
            output.push_str(name);
        }
        output.push('\n');

        for (name, row) in self.nodes.iter().zip(&self.matrix) {
            output.push_str(name);
            for weight in row {
                output.push_str(&format!("\t{}", weight));
            }
            output.push('\n');
        }
        output
    }

    fn to_table(&self) -> String {
        let mut headers = vec![String::new()];
        headers.extend(self.nodes.iter().cloned());

        let rows: Vec<Vec<String>> = self
            .nodes
            .iter()
            .zip(&self.matrix)
            .map(|(name, row)| {
                std::iter::once(name.clone())
                    .chain(row.iter().map(|w| w.to_string()))
                    .collect()
            })
            .collect();
        grid_table(&headers, &rows)
    }
}

#[derive(Debug, Serialize)]
pub struct NodeRow {
    pub name: String,
    pub index: usize,
}

#[derive(Debug, Serialize)]
pub struct NodeTable {
    pub nodes: Vec<NodeRow>,
}

impl NodeTable {
    pub fn new(engine: &GraphEngine) -> Self {
        Self {
            nodes: engine
                .registry()
                .iter()
                .map(|(index, name)| NodeRow {
                    name: name.to_string(),
                    index,
                })
                .collect(),
        }
    }
}

impl Outputter for NodeTable {
    fn to_plain(&self) -> String {
        self.nodes
            .iter()
            .map(|node| format!("{}\tIndex: {}\n", node.name, node.index))
            .collect()
    }

    fn to_table(&self) -> String {
        let headers = ["name".to_string(), "index".to_string()];
        let rows: Vec<Vec<String>> = self
            .nodes
            .iter()
            .map(|node| vec![node.name.clone(), node.index.to_string()])
            .collect();
        grid_table(&headers, &rows)
    }
}

pub fn run_matrix(source: &GraphSource, format: OutputFormat) -> Result<()> {
    let engine = source.load()?;
    Output::new(MatrixView::new(&engine), format).render()
}

pub fn run_nodes(source: &GraphSource, format: OutputFormat) -> Result<()> {
    let engine = source.load()?;
    Output::new(NodeTable::new(&engine), format).render()
}
