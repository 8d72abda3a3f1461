//! Command implementations for hops CLI

pub mod inspect;
pub mod path;
pub mod reach;
pub mod routes;

use anyhow::{Context, Result};
use hops_core::{GraphEngine, NameCase};
use std::path::PathBuf;

/// Where to load the graph from and how to normalize its names.
#[derive(Debug, Clone)]
pub struct GraphSource {
    pub file: PathBuf,
    pub case: NameCase,
}

impl GraphSource {
    /// Load and build the graph, failing with the file name in context.
    pub fn load(&self) -> Result<GraphEngine> {
        let engine = GraphEngine::from_edge_file(&self.file, self.case)
            .with_context(|| format!("Failed to load graph from {}", self.file.display()))?;

        tracing::info!(
            "Loaded {} nodes and {} edges from {}",
            engine.node_count(),
            engine.edge_count(),
            self.file.display()
        );
        Ok(engine)
    }
}
