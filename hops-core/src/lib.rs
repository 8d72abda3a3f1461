//! hops core - weighted undirected graph with shortest-path queries.
//!
//! A graph is built once from `(name, name, weight)` edge triples and is
//! immutable afterwards. Queries run Dijkstra's algorithm over a dense
//! adjacency matrix and return typed results; rendering is left to callers.
//!
//! # Features
//!
//! - **Node registry**: one bidirectional name <-> index mapping
//! - **Dense Dijkstra**: deterministic lowest-index tie-breaking
//! - **Typed failures**: unknown nodes and unreachable destinations are errors,
//!   not sentinel costs
//! - **Edge-list loader**: whitespace-separated `a b weight` lines
//!
//! # Usage
//!
//! ```
//! use hops_core::GraphEngine;
//!
//! let engine = GraphEngine::from_triples([("X", "Y", 5)])?;
//! let result = engine.shortest_path("Y", "X")?;
//! assert_eq!(result.to_line(), "5 1 Y-->X\n");
//! # Ok::<(), hops_core::GraphError>(())
//! ```

pub mod error;
pub mod graph;
pub mod loader;
pub mod registry;
pub mod types;

pub use error::{GraphError, Result};
pub use graph::GraphEngine;
pub use registry::NodeRegistry;
pub use types::{EdgeTriple, NameCase, ShortestPath};

/// Get the version of hops-core.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
