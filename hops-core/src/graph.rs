//! Graph engine backed by a dense adjacency matrix.
//!
//! The engine is built once from a list of weighted edges and is read-only
//! afterwards. Shortest paths are answered with Dijkstra's algorithm over the
//! matrix, which is O(V²) per query and fine for the small graphs this crate
//! targets.
//!
//! # Architecture
//!
//! ```text
//! edge triples -> NodeRegistry (name <-> index) -> adjacency matrix -> Dijkstra
//! ```
//!
//! # Conventions
//!
//! - Edges are undirected: `matrix[a][b] == matrix[b][a]`.
//! - A weight of `0` means "no edge". Zero-weight input edges are therefore
//!   indistinguishable from missing ones.
//! - Node names pass through the engine's [`NameCase`] policy both when edges
//!   are loaded and when queries are resolved.

use crate::error::{GraphError, Result};
use crate::loader;
use crate::registry::NodeRegistry;
use crate::types::{EdgeTriple, NameCase, ShortestPath};
use std::path::Path;

/// Weighted undirected graph with single-source shortest-path queries.
#[derive(Debug, Clone, Default)]
pub struct GraphEngine {
    registry: NodeRegistry,
    matrix: Vec<Vec<u32>>,
    name_case: NameCase,
}

/// Per-vertex output of one Dijkstra run.
struct Distances {
    distance: Vec<Option<u64>>,
    parent: Vec<Option<usize>>,
}

impl GraphEngine {
    /// Create an empty graph using the default name policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty graph with an explicit name policy.
    pub fn with_name_case(name_case: NameCase) -> Self {
        Self {
            name_case,
            ..Self::default()
        }
    }

    /// Build a graph from edge triples using the default name policy.
    ///
    /// # Example
    ///
    /// ```
    /// use hops_core::GraphEngine;
    ///
    /// let engine = GraphEngine::from_triples([("A", "B", 1), ("B", "C", 2), ("A", "C", 10)])?;
    /// assert_eq!(engine.shortest_path_line("A", "C")?, "3 2 A-->B-->C\n");
    /// # Ok::<(), hops_core::GraphError>(())
    /// ```
    pub fn from_triples<I, E>(edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = E>,
        E: Into<EdgeTriple>,
    {
        Self::from_triples_with_case(edges, NameCase::default())
    }

    /// Build a graph from edge triples.
    ///
    /// All endpoints are registered first (in input order) so the matrix can
    /// be allocated at its final size, then every edge is written
    /// symmetrically. When the same pair appears more than once the last
    /// weight wins.
    pub fn from_triples_with_case<I, E>(edges: I, name_case: NameCase) -> Result<Self>
    where
        I: IntoIterator<Item = E>,
        E: Into<EdgeTriple>,
    {
        let edges: Vec<EdgeTriple> = edges
            .into_iter()
            .map(Into::into)
            .map(|edge| EdgeTriple {
                from: name_case.normalize(&edge.from),
                to: name_case.normalize(&edge.to),
                weight: edge.weight,
            })
            .collect();

        let mut registry = NodeRegistry::new();
        for edge in &edges {
            registry.register(&edge.from);
            registry.register(&edge.to);
        }

        let n = registry.len();
        let mut engine = GraphEngine {
            registry,
            matrix: vec![vec![0; n]; n],
            name_case,
        };

        for edge in &edges {
            engine.add_edge(edge)?;
        }

        tracing::debug!(
            nodes = engine.node_count(),
            edges = engine.edge_count(),
            "Built graph from {} edge lines",
            edges.len()
        );

        Ok(engine)
    }

    /// Load an edge-list file and build a graph from it.
    pub fn from_edge_file(path: &Path, name_case: NameCase) -> Result<Self> {
        let edges = loader::load_edge_file(path)?;
        Self::from_triples_with_case(edges, name_case)
    }

    /// Find the cheapest path between two nodes.
    ///
    /// # Errors
    ///
    /// - [`GraphError::UnknownNode`] if either name is not in the graph.
    /// - [`GraphError::Unreachable`] if no path connects the two nodes.
    pub fn shortest_path(&self, start: &str, end: &str) -> Result<ShortestPath> {
        let from = self.resolve(start)?;
        let to = self.resolve(end)?;

        let run = self.dijkstra(from);

        let cost = run.distance[to].ok_or_else(|| GraphError::Unreachable {
            from: self.registry.name(from).to_string(),
            to: self.registry.name(to).to_string(),
        })?;

        // Walk parents back from the destination; only `from` has no parent.
        let mut path = Vec::new();
        let mut current = Some(to);
        while let Some(vertex) = current {
            path.push(self.registry.name(vertex).to_string());
            current = run.parent[vertex];
        }
        path.reverse();

        Ok(ShortestPath {
            cost,
            hops: path.len() - 1,
            path,
        })
    }

    /// Shortest path rendered as `<cost> <hops> A-->B-->C\n`.
    pub fn shortest_path_line(&self, start: &str, end: &str) -> Result<String> {
        self.shortest_path(start, end).map(|result| result.to_line())
    }

    /// Distance from `start` to every node, in index order.
    ///
    /// Unreachable nodes have `None`.
    pub fn distances_from(&self, start: &str) -> Result<Vec<(String, Option<u64>)>> {
        let from = self.resolve(start)?;
        let run = self.dijkstra(from);

        Ok(self
            .registry
            .iter()
            .map(|(idx, name)| (name.to_string(), run.distance[idx]))
            .collect())
    }

    /// Get the number of nodes in the graph.
    pub fn node_count(&self) -> usize {
        self.registry.len()
    }

    /// Get the number of undirected edges with a positive weight.
    pub fn edge_count(&self) -> usize {
        self.matrix
            .iter()
            .enumerate()
            .map(|(i, row)| row.iter().skip(i + 1).filter(|&&w| w > 0).count())
            .sum()
    }

    /// Check if a node exists in the graph.
    pub fn has_node(&self, name: &str) -> bool {
        self.registry.contains(&self.name_case.normalize(name))
    }

    /// Weight of the edge between two nodes, if there is one.
    pub fn weight(&self, a: &str, b: &str) -> Option<u32> {
        let a = self.registry.index_of(&self.name_case.normalize(a))?;
        let b = self.registry.index_of(&self.name_case.normalize(b))?;
        Some(self.matrix[a][b]).filter(|&w| w > 0)
    }

    /// Read-only view of the adjacency matrix, indexed like the registry.
    pub fn matrix(&self) -> &[Vec<u32>] {
        &self.matrix
    }

    pub fn registry(&self) -> &NodeRegistry {
        &self.registry
    }

    pub fn name_case(&self) -> NameCase {
        self.name_case
    }
}

impl GraphEngine {
    /// Write one edge into both halves of the matrix.
    fn add_edge(&mut self, edge: &EdgeTriple) -> Result<()> {
        let unresolved = || GraphError::UnresolvedEdge {
            from: edge.from.clone(),
            to: edge.to.clone(),
        };
        let a = self.registry.index_of(&edge.from).ok_or_else(unresolved)?;
        let b = self.registry.index_of(&edge.to).ok_or_else(unresolved)?;

        if a == b {
            tracing::warn!("Skipping self-loop on {}", edge.from);
            return Ok(());
        }
        if edge.weight == 0 {
            tracing::warn!(
                "Edge {} -- {} has weight 0 and will be treated as absent",
                edge.from,
                edge.to
            );
        }

        self.matrix[a][b] = edge.weight;
        self.matrix[b][a] = edge.weight;
        Ok(())
    }

    /// Normalize a query name and map it to its index.
    fn resolve(&self, name: &str) -> Result<usize> {
        let name = self.name_case.normalize(name);
        self.registry
            .index_of(&name)
            .ok_or(GraphError::UnknownNode { name })
    }

    /// Single-source Dijkstra over the dense matrix.
    ///
    /// Runs exactly `node_count` rounds. Each round finalizes the unvisited
    /// vertex with the smallest known distance (lowest index on ties); once
    /// only unreachable vertices remain the rounds do nothing.
    fn dijkstra(&self, start: usize) -> Distances {
        let n = self.node_count();
        let mut distance: Vec<Option<u64>> = vec![None; n];
        let mut parent: Vec<Option<usize>> = vec![None; n];
        let mut visited = vec![false; n];

        distance[start] = Some(0);

        for _ in 0..n {
            // `min_by_key` keeps the first minimum, i.e. the lowest index
            let nearest = (0..n)
                .filter(|&v| !visited[v])
                .filter_map(|v| distance[v].map(|d| (v, d)))
                .min_by_key(|&(_, d)| d);

            let Some((u, du)) = nearest else {
                continue;
            };
            visited[u] = true;

            for (v, &w) in self.matrix[u].iter().enumerate() {
                if w == 0 {
                    continue;
                }
                let candidate = du + u64::from(w);
                if distance[v].map_or(true, |dv| candidate < dv) {
                    distance[v] = Some(candidate);
                    parent[v] = Some(u);
                }
            }
        }

        Distances { distance, parent }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_graph() -> GraphEngine {
        // YVR --3-- YYC --4-- YYZ --1-- YUL
        //            \                 /
        //             +------10-------+
        // YHZ is isolated from the rest (only linked to YQB).
        GraphEngine::from_triples([
            ("YVR", "YYC", 3),
            ("YYC", "YYZ", 4),
            ("YYZ", "YUL", 1),
            ("YYC", "YUL", 10),
            ("YHZ", "YQB", 2),
        ])
        .unwrap()
    }

    #[test]
    fn test_construction_counts() {
        let engine = create_test_graph();
        assert_eq!(engine.node_count(), 6);
        assert_eq!(engine.edge_count(), 5);
        assert_eq!(engine.matrix().len(), 6);
        assert!(engine.matrix().iter().all(|row| row.len() == 6));
    }

    #[test]
    fn test_indices_follow_first_seen_order() {
        let engine = create_test_graph();
        let names: Vec<&str> = engine.registry().iter().map(|(_, n)| n).collect();
        assert_eq!(names, vec!["YVR", "YYC", "YYZ", "YUL", "YHZ", "YQB"]);
    }

    #[test]
    fn test_matrix_is_symmetric() {
        let engine = create_test_graph();
        let m = engine.matrix();
        for i in 0..m.len() {
            assert_eq!(m[i][i], 0);
            for j in 0..m.len() {
                assert_eq!(m[i][j], m[j][i]);
            }
        }
    }

    #[test]
    fn test_last_weight_wins() {
        let engine =
            GraphEngine::from_triples([("A", "B", 7), ("C", "A", 1), ("B", "A", 2)]).unwrap();
        assert_eq!(engine.weight("A", "B"), Some(2));
        assert_eq!(engine.weight("B", "A"), Some(2));
        assert_eq!(engine.edge_count(), 2);
    }

    #[test]
    fn test_self_loop_is_skipped() {
        let engine = GraphEngine::from_triples([("A", "A", 5), ("A", "B", 1)]).unwrap();
        assert_eq!(engine.node_count(), 2);
        assert_eq!(engine.matrix()[0][0], 0);
        assert_eq!(engine.weight("A", "A"), None);
    }

    #[test]
    fn test_zero_weight_is_no_edge() {
        let engine = GraphEngine::from_triples([("A", "B", 0)]).unwrap();
        assert_eq!(engine.node_count(), 2);
        assert_eq!(engine.edge_count(), 0);
        assert!(matches!(
            engine.shortest_path("A", "B"),
            Err(GraphError::Unreachable { .. })
        ));
    }

    #[test]
    fn test_shortest_path_prefers_cheaper_detour() {
        let engine = GraphEngine::from_triples([("A", "B", 1), ("B", "C", 2), ("A", "C", 10)])
            .unwrap();
        let result = engine.shortest_path("A", "C").unwrap();
        assert_eq!(result.cost, 3);
        assert_eq!(result.hops, 2);
        assert_eq!(result.path, vec!["A", "B", "C"]);
        assert_eq!(result.to_line(), "3 2 A-->B-->C\n");
    }

    #[test]
    fn test_single_edge_reverse_direction() {
        let engine = GraphEngine::from_triples([("X", "Y", 5)]).unwrap();
        assert_eq!(engine.shortest_path_line("Y", "X").unwrap(), "5 1 Y-->X\n");
    }

    #[test]
    fn test_path_to_self() {
        let engine = create_test_graph();
        let result = engine.shortest_path("YYZ", "YYZ").unwrap();
        assert_eq!(result.cost, 0);
        assert_eq!(result.hops, 0);
        assert_eq!(result.path, vec!["YYZ"]);
    }

    #[test]
    fn test_multi_hop_route() {
        let engine = create_test_graph();
        let result = engine.shortest_path("YVR", "YUL").unwrap();
        assert_eq!(result.to_line(), "8 3 YVR-->YYC-->YYZ-->YUL\n");
    }

    #[test]
    fn test_query_names_are_normalized() {
        let engine = create_test_graph();
        let result = engine.shortest_path("yyc", "yyz").unwrap();
        assert_eq!(result.path, vec!["YYC", "YYZ"]);
        assert!(engine.has_node("yvr"));
    }

    #[test]
    fn test_loaded_names_are_normalized() {
        let engine = GraphEngine::from_triples([("yyc", "YYC", 1), ("yyc", "yvr", 2)]).unwrap();
        // "yyc" and "YYC" collapse into one node, so the first edge is a self-loop
        assert_eq!(engine.node_count(), 2);
        assert_eq!(engine.shortest_path_line("YVR", "yyc").unwrap(), "2 1 YVR-->YYC\n");
    }

    #[test]
    fn test_preserve_case_is_exact() {
        let engine =
            GraphEngine::from_triples_with_case([("a", "A", 1)], NameCase::Preserve).unwrap();
        assert_eq!(engine.node_count(), 2);
        assert_eq!(engine.shortest_path("a", "A").unwrap().cost, 1);
        assert!(matches!(
            engine.shortest_path("a", "b"),
            Err(GraphError::UnknownNode { name }) if name == "b"
        ));
    }

    #[test]
    fn test_unknown_node() {
        let engine = create_test_graph();
        let err = engine.shortest_path("YYC", "LAX").unwrap_err();
        assert!(matches!(err, GraphError::UnknownNode { ref name } if name == "LAX"));

        let err = engine.shortest_path("SFO", "YYC").unwrap_err();
        assert!(matches!(err, GraphError::UnknownNode { ref name } if name == "SFO"));
    }

    #[test]
    fn test_unreachable() {
        let engine = create_test_graph();
        let err = engine.shortest_path("YYC", "YHZ").unwrap_err();
        match err {
            GraphError::Unreachable { from, to } => {
                assert_eq!(from, "YYC");
                assert_eq!(to, "YHZ");
            }
            other => panic!("expected Unreachable, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_graph() {
        let engine = GraphEngine::new();
        assert_eq!(engine.node_count(), 0);
        assert_eq!(engine.edge_count(), 0);
        assert!(matches!(
            engine.shortest_path("A", "A"),
            Err(GraphError::UnknownNode { .. })
        ));
        assert_eq!(
            GraphEngine::with_name_case(NameCase::Preserve).name_case(),
            NameCase::Preserve
        );
    }

    #[test]
    fn test_tie_break_prefers_lowest_index() {
        // Two equal-cost routes A->B->D and A->C->D. B is registered before C,
        // so B is finalized first and becomes D's parent.
        let engine = GraphEngine::from_triples([
            ("A", "B", 1),
            ("A", "C", 1),
            ("B", "D", 1),
            ("C", "D", 1),
        ])
        .unwrap();
        let result = engine.shortest_path("A", "D").unwrap();
        assert_eq!(result.path, vec!["A", "B", "D"]);
    }

    #[test]
    fn test_distances_from() {
        let engine = create_test_graph();
        let distances = engine.distances_from("YYC").unwrap();
        assert_eq!(distances.len(), 6);
        assert_eq!(distances[0], ("YVR".to_string(), Some(3)));
        assert_eq!(distances[1], ("YYC".to_string(), Some(0)));
        assert_eq!(distances[3], ("YUL".to_string(), Some(5)));
        assert_eq!(distances[4], ("YHZ".to_string(), None));
    }

    #[test]
    fn test_repeated_queries_are_identical() {
        let engine = create_test_graph();
        let first = engine.shortest_path("YVR", "YUL").unwrap();
        let second = engine.shortest_path("YVR", "YUL").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_large_weights_do_not_overflow() {
        let engine =
            GraphEngine::from_triples([("A", "B", u32::MAX), ("B", "C", u32::MAX)]).unwrap();
        let result = engine.shortest_path("A", "C").unwrap();
        assert_eq!(result.cost, 2 * u64::from(u32::MAX));
    }

    #[test]
    fn test_engine_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<GraphEngine>();
    }
}
