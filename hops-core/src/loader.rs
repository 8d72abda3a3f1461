//! Edge-list loader.
//!
//! Reads text where every line describes one undirected edge:
//!
//! ```text
//! YYC YVR 700
//! YYC YYZ 2700
//! ```
//!
//! Tokens are separated by any whitespace. Blank lines and lines starting
//! with `#` are ignored.

use crate::error::{GraphError, Result};
use crate::types::EdgeTriple;
use std::path::Path;

const FIELDS_PER_LINE: usize = 3;

/// Parse edge-list text into triples.
///
/// # Errors
///
/// [`GraphError::MalformedInput`] with a 1-based line number when a line does
/// not have exactly three fields or its weight is not a non-negative integer.
pub fn parse_edge_list(text: &str) -> Result<Vec<EdgeTriple>> {
    let mut edges = Vec::new();

    for (line_no, line) in text.lines().enumerate() {
        let line_no = line_no + 1;
        let fields: Vec<&str> = line.split_whitespace().collect();

        match fields.first() {
            None => continue,
            Some(first) if first.starts_with('#') => continue,
            Some(_) => {}
        }

        if fields.len() != FIELDS_PER_LINE {
            return Err(GraphError::MalformedInput {
                line: line_no,
                reason: format!(
                    "expected {} fields, found {}",
                    FIELDS_PER_LINE,
                    fields.len()
                ),
            });
        }

        let weight = parse_weight(fields[2]).map_err(|reason| GraphError::MalformedInput {
            line: line_no,
            reason,
        })?;

        edges.push(EdgeTriple::new(fields[0], fields[1], weight));
    }

    tracing::debug!("Parsed {} edges", edges.len());
    Ok(edges)
}

/// Read and parse an edge-list file.
pub fn load_edge_file(path: &Path) -> Result<Vec<EdgeTriple>> {
    tracing::debug!("Loading edge list from {}", path.display());
    let text = std::fs::read_to_string(path)?;
    parse_edge_list(&text)
}

fn parse_weight(token: &str) -> std::result::Result<u32, String> {
    match token.parse::<i64>() {
        Ok(w) if w < 0 => Err(format!("negative weight {} is not allowed", w)),
        Ok(w) => u32::try_from(w).map_err(|_| format!("weight {} is too large", w)),
        Err(_) => Err(format!("'{}' is not a valid weight", token)),
    }
}
