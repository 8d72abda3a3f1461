//! Routes command - run a batch of path queries
//!
//! Queries every configured route against one loaded graph. A failing route
//! (unknown node, no path) is reported and the rest still run.

use super::GraphSource;
use crate::config::RouteSpec;
use crate::output::{grid_table, print_error, Output, OutputFormat, Outputter};
use anyhow::Result;
use hops_core::{GraphEngine, ShortestPath};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct RouteOutcome {
    pub from: String,
    pub to: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<ShortestPath>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RouteReport {
    pub routes: Vec<RouteOutcome>,
}

impl RouteReport {
    /// Query every route against the engine.
    pub fn collect(engine: &GraphEngine, routes: &[RouteSpec]) -> Self {
        let routes = routes
            .iter()
            .map(|spec| match engine.shortest_path(&spec.from, &spec.to) {
                Ok(result) => RouteOutcome {
                    from: spec.from.clone(),
                    to: spec.to.clone(),
                    result: Some(result),
                    error: None,
                },
                Err(e) => RouteOutcome {
                    from: spec.from.clone(),
                    to: spec.to.clone(),
                    result: None,
                    error: Some(e.to_string()),
                },
            })
            .collect();
        Self { routes }
    }

    pub fn failures(&self) -> impl Iterator<Item = &RouteOutcome> {
        self.routes.iter().filter(|r| r.error.is_some())
    }
}

impl Outputter for RouteReport {
    /// Successful routes only; failures go to stderr.
    fn to_plain(&self) -> String {
        self.routes
            .iter()
            .filter_map(|r| r.result.as_ref())
            .map(ShortestPath::to_line)
            .collect()
    }

    fn to_table(&self) -> String {
        let headers = ["from", "to", "cost", "hops", "route"].map(String::from);
        let rows: Vec<Vec<String>> = self
            .routes
            .iter()
            .map(|r| match (&r.result, &r.error) {
                (Some(result), _) => vec![
                    r.from.clone(),
                    r.to.clone(),
                    result.cost.to_string(),
                    result.hops.to_string(),
                    result.route(),
                ],
                (None, error) => vec![
                    r.from.clone(),
                    r.to.clone(),
                    "-".to_string(),
                    "-".to_string(),
                    error.clone().unwrap_or_default(),
                ],
            })
            .collect();
        grid_table(&headers, &rows)
    }
}

pub fn run(source: &GraphSource, routes: &[RouteSpec], format: OutputFormat) -> Result<()> {
    let engine = source.load()?;
    let report = RouteReport::collect(&engine, routes);

    if format == OutputFormat::Plain {
        for failure in report.failures() {
            print_error(failure.error.as_deref().unwrap_or_default());
        }
    }

    let failed = report.failures().count();
    let total = report.routes.len();
    Output::new(report, format).render()?;

    if failed > 0 {
        anyhow::bail!("{} of {} routes failed", failed, total);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(from: &str, to: &str) -> RouteSpec {
        RouteSpec {
            from: from.to_string(),
            to: to.to_string(),
        }
    }

    fn create_test_graph() -> GraphEngine {
        GraphEngine::from_triples([("YYC", "YYZ", 4), ("YYZ", "YUL", 1), ("YYC", "YVR", 3)])
            .unwrap()
    }

    #[test]
    fn test_collect_all_ok() {
        let engine = create_test_graph();
        let report = RouteReport::collect(
            &engine,
            &[spec("YYC", "YYZ"), spec("YYC", "YUL"), spec("YYC", "YVR")],
        );
        assert_eq!(report.failures().count(), 0);
        assert_eq!(
            report.render(OutputFormat::Plain),
            "4 1 YYC-->YYZ\n5 2 YYC-->YYZ-->YUL\n3 1 YYC-->YVR\n"
        );
    }

    #[test]
    fn test_failures_are_kept() {
        let engine = create_test_graph();
        let report = RouteReport::collect(&engine, &[spec("YYC", "LAX"), spec("YVR", "YUL")]);

        assert_eq!(report.failures().count(), 1);
        assert_eq!(report.render(OutputFormat::Plain), "8 3 YVR-->YYC-->YYZ-->YUL\n");

        let json: serde_json::Value =
            serde_json::from_str(&report.render(OutputFormat::Json)).unwrap();
        assert_eq!(json["routes"][0]["error"], "Unknown node: LAX");
        assert_eq!(json["routes"][1]["result"]["cost"], 8);
    }

    #[test]
    fn test_table_shows_errors() {
        let engine = create_test_graph();
        let report = RouteReport::collect(&engine, &[spec("YYC", "LAX")]);
        assert!(report.render(OutputFormat::Table).contains("Unknown node: LAX"));
    }
}
