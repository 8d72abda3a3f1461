//! hops configuration loading from `.hopsrc.toml`.
//!
//! Configuration is optional - hops uses built-in defaults when no config
//! file exists, and command-line flags override anything set here.
//!
//! # Example Configuration
//!
//! ```toml
//! [graph]
//! file = "data/airports.txt"
//! case = "upper"
//!
//! [output]
//! format = "table"
//! color = true
//!
//! [[routes]]
//! from = "YYC"
//! to = "YYZ"
//! ```

use hops_core::NameCase;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Name of the config file looked up in the working directory.
pub const CONFIG_FILE: &str = ".hopsrc.toml";

/// Edge list used when neither `--file` nor `[graph].file` is given.
const DEFAULT_GRAPH_FILE: &str = "test.txt";

/// Routes queried by `hops routes` when the config lists none.
const DEFAULT_ROUTES: &[(&str, &str)] = &[("YYC", "YYZ"), ("YYC", "YUL"), ("YYC", "YVR")];

/// Root configuration structure loaded from `.hopsrc.toml`.
#[derive(Debug, Deserialize, Default)]
pub struct HopsConfig {
    /// Where the graph comes from and how names are normalized.
    #[serde(default)]
    pub graph: GraphSection,

    /// Output formatting preferences.
    #[serde(default)]
    pub output: OutputSettings,

    /// Routes for `hops routes`. Empty means the built-in list.
    #[serde(default)]
    pub routes: Vec<RouteSpec>,
}

#[derive(Debug, Deserialize, Default)]
pub struct GraphSection {
    /// Path to the edge-list file, relative to the working directory.
    #[serde(default)]
    pub file: Option<String>,

    /// Name normalization policy: `upper` (default) or `preserve`.
    #[serde(default)]
    pub case: Option<NameCase>,
}

/// Output formatting preferences.
///
/// Command-line flags (e.g., `--format json`) override these settings.
#[derive(Debug, Deserialize, Default)]
pub struct OutputSettings {
    /// Valid values: `plain`, `table`, `json`. Default: `plain`
    #[serde(default)]
    pub format: Option<String>,

    /// Whether to use colored output. Defaults to auto-detection.
    #[serde(default)]
    pub color: Option<bool>,
}

/// One `from -> to` query.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct RouteSpec {
    pub from: String,
    pub to: String,
}

impl HopsConfig {
    /// Load configuration from `.hopsrc.toml` in the given directory.
    ///
    /// If the config file doesn't exist or can't be parsed, returns defaults.
    /// Parse errors are logged as warnings but don't cause failures.
    pub fn load(root: &Path) -> Self {
        let config_path = root.join(CONFIG_FILE);
        if config_path.exists() {
            match std::fs::read_to_string(&config_path) {
                Ok(content) => match toml::from_str(&content) {
                    Ok(config) => return config,
                    Err(e) => {
                        tracing::warn!("Failed to parse {}: {}", CONFIG_FILE, e);
                    }
                },
                Err(e) => {
                    tracing::warn!("Failed to read {}: {}", CONFIG_FILE, e);
                }
            }
        }
        Self::default()
    }

    /// Edge-list file to load, falling back to `test.txt`.
    pub fn graph_file(&self) -> PathBuf {
        PathBuf::from(self.graph.file.as_deref().unwrap_or(DEFAULT_GRAPH_FILE))
    }

    pub fn name_case(&self) -> NameCase {
        self.graph.case.unwrap_or_default()
    }

    /// Get the default output format, if configured.
    pub fn default_format(&self) -> Option<&str> {
        self.output.format.as_deref()
    }

    /// Returns the configured value, or `None` to use auto-detection.
    pub fn use_color(&self) -> Option<bool> {
        self.output.color
    }

    /// Routes to query, with the built-in list when none are configured.
    pub fn routes(&self) -> Vec<RouteSpec> {
        if !self.routes.is_empty() {
            return self.routes.clone();
        }
        DEFAULT_ROUTES
            .iter()
            .map(|(from, to)| RouteSpec {
                from: from.to_string(),
                to: to.to_string(),
            })
            .collect()
    }
}
