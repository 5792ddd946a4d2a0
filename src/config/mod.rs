// Configuration for a returnlint run, read from .returnlint.toml

mod loader;

pub use loader::{
    directory_ancestors, load_config, load_config_from, parse_and_validate_config,
    CONFIG_FILE_NAME,
};

use crate::io::output::OutputFormat;
use serde::{Deserialize, Serialize};

/// Contents of `.returnlint.toml`. Every key is optional.
///
/// Only file selection and output are configurable; the rule itself is fixed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReturnlintConfig {
    /// Glob patterns for paths to skip while walking directories
    #[serde(default = "default_exclude")]
    pub exclude: Vec<String>,

    /// Analyze `_test.go` files too
    #[serde(default = "default_include_tests")]
    pub include_tests: bool,

    /// Worker threads (0 = one per core)
    #[serde(default)]
    pub jobs: usize,

    #[serde(default)]
    pub format: Option<OutputFormat>,
}

impl Default for ReturnlintConfig {
    fn default() -> Self {
        Self {
            exclude: default_exclude(),
            include_tests: default_include_tests(),
            jobs: 0,
            format: None,
        }
    }
}

pub fn default_exclude() -> Vec<String> {
    vec!["**/vendor/**".to_string(), "**/testdata/**".to_string()]
}

pub fn default_include_tests() -> bool {
    true
}

impl ReturnlintConfig {
    /// Reject exclude patterns that do not compile.
    pub fn validate(&self) -> Result<(), String> {
        for pattern in &self.exclude {
            glob::Pattern::new(pattern)
                .map_err(|e| format!("invalid exclude pattern '{}': {}", pattern, e))?;
        }
        Ok(())
    }
}
