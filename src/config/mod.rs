//! Project configuration read from `.dupexports.toml`.
//!
//! ```toml
//! whitelist = ["Config", "default"]
//! ignore = ["**/generated/**"]
//! parallel = true
//! ```

pub mod loader;

pub use loader::{discover_config, load_config_file};

use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".dupexports.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    /// Names exempt from duplicate detection
    #[serde(default)]
    pub whitelist: Vec<String>,

    /// Ignore globs, relative to the analyzed root
    #[serde(default)]
    pub ignore: Vec<String>,

    /// Parse files on the rayon pool
    #[serde(default = "default_parallel")]
    pub parallel: bool,
}

fn default_parallel() -> bool {
    true
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            whitelist: Vec::new(),
            ignore: Vec::new(),
            parallel: default_parallel(),
        }
    }
}

impl ProjectConfig {
    /// Append command-line values; `no_parallel` switches parallel parsing off.
    pub fn merge_cli(mut self, whitelist: &[String], ignore: &[String], no_parallel: bool) -> Self {
        self.whitelist.extend(whitelist.iter().cloned());
        self.ignore.extend(ignore.iter().cloned());
        if no_parallel {
            self.parallel = false;
        }
        self
    }
}
