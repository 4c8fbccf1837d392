//! Runtime configuration for a wizard run

use crate::wizard::DEFAULT_OUTPUT_PATH;

/// Environment variable overriding the pre-filled output path
pub const OUTPUT_DIR_ENV: &str = "GEN_CODE_OUTPUT_DIR";

/// Environment variable enabling overwrite of existing files
pub const FORCE_ENV: &str = "GEN_CODE_FORCE";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldConfig {
    /// Value pre-filled in the output path step
    pub default_output: String,
    /// Overwrite files that already exist at the target
    pub overwrite: bool,
}

impl Default for ScaffoldConfig {
    fn default() -> Self {
        Self {
            default_output: DEFAULT_OUTPUT_PATH.to_string(),
            overwrite: false,
        }
    }
}

impl ScaffoldConfig {
    /// Defaults with environment overrides applied
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(dir) = lookup(OUTPUT_DIR_ENV).filter(|d| !d.trim().is_empty()) {
            config.default_output = dir;
        }

        if let Some(flag) = lookup(FORCE_ENV) {
            config.overwrite = matches!(
                flag.trim().to_lowercase().as_str(),
                "1" | "true" | "yes" | "on"
            );
        }

        config
    }

    /// Apply a `--force` flag on top of the environment
    pub fn with_overwrite(mut self, force: bool) -> Self {
        self.overwrite |= force;
        self
    }
}
