use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use glob::Pattern;
use serde::{Deserialize, Serialize};

use crate::rules::CheckRule;

pub const CONFIG_FILE_NAME: &str = ".tscatrc.json";

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Directories searched for `.ts` catalogs, relative to the project dir.
    #[serde(default = "default_roots")]
    pub roots: Vec<String>,
    /// Glob patterns (relative to the project dir) excluded from the scan.
    #[serde(default)]
    pub ignores: Vec<String>,
    /// Rule ids that `check` never runs.
    #[serde(default)]
    pub disabled_rules: Vec<String>,
    /// Locale used by `lookup` when neither `--locale` nor the environment matches.
    #[serde(default)]
    pub fallback_locale: Option<String>,
}

fn default_roots() -> Vec<String> {
    vec![".".to_string()]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            roots: default_roots(),
            ignores: Vec::new(),
            disabled_rules: Vec::new(),
            fallback_locale: None,
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error for invalid glob patterns in `ignores` and for unknown
    /// rule ids in `disabledRules`.
    pub fn validate(&self) -> Result<()> {
        self.ignore_patterns()?;

        for id in &self.disabled_rules {
            if CheckRule::from_id(id).is_none() {
                let known: Vec<&str> = CheckRule::all().into_iter().map(CheckRule::id).collect();
                bail!(
                    "Unknown rule in 'disabledRules': \"{}\" (expected one of: {})",
                    id,
                    known.join(", ")
                );
            }
        }

        Ok(())
    }

    /// Compiled `ignores` patterns.
    pub fn ignore_patterns(&self) -> Result<Vec<Pattern>> {
        self.ignores
            .iter()
            .map(|pattern| {
                Pattern::new(pattern)
                    .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))
            })
            .collect()
    }

    /// Whether `rule` is listed in `disabledRules`.
    pub fn is_disabled(&self, rule: CheckRule) -> bool {
        self.disabled_rules.iter().any(|id| id == rule.id())
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

/// Walk up from `start_dir` until a config file or a `.git` directory is found.
pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            tracing::debug!(path = %path.display(), "loaded config");
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
