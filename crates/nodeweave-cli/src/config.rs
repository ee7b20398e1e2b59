//! Layered configuration: project file over user file over defaults.
//!
//! - project: `./.nodeweave/config.toml`
//! - user: `<config_dir>/nodeweave/config.toml` (via [`dirs::config_dir`])
//!
//! ```toml
//! [output]
//! format = "json"        # pretty | text | json
//!
//! [analysis]
//! strict_acyclic = true  # refuse to reduce cyclic graphs
//! sort_output = true     # sort IDs in every listing
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// One config file as written on disk. Every key is optional so that a
/// project file can override only what it names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(default)]
    pub output: OutputSection,
    #[serde(default)]
    pub analysis: AnalysisSection,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputSection {
    #[serde(default)]
    pub format: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnalysisSection {
    #[serde(default)]
    pub strict_acyclic: Option<bool>,
    #[serde(default)]
    pub sort_output: Option<bool>,
}

/// Settings after merging every layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EffectiveConfig {
    /// Preferred output mode name, if any layer set one.
    pub format: Option<String>,
    /// Refuse to run acyclic-only algorithms on cyclic input.
    pub strict_acyclic: bool,
    /// Sort node IDs and edge lists before printing.
    pub sort_output: bool,
}

impl Default for EffectiveConfig {
    fn default() -> Self {
        Self {
            format: None,
            strict_acyclic: default_true(),
            sort_output: default_true(),
        }
    }
}

impl EffectiveConfig {
    /// Merge `project` over `user` over defaults.
    pub fn merge(project: ConfigFile, user: ConfigFile) -> Self {
        let defaults = Self::default();
        Self {
            format: project.output.format.or(user.output.format),
            strict_acyclic: project
                .analysis
                .strict_acyclic
                .or(user.analysis.strict_acyclic)
                .unwrap_or(defaults.strict_acyclic),
            sort_output: project
                .analysis
                .sort_output
                .or(user.analysis.sort_output)
                .unwrap_or(defaults.sort_output),
        }
    }
}

pub fn project_config_path(project_root: &Path) -> PathBuf {
    project_root.join(".nodeweave/config.toml")
}

pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("nodeweave/config.toml"))
}

/// Read one config file. A missing file is an empty config.
pub fn load_config_file(path: &Path) -> Result<ConfigFile> {
    if !path.exists() {
        return Ok(ConfigFile::default());
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    toml::from_str::<ConfigFile>(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))
}

/// Load and merge the project and user config files.
pub fn resolve_config(project_root: &Path) -> Result<EffectiveConfig> {
    let project = load_config_file(&project_config_path(project_root))?;
    let user = match user_config_path() {
        Some(path) => load_config_file(&path)?,
        None => ConfigFile::default(),
    };

    let effective = EffectiveConfig::merge(project, user);
    debug!(?effective, "resolved configuration");
    Ok(effective)
}

const fn default_true() -> bool {
    true
}
