//! # Packup Configuration System
//!
//! File: cli/src/core/config.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module loads, merges and validates the settings that drive a build:
//! which directory to package, what to call the archive, which items are
//! required or optional, and what the submission checklist says.
//!
//! ## Architecture
//!
//! Configuration sources (in order of precedence):
//! 1. Command-line flags (applied by `commands::build`, not here)
//! 2. An explicit file passed with `--config` / `PACKUP_CONFIG`, or else a
//!    project-specific `.packup.toml` in the current directory or ancestors
//! 3. User-specific `<config dir>/packup/config.toml`
//! 4. Default values defined in the code
//!
//! ## Examples
//!
//! ```toml
//! base_dir = "~/coursework/mesh"
//!
//! [archive]
//! prefix = "Mesh_Data_Transformation_Submission"
//!
//! [items]
//! required = ["Mesh_Data_Transformation.ipynb", "README.md", "8samples", "processed_meshes"]
//! optional = ["requirements.txt"]
//! ```
//!
use crate::core::error::{PackupError, Result};
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    fs,
    path::{Component, Path, PathBuf},
};
use tracing::{debug, info};

/// The resolved configuration a build runs with.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Config {
    /// Directory to package. `None` means the current working directory.
    pub base_dir: Option<String>,
    pub archive: ArchiveConfig,
    pub items: ItemsConfig,
    pub checklist: ChecklistConfig,
}

/// Naming of the produced archive.
#[derive(Debug, Clone, PartialEq)]
pub struct ArchiveConfig {
    /// Fixed part of the file name; the timestamp and `.zip` are appended.
    pub prefix: String,
}

/// The items to package, relative to the base directory.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemsConfig {
    pub required: Vec<String>,
    pub optional: Vec<String>,
}

/// Lines printed under "Submission Checklist" after a successful build.
#[derive(Debug, Clone, PartialEq)]
pub struct ChecklistConfig {
    pub items: Vec<String>,
}

/// One configuration file as written. Keys left out stay `None`, so a layer
/// that sets a value equal to the default still overrides the layers below.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    base_dir: Option<String>,
    #[serde(default)]
    archive: ArchiveFile,
    #[serde(default)]
    items: ItemsFile,
    #[serde(default)]
    checklist: ChecklistFile,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
struct ArchiveFile {
    prefix: Option<String>,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
struct ItemsFile {
    required: Option<Vec<String>>,
    optional: Option<Vec<String>>,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
struct ChecklistFile {
    items: Option<Vec<String>>,
}

impl ConfigFile {
    /// Keys set in `self` win; the rest come from `lower`.
    fn over(self, lower: ConfigFile) -> ConfigFile {
        ConfigFile {
            base_dir: self.base_dir.or(lower.base_dir),
            archive: ArchiveFile {
                prefix: self.archive.prefix.or(lower.archive.prefix),
            },
            items: ItemsFile {
                required: self.items.required.or(lower.items.required),
                optional: self.items.optional.or(lower.items.optional),
            },
            checklist: ChecklistFile {
                items: self.checklist.items.or(lower.checklist.items),
            },
        }
    }

    /// Fills every key still unset with its built-in default.
    fn resolve(self) -> Config {
        Config {
            base_dir: self.base_dir,
            archive: ArchiveConfig {
                prefix: self.archive.prefix.unwrap_or_else(default_prefix),
            },
            items: ItemsConfig {
                required: self.items.required.unwrap_or_else(default_required),
                optional: self.items.optional.unwrap_or_else(default_optional),
            },
            checklist: ChecklistConfig {
                items: self.checklist.items.unwrap_or_else(default_checklist),
            },
        }
    }
}

impl Default for ArchiveConfig {
    fn default() -> Self {
        Self {
            prefix: default_prefix(),
        }
    }
}

impl Default for ItemsConfig {
    fn default() -> Self {
        Self {
            required: default_required(),
            optional: default_optional(),
        }
    }
}

impl Default for ChecklistConfig {
    fn default() -> Self {
        Self {
            items: default_checklist(),
        }
    }
}

fn default_prefix() -> String {
    "Mesh_Data_Transformation_Submission".to_string()
}
fn default_required() -> Vec<String> {
    [
        "Mesh_Data_Transformation.ipynb",
        "README.md",
        "8samples",
        "processed_meshes",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}
fn default_optional() -> Vec<String> {
    ["requirements.txt", "create_submission_zip.py"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}
fn default_checklist() -> Vec<String> {
    [
        "Python notebook (Mesh_Data_Transformation.ipynb)",
        "Output meshes (processed_meshes/ folder)",
        "Visualizations (embedded in notebook)",
        "README file (with instructions and observations)",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

const PROJECT_CONFIG_FILENAME: &str = ".packup.toml";

/// Loads the merged configuration.
///
/// When `explicit` is given it takes the place of the project config search;
/// a missing explicit file is an error, unlike the discovered ones.
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let user_config = load_user_config()?;
    let project_config = match explicit {
        Some(path) => {
            info!("Loading configuration from: {}", path.display());
            Some(load_config_from_path(path)?)
        }
        None => load_project_config()?,
    };
    let mut merged_config = merge_configs(user_config, project_config);
    expand_config_paths(&mut merged_config);
    validate_config(&merged_config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", merged_config);
    Ok(merged_config)
}

fn load_user_config() -> Result<Option<ConfigFile>> {
    let Some(proj_dirs) = ProjectDirs::from("com", "Packup", "packup") else {
        debug!("Could not determine user config directory.");
        return Ok(None);
    };
    let config_path = proj_dirs.config_dir().join("config.toml");
    if config_path.is_file() {
        info!("Loading user configuration from: {}", config_path.display());
        load_config_from_path(&config_path).map(Some)
    } else {
        debug!(
            "User configuration file not found at {}",
            config_path.display()
        );
        Ok(None)
    }
}

fn load_project_config() -> Result<Option<ConfigFile>> {
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    match find_project_config_path(&current_dir) {
        Some(path) => {
            info!("Loading project configuration from: {}", path.display());
            load_config_from_path(&path).map(Some)
        }
        None => {
            debug!("No {} found in current directory or ancestors.", PROJECT_CONFIG_FILENAME);
            Ok(None)
        }
    }
}

/// Walks up from `start` looking for `.packup.toml`, stopping at a `.git` directory.
fn find_project_config_path(start: &Path) -> Option<PathBuf> {
    let mut path: &Path = start;
    loop {
        let project_config = path.join(PROJECT_CONFIG_FILENAME);
        if project_config.is_file() {
            return Some(project_config);
        }
        if path.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                path.display()
            );
            return None;
        }
        path = path.parent()?;
    }
}

fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

/// Project keys win over user keys; defaults fill whatever neither sets.
fn merge_configs(user: Option<ConfigFile>, project: Option<ConfigFile>) -> Config {
    let user = user.unwrap_or_default();
    match project {
        Some(project_cfg) => project_cfg.over(user),
        None => user,
    }
    .resolve()
}

fn expand_config_paths(config: &mut Config) {
    if let Some(dir) = config.base_dir.as_mut() {
        *dir = shellexpand::tilde(dir.as_str()).into_owned();
        debug!("Expanded base directory: {}", dir);
    }
}

/// Checks the prefix and every item name. Also used on CLI overrides.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_prefix(&config.archive.prefix)?;
    for name in config.items.required.iter().chain(&config.items.optional) {
        validate_item_name(name)?;
    }
    Ok(())
}

fn validate_prefix(prefix: &str) -> Result<()> {
    if prefix.is_empty() {
        return Err(anyhow!(PackupError::Config(
            "Archive prefix cannot be empty.".to_string()
        )));
    }
    if prefix.contains(['/', '\\']) {
        return Err(anyhow!(PackupError::Config(format!(
            "Archive prefix '{}' must not contain path separators.",
            prefix
        ))));
    }
    Ok(())
}

/// Item names must stay inside the base directory.
fn validate_item_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(anyhow!(PackupError::Config(
            "Item names cannot be empty.".to_string()
        )));
    }
    let path = Path::new(name);
    let escapes = path
        .components()
        .any(|c| matches!(c, Component::ParentDir | Component::RootDir | Component::Prefix(_)));
    if escapes {
        return Err(anyhow!(PackupError::Config(format!(
            "Item '{}' must be a path relative to the base directory.",
            name
        ))));
    }
    if !path.components().any(|c| matches!(c, Component::Normal(_))) {
        return Err(anyhow!(PackupError::Config(format!(
            "Item '{}' must name a file or directory inside the base directory.",
            name
        ))));
    }
    Ok(())
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_deserialize_basic_toml() {
        let toml_content = r#"
            base_dir = "~/coursework"

            [archive]
            prefix = "Lab3"

            [items]
            required = ["report.pdf", "src"]
        "#;

        let file: ConfigFile = toml::from_str(toml_content).expect("Failed to parse TOML");
        let config = file.resolve();

        assert_eq!(config.base_dir.as_deref(), Some("~/coursework")); // Not yet expanded
        assert_eq!(config.archive.prefix, "Lab3");
        assert_eq!(config.items.required, vec!["report.pdf", "src"]);
        assert_eq!(config.items.optional, default_optional()); // Default
        assert_eq!(config.checklist.items, default_checklist()); // Default
    }

    #[test]
    fn test_empty_toml_yields_defaults() {
        let file: ConfigFile = toml::from_str("").unwrap();
        assert_eq!(file, ConfigFile::default());
        let config = file.resolve();
        assert_eq!(config, Config::default());
        assert_eq!(config.items.required.len(), 4);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result: std::result::Result<ConfigFile, _> =
            toml::from_str("[archive]\nsuffix = \"x\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_merge_project_overrides_user() {
        let user: ConfigFile = toml::from_str(
            "base_dir = \"/user/dir\"\n[archive]\nprefix = \"UserPrefix\"\n",
        )
        .unwrap();
        let project: ConfigFile = toml::from_str("[items]\nrequired = [\"main.py\"]\n").unwrap();

        let merged = merge_configs(Some(user), Some(project));

        assert_eq!(merged.base_dir.as_deref(), Some("/user/dir"));
        assert_eq!(merged.archive.prefix, "UserPrefix"); // project left it unset
        assert_eq!(merged.items.required, vec!["main.py"]);
        assert_eq!(merged.items.optional, default_optional());
    }

    #[test]
    fn test_project_setting_default_value_still_wins() {
        let user: ConfigFile = toml::from_str(
            "[archive]\nprefix = \"UserPrefix\"\n[items]\noptional = [\"notes.txt\"]\n",
        )
        .unwrap();
        let project: ConfigFile = toml::from_str(
            "[archive]\nprefix = \"Mesh_Data_Transformation_Submission\"\n\
             [items]\noptional = [\"requirements.txt\", \"create_submission_zip.py\"]\n",
        )
        .unwrap();

        let merged = merge_configs(Some(user), Some(project));

        assert_eq!(merged.archive.prefix, default_prefix());
        assert_eq!(merged.items.optional, default_optional());
    }

    #[test]
    fn test_merge_without_files_is_default() {
        assert_eq!(merge_configs(None, None), Config::default());
    }

    #[test]
    fn test_path_expansion() {
        let mut config = Config {
            base_dir: Some("~/submission".into()),
            ..Default::default()
        };
        expand_config_paths(&mut config);
        let expanded = config.base_dir.unwrap();
        assert!(!expanded.starts_with('~'));
        assert!(expanded.ends_with("submission"));
    }

    #[test]
    fn test_validate_config_valid() {
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_prefix() {
        let mut config = Config::default();
        config.archive.prefix = "out/sub".into();
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("path separators"));

        config.archive.prefix.clear();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_rejects_escaping_items() {
        let mut config = Config::default();
        config.items.optional = vec!["../secrets.txt".into()];
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("relative to the base directory"));

        config.items.optional = vec!["/etc/passwd".into()];
        assert!(validate_config(&config).is_err());

        config.items.optional = vec![".".into()];
        assert!(validate_config(&config).is_err());

        config.items.optional = vec!["data/nested.txt".into()];
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_find_project_config_walks_up() {
        let temp_dir = tempdir().unwrap();
        let root = temp_dir.path();
        fs::create_dir(root.join(".git")).unwrap();
        fs::write(root.join(PROJECT_CONFIG_FILENAME), "").unwrap();
        let nested = root.join("a/b");
        fs::create_dir_all(&nested).unwrap();

        let found = find_project_config_path(&nested).unwrap();
        assert_eq!(found, root.join(PROJECT_CONFIG_FILENAME));
    }

    #[test]
    fn test_find_project_config_stops_at_git() {
        let temp_dir = tempdir().unwrap();
        let root = temp_dir.path();
        fs::write(root.join(PROJECT_CONFIG_FILENAME), "").unwrap();
        let repo = root.join("repo");
        fs::create_dir_all(repo.join(".git")).unwrap();

        assert!(find_project_config_path(&repo).is_none());
    }

    #[test]
    fn test_load_explicit_config() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("custom.toml");
        fs::write(&path, "[archive]\nprefix = \"Custom\"\n").unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.archive.prefix, "Custom");
    }

    #[test]
    fn test_load_missing_explicit_config_fails() {
        let temp_dir = tempdir().unwrap();
        let result = load_config(Some(&temp_dir.path().join("nope.toml")));
        assert!(result.is_err());
    }
}
