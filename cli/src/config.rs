//! Configuration management for CLI tools.
//!
//! Configuration is stored in ~/.receipt-survey/{app_name}/config.yaml

use std::collections::HashMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Default base configuration directory name.
pub const DEFAULT_BASE_DIR: &str = ".receipt-survey";
/// Default configuration filename.
pub const DEFAULT_CONFIG_FILE: &str = "config.yaml";

/// CLI configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Application name (not serialized).
    #[serde(skip)]
    pub app_name: String,

    /// Name of the currently active context.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub current_context: String,

    /// Map of context name to context configuration.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub contexts: HashMap<String, Context>,

    /// Path to the config file (not serialized).
    #[serde(skip)]
    config_path: PathBuf,
}

/// A store profile: the receipt details that rarely change between visits.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Context {
    /// Context name.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,

    /// Store id printed on the receipt.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store_id: Option<u64>,

    /// Visit type (optional, uses the library default if unset).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visit_type: Option<u8>,

    /// Default price paid, e.g. "2.99".
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub price: String,
}

impl Config {
    /// Gets the default config directory.
    pub fn default_config_dir(app_name: &str) -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(DEFAULT_BASE_DIR).join(app_name))
    }

    /// Gets the default config file path.
    pub fn default_config_path(app_name: &str) -> Option<PathBuf> {
        Self::default_config_dir(app_name).map(|dir| dir.join(DEFAULT_CONFIG_FILE))
    }

    /// Returns the config file path.
    pub fn path(&self) -> &PathBuf {
        &self.config_path
    }

    /// Saves the configuration to disk.
    pub fn save(&self) -> anyhow::Result<()> {
        let content = serde_yaml::to_string(self)?;
        std::fs::write(&self.config_path, content)?;
        Ok(())
    }

    /// Adds a new context, replacing any context with the same name.
    pub fn add_context(&mut self, name: &str, mut ctx: Context) -> anyhow::Result<()> {
        ctx.name = name.to_string();
        self.contexts.insert(name.to_string(), ctx);
        self.save()
    }

    /// Deletes a context.
    pub fn delete_context(&mut self, name: &str) -> anyhow::Result<()> {
        if self.contexts.remove(name).is_none() {
            anyhow::bail!("context '{}' not found", name);
        }
        if self.current_context == name {
            self.current_context.clear();
        }
        self.save()
    }

    /// Sets the current context.
    pub fn use_context(&mut self, name: &str) -> anyhow::Result<()> {
        if !self.contexts.contains_key(name) {
            anyhow::bail!("context '{}' not found", name);
        }
        self.current_context = name.to_string();
        self.save()
    }

    /// Gets a specific context.
    pub fn get_context(&self, name: &str) -> Option<&Context> {
        self.contexts.get(name)
    }

    /// Gets the current context.
    pub fn get_current_context(&self) -> Option<&Context> {
        if self.current_context.is_empty() {
            return None;
        }
        self.contexts.get(&self.current_context)
    }

    /// Resolves the context by name, or current context if name is empty.
    pub fn resolve_context(&self, name: Option<&str>) -> Option<&Context> {
        match name {
            Some(n) if !n.is_empty() => self.get_context(n),
            _ => self.get_current_context(),
        }
    }

    /// Lists all context names, sorted.
    pub fn list_contexts(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.contexts.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }
}

/// Loads configuration for the specified app, creating an empty config file
/// if none exists.
pub fn load_config(app_name: &str, custom_path: Option<&str>) -> anyhow::Result<Config> {
    let config_path = match custom_path {
        Some(p) => PathBuf::from(p),
        None => Config::default_config_path(app_name)
            .ok_or_else(|| anyhow::anyhow!("cannot determine config path"))?,
    };

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let mut cfg = if config_path.exists() {
        let content = std::fs::read_to_string(&config_path)?;
        serde_yaml::from_str(&content)?
    } else {
        let cfg = Config::default();
        let content = serde_yaml::to_string(&cfg)?;
        std::fs::write(&config_path, content)?;
        cfg
    };

    cfg.app_name = app_name.to_string();
    cfg.config_path = config_path;

    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_config(dir: &tempfile::TempDir) -> Config {
        let path = dir.path().join("nested").join(DEFAULT_CONFIG_FILE);
        load_config("surveycode", path.to_str()).unwrap()
    }

    #[test]
    fn test_load_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = temp_config(&dir);
        assert!(cfg.path().exists());
        assert_eq!(cfg.app_name, "surveycode");
        assert!(cfg.contexts.is_empty());
    }

    #[test]
    fn test_context_lifecycle() {
        let dir = tempfile::tempdir().unwrap();
        let mut cfg = temp_config(&dir);

        let ctx = Context {
            store_id: Some(155),
            price: "2.99".to_string(),
            ..Default::default()
        };
        cfg.add_context("local", ctx).unwrap();
        cfg.add_context("other", Context::default()).unwrap();
        cfg.use_context("local").unwrap();

        let reloaded = load_config("surveycode", cfg.path().to_str()).unwrap();
        assert_eq!(reloaded.current_context, "local");
        assert_eq!(reloaded.list_contexts(), vec!["local", "other"]);

        let current = reloaded.get_current_context().unwrap();
        assert_eq!(current.name, "local");
        assert_eq!(current.store_id, Some(155));
        assert_eq!(current.visit_type, None);
        assert_eq!(current.price, "2.99");

        assert_eq!(reloaded.resolve_context(Some("other")).unwrap().name, "other");
        assert_eq!(reloaded.resolve_context(Some("")).unwrap().name, "local");
        assert!(reloaded.resolve_context(Some("missing")).is_none());

        cfg.delete_context("local").unwrap();
        assert!(cfg.current_context.is_empty());
        assert!(cfg.get_current_context().is_none());
    }

    #[test]
    fn test_unknown_context_errors() {
        let dir = tempfile::tempdir().unwrap();
        let mut cfg = temp_config(&dir);
        assert!(cfg.use_context("nope").is_err());
        assert!(cfg.delete_context("nope").is_err());
    }

    #[test]
    fn test_default_config_path() {
        if let Some(path) = Config::default_config_path("surveycode") {
            assert!(path.ends_with(".receipt-survey/surveycode/config.yaml"));
        }
    }
}
