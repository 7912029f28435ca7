//! Configuration for templatefinder

use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::collector::{DEFAULT_EXTENSIONS, DEFAULT_MARKERS, MatchRules};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Root directories to scan, in order
    #[serde(default)]
    pub roots: Vec<PathBuf>,

    /// Directory-name substrings that mark a template tree
    #[serde(default = "default_markers")]
    pub markers: Vec<String>,

    /// Accepted file extensions
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Whether a root's own name counts as a marker match
    #[serde(default = "default_match_root_name")]
    pub match_root_name: bool,

    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,
}

fn default_markers() -> Vec<String> {
    DEFAULT_MARKERS.iter().map(|s| s.to_string()).collect()
}

fn default_extensions() -> Vec<String> {
    DEFAULT_EXTENSIONS.iter().map(|s| s.to_string()).collect()
}

fn default_match_root_name() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            roots: Vec::new(),
            markers: default_markers(),
            extensions: default_extensions(),
            match_root_name: default_match_root_name(),
            log_level: None,
        }
    }
}

impl Config {
    /// Load config from file, or use defaults
    pub fn load(path: Option<&PathBuf>) -> Result<Self> {
        if let Some(config_path) = path {
            return Self::load_from(config_path);
        }

        // Try default locations
        let default_paths = [
            dirs::config_dir().map(|p| p.join("templatefinder").join("config.yml")),
            Some(PathBuf::from("templatefinder.yml")),
        ];

        for path in default_paths.iter().flatten() {
            if path.exists() {
                return Self::load_from(path);
            }
        }

        Ok(Config::default())
    }

    fn load_from(path: &Path) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).context(format!("Failed to read config file: {}", path.display()))?;
        let config: Config =
            serde_yaml::from_str(&content).context(format!("Failed to parse config file: {}", path.display()))?;
        Ok(config)
    }

    /// Save config to file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Matching rules for the collector
    pub fn rules(&self) -> MatchRules {
        MatchRules {
            markers: self.markers.clone(),
            extensions: self.extensions.clone(),
            match_root_name: self.match_root_name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_match_collector_defaults() {
        let config = Config::default();
        assert!(config.roots.is_empty());
        assert_eq!(config.rules(), MatchRules::default());
        assert!(config.log_level.is_none());
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.yml");
        fs::write(&path, "roots:\n  - /opt/vs/Common7\n  - /home/dev/Templates\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(
            config.roots,
            vec![PathBuf::from("/opt/vs/Common7"), PathBuf::from("/home/dev/Templates")]
        );
        assert_eq!(config.markers, vec!["templates".to_string(), "items".to_string()]);
        assert_eq!(config.extensions, vec!["cs".to_string(), "zip".to_string()]);
        assert!(config.match_root_name);
    }

    #[test]
    fn test_full_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.yml");
        fs::write(
            &path,
            "roots: [/a]\nmarkers: [snippets]\nextensions: [snippet, vb]\nmatch_root_name: false\nlog_level: debug\n",
        )
        .unwrap();

        let config = Config::load(Some(&path)).unwrap();
        let rules = config.rules();
        assert_eq!(rules.markers, vec!["snippets".to_string()]);
        assert_eq!(rules.extensions, vec!["snippet".to_string(), "vb".to_string()]);
        assert!(!rules.match_root_name);
        assert_eq!(config.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nope.yml");
        let err = Config::load(Some(&path)).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_malformed_file_is_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("bad.yml");
        fs::write(&path, "roots: {not: [a list\n").unwrap();
        let err = Config::load(Some(&path)).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_save_and_reload() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("saved.yml");
        let config = Config {
            roots: vec![PathBuf::from("/vs/Templates")],
            markers: vec!["items".to_string()],
            ..Default::default()
        };

        config.save(&path).unwrap();
        let loaded = Config::load(Some(&path)).unwrap();
        assert_eq!(loaded, config);
    }
}
