use serde::Deserialize;
use std::path::PathBuf;

use crate::units::AreaUnit;

fn default_unit() -> AreaUnit {
    AreaUnit::Hectare
}
fn default_edges() -> bool {
    true
}
fn default_verbose() -> bool {
    false
}

/// Optional TOML file configuration
///
/// CLI flags take precedence; the file supplies defaults for repeated use.
#[derive(Debug, Deserialize)]
pub struct FileConfig {
    #[serde(default = "default_unit")]
    pub unit: AreaUnit,
    #[serde(default = "default_edges")]
    pub edges: bool,
    #[serde(default = "default_verbose")]
    pub verbose: bool,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            unit: default_unit(),
            edges: default_edges(),
            verbose: default_verbose(),
        }
    }
}

impl FileConfig {
    pub fn load() -> Option<Self> {
        let config_paths = get_config_paths();

        for path in config_paths {
            if path.exists()
                && let Ok(contents) = std::fs::read_to_string(&path)
            {
                match toml::from_str(&contents) {
                    Ok(config) => return Some(config),
                    Err(e) => {
                        eprintln!("Warning: Failed to parse config file {:?}: {}", path, e);
                    }
                }
            }
        }
        None
    }
}

fn get_config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    paths.push(PathBuf::from("parcelmeter.toml"));
    paths.push(PathBuf::from(".parcelmeter.toml"));

    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("parcelmeter").join("config.toml"));
        paths.push(config_dir.join("parcelmeter.toml"));
    }

    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(".parcelmeter.toml"));
        paths.push(home.join(".config").join("parcelmeter").join("config.toml"));
    }

    paths
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FileConfig::default();
        assert_eq!(config.unit, AreaUnit::Hectare);
        assert!(config.edges);
        assert!(!config.verbose);
    }

    #[test]
    fn test_parse_toml() {
        let config: FileConfig = toml::from_str("unit = \"acre\"\nedges = false\n").unwrap();
        assert_eq!(config.unit, AreaUnit::Acre);
        assert!(!config.edges);
        assert!(!config.verbose);
    }

    #[test]
    fn test_parse_empty_toml_uses_defaults() {
        let config: FileConfig = toml::from_str("").unwrap();
        assert_eq!(config.unit, AreaUnit::Hectare);
    }
}
