use serde::Deserialize;
use std::path::PathBuf;

use crate::style::Style;

fn default_width() -> u32 {
    1024
}
fn default_verbose() -> bool {
    false
}

/// Optional TOML config file providing defaults for the CLI flags.
///
/// Command-line arguments always win over config values.
#[derive(Debug, Deserialize, Default)]
pub struct FileConfig {
    /// Geography file path
    #[serde(default)]
    pub geography: Option<PathBuf>,
    /// Election results CSV path
    #[serde(default)]
    pub election: Option<PathBuf>,
    /// Coloring style (black-white, red-blue or purple)
    #[serde(default)]
    pub style: Option<Style>,
    /// Output image path
    #[serde(default)]
    pub output: Option<PathBuf>,
    /// Raster width in pixels
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_verbose")]
    pub verbose: bool,
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

    paths.push(PathBuf::from("votemap.toml"));
    paths.push(PathBuf::from(".votemap.toml"));

    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("votemap").join("config.toml"));
        paths.push(config_dir.join("votemap.toml"));
    }

    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(".votemap.toml"));
        paths.push(home.join(".config").join("votemap").join("config.toml"));
    }

    paths
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let config: FileConfig = toml::from_str(
            r#"
            geography = "usa.txt"
            election = "usa-2020.csv"
            style = "red-blue"
            output = "usa.png"
            width = 1600
            verbose = true
            "#,
        )
        .unwrap();

        assert_eq!(config.geography, Some(PathBuf::from("usa.txt")));
        assert_eq!(config.election, Some(PathBuf::from("usa-2020.csv")));
        assert_eq!(config.style, Some(Style::RedBlue));
        assert_eq!(config.output, Some(PathBuf::from("usa.png")));
        assert_eq!(config.width, 1600);
        assert!(config.verbose);
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: FileConfig = toml::from_str("").unwrap();
        assert!(config.geography.is_none());
        assert!(config.style.is_none());
        assert_eq!(config.width, 1024);
        assert!(!config.verbose);
    }
}
