use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub use cellar_core::OutputSchema;
use cellar_text::AbsentMarker;
use cellar_text::body::{END_MARKERS, START_MARKER};
use cellar_text::lines::BOILERPLATE_LINES;
use cellar_text::patterns::PatternName;
use cellar_text::redactor::CRITIC_ENTITIES;

/// Simple configuration for cellar
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub note: NoteConfig,

    #[serde(default)]
    pub body: BodyConfig,

    #[serde(default)]
    pub filters: FiltersConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub engine: EngineConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoteConfig {
    #[serde(default = "default_points_replacement")]
    pub points_replacement: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BodyConfig {
    #[serde(default = "default_start_marker")]
    pub start_marker: String,

    #[serde(default = "default_end_markers")]
    pub end_markers: Vec<String>,

    #[serde(default)]
    pub absent_marker: AbsentMarker,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FiltersConfig {
    #[serde(default = "default_boilerplate_lines")]
    pub boilerplate_lines: Vec<String>,

    #[serde(default = "default_critic_entities")]
    pub critic_entities: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub schema: OutputSchema,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Worker threads; 0 lets rayon decide
    #[serde(default)]
    pub workers: usize,
}

impl Default for NoteConfig {
    fn default() -> Self {
        Self {
            points_replacement: default_points_replacement(),
        }
    }
}

impl Default for BodyConfig {
    fn default() -> Self {
        Self {
            start_marker: default_start_marker(),
            end_markers: default_end_markers(),
            absent_marker: AbsentMarker::default(),
        }
    }
}

impl Default for FiltersConfig {
    fn default() -> Self {
        Self {
            boilerplate_lines: default_boilerplate_lines(),
            critic_entities: default_critic_entities(),
        }
    }
}

fn default_points_replacement() -> String {
    PatternName::Points.default_replacement().to_string()
}

fn default_start_marker() -> String {
    START_MARKER.to_string()
}

fn default_end_markers() -> Vec<String> {
    to_owned_list(END_MARKERS)
}

fn default_boilerplate_lines() -> Vec<String> {
    to_owned_list(BOILERPLATE_LINES)
}

fn default_critic_entities() -> Vec<String> {
    to_owned_list(CRITIC_ENTITIES)
}

fn to_owned_list(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Config {
    /// Load config from default location or create default if not found
    pub fn load() -> anyhow::Result<Self> {
        let path = Self::config_path();

        if path.exists() {
            Self::from_path(&path)
        } else {
            // Create default config file
            let config = Config::default();
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let content = toml::to_string_pretty(&config)?;
            std::fs::write(&path, content)?;
            Ok(config)
        }
    }

    /// Load config from an explicit file
    pub fn from_path(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Get config file path
    pub fn config_path() -> PathBuf {
        if let Some(dirs) = directories::ProjectDirs::from("com", "cellar", "cellar") {
            dirs.config_dir().join("config.toml")
        } else {
            PathBuf::from("~/.cellar/config.toml")
        }
    }
}
