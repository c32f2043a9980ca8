//! Configuration management for Yap.
//!
//! Loads configuration from ${YAP_HOME}/config.toml with sensible defaults.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::content::{self, DEFAULT_PHRASES};
use crate::particles::{self, ParticleField};
use crate::scroll::{self, Anchor, ScrollTarget};
use crate::typewriter::{Script, Timing};

fn default_config_template() -> &'static str {
    include_str!("../default_config.toml")
}

pub mod paths {
    //! Path resolution for Yap configuration and data directories.
    //!
    //! YAP_HOME resolution order:
    //! 1. YAP_HOME environment variable (if set)
    //! 2. ~/.config/yap (default)
    //! 3. ./.yap when no home directory can be determined

    use std::path::PathBuf;

    /// Returns the Yap home directory.
    pub fn yap_home() -> PathBuf {
        if let Ok(home) = std::env::var("YAP_HOME") {
            return PathBuf::from(home);
        }

        dirs::home_dir().map_or_else(
            || PathBuf::from(".yap"),
            |h| h.join(".config").join("yap"),
        )
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        yap_home().join("config.toml")
    }

    /// Returns the directory log files are written to.
    pub fn logs_dir() -> PathBuf {
        yap_home().join("logs")
    }
}

/// Hero typewriter settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypewriterConfig {
    pub typing_speed_ms: u64,
    pub pause_ms: u64,
    pub phrases: Vec<String>,
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self {
            typing_speed_ms: Timing::DEFAULT_TYPING_SPEED_MS,
            pause_ms: Timing::DEFAULT_PAUSE_MS,
            phrases: DEFAULT_PHRASES.iter().map(ToString::to_string).collect(),
        }
    }
}

impl TypewriterConfig {
    pub fn timing(&self) -> Timing {
        Timing::from_millis(self.typing_speed_ms, self.pause_ms)
    }

    /// Builds the script from the configured phrases.
    ///
    /// # Errors
    /// Returns an error if no phrase has any text.
    pub fn script(&self) -> Result<Script> {
        Script::new(self.phrases.iter().cloned()).context("Invalid [typewriter] phrases")
    }
}

/// Hero particle settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticlesConfig {
    pub count: usize,
    /// Fixed layout seed (random when unset).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for ParticlesConfig {
    fn default() -> Self {
        Self {
            count: particles::DEFAULT_COUNT,
            seed: None,
        }
    }
}

impl ParticlesConfig {
    pub fn field(&self) -> ParticleField {
        match self.seed {
            Some(seed) => ParticleField::seeded(self.count, seed),
            None => ParticleField::random(self.count),
        }
    }
}

/// Smooth scroll settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollConfig {
    pub duration_ms: u64,
    pub offset_rows: i32,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            duration_ms: scroll::DEFAULT_DURATION.as_millis() as u64,
            offset_rows: content::START_TARGET.offset,
        }
    }
}

impl ScrollConfig {
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }

    /// Target of the primary call to action.
    pub fn start_target(&self) -> ScrollTarget {
        ScrollTarget::new(Anchor::HowItWorks, self.offset_rows)
    }
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// `tracing_subscriber::EnvFilter` directive.
    pub level: String,
    /// Log file override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: Config::DEFAULT_LOG_LEVEL.to_string(),
            file: None,
        }
    }
}

impl LogConfig {
    pub fn file_path(&self) -> PathBuf {
        self.file
            .as_ref()
            .map_or_else(|| paths::logs_dir().join("yap.log"), PathBuf::from)
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub typewriter: TypewriterConfig,
    pub particles: ParticlesConfig,
    pub scroll: ScrollConfig,
    pub log: LogConfig,
}

impl Config {
    const DEFAULT_LOG_LEVEL: &str = "info";

    /// Loads configuration from the default config path.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    /// Loads configuration from a specific path.
    /// Returns defaults if file doesn't exist.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config from {}", path.display()))
        } else {
            Ok(Config::default())
        }
    }

    /// Creates a default config file at the given path.
    ///
    /// # Errors
    /// Returns an error if the file already exists or cannot be written.
    pub fn init(path: &Path) -> Result<()> {
        if path.exists() {
            anyhow::bail!("Config file already exists at {}", path.display());
        }

        Self::write_config(path, default_config_template())
    }

    /// Generates a fresh config TOML from Rust defaults.
    ///
    /// Used by `xtask update-default-config` to keep `default_config.toml`
    /// in sync with the values in this module. Comments come from the
    /// embedded template; values come from `Config::default()`.
    ///
    /// # Errors
    /// Returns an error if serialization or template parsing fails.
    pub fn generate() -> Result<String> {
        use toml_edit::{DocumentMut, Item};

        fn merge(target: &mut toml_edit::Table, source: &toml_edit::Table) {
            for (key, value) in source.iter() {
                match value {
                    Item::Value(v) => {
                        target[key] = Item::Value(v.clone());
                    }
                    Item::Table(src_table) => {
                        if let Some(Item::Table(target_table)) = target.get_mut(key) {
                            merge(target_table, src_table);
                        } else {
                            target[key] = Item::Table(src_table.clone());
                        }
                    }
                    Item::ArrayOfTables(arr) => {
                        target[key] = Item::ArrayOfTables(arr.clone());
                    }
                    Item::None => {}
                }
            }
        }

        let config = Config::default();
        let generated_toml =
            toml::to_string(&config).context("Failed to serialize default config to TOML")?;

        let mut doc: DocumentMut = default_config_template()
            .parse()
            .context("Failed to parse default config template")?;
        let generated_doc: DocumentMut = generated_toml
            .parse()
            .context("Failed to parse generated config")?;

        merge(doc.as_table_mut(), generated_doc.as_table());

        Ok(doc.to_string())
    }

    /// Writes config content to a file, creating parent directories as needed.
    /// Uses atomic write (temp file + rename) to prevent corruption.
    fn write_config(path: &Path, content: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        let tmp_path = path.with_extension("toml.tmp");
        fs::write(&tmp_path, content)
            .with_context(|| format!("Failed to write config to {}", tmp_path.display()))?;
        fs::rename(&tmp_path, path).with_context(|| {
            format!(
                "Failed to rename {} to {}",
                tmp_path.display(),
                path.display()
            )
        })?;

        Ok(())
    }
}
