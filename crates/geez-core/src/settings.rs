// Geez Settings Module
// User configuration for the engine, the session and extra mappings

#![cfg(feature = "settings")]

use std::path::{Path, PathBuf};
use std::time::Duration;

use indexmap::IndexMap;

use crate::engine::{ConfigError, EngineConfig, KeyPolicy, DEFAULT_MAX_COMBO_LENGTH};
use crate::host::Echo;
use crate::mode::InputMode;
use crate::table::MappingTable;

/// Settings loaded from a TOML file (default: ~/.config/geez/settings.toml)
#[derive(Debug, Clone)]
pub struct Settings {
    /// Inactivity window in milliseconds
    sequence_timeout_ms: u64,

    /// Maximum buffered keystrokes
    max_combo_length: usize,

    key_policy: KeyPolicy,

    default_mode: InputMode,

    echo: Echo,

    /// Re-present the key that triggered a timeout flush
    replay_after_flush: bool,

    /// File with additional `[[mapping]]` rows
    custom_mappings: Option<PathBuf>,

    /// Inline overrides, applied after everything else
    mappings: IndexMap<String, String>,

    /// Path to the settings file (for reload)
    source_path: Option<PathBuf>,
}

/// Errors that can occur when loading settings
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(String),

    #[error("Invalid setting value: {0}")]
    InvalidValue(String),

    #[error("Invalid engine configuration: {0}")]
    Config(#[from] ConfigError),
}

/// TOML representation for deserializing settings
#[derive(Debug, Clone, serde::Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct SettingsToml {
    #[serde(default)]
    engine: Option<EngineSection>,

    #[serde(default)]
    input: Option<InputSection>,

    #[serde(default)]
    mappings: Option<IndexMap<String, String>>,
}

#[derive(Debug, Clone, serde::Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct EngineSection {
    #[serde(default)]
    sequence_timeout_ms: Option<u64>,
    #[serde(default)]
    max_combo_length: Option<usize>,
    #[serde(default)]
    key_policy: Option<KeyPolicy>,
}

#[derive(Debug, Clone, serde::Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct InputSection {
    #[serde(default)]
    default_mode: Option<InputMode>,
    #[serde(default)]
    echo: Option<Echo>,
    #[serde(default)]
    replay_after_flush: Option<bool>,
    #[serde(default)]
    custom_mappings: Option<PathBuf>,
}

/// Custom mapping file: an ordered list of rows, duplicates allowed
#[derive(Debug, Clone, serde::Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct MappingFile {
    #[serde(default)]
    mapping: Vec<MappingRow>,
}

#[derive(Debug, Clone, serde::Deserialize)]
#[serde(deny_unknown_fields)]
struct MappingRow {
    sequence: String,
    grapheme: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self::new()
    }
}

impl Settings {
    /// Create settings holding the defaults
    pub fn new() -> Self {
        let engine = EngineConfig::default();
        Self {
            sequence_timeout_ms: engine.sequence_timeout.as_millis() as u64,
            max_combo_length: DEFAULT_MAX_COMBO_LENGTH,
            key_policy: engine.key_policy,
            default_mode: InputMode::default(),
            echo: Echo::default(),
            replay_after_flush: true,
            custom_mappings: None,
            mappings: IndexMap::new(),
            source_path: None,
        }
    }

    /// Load settings from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(&path)?;
        let mut settings = Self::from_toml(&content)?;
        settings.source_path = Some(path.as_ref().to_path_buf());

        // Relative mapping paths are taken from the settings file's directory
        let resolved = match (&settings.custom_mappings, path.as_ref().parent()) {
            (Some(custom), Some(dir)) if custom.is_relative() => Some(dir.join(custom)),
            _ => None,
        };
        if resolved.is_some() {
            settings.custom_mappings = resolved;
        }
        Ok(settings)
    }

    /// Load settings from TOML string
    pub fn from_toml(content: &str) -> Result<Self, SettingsError> {
        let parsed: SettingsToml =
            toml::from_str(content).map_err(|e| SettingsError::TomlParse(e.to_string()))?;

        let mut settings = Self::new();

        if let Some(engine) = parsed.engine {
            if let Some(timeout) = engine.sequence_timeout_ms {
                settings.sequence_timeout_ms = timeout;
            }
            if let Some(max) = engine.max_combo_length {
                settings.max_combo_length = max;
            }
            if let Some(policy) = engine.key_policy {
                settings.key_policy = policy;
            }
        }

        if let Some(input) = parsed.input {
            if let Some(mode) = input.default_mode {
                settings.default_mode = mode;
            }
            if let Some(echo) = input.echo {
                settings.echo = echo;
            }
            if let Some(replay) = input.replay_after_flush {
                settings.replay_after_flush = replay;
            }
            settings.custom_mappings = input.custom_mappings;
        }

        if let Some(mappings) = parsed.mappings {
            settings.mappings = mappings;
        }

        // Reject bad engine values at load time rather than at first use
        settings.engine_config()?;
        Ok(settings)
    }

    /// Get the default settings path
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("geez").join("settings.toml"))
    }

    /// Load from default location (~/.config/geez/settings.toml)
    pub fn load_default() -> Result<Self, SettingsError> {
        if let Some(path) = Self::default_path() {
            if path.exists() {
                return Self::from_file(path);
            }
        }
        // Return default settings if file doesn't exist
        Ok(Self::new())
    }

    /// Reload settings from the original file
    pub fn reload(&mut self) -> Result<(), SettingsError> {
        if let Some(ref path) = self.source_path {
            let new_settings = Self::from_file(path)?;
            *self = new_settings;
            Ok(())
        } else {
            Err(SettingsError::InvalidValue("No source path set".to_string()))
        }
    }

    /// Validated engine configuration
    pub fn engine_config(&self) -> Result<EngineConfig, ConfigError> {
        let config = EngineConfig::new(
            Duration::from_millis(self.sequence_timeout_ms),
            self.max_combo_length,
        )?;
        Ok(config.with_key_policy(self.key_policy))
    }

    /// Builtin table, then the custom mapping file, then inline overrides
    pub fn build_table(&self) -> Result<MappingTable, SettingsError> {
        let mut rows: Vec<(String, String)> = Vec::new();
        if let Some(ref path) = self.custom_mappings {
            rows.extend(load_mapping_file(path)?);
        }
        rows.extend(
            self.mappings
                .iter()
                .map(|(s, g)| (s.clone(), g.clone())),
        );
        Ok(MappingTable::builtin().extended(rows))
    }

    pub fn set_sequence_timeout_ms(&mut self, millis: u64) {
        self.sequence_timeout_ms = millis;
    }

    pub fn set_max_combo_length(&mut self, max: usize) {
        self.max_combo_length = max;
    }

    pub fn set_key_policy(&mut self, policy: KeyPolicy) {
        self.key_policy = policy;
    }

    pub fn set_default_mode(&mut self, mode: InputMode) {
        self.default_mode = mode;
    }

    pub fn set_echo(&mut self, echo: Echo) {
        self.echo = echo;
    }

    pub fn default_mode(&self) -> InputMode {
        self.default_mode
    }

    pub fn echo(&self) -> Echo {
        self.echo
    }

    pub fn replay_after_flush(&self) -> bool {
        self.replay_after_flush
    }

    pub fn custom_mappings(&self) -> Option<&Path> {
        self.custom_mappings.as_deref()
    }

    /// Inline overrides, in file order
    pub fn mappings(&self) -> &IndexMap<String, String> {
        &self.mappings
    }

    pub fn source_path(&self) -> Option<&Path> {
        self.source_path.as_deref()
    }
}

/// Read `[[mapping]]` rows from a TOML file, in order.
pub fn load_mapping_file<P: AsRef<Path>>(path: P) -> Result<Vec<(String, String)>, SettingsError> {
    let content = std::fs::read_to_string(&path)?;
    let file: MappingFile =
        toml::from_str(&content).map_err(|e| SettingsError::TomlParse(e.to_string()))?;
    log::debug!(
        "Loaded {} mapping row(s) from {}",
        file.mapping.len(),
        path.as_ref().display()
    );
    Ok(file
        .mapping
        .into_iter()
        .map(|row| (row.sequence, row.grapheme))
        .collect())
}

/// Create default settings content for a new installation
pub fn default_settings_content() -> &'static str {
    r#"# Geez Settings
# Place this file at: ~/.config/geez/settings.toml

[engine]
# Inactivity window before a held match is committed
sequence_timeout_ms = 250
# Longest phonetic combination the engine buffers
max_combo_length = 4
# "alphabetic" or "extended" (also accepts ' : . used by the table)
key_policy = "alphabetic"

[input]
# "tigrinya", "amharic" or "latin"
default_mode = "tigrinya"
# "preedit" or "raw"
echo = "preedit"
replay_after_flush = true
# custom_mappings = "mappings.toml"

[mappings]
# Inline overrides, applied last
# "qwu" = "ቍ"
"#
}
