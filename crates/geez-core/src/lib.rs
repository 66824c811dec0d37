// Geez Core Library
// Incremental Latin-to-Ge'ez transliteration

pub mod engine;
pub mod host;
pub mod mode;
pub mod table;

#[cfg(feature = "settings")]
pub mod settings;

pub use engine::{
    ConfigError, EngineConfig, EngineState, KeyOutcome, KeyPolicy, SequenceBuffer,
    TransliterationEngine, DEFAULT_MAX_COMBO_LENGTH, DEFAULT_SEQUENCE_TIMEOUT,
};
pub use host::{transliterate_text, Delivery, Echo, LineBuffer, Session, TextSink, BACKSPACE};
pub use mode::InputMode;
pub use table::{MappingTable, TableLookup, GEEZ_MAPPINGS};

#[cfg(feature = "settings")]
pub use settings::{default_settings_content, load_mapping_file, Settings, SettingsError};
