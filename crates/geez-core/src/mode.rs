// Geez Input Modes

use serde::Deserialize;
use strum_macros::{Display, EnumIter, EnumString};

/// Input modes available to a composition session.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Display, EnumIter, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum InputMode {
    #[default]
    Tigrinya,
    Amharic,
    /// Regular typing without conversion
    Latin,
}

impl InputMode {
    /// Whether keystrokes in this mode go through the transliteration engine
    pub fn transliterates(self) -> bool {
        !matches!(self, InputMode::Latin)
    }
}
