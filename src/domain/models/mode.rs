#[cfg(test)]
#[path = "mode_test.rs"]
mod tests;

use serde_derive::Deserialize;
use serde_derive::Serialize;
use strum::EnumIter;
use strum::EnumVariantNames;
use strum::IntoEnumIterator;

/// Assessment depth requested from the API.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    EnumIter,
    EnumVariantNames,
    strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Mode {
    Fast,
    #[default]
    Balanced,
    Detailed,
}

impl Mode {
    pub fn parse(text: &str) -> Option<Mode> {
        return Mode::iter().find(|e| return e.to_string() == text);
    }

    pub fn title(&self) -> &'static str {
        match self {
            Mode::Fast => return "Fast Assessment",
            Mode::Balanced => return "Balanced Assessment",
            Mode::Detailed => return "Detailed Assessment",
        }
    }

    pub fn summary(&self) -> &'static str {
        match self {
            Mode::Fast => return "A quick readiness check.",
            Mode::Balanced => return "A readiness check with job matching.",
            Mode::Detailed => return "An in-depth review of your profile.",
        }
    }
}
