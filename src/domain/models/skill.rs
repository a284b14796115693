use serde_derive::Deserialize;
use serde_derive::Serialize;
use strum::EnumIter;
use strum::EnumVariantNames;
use strum::IntoEnumIterator;

/// Options of the DSA proficiency radio group.
#[derive(
    Clone,
    Copy,
    Debug,
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
pub enum DsaSkill {
    Beginner,
    Intermediate,
    Advanced,
}

impl DsaSkill {
    pub fn parse(text: &str) -> Option<DsaSkill> {
        return DsaSkill::iter().find(|e| return e.to_string() == text);
    }

    pub fn label(&self) -> &'static str {
        match self {
            DsaSkill::Beginner => return "Beginner - arrays, strings and basic sorting",
            DsaSkill::Intermediate => return "Intermediate - trees, recursion and hashing",
            DsaSkill::Advanced => return "Advanced - graphs and dynamic programming",
        }
    }
}
