#[cfg(test)]
#[path = "sport_test.rs"]
mod tests;

use serde_derive::Deserialize;
use serde_derive::Serialize;
use strum::EnumIter;
use strum::EnumVariantNames;
use strum::IntoEnumIterator;

/// Canonical key for one of the tracked sports. The string form is the key the
/// backend uses in its paths, e.g. `/api/boys_soccer/overview`.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    EnumVariantNames,
    strum::Display,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Sport {
    BoysSoccer,
    GirlsSoccer,
    BoysBasketball,
    GirlsBasketball,
    Baseball,
    Wrestling,
}

impl Default for Sport {
    fn default() -> Sport {
        return Sport::BoysSoccer;
    }
}

impl Sport {
    pub fn parse(text: &str) -> Option<Sport> {
        return Sport::iter().find(|e| return e.to_string() == text.trim());
    }

    /// Soccer programs expose goalkeeper and year-over-year datasets.
    pub fn is_soccer(&self) -> bool {
        return matches!(self, Sport::BoysSoccer | Sport::GirlsSoccer);
    }

    pub fn label(&self) -> &'static str {
        match self {
            Sport::BoysSoccer => return "Boys Soccer",
            Sport::GirlsSoccer => return "Girls Soccer",
            Sport::BoysBasketball => return "Boys Basketball",
            Sport::GirlsBasketball => return "Girls Basketball",
            Sport::Baseball => return "Baseball",
            Sport::Wrestling => return "Wrestling",
        }
    }
}
