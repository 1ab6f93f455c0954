use serde::{Deserialize, Serialize};
use std::fmt;

/// Ad placement categories, in the fixed order used for every calculation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AdType {
    #[serde(rename = "Pre Roll")]
    PreRoll,
    #[serde(rename = "Mid Roll")]
    MidRoll,
    #[serde(rename = "Post Roll")]
    PostRoll,
    #[serde(rename = "Sponsored Overlay")]
    SponsoredOverlay,
    #[serde(rename = "Banner")]
    Banner,
}

impl AdType {
    /// Number of ad types
    pub const COUNT: usize = 5;

    /// All ad types in calculation order
    pub const ALL: [AdType; Self::COUNT] = [
        AdType::PreRoll,
        AdType::MidRoll,
        AdType::PostRoll,
        AdType::SponsoredOverlay,
        AdType::Banner,
    ];

    /// Human label, also used as the JSON key
    pub fn label(&self) -> &'static str {
        match self {
            AdType::PreRoll => "Pre Roll",
            AdType::MidRoll => "Mid Roll",
            AdType::PostRoll => "Post Roll",
            AdType::SponsoredOverlay => "Sponsored Overlay",
            AdType::Banner => "Banner",
        }
    }

    /// Position in [`AdType::ALL`]
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Looks up an ad type by its label
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.label() == label.trim())
    }
}

impl fmt::Display for AdType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
