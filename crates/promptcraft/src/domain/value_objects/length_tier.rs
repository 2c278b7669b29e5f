//! LengthTier - Desired size of a refined prompt

use serde::{Deserialize, Serialize};

/// Length tier requested for a refinement
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum LengthTier {
    Short,
    #[default]
    Medium,
    Long,
}

impl LengthTier {
    pub const ALL: [LengthTier; 3] = [LengthTier::Short, LengthTier::Medium, LengthTier::Long];

    /// Word-count range embedded in the refine instruction
    pub fn word_range(self) -> &'static str {
        match self {
            LengthTier::Short => "300-500 words",
            LengthTier::Medium => "800-1000 words",
            LengthTier::Long => "1500-2000 words",
        }
    }

    /// Parse a tier label, falling back to `Medium` for anything unrecognized
    pub fn from_label(label: &str) -> Self {
        label.parse().unwrap_or_default()
    }
}

impl std::fmt::Display for LengthTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LengthTier::Short => write!(f, "short"),
            LengthTier::Medium => write!(f, "medium"),
            LengthTier::Long => write!(f, "long"),
        }
    }
}

impl std::str::FromStr for LengthTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "short" => Ok(LengthTier::Short),
            "medium" => Ok(LengthTier::Medium),
            "long" => Ok(LengthTier::Long),
            _ => Err(format!("Unknown length tier: {}", s)),
        }
    }
}
