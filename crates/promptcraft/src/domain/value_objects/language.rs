//! Language - Feedback form language selection

use serde::{Deserialize, Serialize};

/// Languages offered on the feedback form
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
pub enum Language {
    #[default]
    English,
    Spanish,
    French,
    Hindi,
}

impl Language {
    pub const ALL: [Language; 4] = [
        Language::English,
        Language::Spanish,
        Language::French,
        Language::Hindi,
    ];
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Language::English => write!(f, "English"),
            Language::Spanish => write!(f, "Spanish"),
            Language::French => write!(f, "French"),
            Language::Hindi => write!(f, "Hindi"),
        }
    }
}

impl std::str::FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "english" => Ok(Language::English),
            "spanish" => Ok(Language::Spanish),
            "french" => Ok(Language::French),
            "hindi" => Ok(Language::Hindi),
            _ => Err(format!("Unsupported language: {}", s)),
        }
    }
}
