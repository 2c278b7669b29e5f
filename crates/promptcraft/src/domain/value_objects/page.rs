//! Page - Interactive session page selector

use serde::{Deserialize, Serialize};

/// Pages reachable from the session sidebar
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
pub enum Page {
    #[default]
    Home,
    Learn,
    About,
    Feedback,
    Techniques,
}

impl Page {
    /// Sidebar order
    pub const ALL: [Page; 5] = [
        Page::Home,
        Page::Learn,
        Page::About,
        Page::Feedback,
        Page::Techniques,
    ];
}

impl std::fmt::Display for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Page::Home => write!(f, "Home"),
            Page::Learn => write!(f, "Learn"),
            Page::About => write!(f, "About"),
            Page::Feedback => write!(f, "Feedback"),
            Page::Techniques => write!(f, "Techniques"),
        }
    }
}

impl std::str::FromStr for Page {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "home" => Ok(Page::Home),
            "learn" => Ok(Page::Learn),
            "about" => Ok(Page::About),
            "feedback" => Ok(Page::Feedback),
            "techniques" => Ok(Page::Techniques),
            _ => Err(format!("Unknown page: {}", s)),
        }
    }
}
