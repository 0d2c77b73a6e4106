use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Language `osascript` compiles plain script text as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    AppleScript,
    /// JavaScript for Automation.
    JavaScript,
}

impl Language {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Language::AppleScript => "AppleScript",
            Language::JavaScript => "JavaScript",
        }
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::AppleScript
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "applescript" => Ok(Language::AppleScript),
            "javascript" | "jxa" => Ok(Language::JavaScript),
            _ => Err(format!("unknown osascript language `{}`", s)),
        }
    }
}
