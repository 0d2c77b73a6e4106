use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("osascript-tag requires macOS, running on {os}")]
    UnsupportedPlatform { os: String },
    /// `osascript` could not be started at all, e.g. it is not installed.
    #[error("Couldn't spawn osascript")]
    Launch(#[source] std::io::Error),
    #[error("Couldn't collect osascript output")]
    Io(#[source] std::io::Error),
    /// Anything written to stderr, verbatim. Raised even when osascript
    /// exits with status 0.
    #[error("{0}")]
    Script(String),
    #[error("Failed to parse script result as JSON")]
    Parse(#[from] serde_json::Error),
    #[error("template needs one more literal than values, got {literals} literals and {values} values")]
    Template { literals: usize, values: usize },
    #[error("script invocation was cancelled")]
    Cancelled,
}

impl Error {
    pub fn is_script_failure(&self) -> bool {
        matches!(self, Error::Script(_))
    }

    /// The stderr text of a failed script, if that is what this error is.
    pub fn stderr(&self) -> Option<&str> {
        match self {
            Error::Script(text) => Some(text),
            _ => None,
        }
    }
}
