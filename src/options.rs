use crate::language::Language;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Per-invocation configuration for `osascript`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Output style modifiers passed to `-s` as is. Any of:
    ///
    /// - `h` return values in human-readable form (default)
    /// - `s` return values in recompilable source form
    /// - `e` redirect script errors to stderr (default)
    /// - `o` redirect script errors to stdout
    ///
    /// When set, this replaces the `s` flag that `parse` would request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flags: Option<String>,
    pub language: Language,
    /// Parse stdout as JSON.
    pub parse: bool,
    /// Values handed to a JavaScript script as `argv`. Ignored for AppleScript.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<Value>,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults for JavaScript for Automation.
    pub fn jxa() -> Self {
        Self::new().language(Language::JavaScript)
    }

    pub fn flags(mut self, flags: impl Into<String>) -> Self {
        self.flags = Some(flags.into());
        self
    }

    pub fn language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    pub fn parse(mut self, parse: bool) -> Self {
        self.parse = parse;
        self
    }

    pub fn arg(mut self, value: impl Into<Value>) -> Self {
        self.args.push(value.into());
        self
    }

    pub fn args<I>(mut self, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        self.args.extend(values.into_iter().map(Into::into));
        self
    }
}
