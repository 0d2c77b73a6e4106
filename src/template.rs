//! Script text assembled from literal fragments and interpolated values.

use crate::error::{Error, Result};
use std::fmt;

/// Literal fragments interleaved with stringified values. There is always
/// exactly one more literal than there are values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    literals: Vec<String>,
    values: Vec<String>,
}

impl Template {
    pub fn new<L, V>(literals: L, values: V) -> Result<Self>
    where
        L: IntoIterator,
        L::Item: Into<String>,
        V: IntoIterator,
        V::Item: fmt::Display,
    {
        let literals: Vec<String> = literals.into_iter().map(Into::into).collect();
        let values: Vec<String> = values.into_iter().map(|value| value.to_string()).collect();
        if literals.len() != values.len() + 1 {
            return Err(Error::Template {
                literals: literals.len(),
                values: values.len(),
            });
        }
        Ok(Self { literals, values })
    }

    /// A template with no interpolated values.
    pub fn literal(text: impl Into<String>) -> Self {
        Self {
            literals: vec![text.into()],
            values: Vec::new(),
        }
    }

    pub fn literals(&self) -> &[String] {
        &self.literals
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Concatenate each literal with the value that follows it and trim the result.
    pub fn build(&self) -> String {
        let mut script = String::new();
        for (i, literal) in self.literals.iter().enumerate() {
            script.push_str(literal);
            if let Some(value) = self.values.get(i) {
                script.push_str(value);
            }
        }
        script.trim().to_owned()
    }
}

impl From<&str> for Template {
    fn from(text: &str) -> Self {
        Self::literal(text)
    }
}

impl From<String> for Template {
    fn from(text: String) -> Self {
        Self::literal(text)
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.build())
    }
}

/// Build a [`Template`] from alternating literals and values, starting and
/// ending with a literal:
///
/// ```
/// use osascript_tag::template;
///
/// let app = "Finder";
/// let script = template!("tell application \"", app, "\" to activate");
/// assert_eq!(script.build(), "tell application \"Finder\" to activate");
/// ```
#[macro_export]
macro_rules! template {
    ($first:expr $(, $value:expr, $literal:expr)*) => {
        $crate::Template::__from_parts(
            ::std::vec![::std::string::String::from($first) $(, ::std::string::String::from($literal))*],
            ::std::vec![$(::std::string::ToString::to_string(&$value)),*],
        )
    };
}

impl Template {
    #[doc(hidden)]
    pub fn __from_parts(literals: Vec<String>, values: Vec<String>) -> Self {
        debug_assert_eq!(literals.len(), values.len() + 1);
        Self { literals, values }
    }
}
