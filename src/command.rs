//! Translates a template and its options into an `osascript` argument list.

use crate::language::Language;
use crate::options::Options;
use crate::template::Template;
use serde_json::Value;

pub const PROGRAM: &str = "osascript";

/// Wrap a JavaScript body in an immediately invoked function that receives
/// `args` as JSON literals through `...argv`.
///
/// The body is spliced in without line breaks and templates are trimmed, so a
/// script whose last line is a `//` comment swallows the closing brace and
/// fails to compile. Use `/* */` for a trailing comment.
pub fn wrap_jxa(script: &str, args: &[Value]) -> String {
    let argv = args
        .iter()
        .map(|value| value.to_string())
        .collect::<Vec<_>>()
        .join(",");
    format!("(function(...argv){{{}}})({})", script, argv)
}

/// The script text actually handed to `-e`.
pub fn script_source(template: &Template, options: &Options) -> String {
    let script = template.build();
    match options.language {
        Language::JavaScript => wrap_jxa(&script, &options.args),
        Language::AppleScript => {
            if !options.args.is_empty() {
                tracing::warn!(
                    count = options.args.len(),
                    "Ignoring script arguments, only JavaScript receives argv"
                );
            }
            script
        }
    }
}

/// `-l <language> [-s <flags>] -e <script>`
pub fn build_args(template: &Template, options: &Options) -> Vec<String> {
    let mut args = vec!["-l".to_string(), options.language.as_str().to_string()];

    let flags = match (&options.flags, options.parse) {
        (Some(flags), _) => Some(flags.clone()),
        (None, true) => Some("s".to_string()),
        (None, false) => None,
    };
    if let Some(flags) = flags {
        args.push("-s".to_string());
        args.push(flags);
    }

    args.push("-e".to_string());
    args.push(script_source(template, options));
    args
}
