//! Run AppleScript and JavaScript for Automation through `osascript`.
//!
//! Scripts are written as templates of literal text and interpolated values
//! and run either directly or through an [`Invoker`] bound to fixed
//! [`Options`]:
//!
//! ```no_run
//! use osascript_tag::{osascript, template, Dispatch, Invoker, Options};
//!
//! # async fn demo() -> osascript_tag::Result<()> {
//! let app = "Finder";
//! if let Dispatch::Pending(pending) =
//!     osascript(template!("version of application \"", app, "\""))
//! {
//!     println!("{}", pending.await?.into_text());
//! }
//!
//! let windows = Invoker::jxa(Options::new().parse(true).arg(app))
//!     .run("return Application(argv[0]).windows.name()")
//!     .await?;
//! # Ok(())
//! # }
//! ```
//!
//! Anything `osascript` writes to stderr fails the invocation with
//! [`Error::Script`], even when the process exits with status 0. Some
//! scripting additions print warnings there; those scripts will be
//! reported as failures.

pub mod command;
pub mod error;
pub mod invoker;
pub mod language;
pub mod options;
pub mod platform;
pub mod runner;
pub mod template;

pub use error::{Error, Result};
pub use invoker::Invoker;
pub use language::Language;
pub use options::Options;
pub use runner::{Launcher, RawOutput, ScriptOutput, SystemLauncher};
pub use template::Template;

use futures::future::BoxFuture;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// What an entry point was called with: a script to run right away, or
/// options to bind into a reusable [`Invoker`].
#[derive(Debug, Clone)]
pub enum Invocation {
    Template(Template),
    Options(Options),
}

impl From<Template> for Invocation {
    fn from(template: Template) -> Self {
        Invocation::Template(template)
    }
}

impl From<&str> for Invocation {
    fn from(script: &str) -> Self {
        Invocation::Template(script.into())
    }
}

impl From<Options> for Invocation {
    fn from(options: Options) -> Self {
        Invocation::Options(options)
    }
}

/// Result of dispatching an [`Invocation`].
pub enum Dispatch {
    /// The script is already checked and built; await it for the result.
    Pending(BoxFuture<'static, Result<ScriptOutput>>),
    Bound(Invoker),
}

impl Dispatch {
    pub fn into_pending(self) -> Option<BoxFuture<'static, Result<ScriptOutput>>> {
        match self {
            Dispatch::Pending(pending) => Some(pending),
            Dispatch::Bound(_) => None,
        }
    }

    pub fn into_invoker(self) -> Option<Invoker> {
        match self {
            Dispatch::Bound(invoker) => Some(invoker),
            Dispatch::Pending(_) => None,
        }
    }
}

impl std::fmt::Debug for Dispatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Dispatch::Pending(_) => f.write_str("Dispatch::Pending"),
            Dispatch::Bound(invoker) => f.debug_tuple("Dispatch::Bound").field(invoker).finish(),
        }
    }
}

pub(crate) fn dispatch_with(
    invocation: Invocation,
    bind: fn(Options) -> Invoker,
    launcher: Arc<dyn Launcher>,
    host: &'static str,
) -> Dispatch {
    let bound = |options| {
        bind(options)
            .with_launcher(Arc::clone(&launcher))
            .on_host(host)
    };
    match invocation {
        Invocation::Template(template) => Dispatch::Pending(
            bound(Options::default()).start(template, CancellationToken::new()),
        ),
        Invocation::Options(options) => Dispatch::Bound(bound(options)),
    }
}

fn dispatch(invocation: Invocation, bind: fn(Options) -> Invoker) -> Dispatch {
    dispatch_with(
        invocation,
        bind,
        Arc::new(SystemLauncher),
        platform::host_os(),
    )
}

/// Run an AppleScript template, or bind options for later runs.
pub fn osascript(invocation: impl Into<Invocation>) -> Dispatch {
    dispatch(invocation.into(), Invoker::new)
}

/// Same as [`osascript`], for JavaScript for Automation.
pub fn jxa(invocation: impl Into<Invocation>) -> Dispatch {
    dispatch(invocation.into(), Invoker::jxa)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::testing::MockLauncher;
    use crate::template;

    #[test]
    fn options_bind_an_invoker() {
        let invoker = osascript(Options::new().flags("eh").language(Language::JavaScript))
            .into_invoker()
            .unwrap();
        let argv = invoker.argv(&"test".into());
        assert_eq!(argv[..4], ["-l", "JavaScript", "-s", "eh"]);
        assert!(argv[5].contains("test"));
    }

    #[test]
    fn jxa_binding_forces_javascript() {
        let invoker = jxa(Options::new()).into_invoker().unwrap();
        assert_eq!(invoker.options().language, Language::JavaScript);
    }

    #[tokio::test]
    async fn template_dispatch_is_pending() {
        let pending = osascript("test").into_pending().unwrap();
        if cfg!(target_os = "macos") {
            drop(pending);
        } else {
            assert!(matches!(
                pending.await,
                Err(Error::UnsupportedPlatform { .. })
            ));
        }
    }

    fn mocked(
        invocation: impl Into<Invocation>,
        bind: fn(Options) -> Invoker,
        launcher: &Arc<MockLauncher>,
    ) -> Dispatch {
        let launcher: Arc<dyn Launcher> = launcher.clone();
        dispatch_with(invocation.into(), bind, launcher, "macos")
    }

    #[tokio::test]
    async fn jxa_template_launches_wrapped_script() {
        let launcher = Arc::new(MockLauncher::default());
        mocked(template!("test"), Invoker::jxa, &launcher)
            .into_pending()
            .unwrap()
            .await
            .unwrap();
        let calls = launcher.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "osascript");
        assert_eq!(
            calls[0].1,
            vec!["-l", "JavaScript", "-e", "(function(...argv){test})()"]
        );
    }

    #[tokio::test]
    async fn template_call_matches_bound_invoker_argv() {
        let launcher = Arc::new(MockLauncher::default());
        let name = "Finder";
        let script = template!("activate application \"", name, "\"");
        mocked(script.clone(), Invoker::new, &launcher)
            .into_pending()
            .unwrap()
            .await
            .unwrap();
        let bound = mocked(Options::default(), Invoker::new, &launcher)
            .into_invoker()
            .unwrap();
        assert_eq!(launcher.calls()[0].1, bound.argv(&script));
        assert_eq!(
            launcher.calls()[0].1,
            vec!["-l", "AppleScript", "-e", "activate application \"Finder\""]
        );
    }

    #[test]
    fn both_styles_agree_on_argv() {
        let direct = Invoker::default().argv(&"test".into());
        let bound = osascript(Options::default())
            .into_invoker()
            .unwrap()
            .argv(&"test".into());
        assert_eq!(direct, bound);
        assert_eq!(direct, vec!["-l", "AppleScript", "-e", "test"]);
    }
}
