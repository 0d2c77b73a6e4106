use crate::command::{self, PROGRAM};
use crate::error::Result;
use crate::language::Language;
use crate::options::Options;
use crate::platform;
use crate::runner::{self, Launcher, ScriptOutput, SystemLauncher};
use crate::template::Template;
use futures::future::{self, BoxFuture, FutureExt};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// Runs templates through `osascript` with a fixed set of options.
#[derive(Clone)]
pub struct Invoker {
    options: Options,
    launcher: Arc<dyn Launcher>,
    host: &'static str,
}

impl Invoker {
    pub fn new(options: Options) -> Self {
        Self {
            options,
            launcher: Arc::new(SystemLauncher),
            host: platform::host_os(),
        }
    }

    /// Like [`Invoker::new`], but always runs JavaScript for Automation.
    pub fn jxa(options: Options) -> Self {
        Self::new(options.language(Language::JavaScript))
    }

    /// Swap out how the process gets started.
    pub fn with_launcher(mut self, launcher: Arc<dyn Launcher>) -> Self {
        self.launcher = launcher;
        self
    }

    pub(crate) fn on_host(mut self, host: &'static str) -> Self {
        self.host = host;
        self
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Arguments `osascript` would be called with for this template.
    pub fn argv(&self, template: &Template) -> Vec<String> {
        command::build_args(template, &self.options)
    }

    /// Check the platform and build the command line right away, then hand
    /// back a future that launches the process and waits for it.
    pub fn start(
        &self,
        template: Template,
        cancel: CancellationToken,
    ) -> BoxFuture<'static, Result<ScriptOutput>> {
        if let Err(err) = platform::ensure_supported(self.host) {
            return future::ready(Err(err)).boxed();
        }

        let args = self.argv(&template);
        let parse = self.options.parse;
        let launcher = Arc::clone(&self.launcher);
        async move {
            tracing::debug!(?args, "Running {}", PROGRAM);
            let raw = launcher.launch(PROGRAM, &args, cancel).await?;
            tracing::debug!(
                status = ?raw.status,
                stdout_len = raw.stdout.len(),
                stderr_len = raw.stderr.len(),
                "{} exited",
                PROGRAM
            );
            runner::settle(raw, parse)
        }
        .boxed()
    }

    pub async fn run(&self, template: impl Into<Template>) -> Result<ScriptOutput> {
        self.start(template.into(), CancellationToken::new()).await
    }

    /// Run, but give up and kill the process once `cancel` fires.
    pub async fn run_until(
        &self,
        template: impl Into<Template>,
        cancel: CancellationToken,
    ) -> Result<ScriptOutput> {
        self.start(template.into(), cancel).await
    }

    /// Run with JSON parsing forced on and deserialize the result.
    pub async fn run_as<T: DeserializeOwned>(&self, template: impl Into<Template>) -> Result<T> {
        let mut invoker = self.clone();
        invoker.options.parse = true;
        let value = match invoker.run(template).await? {
            ScriptOutput::Json(value) => value,
            ScriptOutput::Text(text) => serde_json::from_str(&text)?,
        };
        Ok(serde_json::from_value(value)?)
    }
}

impl Default for Invoker {
    fn default() -> Self {
        Self::new(Options::default())
    }
}

impl std::fmt::Debug for Invoker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Invoker")
            .field("options", &self.options)
            .field("host", &self.host)
            .finish()
    }
}
