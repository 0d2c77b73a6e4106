//! Launching `osascript` and turning what it printed into a result.

use crate::error::{Error, Result};
use async_trait::async_trait;
use serde_json::Value;
use std::process::Stdio;
use tokio::process::Command;
use tokio_util::sync::CancellationToken;

/// Everything a finished `osascript` process produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawOutput {
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
    /// Recorded for logging, never used to decide success.
    pub status: Option<i32>,
}

/// Starts the interpreter process and waits for it to exit.
#[async_trait]
pub trait Launcher: Send + Sync {
    async fn launch(
        &self,
        program: &str,
        args: &[String],
        cancel: CancellationToken,
    ) -> Result<RawOutput>;
}

/// Spawns real child processes through tokio.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemLauncher;

#[async_trait]
impl Launcher for SystemLauncher {
    async fn launch(
        &self,
        program: &str,
        args: &[String],
        cancel: CancellationToken,
    ) -> Result<RawOutput> {
        let child = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(Error::Launch)?;
        tracing::debug!(pid = ?child.id(), "Spawned {}", program);

        // Dropping the pending wait on cancellation kills the child.
        let output = tokio::select! {
            output = child.wait_with_output() => output.map_err(Error::Io)?,
            _ = cancel.cancelled() => {
                tracing::debug!("Cancelled {}, killing child", program);
                return Err(Error::Cancelled);
            }
        };

        Ok(RawOutput {
            stdout: output.stdout,
            stderr: output.stderr,
            status: output.status.code(),
        })
    }
}

/// Successful result of a script.
#[derive(Debug, Clone, PartialEq)]
pub enum ScriptOutput {
    /// Trimmed stdout.
    Text(String),
    /// Stdout parsed as JSON.
    Json(Value),
}

impl ScriptOutput {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ScriptOutput::Text(text) => Some(text),
            ScriptOutput::Json(_) => None,
        }
    }

    pub fn into_text(self) -> String {
        match self {
            ScriptOutput::Text(text) => text,
            ScriptOutput::Json(value) => value.to_string(),
        }
    }

    pub fn into_json(self) -> Option<Value> {
        match self {
            ScriptOutput::Json(value) => Some(value),
            ScriptOutput::Text(_) => None,
        }
    }
}

/// Classify a finished process. Any stderr output is a failure no matter
/// what the exit status or stdout was.
pub fn settle(raw: RawOutput, parse: bool) -> Result<ScriptOutput> {
    let stderr = String::from_utf8_lossy(&raw.stderr);
    if !stderr.is_empty() {
        return Err(Error::Script(stderr.into_owned()));
    }

    let stdout = String::from_utf8_lossy(&raw.stdout);
    let stdout = stdout.trim();
    if parse {
        let value = serde_json::from_str(stdout)?;
        Ok(ScriptOutput::Json(value))
    } else {
        Ok(ScriptOutput::Text(stdout.to_owned()))
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::sync::Mutex;

    /// Records every launch and answers with a canned result.
    #[derive(Default)]
    pub struct MockLauncher {
        calls: Mutex<Vec<(String, Vec<String>)>>,
        output: Mutex<RawOutput>,
        spawn_error: Mutex<Option<std::io::ErrorKind>>,
    }

    impl MockLauncher {
        pub fn with_output(stdout: &str, stderr: &str) -> Self {
            let launcher = Self::default();
            launcher.set_output(stdout, stderr);
            launcher
        }

        pub fn failing(kind: std::io::ErrorKind) -> Self {
            let launcher = Self::default();
            *launcher.spawn_error.lock().unwrap() = Some(kind);
            launcher
        }

        pub fn set_output(&self, stdout: &str, stderr: &str) {
            *self.output.lock().unwrap() = RawOutput {
                stdout: stdout.as_bytes().to_vec(),
                stderr: stderr.as_bytes().to_vec(),
                status: Some(0),
            };
        }

        pub fn calls(&self) -> Vec<(String, Vec<String>)> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Launcher for MockLauncher {
        async fn launch(
            &self,
            program: &str,
            args: &[String],
            _cancel: CancellationToken,
        ) -> Result<RawOutput> {
            self.calls
                .lock()
                .unwrap()
                .push((program.to_string(), args.to_vec()));
            if let Some(kind) = *self.spawn_error.lock().unwrap() {
                return Err(Error::Launch(std::io::Error::from(kind)));
            }
            Ok(self.output.lock().unwrap().clone())
        }
    }
}
