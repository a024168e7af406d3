//! External linter invocation.
//!
//! Runs the configured program with the file path as its last argument,
//! waits up to a deadline and folds the exit status into a
//! [`ValidationOutcome`].

use super::{ValidationOutcome, Validator};
use crate::document::FileKind;
use crate::utils::config::{LinterCommand, DEFAULT_VALIDATOR_TIMEOUT};
use crate::utils::error::ValidationError;
use log::debug;
use std::io::{self, Read};
use std::path::Path;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

/// Interval between checks on a running linter
const POLL_INTERVAL: Duration = Duration::from_millis(20);

/// A lint tool run as a blocking subprocess
#[derive(Debug, Clone)]
pub struct ExternalLinter {
    command: LinterCommand,
    timeout: Duration,
}

impl ExternalLinter {
    pub fn new(command: LinterCommand) -> Self {
        Self {
            command,
            timeout: DEFAULT_VALIDATOR_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn spawn(&self, path: &Path) -> io::Result<Child> {
        Command::new(&self.command.program)
            .args(&self.command.args)
            .arg(path)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
    }

    /// Wait for the child, killing it once the deadline passes
    fn wait(&self, child: &mut Child) -> Result<ExitStatus, ValidationError> {
        let deadline = Instant::now() + self.timeout;
        loop {
            match child.try_wait() {
                Ok(Some(status)) => return Ok(status),
                Ok(None) if Instant::now() >= deadline => {
                    // Already-exited races are fine to ignore here
                    let _ = child.kill();
                    let _ = child.wait();
                    return Err(ValidationError::TimedOut {
                        tool: self.command.program.clone(),
                        seconds: self.timeout.as_secs(),
                    });
                }
                Ok(None) => thread::sleep(POLL_INTERVAL),
                Err(source) => {
                    return Err(ValidationError::SpawnFailed {
                        tool: self.command.program.clone(),
                        source,
                    })
                }
            }
        }
    }
}

impl Validator for ExternalLinter {
    fn name(&self) -> &str {
        &self.command.program
    }

    fn validate(&self, path: &Path, kind: FileKind) -> Result<ValidationOutcome, ValidationError> {
        debug!(
            "Running {} on {} ({})",
            self.command.program,
            path.display(),
            kind
        );

        let mut child = match self.spawn(path) {
            Ok(child) => child,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Ok(ValidationOutcome::Skipped {
                    reason: format!("{} not found", self.command.program),
                });
            }
            Err(source) => {
                return Err(ValidationError::SpawnFailed {
                    tool: self.command.program.clone(),
                    source,
                })
            }
        };

        // Drain both pipes so a chatty linter cannot block on a full buffer
        let stdout = drain(child.stdout.take());
        let stderr = drain(child.stderr.take());

        let status = self.wait(&mut child)?;
        let mut diagnostics = collect(stdout);
        let errors = collect(stderr);
        if !errors.is_empty() {
            if !diagnostics.is_empty() && !diagnostics.ends_with('\n') {
                diagnostics.push('\n');
            }
            diagnostics.push_str(&errors);
        }

        if status.success() {
            Ok(ValidationOutcome::Passed)
        } else {
            Ok(ValidationOutcome::Failed {
                diagnostics: diagnostics.trim_end().to_string(),
            })
        }
    }
}

fn drain<R: Read + Send + 'static>(pipe: Option<R>) -> Option<JoinHandle<String>> {
    pipe.map(|mut reader| {
        thread::spawn(move || {
            let mut buf = Vec::new();
            // A read error just truncates the diagnostics
            let _ = reader.read_to_end(&mut buf);
            String::from_utf8_lossy(&buf).into_owned()
        })
    })
}

fn collect(handle: Option<JoinHandle<String>>) -> String {
    handle
        .and_then(|h| h.join().ok())
        .unwrap_or_default()
}
