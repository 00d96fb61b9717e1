//! Backend seam and per-example dispatch.
//!
//! The compile-and-execute engine and the source-to-target converter are
//! external collaborators. This module defines the trait they are reached
//! through, the JSON-array wire shapes they answer with, and the dispatcher
//! that runs one candidate against one of them. A [`CommandBackend`] binds
//! the trait to an external program spawned per invocation.

use std::fs;
use std::io::Write;
use std::process::{Command, Stdio};

use serde::Deserialize;
use tracing::debug;

use crate::corpus::{Candidate, RunConfig};
use crate::error::BackendError;
use crate::fixtures::Fixture;

/// Request type carried by the per-example session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    Run,
    ConvertToTarget,
}

/// Per-example session state. Constructed freshly for every dispatch and
/// dropped after comparison; never reused or pooled across examples, so no
/// state can leak between tests.
#[derive(Debug, Clone)]
pub struct Session {
    pub run_config: RunConfig,
    pub request: RequestKind,
}

impl Session {
    pub fn for_candidate(config: RunConfig) -> Self {
        let request = match config {
            RunConfig::CompileAndExecute => RequestKind::Run,
            RunConfig::ConvertToTarget => RequestKind::ConvertToTarget,
        };
        Self {
            run_config: config,
            request,
        }
    }
}

/// One event in an execution trace. Anything other than `"out"` (diagnostics,
/// errors) is opaque to the harness; such events may carry no text at all.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TraceEvent {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub text: String,
}

/// Ordered event log returned by the compile-and-execute backend.
pub type ExecutionTrace = Vec<TraceEvent>;

/// One entry of a conversion response. Extra fields are ignored; only the
/// first entry's text matters to comparison.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ConversionEntry {
    pub text: String,
}

/// Ordered entry list returned by the convert-to-target backend.
pub type ConversionResult = Vec<ConversionEntry>;

/// Tagged union over the two backend response shapes, so normalization is
/// selected by variant rather than by inspecting the payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawResponse {
    Trace(ExecutionTrace),
    Conversion(ConversionResult),
}

/// External language-service collaborator.
pub trait Backend {
    fn compile_and_execute(
        &self,
        source: &str,
        args: &str,
        session: &Session,
    ) -> Result<ExecutionTrace, BackendError>;

    fn convert_to_target(
        &self,
        source: &str,
        args: &str,
        session: &Session,
    ) -> Result<ConversionResult, BackendError>;
}

/// Run one candidate against the backend selected by its configuration,
/// passing the fixture's registered program input. Reads the full source
/// text and establishes a fresh session before the call.
pub fn dispatch(
    backend: &dyn Backend,
    candidate: &Candidate,
    fixture: &Fixture,
) -> Result<RawResponse, BackendError> {
    let source = fs::read_to_string(&candidate.path).map_err(|source| BackendError::Source {
        path: candidate.path.clone(),
        source,
    })?;
    let session = Session::for_candidate(candidate.config);
    debug!(file = %candidate.file_name, request = ?session.request, "dispatching example");
    match candidate.config {
        RunConfig::CompileAndExecute => backend
            .compile_and_execute(&source, &fixture.args, &session)
            .map(RawResponse::Trace),
        RunConfig::ConvertToTarget => backend
            .convert_to_target(&source, &fixture.args, &session)
            .map(RawResponse::Conversion),
    }
}

/// Backend bound to an external program. Each invocation spawns a fresh
/// process with the example source on stdin and argv `<mode> <args>`, and
/// expects the JSON-array response on stdout.
#[derive(Debug, Clone)]
pub struct CommandBackend {
    program: String,
}

impl CommandBackend {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn invoke(&self, mode: &str, source: &str, args: &str) -> Result<Vec<u8>, BackendError> {
        let mut child = Command::new(&self.program)
            .arg(mode)
            .arg(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| BackendError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(source.as_bytes())?;
            // Closing stdin lets the backend see end of input.
        }
        let output = child.wait_with_output()?;
        if !output.status.success() {
            return Err(BackendError::Failed {
                code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }
        Ok(output.stdout)
    }
}

impl Backend for CommandBackend {
    fn compile_and_execute(
        &self,
        source: &str,
        args: &str,
        session: &Session,
    ) -> Result<ExecutionTrace, BackendError> {
        debug!(program = %self.program, request = ?session.request, "spawning run backend");
        let body = self.invoke("run", source, args)?;
        Ok(serde_json::from_slice(&body)?)
    }

    fn convert_to_target(
        &self,
        source: &str,
        args: &str,
        session: &Session,
    ) -> Result<ConversionResult, BackendError> {
        debug!(program = %self.program, request = ?session.request, "spawning convert backend");
        let body = self.invoke("convert", source, args)?;
        Ok(serde_json::from_slice(&body)?)
    }
}
