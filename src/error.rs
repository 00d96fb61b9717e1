use std::path::PathBuf;

use thiserror::Error;

/// Fatal discovery failure. An unlistable directory aborts suite
/// construction instead of silently producing zero examples.
#[derive(Debug, Error)]
pub enum DiscoveryError {
    #[error("cannot list example directory {path}: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Per-example failure raised by a backend invocation. Backend failures are
/// propagated verbatim; the harness does not classify compiler errors.
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("cannot read example source {path}: {source}")]
    Source {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to launch backend command '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("backend i/o failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("backend exited with code {code:?}: {stderr}")]
    Failed { code: Option<i32>, stderr: String },
    #[error("undecodable backend response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// The response shape violated the backend contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NormalizeError {
    #[error("malformed conversion response: no entries")]
    EmptyConversion,
}

/// Every way a single example can fail. Failures are isolated per example;
/// none of these abort the rest of the suite.
#[derive(Debug, Error)]
pub enum FailReason {
    #[error("no fixture registered for {file_name}")]
    FixtureMissing { file_name: String },
    #[error("wrong result for {file_name}: expected {expected:?}, got {actual:?}")]
    Mismatch {
        file_name: String,
        expected: String,
        actual: String,
    },
    #[error("backend failed for {file_name}: {source}")]
    Backend {
        file_name: String,
        #[source]
        source: BackendError,
    },
    #[error("bad response shape for {file_name}: {source}")]
    Normalize {
        file_name: String,
        #[source]
        source: NormalizeError,
    },
}
