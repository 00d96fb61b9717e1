//! Comparison against registered expectations, and the sequential suite
//! runner tying discovery, dispatch, and normalization together.

use std::path::Path;

use tracing::{debug, warn};

use crate::backend::{dispatch, Backend};
use crate::corpus::{discover, Candidate, WalkPolicy};
use crate::error::{DiscoveryError, FailReason};
use crate::fixtures::FixtureRegistry;
use crate::normalize::normalize;

/// Outcome of one example.
#[derive(Debug)]
pub enum Verdict {
    Pass,
    Fail(FailReason),
}

impl Verdict {
    pub fn is_pass(&self) -> bool {
        matches!(self, Verdict::Pass)
    }
}

/// Compare a normalized output against the fixture registered for the file.
/// Exact string equality; no trimming or whitespace normalization, the
/// embedded separator markers make exact match meaningful.
pub fn verify(file_name: &str, normalized: &str, registry: &FixtureRegistry) -> Verdict {
    match registry.lookup(file_name) {
        None => Verdict::Fail(FailReason::FixtureMissing {
            file_name: file_name.to_owned(),
        }),
        Some(fixture) if fixture.expected_output == normalized => Verdict::Pass,
        Some(fixture) => Verdict::Fail(FailReason::Mismatch {
            file_name: file_name.to_owned(),
            expected: fixture.expected_output.clone(),
            actual: normalized.to_owned(),
        }),
    }
}

/// Result of one dispatched example.
#[derive(Debug)]
pub struct ExampleResult {
    pub file_name: String,
    pub verdict: Verdict,
}

/// Aggregate suite outcome: one result per dispatched example, plus the
/// files that were enumerated but deliberately not dispatched.
#[derive(Debug, Default)]
pub struct SuiteReport {
    pub results: Vec<ExampleResult>,
    pub skipped: Vec<String>,
}

impl SuiteReport {
    pub fn passed(&self) -> usize {
        self.results.iter().filter(|r| r.verdict.is_pass()).count()
    }

    pub fn failed(&self) -> usize {
        self.results.len() - self.passed()
    }

    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }

    pub fn failures(&self) -> impl Iterator<Item = &ExampleResult> {
        self.results.iter().filter(|r| !r.verdict.is_pass())
    }
}

/// Run the whole corpus sequentially: discover, then for each candidate a
/// fully synchronous dispatch -> normalize -> compare round trip. Failures
/// are isolated per example; only discovery aborts the suite.
pub fn run_suite(
    root: &Path,
    policy: &WalkPolicy,
    registry: &FixtureRegistry,
    backend: &dyn Backend,
) -> Result<SuiteReport, DiscoveryError> {
    let candidates = discover(root, policy)?;
    let mut report = SuiteReport::default();
    for candidate in candidates {
        if let Some(reason) = &candidate.skip {
            debug!(file = %candidate.file_name, %reason, "example skipped");
            report.skipped.push(candidate.file_name.clone());
            continue;
        }
        let verdict = run_example(backend, &candidate, registry);
        if let Verdict::Fail(reason) = &verdict {
            warn!(file = %candidate.file_name, %reason, "example failed");
        }
        report.results.push(ExampleResult {
            file_name: candidate.file_name,
            verdict,
        });
    }
    Ok(report)
}

fn run_example(
    backend: &dyn Backend,
    candidate: &Candidate,
    registry: &FixtureRegistry,
) -> Verdict {
    // The fixture must exist before anything runs: it supplies the program
    // input, and a missing entry is a reported failure, never a silent pass.
    let Some(fixture) = registry.lookup(&candidate.file_name) else {
        return Verdict::Fail(FailReason::FixtureMissing {
            file_name: candidate.file_name.clone(),
        });
    };
    let raw = match dispatch(backend, candidate, fixture) {
        Ok(raw) => raw,
        Err(source) => {
            return Verdict::Fail(FailReason::Backend {
                file_name: candidate.file_name.clone(),
                source,
            })
        }
    };
    let output = match normalize(&raw) {
        Ok(output) => output,
        Err(source) => {
            return Verdict::Fail(FailReason::Normalize {
                file_name: candidate.file_name.clone(),
                source,
            })
        }
    };
    verify(&candidate.file_name, &output, registry)
}
