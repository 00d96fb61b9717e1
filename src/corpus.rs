//! Corpus discovery: depth-first enumeration of example source files under a
//! root directory, with the traversal exclusions expressed as a named policy
//! so the contract is testable apart from any call site.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::DiscoveryError;

/// Backend selection for one example.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunConfig {
    /// Compile the source and execute it, collecting the event trace.
    CompileAndExecute,
    /// Convert the source to the target language and collect the rendered
    /// document. Supported but not auto-selected for any file; opt in via
    /// [`WalkPolicy::convert_to_target_names`].
    ConvertToTarget,
}

/// Traversal contract for the example corpus.
#[derive(Debug, Clone)]
pub struct WalkPolicy {
    /// Directory names never recursed into (quarantine for known-bad
    /// examples).
    pub excluded_directory_names: Vec<String>,
    /// File names never considered (corpus metadata, not examples).
    pub excluded_file_names: Vec<String>,
    /// Extension an example source file must carry; other files are
    /// silently skipped.
    pub source_extension: String,
    /// Directories whose direct children are enumerated but never
    /// dispatched: their generated output ordering across declarations is
    /// not currently verifiable.
    pub skip_execution_directories: Vec<String>,
    /// File names routed through [`RunConfig::ConvertToTarget`] instead of
    /// the default compile-and-execute path. Empty by default.
    pub convert_to_target_names: Vec<String>,
}

impl Default for WalkPolicy {
    fn default() -> Self {
        Self {
            excluded_directory_names: vec!["Problems".to_owned()],
            excluded_file_names: vec!["order.txt".to_owned()],
            source_extension: "kt".to_owned(),
            skip_execution_directories: vec!["Canvas".to_owned()],
            convert_to_target_names: Vec::new(),
        }
    }
}

/// One discovered example file paired with its chosen run configuration.
/// Created once during traversal, consumed exactly once by the dispatcher.
#[derive(Debug, Clone)]
pub struct Candidate {
    pub path: PathBuf,
    /// Test identity. Fixtures are keyed by file name, not by path or
    /// traversal order.
    pub file_name: String,
    pub config: RunConfig,
    /// Present when the file is recognized but deliberately not dispatched.
    pub skip: Option<String>,
}

/// Enumerate example files under `root` in depth-first order. Order follows
/// directory listing order and is not sorted.
///
/// # Errors
///
/// A directory that cannot be listed is a fatal [`DiscoveryError`]; it must
/// not be mistaken for an empty corpus.
pub fn discover(root: &Path, policy: &WalkPolicy) -> Result<Vec<Candidate>, DiscoveryError> {
    let mut candidates = Vec::new();
    walk(root, policy, &mut candidates)?;
    Ok(candidates)
}

fn walk(
    dir: &Path,
    policy: &WalkPolicy,
    out: &mut Vec<Candidate>,
) -> Result<(), DiscoveryError> {
    let entries = fs::read_dir(dir).map_err(|source| DiscoveryError::Unreadable {
        path: dir.to_path_buf(),
        source,
    })?;

    for entry in entries {
        let entry = entry.map_err(|source| DiscoveryError::Unreadable {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        let name = entry.file_name().to_string_lossy().into_owned();
        let file_type = entry.file_type().map_err(|source| DiscoveryError::Unreadable {
            path: path.clone(),
            source,
        })?;

        if file_type.is_dir() {
            if policy.excluded_directory_names.iter().any(|d| d == &name) {
                debug!(directory = %name, "excluded from traversal");
                continue;
            }
            walk(&path, policy, out)?;
            continue;
        }

        if policy.excluded_file_names.iter().any(|f| f == &name) {
            continue;
        }
        let ext = path.extension().map(|e| e.to_string_lossy().into_owned());
        if ext.as_deref() != Some(policy.source_extension.as_str()) {
            continue;
        }

        let parent_name = dir.file_name().map(|n| n.to_string_lossy().into_owned());
        let skip = parent_name
            .as_deref()
            .filter(|p| {
                policy
                    .skip_execution_directories
                    .iter()
                    .any(|d| d == p)
            })
            .map(|p| format!("inside '{p}': generated output ordering is not verifiable"));

        let config = if policy.convert_to_target_names.iter().any(|n| n == &name) {
            RunConfig::ConvertToTarget
        } else {
            RunConfig::CompileAndExecute
        };

        debug!(file = %name, ?config, skipped = skip.is_some(), "discovered example");
        out.push(Candidate {
            path,
            file_name: name,
            config,
            skip,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_policy_names_the_standard_exclusions() {
        let policy = WalkPolicy::default();
        assert_eq!(policy.excluded_directory_names, vec!["Problems"]);
        assert_eq!(policy.excluded_file_names, vec!["order.txt"]);
        assert_eq!(policy.source_extension, "kt");
        assert_eq!(policy.skip_execution_directories, vec!["Canvas"]);
        assert!(policy.convert_to_target_names.is_empty());
    }
}
