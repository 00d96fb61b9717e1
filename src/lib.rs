//! Regression harness for a playground service's "run this snippet" feature.
//!
//! The harness walks a corpus of example source files, runs each one through
//! an external backend (compile-and-execute, or source-to-target conversion),
//! extracts the printed output from the backend's structured response, and
//! compares it against a hand-authored expected value registered per file.
//!
//! The backends themselves are external collaborators behind the
//! [`backend::Backend`] trait; this crate only owns discovery, dispatch,
//! normalization, and comparison.

pub mod backend;
pub mod corpus;
pub mod error;
pub mod fixtures;
pub mod normalize;
pub mod verify;
