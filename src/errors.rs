//! Error types for jstackmap analysis operations.
//!
//! Data-shape problems inside a dump are never fatal: a segment that cannot
//! be parsed is dropped and counted, and a dump with zero valid records
//! produces a valid all-zero result. Only environment-level failures
//! (unreadable input, broken config) surface as errors, and only the CLI
//! caller decides whether an empty analysis is worth a non-zero exit.

use std::fmt;
use std::io;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    /// The input file is missing, unreadable, or not valid UTF-8.
    InputUnreadable {
        message: String,
        path: Option<PathBuf>,
    },
    /// A thread segment whose mandatory header (name + state) could not be
    /// located. Recovered locally by the pipeline; exposed for direct users
    /// of the extractor.
    MalformedSegment { reason: String },
    /// The dump contained no valid thread records. Raised by callers that
    /// treat "no threads" as fatal, never by the core itself.
    EmptyAnalysis,
    /// Configuration file problems.
    Config { message: String },
}

impl AnalysisError {
    pub fn input(message: impl Into<String>) -> Self {
        Self::InputUnreadable {
            message: message.into(),
            path: None,
        }
    }

    pub fn input_with_path(message: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::InputUnreadable {
            message: message.into(),
            path: Some(path.into()),
        }
    }

    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedSegment {
            reason: reason.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}

impl fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InputUnreadable { message, path } => match path {
                Some(p) => write!(f, "cannot read input {}: {}", p.display(), message),
                None => write!(f, "cannot read input: {}", message),
            },
            Self::MalformedSegment { reason } => write!(f, "malformed thread segment: {}", reason),
            Self::EmptyAnalysis => write!(f, "no thread entries found in input"),
            Self::Config { message } => write!(f, "configuration error: {}", message),
        }
    }
}

impl std::error::Error for AnalysisError {}

impl From<io::Error> for AnalysisError {
    fn from(err: io::Error) -> Self {
        Self::input(err.to_string())
    }
}
