// Export modules for library usage
pub mod analysis;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod errors;
pub mod io;

// Re-export commonly used types
pub use crate::core::{
    Alert, AlertSeverity, AnalysisResult, DedupEntry, GroupSummary, StackPatternEntry, StateCount,
    ThreadRecord, ThreadState,
};

pub use crate::analysis::{analyze_dump, base_pattern, classify_record, stack_signature};

pub use crate::config::JstackmapConfig;

pub use crate::errors::AnalysisError;

pub use crate::io::output::{create_writer, OutputFormat, OutputWriter};
