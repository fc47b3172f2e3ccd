//! CLI command implementations.
//!
//! - **analyze**: read a jstack dump, run the analysis pipeline, write a report
//! - **themes**: list the available report themes

pub mod analyze;
pub mod themes;

pub use analyze::{handle_analyze, AnalyzeConfig};
pub use themes::list_themes;
