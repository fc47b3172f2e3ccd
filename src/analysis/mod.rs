//! The analysis pipeline: raw dump text in, immutable [`AnalysisResult`]
//! out. Each stage consumes the previous stage's output and returns a new
//! value; nothing here does I/O and no state survives between runs, so
//! independent dumps can be analyzed concurrently without coordination.

pub mod classify;
pub mod dedup;
pub mod extractor;
pub mod splitter;
pub mod stack;
pub mod stats;

pub use classify::{classify_record, GroupRule, Matcher, FALLBACK_GROUP, GROUP_RULES};
pub use dedup::{base_pattern, deduplicate};
pub use extractor::extract_record;
pub use splitter::split_segments;
pub use stack::{aggregate_stack_patterns, stack_signature, NO_STACK_SIGNATURE};
pub use stats::{build_result, percentage};

use crate::config::JstackmapConfig;
use crate::core::{AnalysisResult, ThreadRecord};
use once_cell::sync::Lazy;
use regex::Regex;

static DATE_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}").unwrap());

const PREAMBLE_SCAN_LINES: usize = 10;

/// Analyze one thread dump end-to-end. Pure: same text and config always
/// produce the same result (modulo the generation timestamp).
///
/// Segments whose mandatory header or state line is missing are dropped and
/// counted in `dropped_segments`; a dump with zero valid records returns an
/// all-zero result rather than an error, and the caller decides whether
/// that is fatal.
pub fn analyze_dump(text: &str, config: &JstackmapConfig) -> AnalysisResult {
    let mut dropped_segments = 0;
    let mut records: Vec<ThreadRecord> = Vec::new();

    for segment in split_segments(text) {
        match extract_record(segment) {
            Ok(record) => records.push(record),
            Err(err) => {
                dropped_segments += 1;
                log::debug!("dropping segment: {}", err);
            }
        }
    }

    let mut result = if records.is_empty() {
        AnalysisResult::empty(dropped_segments)
    } else {
        let deduplicated = deduplicate(&records);
        let stack_counts = aggregate_stack_patterns(&records, config.signature.depth);
        build_result(&records, deduplicated, stack_counts, dropped_segments, config)
    };

    let (dump_timestamp, jvm_info) = scan_preamble(text);
    result.dump_timestamp = dump_timestamp;
    result.jvm_info = jvm_info;

    log::info!(
        "analyzed {} threads ({} segments dropped)",
        result.total_threads,
        result.dropped_segments
    );

    result
}

/// Lift the dump timestamp and the `Full thread dump ...` banner from the
/// first few lines of the file, when present.
fn scan_preamble(text: &str) -> (Option<String>, Option<String>) {
    let mut timestamp = None;
    let mut jvm_info = None;
    for line in text.lines().take(PREAMBLE_SCAN_LINES) {
        let line = line.trim();
        if line.contains("Full thread dump") {
            jvm_info = Some(line.to_string());
        } else if DATE_LINE.is_match(line) {
            timestamp = Some(line.to_string());
        }
    }
    (timestamp, jvm_info)
}
