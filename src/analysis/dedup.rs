use crate::core::{DedupEntry, ThreadRecord};
use once_cell::sync::Lazy;
use regex::Regex;

static DIGIT_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+").unwrap());

// Known variant suffixes stripped before normalization. jstack appends
// `#N` clone counters to otherwise identical names.
static CLONE_SUFFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*#\d+$").unwrap());

/// Deduplication key for a thread name: known variant suffixes stripped,
/// then every maximal run of decimal digits replaced with `N`.
///
/// `"pool-2-thread-7"` and `"pool-9-thread-3"` both map to
/// `"pool-N-thread-N"`.
pub fn base_pattern(name: &str) -> String {
    let stripped = CLONE_SUFFIX.replace(name.trim(), "");
    DIGIT_RUN.replace_all(&stripped, "N").trim().to_string()
}

/// Collapse near-identical records to one representative per base pattern.
///
/// Single keyed-counting traversal: the first record seen for a pattern
/// becomes its permanent representative; later occurrences only increment
/// the count. Output order is first-seen, so identical input yields
/// identical output.
pub fn deduplicate(records: &[ThreadRecord]) -> Vec<DedupEntry> {
    let mut entries: Vec<DedupEntry> = Vec::new();
    let mut index_by_pattern = std::collections::HashMap::new();

    for record in records {
        let pattern = base_pattern(&record.name);
        match index_by_pattern.get(&pattern) {
            Some(&index) => {
                let entry: &mut DedupEntry = &mut entries[index];
                entry.count += 1;
            }
            None => {
                index_by_pattern.insert(pattern.clone(), entries.len());
                entries.push(DedupEntry {
                    pattern,
                    representative: record.clone(),
                    count: 1,
                });
            }
        }
    }

    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ThreadState, ID_UNKNOWN, PRIORITY_UNKNOWN};
    use pretty_assertions::assert_eq;

    fn record(name: &str, id: &str) -> ThreadRecord {
        ThreadRecord {
            name: name.to_string(),
            id: id.to_string(),
            state: ThreadState::Waiting,
            daemon: true,
            priority: PRIORITY_UNKNOWN,
            stack: vec![],
            tid: None,
            nid: None,
        }
    }

    #[test]
    fn test_base_pattern_replaces_every_digit_run() {
        assert_eq!(base_pattern("pool-2-thread-7"), "pool-N-thread-N");
        assert_eq!(base_pattern("nioEventLoopGroup-3-12"), "nioEventLoopGroup-N-N");
        assert_eq!(base_pattern("main"), "main");
    }

    #[test]
    fn test_base_pattern_stable_under_renumbering() {
        assert_eq!(base_pattern("pool-2-thread-7"), base_pattern("pool-9-thread-3"));
    }

    #[test]
    fn test_base_pattern_strips_clone_suffix() {
        assert_eq!(base_pattern("process reaper #4"), base_pattern("process reaper"));
        assert_eq!(base_pattern("http-worker#12"), "http-worker");
    }

    #[test]
    fn test_first_seen_representative_is_kept() {
        let records = vec![
            record("pool-1-thread-1", "10"),
            record("pool-1-thread-2", "11"),
            record("pool-2-thread-1", "12"),
        ];
        let entries = deduplicate(&records);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].pattern, "pool-N-thread-N");
        assert_eq!(entries[0].count, 3);
        assert_eq!(entries[0].representative.id, "10");
    }

    #[test]
    fn test_distinct_patterns_keep_first_seen_order() {
        let records = vec![
            record("main", "1"),
            record("worker-5", "2"),
            record("main", "3"),
            record("Finalizer", "4"),
        ];
        let entries = deduplicate(&records);
        let patterns: Vec<_> = entries.iter().map(|e| e.pattern.as_str()).collect();
        assert_eq!(patterns, vec!["main", "worker-N", "Finalizer"]);
        assert_eq!(entries[0].count, 2);
    }

    #[test]
    fn test_deduplication_is_idempotent() {
        let records = vec![
            record("pool-1-thread-1", "10"),
            record("pool-1-thread-2", "11"),
            record("main", "1"),
        ];
        let first_pass = deduplicate(&records);
        let representatives: Vec<ThreadRecord> = first_pass
            .iter()
            .map(|e| e.representative.clone())
            .collect();
        let second_pass = deduplicate(&representatives);

        assert_eq!(second_pass.len(), first_pass.len());
        for (first, second) in first_pass.iter().zip(&second_pass) {
            assert_eq!(second.pattern, first.pattern);
            assert_eq!(second.representative, first.representative);
            assert_eq!(second.count, 1);
        }
    }
}
