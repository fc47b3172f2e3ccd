use crate::core::ThreadRecord;
use std::collections::HashMap;

/// Distinguished signature for records with an empty stack.
pub const NO_STACK_SIGNATURE: &str = "<no stack>";

pub const SIGNATURE_SEPARATOR: &str = " | ";

/// Normalized counting key: the first `depth` frames joined with a fixed
/// separator. Pure function of the stack prefix; thread identity is
/// deliberately ignored so identical call sites across many threads
/// collapse to one entry.
pub fn stack_signature(record: &ThreadRecord, depth: usize) -> String {
    if record.stack.is_empty() {
        return NO_STACK_SIGNATURE.to_string();
    }
    record.stack[..record.stack.len().min(depth)].join(SIGNATURE_SEPARATOR)
}

/// Count signature occurrences over the raw (pre-dedup) record set and rank
/// them by descending count, ties broken by first-seen order.
pub fn aggregate_stack_patterns(records: &[ThreadRecord], depth: usize) -> Vec<(String, usize)> {
    let mut patterns: Vec<(String, usize)> = Vec::new();
    let mut index_by_signature: HashMap<String, usize> = HashMap::new();

    for record in records {
        let signature = stack_signature(record, depth);
        match index_by_signature.get(&signature) {
            Some(&index) => patterns[index].1 += 1,
            None => {
                index_by_signature.insert(signature.clone(), patterns.len());
                patterns.push((signature, 1));
            }
        }
    }

    // Stable sort over first-seen order keeps ties deterministic.
    patterns.sort_by(|a, b| b.1.cmp(&a.1));
    patterns
}
