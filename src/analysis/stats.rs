use crate::analysis::classify::classify_record;
use crate::analysis::stack::NO_STACK_SIGNATURE;
use crate::config::JstackmapConfig;
use crate::core::{
    Alert, AnalysisResult, DedupEntry, GroupSummary, StackPatternEntry, StateCount, ThreadRecord,
    ThreadState,
};
use chrono::Utc;

/// count/total as a percentage; a zero total yields 0.0, never a division
/// error.
pub fn percentage(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 * 100.0 / total as f64
    }
}

/// Assemble the immutable result bundle from the raw record set, the
/// deduplicated entries, and the ranked stack patterns.
///
/// State and group statistics are computed over the *raw* set so they
/// reflect true thread volume; only the detailed listing is deduplicated.
pub fn build_result(
    records: &[ThreadRecord],
    deduplicated: Vec<DedupEntry>,
    stack_counts: Vec<(String, usize)>,
    dropped_segments: usize,
    config: &JstackmapConfig,
) -> AnalysisResult {
    let total = records.len();
    let daemon_threads = records.iter().filter(|r| r.daemon).count();
    let blocked: Vec<&ThreadRecord> = records
        .iter()
        .filter(|r| r.state == ThreadState::Blocked)
        .collect();

    let states = state_distribution(records, total);
    let groups = group_counts(records, total);
    let stack_patterns = stack_counts
        .into_iter()
        .map(|(signature, count)| StackPatternEntry {
            signature,
            count,
            percentage: percentage(count, total),
        })
        .collect();
    let alerts = build_alerts(&blocked, total, config);

    AnalysisResult {
        generated_at: Utc::now(),
        dump_timestamp: None,
        jvm_info: None,
        total_threads: total,
        daemon_threads,
        non_daemon_threads: total - daemon_threads,
        blocked_threads: blocked.len(),
        states,
        groups,
        deduplicated,
        stack_patterns,
        alerts,
        dropped_segments,
    }
}

fn state_distribution(records: &[ThreadRecord], total: usize) -> Vec<StateCount> {
    let mut counts: Vec<(ThreadState, usize)> = Vec::new();
    for record in records {
        match counts.iter_mut().find(|(state, _)| *state == record.state) {
            Some((_, count)) => *count += 1,
            None => counts.push((record.state, 1)),
        }
    }
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
        .into_iter()
        .map(|(state, count)| StateCount {
            state,
            count,
            percentage: percentage(count, total),
        })
        .collect()
}

fn group_counts(records: &[ThreadRecord], total: usize) -> Vec<GroupSummary> {
    let mut counts: Vec<(&'static str, usize)> = Vec::new();
    for record in records {
        let label = classify_record(record);
        match counts.iter_mut().find(|(name, _)| *name == label) {
            Some((_, count)) => *count += 1,
            None => counts.push((label, 1)),
        }
    }
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
        .into_iter()
        .map(|(name, count)| GroupSummary {
            name: name.to_string(),
            count,
            percentage: percentage(count, total),
        })
        .collect()
}

fn build_alerts(blocked: &[&ThreadRecord], total: usize, config: &JstackmapConfig) -> Vec<Alert> {
    let mut alerts = Vec::new();

    if total > 0 {
        let block_fraction = blocked.len() as f64 / total as f64;
        if block_fraction > config.alerts.block_rate {
            alerts.push(Alert::critical(format!(
                "High block rate: {} of {} threads ({:.1}%) are BLOCKED (threshold {:.0}%)",
                blocked.len(),
                total,
                block_fraction * 100.0,
                config.alerts.block_rate * 100.0,
            )));
        }
    }

    for record in blocked {
        alerts.push(Alert::warning(format!(
            "Thread \"{}\" is BLOCKED: {}",
            record.name,
            record.top_frame().unwrap_or(NO_STACK_SIGNATURE),
        )));
    }

    alerts
}
