use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Sentinel used when a thread header carries no `prio=` field.
pub const PRIORITY_UNKNOWN: i32 = -1;

/// Sentinel used when a thread header carries neither a `#N` counter nor a `tid=`.
pub const ID_UNKNOWN: &str = "?";

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ThreadState {
    Runnable,
    Waiting,
    TimedWaiting,
    Blocked,
    New,
    Terminated,
    Unknown,
}

impl ThreadState {
    /// Parse the token printed after `java.lang.Thread.State:`. Trailing
    /// qualifiers like `(on object monitor)` are ignored by the caller;
    /// this sees only the leading identifier.
    pub fn from_token(token: &str) -> Self {
        match token {
            "RUNNABLE" => ThreadState::Runnable,
            "WAITING" => ThreadState::Waiting,
            "TIMED_WAITING" => ThreadState::TimedWaiting,
            "BLOCKED" => ThreadState::Blocked,
            "NEW" => ThreadState::New,
            "TERMINATED" => ThreadState::Terminated,
            _ => ThreadState::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ThreadState::Runnable => "RUNNABLE",
            ThreadState::Waiting => "WAITING",
            ThreadState::TimedWaiting => "TIMED_WAITING",
            ThreadState::Blocked => "BLOCKED",
            ThreadState::New => "NEW",
            ThreadState::Terminated => "TERMINATED",
            ThreadState::Unknown => "UNKNOWN",
        }
    }
}

impl std::fmt::Display for ThreadState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One parsed thread entry. Created once by the extractor and never mutated
/// downstream; later stages attach derived data in their own structures.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ThreadRecord {
    pub name: String,
    pub id: String,
    pub state: ThreadState,
    pub daemon: bool,
    pub priority: i32,
    /// Outermost call first. Full depth; truncation is a rendering concern.
    pub stack: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nid: Option<String>,
}

impl ThreadRecord {
    pub fn top_frame(&self) -> Option<&str> {
        self.stack.first().map(String::as_str)
    }
}

/// Per-state slice of the distribution.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StateCount {
    pub state: ThreadState,
    pub count: usize,
    pub percentage: f64,
}

/// Per-group summary, counted over the raw (pre-dedup) record set.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GroupSummary {
    pub name: String,
    pub count: usize,
    pub percentage: f64,
}

/// One deduplicated listing entry: the first-seen record stands in for
/// every thread whose name normalizes to the same base pattern.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DedupEntry {
    pub pattern: String,
    pub representative: ThreadRecord,
    pub count: usize,
}

/// One ranked stack-signature entry.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StackPatternEntry {
    pub signature: String,
    pub count: usize,
    pub percentage: f64,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub enum AlertSeverity {
    Warning,
    Critical,
}

/// Advisory finding. Never fatal.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Alert {
    pub severity: AlertSeverity,
    pub message: String,
}

impl Alert {
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: AlertSeverity::Warning,
            message: message.into(),
        }
    }

    pub fn critical(message: impl Into<String>) -> Self {
        Self {
            severity: AlertSeverity::Critical,
            message: message.into(),
        }
    }
}

/// Immutable output bundle of one analysis run, consumed read-only by the
/// report writers.
#[derive(Clone, Debug, Serialize)]
pub struct AnalysisResult {
    pub generated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dump_timestamp: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jvm_info: Option<String>,
    pub total_threads: usize,
    pub daemon_threads: usize,
    pub non_daemon_threads: usize,
    pub blocked_threads: usize,
    /// Descending by count, first-seen tiebreak. Counts sum to `total_threads`.
    pub states: Vec<StateCount>,
    /// Descending by count. Counts sum to `total_threads`.
    pub groups: Vec<GroupSummary>,
    /// First-seen order.
    pub deduplicated: Vec<DedupEntry>,
    /// Descending by count, first-seen tiebreak.
    pub stack_patterns: Vec<StackPatternEntry>,
    pub alerts: Vec<Alert>,
    /// Segments with no usable header/state line, skipped during extraction.
    pub dropped_segments: usize,
}

impl AnalysisResult {
    /// An all-zero result for a dump with no recognizable thread entries.
    pub fn empty(dropped_segments: usize) -> Self {
        Self {
            generated_at: Utc::now(),
            dump_timestamp: None,
            jvm_info: None,
            total_threads: 0,
            daemon_threads: 0,
            non_daemon_threads: 0,
            blocked_threads: 0,
            states: Vec::new(),
            groups: Vec::new(),
            deduplicated: Vec::new(),
            stack_patterns: Vec::new(),
            alerts: Vec::new(),
            dropped_segments,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.total_threads == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thread_state_from_token() {
        assert_eq!(ThreadState::from_token("RUNNABLE"), ThreadState::Runnable);
        assert_eq!(
            ThreadState::from_token("TIMED_WAITING"),
            ThreadState::TimedWaiting
        );
        assert_eq!(ThreadState::from_token("BLOCKED"), ThreadState::Blocked);
        assert_eq!(ThreadState::from_token("bogus"), ThreadState::Unknown);
    }

    #[test]
    fn test_thread_state_round_trip_display() {
        for state in [
            ThreadState::Runnable,
            ThreadState::Waiting,
            ThreadState::TimedWaiting,
            ThreadState::Blocked,
            ThreadState::New,
            ThreadState::Terminated,
        ] {
            assert_eq!(ThreadState::from_token(state.as_str()), state);
        }
    }

    #[test]
    fn test_empty_result_is_empty() {
        let result = AnalysisResult::empty(2);
        assert!(result.is_empty());
        assert_eq!(result.dropped_segments, 2);
        assert!(result.states.is_empty());
        assert!(result.alerts.is_empty());
    }
}
