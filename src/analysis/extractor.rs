use crate::core::{ThreadRecord, ThreadState, ID_UNKNOWN, PRIORITY_UNKNOWN};
use crate::errors::AnalysisError;
use once_cell::sync::Lazy;
use regex::Regex;

// Header shape, hotspot jstack:
// "name" #12 daemon prio=5 os_prio=0 cpu=1.2ms elapsed=5.02s tid=0x... nid=0x... waiting on condition [0x...]
// Only the quoted name is mandatory here; everything else defaults.
static HEADER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?x)
        ^"(?P<name>[^"]+)"
        (?:\s+\#(?P<id>\d+))?
        (?P<daemon>\s+daemon)?
        (?:\s+prio=(?P<prio>\d+))?
        (?:\s+os_prio=-?\d+)?
        (?:\s+cpu=\S+)?
        (?:\s+elapsed=\S+)?
        (?:\s+tid=(?P<tid>0x[0-9a-fA-F]+))?
        (?:\s+nid=(?P<nid>0x[0-9a-fA-F]+))?
        "#,
    )
    .unwrap()
});

static STATE_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^java\.lang\.Thread\.State:\s*([A-Z_]+)").unwrap());

/// Parse one segment into a [`ThreadRecord`].
///
/// The quoted name in the header and a `java.lang.Thread.State:` line are
/// mandatory; daemon flag, priority, and ids default to sentinels when the
/// header omits them. Stack frames are every subsequent `at ...` and
/// `- ...` line, outermost first, with no depth limit.
pub fn extract_record(segment: &str) -> Result<ThreadRecord, AnalysisError> {
    let mut lines = segment.lines();
    let header_line = lines
        .next()
        .ok_or_else(|| AnalysisError::malformed("empty segment"))?;

    let captures = HEADER
        .captures(header_line.trim_end())
        .ok_or_else(|| AnalysisError::malformed(format!("unrecognized header: {}", header_line)))?;

    let name = captures["name"].to_string();
    let daemon = captures.name("daemon").is_some();
    let priority = captures
        .name("prio")
        .and_then(|m| m.as_str().parse::<i32>().ok())
        .unwrap_or(PRIORITY_UNKNOWN);
    let tid = captures.name("tid").map(|m| m.as_str().to_string());
    let nid = captures.name("nid").map(|m| m.as_str().to_string());
    let id = captures
        .name("id")
        .map(|m| m.as_str().to_string())
        .or_else(|| tid.clone())
        .unwrap_or_else(|| ID_UNKNOWN.to_string());

    let mut state = None;
    let mut stack = Vec::new();
    for line in lines {
        let line = line.trim();
        if let Some(captures) = STATE_LINE.captures(line) {
            state = Some(ThreadState::from_token(&captures[1]));
        } else if line.starts_with("at ") || line.starts_with("- ") {
            stack.push(line.to_string());
        }
    }

    let state = state.ok_or_else(|| {
        AnalysisError::malformed(format!("no thread state line for \"{}\"", name))
    })?;

    Ok(ThreadRecord {
        name,
        id,
        state,
        daemon,
        priority,
        stack,
        tid,
        nid,
    })
}
