use crate::core::{AlertSeverity, AnalysisResult, ThreadState};
use crate::io::output::OutputWriter;
use crate::io::writers::theme::Theme;
use anyhow::Result;
use html_escape::encode_text;
use std::fmt::Write as _;
use std::io::Write;

const NAME_PREVIEW_CHARS: usize = 50;
const STACK_PREVIEW_FRAMES: usize = 3;
const PATTERN_PREVIEW_CHARS: usize = 100;

pub struct HtmlWriter<W: Write> {
    writer: W,
    theme: Theme,
    top_patterns: usize,
    template: &'static str,
}

impl<W: Write> HtmlWriter<W> {
    pub fn new(writer: W, theme: Theme, top_patterns: usize) -> Self {
        Self {
            writer,
            theme,
            top_patterns,
            template: include_str!("templates/report.html"),
        }
    }

    fn render_html(&self, result: &AnalysisResult) -> String {
        self.template
            .replace("{{{THEME_CSS}}}", self.theme.css_variables())
            .replace(
                "{{{THEME_DESCRIPTION}}}",
                &encode_text(self.theme.description()),
            )
            .replace(
                "{{{GENERATED_AT}}}",
                &result
                    .generated_at
                    .format("%Y-%m-%d %H:%M:%S UTC")
                    .to_string(),
            )
            .replace("{{{DUMP_META}}}", &dump_meta(result))
            .replace("{{{TOTAL_THREADS}}}", &result.total_threads.to_string())
            .replace("{{{DAEMON_THREADS}}}", &result.daemon_threads.to_string())
            .replace(
                "{{{NON_DAEMON_THREADS}}}",
                &result.non_daemon_threads.to_string(),
            )
            .replace(
                "{{{BLOCKED_THREADS}}}",
                &result.blocked_threads.to_string(),
            )
            .replace("{{{ALERTS}}}", &alert_blocks(result))
            .replace("{{{STATE_ROWS}}}", &state_rows(result))
            .replace("{{{GROUP_ROWS}}}", &group_rows(result))
            .replace("{{{THREAD_ROWS}}}", &thread_rows(result))
            .replace(
                "{{{PATTERN_ROWS}}}",
                &pattern_rows(result, self.top_patterns),
            )
            .replace("{{{SUMMARY_ITEMS}}}", &summary_items(result))
    }
}

impl<W: Write> OutputWriter for HtmlWriter<W> {
    fn write_report(&mut self, result: &AnalysisResult) -> Result<()> {
        let html = self.render_html(result);
        write!(self.writer, "{}", html)?;
        Ok(())
    }
}

fn dump_meta(result: &AnalysisResult) -> String {
    let mut html = String::new();
    if let Some(ref timestamp) = result.dump_timestamp {
        let _ = writeln!(
            html,
            "            <p class=\"meta\"><strong>Dump Timestamp:</strong> {}</p>",
            encode_text(timestamp)
        );
    }
    if let Some(ref jvm_info) = result.jvm_info {
        let _ = writeln!(
            html,
            "            <p class=\"meta\"><strong>JVM Info:</strong> {}</p>",
            encode_text(jvm_info)
        );
    }
    html
}

fn alert_blocks(result: &AnalysisResult) -> String {
    let mut html = String::new();
    for alert in &result.alerts {
        let (class, label) = match alert.severity {
            AlertSeverity::Critical => ("alert-danger", "Critical"),
            AlertSeverity::Warning => ("alert-warning", "Warning"),
        };
        let _ = writeln!(
            html,
            "        <div class=\"alert {}\"><strong>{}:</strong> {}</div>",
            class,
            label,
            encode_text(&alert.message)
        );
    }
    if result.dropped_segments > 0 {
        let _ = writeln!(
            html,
            "        <div class=\"alert alert-info\"><strong>Note:</strong> {} malformed segment(s) were skipped during parsing.</div>",
            result.dropped_segments
        );
    }
    html
}

fn state_rows(result: &AnalysisResult) -> String {
    let mut html = String::new();
    for entry in &result.states {
        let _ = writeln!(
            html,
            concat!(
                "                <div class=\"chart-item\">\n",
                "                    <div class=\"chart-label\">{state}</div>\n",
                "                    <div class=\"chart-bar-wrapper\"><div class=\"progress-bar\">",
                "<div class=\"progress-fill\" style=\"width: {pct:.1}%;\"></div></div></div>\n",
                "                    <div class=\"chart-value\">{count} ({pct:.1}%)</div>\n",
                "                </div>"
            ),
            state = entry.state,
            count = entry.count,
            pct = entry.percentage,
        );
    }
    html
}

fn group_rows(result: &AnalysisResult) -> String {
    let mut html = String::new();
    for group in &result.groups {
        let _ = writeln!(
            html,
            "                    <tr><td>{}</td><td>{}</td><td>{:.1}%</td></tr>",
            encode_text(&group.name),
            group.count,
            group.percentage,
        );
    }
    html
}

fn thread_rows(result: &AnalysisResult) -> String {
    let mut entries: Vec<_> = result.deduplicated.iter().collect();
    entries.sort_by(|a, b| a.representative.name.cmp(&b.representative.name));

    let mut html = String::new();
    for entry in entries {
        let record = &entry.representative;
        let stack_preview = if record.stack.is_empty() {
            "No stack trace available".to_string()
        } else {
            record
                .stack
                .iter()
                .take(STACK_PREVIEW_FRAMES)
                .map(|frame| encode_text(frame).into_owned())
                .collect::<Vec<_>>()
                .join("<br>")
        };
        let _ = writeln!(
            html,
            concat!(
                "                    <tr>\n",
                "                        <td title=\"{full_name}\">{name}</td>\n",
                "                        <td>{count}</td>\n",
                "                        <td>{id}</td>\n",
                "                        <td><span class=\"state-badge {state_class}\">{state}</span></td>\n",
                "                        <td>{daemon}</td>\n",
                "                        <td>{priority}</td>\n",
                "                        <td><div class=\"stack-trace\">{stack}</div></td>\n",
                "                    </tr>"
            ),
            full_name = encode_text(&record.name),
            name = encode_text(&truncate(&record.name, NAME_PREVIEW_CHARS)),
            count = entry.count,
            id = encode_text(&record.id),
            state_class = state_class(record.state),
            state = record.state,
            daemon = if record.daemon { "Yes" } else { "No" },
            priority = record.priority,
            stack = stack_preview,
        );
    }
    html
}

fn pattern_rows(result: &AnalysisResult, top_patterns: usize) -> String {
    let mut html = String::new();
    for entry in result.stack_patterns.iter().take(top_patterns) {
        let _ = writeln!(
            html,
            "                    <tr><td><code>{}</code></td><td>{}</td><td>{:.1}%</td></tr>",
            encode_text(&truncate(&entry.signature, PATTERN_PREVIEW_CHARS)),
            entry.count,
            entry.percentage,
        );
    }
    html
}

fn summary_items(result: &AnalysisResult) -> String {
    let count_state = |state: ThreadState| {
        result
            .states
            .iter()
            .find(|s| s.state == state)
            .map(|s| s.count)
            .unwrap_or(0)
    };
    let waiting =
        count_state(ThreadState::Waiting) + count_state(ThreadState::TimedWaiting);

    let mut items = vec![
        format!(
            "Total of {} threads ({} daemon, {} non-daemon)",
            result.total_threads, result.daemon_threads, result.non_daemon_threads
        ),
        format!(
            "{} threads are currently RUNNABLE",
            count_state(ThreadState::Runnable)
        ),
        format!("{} threads are in WAITING or TIMED_WAITING state", waiting),
        format!("{} threads are BLOCKED", result.blocked_threads),
        format!(
            "Most common thread state: {}",
            result
                .states
                .first()
                .map(|s| s.state.as_str())
                .unwrap_or("N/A")
        ),
        format!(
            "Largest thread group: {}",
            result
                .groups
                .first()
                .map(|g| g.name.as_str())
                .unwrap_or("N/A")
        ),
    ];
    if result.dropped_segments > 0 {
        items.push(format!(
            "{} malformed segment(s) skipped",
            result.dropped_segments
        ));
    }

    let mut html = String::new();
    for item in items {
        let _ = writeln!(html, "                    <li>{}</li>", encode_text(&item));
    }
    html
}

fn state_class(state: ThreadState) -> &'static str {
    match state {
        ThreadState::Runnable => "state-runnable",
        ThreadState::Waiting => "state-waiting",
        ThreadState::TimedWaiting => "state-timed_waiting",
        ThreadState::Blocked => "state-blocked",
        _ => "state-other",
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let mut truncated: String = text.chars().take(max_chars).collect();
        truncated.push_str("...");
        truncated
    }
}
