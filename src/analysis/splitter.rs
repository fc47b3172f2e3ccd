use once_cell::sync::Lazy;
use regex::Regex;

// A thread entry opens with a quoted name at column zero, e.g.
// "pool-1-thread-2" #15 daemon prio=5 os_prio=0 tid=0x... nid=0x... waiting
static THREAD_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r#"^"[^"]+""#).unwrap());

pub fn is_thread_marker(line: &str) -> bool {
    THREAD_MARKER.is_match(line)
}

/// Lazy iterator over the raw text segments of a dump, one per thread
/// entry, in file order. Text before the first marker (the dump preamble)
/// is not emitted. Zero markers yields an empty iterator, not an error.
pub struct Segments<'a> {
    remaining: &'a str,
}

pub fn split_segments(text: &str) -> Segments<'_> {
    let start = find_marker_offset(text, false).unwrap_or(text.len());
    Segments {
        remaining: &text[start..],
    }
}

/// Byte offset of the first marker line, optionally skipping the line the
/// slice starts on.
fn find_marker_offset(text: &str, skip_first_line: bool) -> Option<usize> {
    let mut offset = 0;
    for (index, raw_line) in text.split_inclusive('\n').enumerate() {
        let line = raw_line.trim_end_matches(['\n', '\r']);
        if (!skip_first_line || index > 0) && is_thread_marker(line) {
            return Some(offset);
        }
        offset += raw_line.len();
    }
    None
}

impl<'a> Iterator for Segments<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.remaining.is_empty() {
            return None;
        }
        let end = find_marker_offset(self.remaining, true).unwrap_or(self.remaining.len());
        let segment = self.remaining[..end].trim_end();
        self.remaining = &self.remaining[end..];
        Some(segment)
    }
}
