use crate::core::ThreadRecord;

/// How a classification rule inspects a record.
#[derive(Copy, Clone, Debug)]
pub enum Matcher {
    /// Substring match against the thread name.
    NameContains(&'static str),
    /// Substring match against any stack frame.
    StackContains(&'static str),
}

#[derive(Copy, Clone, Debug)]
pub struct GroupRule {
    pub matcher: Matcher,
    pub label: &'static str,
}

const fn name(pattern: &'static str, label: &'static str) -> GroupRule {
    GroupRule {
        matcher: Matcher::NameContains(pattern),
        label,
    }
}

const fn stack(pattern: &'static str, label: &'static str) -> GroupRule {
    GroupRule {
        matcher: Matcher::StackContains(pattern),
        label,
    }
}

/// Ordered rule table; the first matching rule wins. Name rules come before
/// stack rules so an explicitly named thread is never reclassified by a
/// library frame deep in its stack.
pub const GROUP_RULES: &[GroupRule] = &[
    name("nioEventLoopGroup", "Netty NIO"),
    name("grpc", "gRPC"),
    name("OkHttp", "OkHttp"),
    name("pool-", "Thread Pool"),
    name("Keep-Alive", "HTTP Keep-Alive"),
    name("Attach Listener", "JVM Attach"),
    name("Finalizer", "JVM Finalizer"),
    name("Reference Handler", "JVM Reference"),
    name("Signal Dispatcher", "JVM Signal"),
    name("C2 CompilerThread", "JIT Compiler"),
    name("VM Thread", "JVM VM"),
    name("Safepoint", "JVM Safepoint"),
    stack("io.netty.", "Netty NIO"),
    stack("io.grpc.", "gRPC"),
];

pub const FALLBACK_GROUP: &str = "Other";

impl GroupRule {
    fn matches(&self, record: &ThreadRecord) -> bool {
        match self.matcher {
            Matcher::NameContains(pattern) => record.name.contains(pattern),
            Matcher::StackContains(pattern) => {
                record.stack.iter().any(|frame| frame.contains(pattern))
            }
        }
    }
}

/// Assign a record to exactly one functional group. Pure function of the
/// record's name and stack.
pub fn classify_record(record: &ThreadRecord) -> &'static str {
    GROUP_RULES
        .iter()
        .find(|rule| rule.matches(record))
        .map(|rule| rule.label)
        .unwrap_or(FALLBACK_GROUP)
}
