use crate::config::JstackmapConfig;
use crate::core::AnalysisResult;
use crate::io::writers::{HtmlWriter, JsonWriter, Theme};
use std::io::Write;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Html,
    Json,
}

/// Rendering collaborator interface: consumes the immutable result bundle
/// read-only and emits a report.
pub trait OutputWriter {
    fn write_report(&mut self, result: &AnalysisResult) -> anyhow::Result<()>;
}

pub fn create_writer<'a, W: Write + 'a>(
    writer: W,
    format: OutputFormat,
    theme: Theme,
    config: &JstackmapConfig,
) -> Box<dyn OutputWriter + 'a> {
    match format {
        OutputFormat::Html => Box::new(HtmlWriter::new(writer, theme, config.report.top_patterns)),
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
    }
}
