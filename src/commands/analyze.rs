use crate::analysis::analyze_dump;
use crate::config;
use crate::errors::AnalysisError;
use crate::io::output::{create_writer, OutputFormat};
use crate::io::writers::Theme;
use anyhow::{Context, Result};
use colored::*;
use std::fs;
use std::path::PathBuf;

pub struct AnalyzeConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub theme: Theme,
    pub format: OutputFormat,
}

pub fn handle_analyze(config: AnalyzeConfig) -> Result<()> {
    let text = fs::read_to_string(&config.input)
        .map_err(|e| AnalysisError::input_with_path(e.to_string(), &config.input))?;

    let analysis_config = config::get_config();
    let result = analyze_dump(&text, analysis_config);

    // "No threads" is a valid result from the core; the CLI treats it as
    // fatal so scripts notice an unusable dump.
    if result.is_empty() {
        return Err(AnalysisError::EmptyAnalysis)
            .with_context(|| format!("{} contains no thread entries", config.input.display()));
    }

    let file = fs::File::create(&config.output)
        .with_context(|| format!("failed to create {}", config.output.display()))?;
    let mut writer = create_writer(file, config.format, config.theme, analysis_config);
    writer.write_report(&result)?;

    println!(
        "{} Report generated: {}",
        "Analysis complete!".green().bold(),
        config.output.display()
    );
    println!("Theme: {}", config.theme);
    println!(
        "Analyzed {} threads ({} segments dropped)",
        result.total_threads, result.dropped_segments
    );
    if !result.alerts.is_empty() {
        println!(
            "{}",
            format!("{} alert(s) raised, see report", result.alerts.len()).yellow()
        );
    }

    Ok(())
}
