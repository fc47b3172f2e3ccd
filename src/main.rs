use anyhow::Result;
use clap::Parser;
use jstackmap::cli::Cli;
use jstackmap::commands::{self, AnalyzeConfig};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbosity);

    if cli.list_themes {
        commands::list_themes();
        return Ok(());
    }

    // clap enforces this unless --list-themes was given.
    let input = cli
        .input
        .ok_or_else(|| anyhow::anyhow!("input file required"))?;

    commands::handle_analyze(AnalyzeConfig {
        input,
        output: cli.output,
        theme: cli.theme.into(),
        format: cli.format.into(),
    })
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}
