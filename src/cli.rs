use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "jstackmap")]
#[command(about = "JVM thread dump (jstack) analyzer with HTML reports", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to jstack output file
    #[arg(required_unless_present = "list_themes")]
    pub input: Option<PathBuf>,

    /// Output report file
    #[arg(short, long, default_value = "jstack_report.html")]
    pub output: PathBuf,

    /// Design theme for the HTML report
    #[arg(short, long, value_enum, default_value = "minimal")]
    pub theme: Theme,

    /// Output format
    #[arg(short, long, value_enum, default_value = "html")]
    pub format: OutputFormat,

    /// List available themes and exit
    #[arg(long = "list-themes")]
    pub list_themes: bool,

    /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbosity: u8,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Theme {
    Minimal,
    Modern,
    Classic,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Html,
    Json,
}

impl From<Theme> for crate::io::writers::theme::Theme {
    fn from(t: Theme) -> Self {
        match t {
            Theme::Minimal => crate::io::writers::theme::Theme::Minimal,
            Theme::Modern => crate::io::writers::theme::Theme::Modern,
            Theme::Classic => crate::io::writers::theme::Theme::Classic,
        }
    }
}

impl From<OutputFormat> for crate::io::output::OutputFormat {
    fn from(f: OutputFormat) -> Self {
        match f {
            OutputFormat::Html => crate::io::output::OutputFormat::Html,
            OutputFormat::Json => crate::io::output::OutputFormat::Json,
        }
    }
}

pub fn parse_args() -> Cli {
    Cli::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["jstackmap", "dump.txt"]);
        assert_eq!(cli.input, Some(PathBuf::from("dump.txt")));
        assert_eq!(cli.output, PathBuf::from("jstack_report.html"));
        assert_eq!(cli.theme, Theme::Minimal);
        assert_eq!(cli.format, OutputFormat::Html);
        assert!(!cli.list_themes);
    }

    #[test]
    fn test_explicit_output_and_theme() {
        let cli = Cli::parse_from([
            "jstackmap",
            "dump.txt",
            "-o",
            "report.html",
            "--theme",
            "modern",
            "--format",
            "json",
        ]);
        assert_eq!(cli.output, PathBuf::from("report.html"));
        assert_eq!(cli.theme, Theme::Modern);
        assert_eq!(cli.format, OutputFormat::Json);
    }

    #[test]
    fn test_list_themes_does_not_require_input() {
        let cli = Cli::parse_from(["jstackmap", "--list-themes"]);
        assert!(cli.list_themes);
        assert_eq!(cli.input, None);
    }

    #[test]
    fn test_input_required_without_list_themes() {
        assert!(Cli::try_parse_from(["jstackmap"]).is_err());
    }

    #[test]
    fn test_theme_conversion() {
        use crate::io::writers::theme::Theme as IoTheme;
        assert_eq!(IoTheme::from(Theme::Minimal), IoTheme::Minimal);
        assert_eq!(IoTheme::from(Theme::Modern), IoTheme::Modern);
        assert_eq!(IoTheme::from(Theme::Classic), IoTheme::Classic);
    }

    #[test]
    fn test_output_format_conversion() {
        use crate::io::output::OutputFormat as IoFormat;
        assert_eq!(IoFormat::from(OutputFormat::Html), IoFormat::Html);
        assert_eq!(IoFormat::from(OutputFormat::Json), IoFormat::Json);
    }

    #[test]
    fn test_verbosity_counts() {
        let cli = Cli::parse_from(["jstackmap", "dump.txt", "-vv"]);
        assert_eq!(cli.verbosity, 2);
    }
}
