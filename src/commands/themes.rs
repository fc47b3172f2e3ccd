use crate::io::writers::Theme;
use colored::*;

/// `--list-themes`: print the available report themes and their
/// descriptions. Bypasses the analysis core entirely.
pub fn list_themes() {
    println!("Available themes:");
    for theme in Theme::all() {
        println!("  {}: {}", theme.name().bold(), theme.description());
    }
}
