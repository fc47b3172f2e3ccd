/// Visual theme for the HTML report. Themes differ only in palette; the
/// report structure is identical across all of them.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Theme {
    Minimal,
    Modern,
    Classic,
}

impl Theme {
    pub fn all() -> &'static [Theme] {
        &[Theme::Minimal, Theme::Modern, Theme::Classic]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Theme::Minimal => "minimal",
            Theme::Modern => "modern",
            Theme::Classic => "classic",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Theme::Minimal => "Clean, whitespace-heavy layout with a neutral palette",
            Theme::Modern => "Dark dashboard styling with high-contrast accents",
            Theme::Classic => "Traditional report look with serif headings",
        }
    }

    /// CSS custom properties consumed by the report template.
    pub fn css_variables(&self) -> &'static str {
        match self {
            Theme::Minimal => {
                ":root {\n  --bg: #fafafa;\n  --fg: #1a202c;\n  --muted: #586069;\n  --card-bg: #ffffff;\n  --border: #e1e4e8;\n  --accent: #2563eb;\n  --heading-font: -apple-system, 'Segoe UI', sans-serif;\n}"
            }
            Theme::Modern => {
                ":root {\n  --bg: #0d1117;\n  --fg: #e6edf3;\n  --muted: #8b949e;\n  --card-bg: #161b22;\n  --border: #30363d;\n  --accent: #58a6ff;\n  --heading-font: -apple-system, 'Segoe UI', sans-serif;\n}"
            }
            Theme::Classic => {
                ":root {\n  --bg: #f5f1e8;\n  --fg: #2b2b2b;\n  --muted: #6b6151;\n  --card-bg: #fffdf7;\n  --border: #d8cfbc;\n  --accent: #8b4513;\n  --heading-font: Georgia, 'Times New Roman', serif;\n}"
            }
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_theme_has_distinct_css() {
        let mut seen = Vec::new();
        for theme in Theme::all() {
            assert!(!seen.contains(&theme.css_variables()));
            seen.push(theme.css_variables());
        }
    }

    #[test]
    fn test_css_defines_required_variables() {
        for theme in Theme::all() {
            let css = theme.css_variables();
            for var in ["--bg", "--fg", "--card-bg", "--accent", "--border"] {
                assert!(css.contains(var), "{} missing {}", theme, var);
            }
        }
    }

    #[test]
    fn test_names_match_cli_values() {
        let names: Vec<_> = Theme::all().iter().map(|t| t.name()).collect();
        assert_eq!(names, vec!["minimal", "modern", "classic"]);
    }
}
