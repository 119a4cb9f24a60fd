//! Visual theme and styling.

use console::Style;

use crate::audit::CheckStatus;

/// Labcheck's visual theme.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Style for passing checks (green).
    pub success: Style,
    /// Style for warnings (orange).
    pub warning: Style,
    /// Style for failing checks (red bold).
    pub error: Style,
    /// Style for dim/secondary text and skipped checks.
    pub dim: Style,
    /// Style for highlighted/important text (bold).
    pub highlight: Style,
    /// Style for section headers (bold magenta).
    pub header: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme {
    /// Create the default colored theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            dim: Style::new().dim(),
            highlight: Style::new().bold(),
            header: Style::new().bold().magenta(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            dim: Style::new(),
            highlight: Style::new(),
            header: Style::new(),
        }
    }

    /// Styled icon for a check status.
    pub fn icon(&self, status: CheckStatus) -> String {
        let icon = status.icon();
        let style = match status {
            CheckStatus::Pass => &self.success,
            CheckStatus::Warn => &self.warning,
            CheckStatus::Fail => &self.error,
            CheckStatus::Skipped => &self.dim,
        };
        style.apply_to(icon).to_string()
    }

    /// Format a section header line.
    pub fn format_header(&self, index: usize, title: &str) -> String {
        format!(
            "{} {}",
            self.dim.apply_to(format!("{index})")),
            self.header.apply_to(title)
        )
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    // Check if stdout is a TTY
    console::Term::stdout().is_term()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_icons_keep_status_symbols() {
        let theme = Theme::plain();
        assert_eq!(theme.icon(CheckStatus::Pass), "✓");
        assert_eq!(theme.icon(CheckStatus::Warn), "⚠");
        assert_eq!(theme.icon(CheckStatus::Fail), "✗");
        assert_eq!(theme.icon(CheckStatus::Skipped), "○");
    }

    #[test]
    fn header_contains_index_and_title() {
        let theme = Theme::plain();
        let header = theme.format_header(2, "Required libraries");
        assert!(header.contains("2)"));
        assert!(header.contains("Required libraries"));
    }

    #[test]
    fn colored_icon_still_contains_symbol() {
        let theme = Theme::new();
        assert!(theme.icon(CheckStatus::Fail).contains("✗"));
    }

    #[test]
    fn default_impl_matches_new() {
        let default = Theme::default();
        let new = Theme::new();
        assert_eq!(
            default.icon(CheckStatus::Pass),
            new.icon(CheckStatus::Pass)
        );
    }
}
