use crate::ports::outbound::WarningNotifier;
use owo_colors::OwoColorize;

/// ConsoleWarningNotifier adapter printing warnings to stderr
///
/// Stdout is left untouched so a JSON report can be piped elsewhere.
pub struct ConsoleWarningNotifier {
    colored: bool,
}

impl ConsoleWarningNotifier {
    pub fn new() -> Self {
        Self { colored: true }
    }

    /// Notifier that prints plain text, for terminals without ANSI support
    pub fn plain() -> Self {
        Self { colored: false }
    }

    fn render(&self, message: &str) -> String {
        if self.colored {
            format!("{} {}", "⚠️  Warning:".yellow().bold(), message.yellow())
        } else {
            format!("⚠️  Warning: {}", message)
        }
    }
}

impl Default for ConsoleWarningNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl WarningNotifier for ConsoleWarningNotifier {
    fn warn(&self, message: &str) {
        eprintln!("{}", self.render(message));
    }
}
