use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// AnalysisSpinner shows activity on stderr while the scanning engine runs
pub struct AnalysisSpinner {
    bar: ProgressBar,
}

impl AnalysisSpinner {
    pub fn start(message: impl Into<String>) -> Self {
        let bar = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("   {spinner:.green} {msg}") {
            bar.set_style(style);
        }
        bar.set_message(message.into());
        bar.enable_steady_tick(Duration::from_millis(100));
        Self { bar }
    }

    /// Stops the spinner and leaves `message` on stderr
    pub fn finish(self, message: &str) {
        self.bar.finish_and_clear();
        eprintln!("{}", message);
    }

    /// Stops the spinner without output
    pub fn clear(self) {
        self.bar.finish_and_clear();
    }
}
