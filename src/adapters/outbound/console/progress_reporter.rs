use crate::ports::outbound::ProgressReporter;
use indicatif::{ProgressBar, ProgressStyle};
use std::cell::RefCell;

/// StderrProgressReporter adapter for reporting progress to stderr
///
/// This adapter implements the ProgressReporter port, writing progress
/// information to stderr so it doesn't interfere with stdout output.
/// Uses indicatif for the per-target progress bar.
///
/// A hidden reporter swallows everything, which keeps check mode silent
/// on success.
pub struct StderrProgressReporter {
    progress_bar: RefCell<Option<ProgressBar>>,
    visible: bool,
}

impl StderrProgressReporter {
    pub fn new() -> Self {
        Self {
            progress_bar: RefCell::new(None),
            visible: true,
        }
    }

    pub fn hidden() -> Self {
        Self {
            progress_bar: RefCell::new(None),
            visible: false,
        }
    }

    pub fn with_visibility(visible: bool) -> Self {
        if visible {
            Self::new()
        } else {
            Self::hidden()
        }
    }

    fn get_or_create_progress_bar(&self, total: usize) -> ProgressBar {
        let mut pb_option = self.progress_bar.borrow_mut();
        if let Some(pb) = pb_option.as_ref() {
            return pb.clone();
        }

        let pb = if self.visible {
            let pb = ProgressBar::new(total as u64);
            if let Ok(style) = ProgressStyle::default_bar()
                .template("   {spinner:.green} [{bar:20.cyan/blue}] {pos}/{len} - loading {msg}")
            {
                pb.set_style(style.progress_chars("=>-"));
            }
            pb
        } else {
            ProgressBar::hidden()
        };
        *pb_option = Some(pb.clone());
        pb
    }

    fn finish(&self) {
        if let Some(pb) = self.progress_bar.borrow_mut().take() {
            pb.finish_and_clear();
        }
    }
}

impl Default for StderrProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for StderrProgressReporter {
    fn report(&self, message: &str) {
        if self.visible {
            eprintln!("{}", message);
        }
    }

    fn report_progress(&self, current: usize, total: usize, message: Option<&str>) {
        let pb = self.get_or_create_progress_bar(total);
        pb.set_position(current as u64);
        if let Some(msg) = message {
            pb.set_message(msg.to_string());
        }
    }

    fn report_error(&self, message: &str) {
        self.finish();
        if self.visible {
            eprintln!("{}", message);
        }
    }

    fn report_completion(&self, message: &str) {
        self.finish();
        if self.visible {
            eprintln!("{}", message);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_reporter_creation() {
        let reporter = StderrProgressReporter::new();
        // Can't easily test stderr output, but verify it doesn't panic
        reporter.report("Test message");
        reporter.report_progress(1, 3, Some("example.com/cmd/app (GOOS=linux)"));
        reporter.report_error("Test error");
        reporter.report_completion("Test completion");
    }

    #[test]
    fn test_hidden_reporter_drops_progress_bar_on_completion() {
        let reporter = StderrProgressReporter::hidden();
        reporter.report_progress(0, 2, None);
        assert!(reporter.progress_bar.borrow().is_some());

        reporter.report_completion("done");
        assert!(reporter.progress_bar.borrow().is_none());
    }

    #[test]
    fn test_with_visibility() {
        assert!(StderrProgressReporter::with_visibility(true).visible);
        assert!(!StderrProgressReporter::with_visibility(false).visible);
    }
}
