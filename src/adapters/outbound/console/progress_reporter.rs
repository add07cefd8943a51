use crate::ports::outbound::ProgressReporter;
use owo_colors::OwoColorize;

/// Warning lines start with this marker; they are highlighted when colored
const WARNING_MARKER: &str = "⚠️";

/// StderrProgressReporter adapter for reporting progress to stderr
///
/// This adapter implements the ProgressReporter port, writing progress
/// information to stderr so it doesn't interfere with stdout output.
#[derive(Debug, Clone, Default)]
pub struct StderrProgressReporter {
    colored: bool,
}

impl StderrProgressReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reporter that highlights warnings and errors with ANSI colors
    pub fn colored() -> Self {
        Self { colored: true }
    }

    fn paint_error(&self, message: &str) -> String {
        if !self.colored {
            return message.to_string();
        }
        if message.trim_start().starts_with(WARNING_MARKER) {
            message.yellow().to_string()
        } else {
            message.red().to_string()
        }
    }
}

impl ProgressReporter for StderrProgressReporter {
    fn report(&self, message: &str) {
        eprintln!("{}", message);
    }

    fn report_error(&self, message: &str) {
        eprintln!("{}", self.paint_error(message));
    }

    fn report_completion(&self, message: &str) {
        eprintln!();
        if self.colored {
            eprintln!("{}", message.green());
        } else {
            eprintln!("{}", message);
        }
    }
}
