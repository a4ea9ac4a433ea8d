//! Terminal output
//!
//! Progress lines go to stdout, warnings and errors to stderr. Compiling a
//! helper shows an indicatif spinner, which hides itself when stderr is not
//! a terminal.

use std::time::Duration;

use console::Style;
use indicatif::{ProgressBar, ProgressStyle};

/// Print a progress line
pub fn log(message: impl AsRef<str>) {
    println!("{}", message.as_ref());
}

/// Print a warning to stderr
pub fn warn(message: impl AsRef<str>) {
    eprintln!(
        "{} {}",
        Style::new().yellow().bold().apply_to("warning:"),
        message.as_ref()
    );
}

/// Print a fatal error to stderr as a single line
pub fn error(message: impl AsRef<str>) {
    eprintln!(
        "{} {}",
        Style::new().red().bold().apply_to("error:"),
        message.as_ref()
    );
}

/// Print a run summary line
pub fn summary(message: impl AsRef<str>) {
    println!("{}", Style::new().green().bold().apply_to(message.as_ref()));
}

/// Spinner shown while a blocking step runs
pub struct Spinner {
    pb: ProgressBar,
}

impl Spinner {
    /// Start a spinner with a message
    pub fn start(message: impl Into<String>) -> Self {
        let style = ProgressStyle::with_template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner());
        let pb = ProgressBar::new_spinner();
        pb.set_style(style);
        pb.set_message(message.into());
        pb.enable_steady_tick(Duration::from_millis(100));
        Self { pb }
    }

    /// Stop and clear the spinner
    pub fn finish(self) {
        self.pb.finish_and_clear();
    }
}

/// Pluralize a count for summary lines
pub fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}
