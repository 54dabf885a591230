use core::fmt::{Debug, Formatter};
use core::sync::atomic::{AtomicBool, Ordering};
use core::time::Duration;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::time::Instant;

const TEMPLATE: &str = "{prefix:>12.bold.cyan} [{bar:25}] {msg}";
const TEMPLATE_NO_COLOR: &str = "{prefix:>12} [{bar:25}] {msg}";

/// A progress bar that delays showing itself until a threshold is reached,
/// so short fetches finish without any terminal chrome.
pub struct ProgressReporter {
    bar: ProgressBar,
    visible_after: Option<Instant>,
    visible: AtomicBool,
}

impl ProgressReporter {
    /// Create a new progress reporter.
    ///
    /// The bar only becomes visible if work continues beyond `delay`;
    /// `Duration::MAX` keeps it hidden forever (used when logging is active,
    /// since the bar would interfere with log output).
    #[must_use]
    pub fn new(delay: Duration, use_colors: bool) -> Self {
        let bar = ProgressBar::hidden();
        let template = if use_colors { TEMPLATE } else { TEMPLATE_NO_COLOR };
        bar.set_style(
            ProgressStyle::default_bar()
                .template(template)
                .expect("could not create progress bar style")
                .progress_chars("=> "),
        );

        Self {
            bar,
            visible_after: Instant::now().checked_add(delay),
            visible: AtomicBool::new(false),
        }
    }

    /// Start a phase with a known number of steps.
    pub fn begin(&self, phase: &str, total: u64) {
        self.bar.set_prefix(phase.to_string());
        self.bar.set_length(total);
        self.bar.set_position(0);
    }

    /// Record one completed step.
    pub fn advance(&self, message: String) {
        self.bar.inc(1);
        self.bar.set_message(message);
        self.maybe_reveal();
    }

    /// Finish and clear the progress indicator.
    pub fn done(&self) {
        if self.visible.load(Ordering::Relaxed) {
            self.bar.finish_and_clear();
        }
    }

    fn maybe_reveal(&self) {
        if !self.visible.load(Ordering::Relaxed)
            && let Some(after) = self.visible_after
            && Instant::now() >= after
        {
            self.visible.store(true, Ordering::Relaxed);
            self.bar.set_draw_target(ProgressDrawTarget::stderr_with_hz(10));
        }
    }
}

impl Debug for ProgressReporter {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ProgressReporter")
            .field("bar", &self.bar)
            .field("visible_after", &self.visible_after)
            .field("visible", &self.visible)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_until_delay_elapses() {
        let reporter = ProgressReporter::new(Duration::from_secs(3600), true);
        reporter.begin("Fetching", 10);
        reporter.advance("step".to_string());
        assert!(!reporter.visible.load(Ordering::Relaxed));
        reporter.done();
    }

    #[test]
    fn test_reveals_after_delay() {
        let reporter = ProgressReporter::new(Duration::ZERO, false);
        reporter.begin("Fetching", 10);
        reporter.advance("step".to_string());
        assert!(reporter.visible.load(Ordering::Relaxed));
        reporter.done();
    }

    #[test]
    fn test_infinite_delay_never_reveals() {
        let reporter = ProgressReporter::new(Duration::MAX, true);
        reporter.begin("Fetching", 2);
        reporter.advance("a".to_string());
        reporter.advance("b".to_string());
        assert!(!reporter.visible.load(Ordering::Relaxed));
        reporter.done();
    }
}
