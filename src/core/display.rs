//! Display sink and label formatting.
//!
//! The presenter (window, labels, progress bar) lives outside this crate; the
//! session pushes already-formatted fragments through [`DisplaySink`] and the
//! presenter owns layout and the literal `Word count:` / `Time remaining:`
//! prefixes.

use std::time::Duration;

/// Presenter callbacks consumed by the session core.
pub trait DisplaySink {
    /// Fresh countdown/count state: `count` like `007/100`, `time_remaining`
    /// like `00:07`, `progress` percent elapsed in `0.0..=100.0`.
    fn on_display_update(&mut self, count: &str, time_remaining: &str, progress: f64);

    /// The buffer changed underneath the presenter (expiry truncation) and
    /// needs a re-render.
    fn on_buffer_changed(&mut self);
}

/// `7` of `100` renders as `007/100`.
#[must_use]
pub fn format_count(count: usize, threshold: usize) -> String {
    format!("{count:03}/{threshold:03}")
}

/// Floored minutes:seconds, never below `00:00`.
#[must_use]
pub fn format_time_remaining(remaining: Duration) -> String {
    let total = remaining.as_secs();
    format!("{:02}:{:02}", total / 60, total % 60)
}
