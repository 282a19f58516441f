//! Session controller.
//!
//! Owns the buffer, safepoint tracker, countdown timer, and optional draft
//! store, and wires them per the session protocol:
//!
//! - key down → cancel any running countdown;
//! - key up → safepoint check (persisting confirmed text when one is
//!   captured), then restart the countdown for the full duration;
//! - tick → while running, push remaining time and progress to the sink; on
//!   expiry, truncate the buffer back to the safepoint (or empty it when none
//!   exists yet) and refresh the display. Exactly one truncation per expiry,
//!   and truncation is unrecoverable.
//!
//! Single-threaded and cooperative: the host calls every method from one
//! execution context and paces `tick` itself.

use std::time::{Duration, Instant};

use tracing::{debug, warn};

use draft_store::DraftStore;

use crate::config::{ConfigError, SessionConfig};
use crate::core::buffer::TextBuffer;
use crate::core::countdown::{CountdownTimer, Tick};
use crate::core::display::{format_count, format_time_remaining, DisplaySink};
use crate::core::input_event::{InputEvent, KeyEventType};
use crate::core::safepoint::SafepointTracker;

pub struct SessionController {
    buffer: TextBuffer,
    tracker: SafepointTracker,
    timer: CountdownTimer,
    store: Option<DraftStore>,
    sink: Box<dyn DisplaySink>,
    last_count: usize,
    last_threshold: usize,
}

impl SessionController {
    /// Validates `config`, opening the draft store only when persistence is
    /// requested. A store that cannot be opened is a configuration-time
    /// failure, not a mid-session one.
    pub fn new(config: SessionConfig, sink: Box<dyn DisplaySink>) -> Result<Self, ConfigError> {
        config.validate()?;

        let store = if config.persist_on_safepoint {
            Some(
                DraftStore::open(&config.draft_dir)
                    .map_err(|source| ConfigError::DraftDir {
                        path: config.draft_dir.clone(),
                        source,
                    })?,
            )
        } else {
            None
        };

        let tracker = SafepointTracker::new(config.safepoint_unit, config.units_per_safepoint);
        let timer = CountdownTimer::new(Duration::from_secs(u64::from(config.countdown_seconds)));
        let last_threshold = tracker.threshold();

        Ok(Self {
            buffer: TextBuffer::new(),
            tracker,
            timer,
            store,
            sink,
            last_count: 0,
            last_threshold,
        })
    }

    #[must_use]
    pub fn text(&self) -> &str {
        self.buffer.as_str()
    }

    #[must_use]
    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    #[must_use]
    pub fn safepoint(&self) -> Option<usize> {
        self.tracker.safepoint()
    }

    #[must_use]
    pub fn is_counting_down(&self) -> bool {
        self.timer.is_running()
    }

    /// Raw key press: cancel the countdown so the user gets their grace reset
    /// the instant they resume, independent of whether the keystroke changes
    /// content.
    pub fn key_down(&mut self) {
        self.timer.activity();
    }

    /// Text produced by the host's input layer, inserted at the buffer end.
    pub fn append(&mut self, text: &str) {
        self.buffer.append(text);
    }

    /// Key release: content may have changed, so run the safepoint check,
    /// persist on capture, and rearm the countdown for the full duration.
    pub fn key_up(&mut self, now: Instant) {
        let check = self.tracker.check(&self.buffer);
        self.last_count = check.count;
        self.last_threshold = check.threshold;

        if let Some(index) = check.new_safepoint {
            debug!(count = check.count, index, "safepoint captured");
            self.persist_confirmed(index);
        }

        self.timer.start(now);
        self.push_display(self.timer.duration(), 0.0);
    }

    /// One cooperative step, driven by the host on a fixed cadence. Safe to
    /// call redundantly while idle.
    pub fn tick(&mut self, now: Instant) {
        match self.timer.tick(now) {
            Tick::Idle => {}
            Tick::Running { remaining, progress } => {
                self.push_display(remaining, progress);
            }
            Tick::Expired => {
                let cut = self.tracker.safepoint().unwrap_or(0);
                debug!(cut, "countdown expired, deleting unconfirmed text");
                self.buffer.truncate(cut);
                self.last_count = self.tracker.measure(&self.buffer);
                self.sink.on_buffer_changed();
                self.push_display(Duration::ZERO, 100.0);
            }
        }
    }

    /// Maps a host event stream onto the `key_down` / `append` / `key_up`
    /// protocol. Hosts without key-release events can call the methods
    /// directly instead.
    pub fn handle_event(&mut self, event: &InputEvent, now: Instant) {
        match event {
            InputEvent::Key { event_type } => match event_type {
                KeyEventType::Press | KeyEventType::Repeat => self.key_down(),
                KeyEventType::Release => self.key_up(now),
            },
            InputEvent::Text { text, event_type } => match event_type {
                KeyEventType::Press | KeyEventType::Repeat => {
                    self.key_down();
                    self.append(text);
                }
                KeyEventType::Release => self.key_up(now),
            },
        }
    }

    /// Best effort: a failed write is logged and the session carries on with
    /// its in-memory state untouched.
    fn persist_confirmed(&mut self, safepoint: usize) {
        let Some(store) = &self.store else {
            return;
        };
        match store.write_draft(self.buffer.read(0, safepoint)) {
            Ok(path) => debug!(path = %path.display(), "draft saved"),
            Err(err) => warn!(error = %err, "draft write failed, keeping in-memory state"),
        }
    }

    fn push_display(&mut self, remaining: Duration, progress: f64) {
        self.sink.on_display_update(
            &format_count(self.last_count, self.last_threshold),
            &format_time_remaining(remaining),
            progress,
        );
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::{Duration, Instant};

    use super::SessionController;
    use crate::config::SessionConfig;
    use crate::core::display::DisplaySink;
    use crate::core::safepoint::SafepointUnit;

    #[derive(Default)]
    struct Recorded {
        updates: Vec<(String, String, f64)>,
        buffer_changes: usize,
    }

    struct RecordingSink(Rc<RefCell<Recorded>>);

    impl DisplaySink for RecordingSink {
        fn on_display_update(&mut self, count: &str, time_remaining: &str, progress: f64) {
            self.0
                .borrow_mut()
                .updates
                .push((count.to_string(), time_remaining.to_string(), progress));
        }

        fn on_buffer_changed(&mut self) {
            self.0.borrow_mut().buffer_changes += 1;
        }
    }

    fn char_session(threshold: usize) -> (SessionController, Rc<RefCell<Recorded>>) {
        let recorded = Rc::new(RefCell::new(Recorded::default()));
        let sink = RecordingSink(Rc::clone(&recorded));
        let config = SessionConfig {
            safepoint_unit: SafepointUnit::Characters,
            units_per_safepoint: threshold,
            ..SessionConfig::default()
        };
        let session = SessionController::new(config, Box::new(sink)).expect("valid config");
        (session, recorded)
    }

    fn type_text(session: &mut SessionController, text: &str, now: Instant) {
        for ch in text.chars() {
            session.key_down();
            session.append(&ch.to_string());
            session.key_up(now);
        }
    }

    #[test]
    fn key_up_restarts_countdown_and_reports_full_time() {
        let (mut session, recorded) = char_session(100);
        let t0 = Instant::now();

        session.key_down();
        session.append("a");
        session.key_up(t0);

        assert!(session.is_counting_down());
        let recorded = recorded.borrow();
        let (count, time, progress) = recorded.updates.last().expect("one update");
        assert_eq!(count, "001/100");
        assert_eq!(time, "00:10");
        assert_eq!(*progress, 0.0);
    }

    #[test]
    fn expiry_without_safepoint_empties_buffer() {
        let (mut session, recorded) = char_session(100);
        let t0 = Instant::now();

        type_text(&mut session, "doomed words", t0);
        session.tick(t0 + Duration::from_secs(11));

        assert_eq!(session.text(), "");
        assert_eq!(recorded.borrow().buffer_changes, 1);
    }

    #[test]
    fn expiry_with_safepoint_keeps_confirmed_prefix() {
        let (mut session, _) = char_session(5);
        let t0 = Instant::now();

        type_text(&mut session, "abcdefg", t0);
        assert_eq!(session.safepoint(), Some(4));

        session.tick(t0 + Duration::from_secs(11));
        assert_eq!(session.text(), "abcd");
    }

    #[test]
    fn expiry_truncates_only_once() {
        let (mut session, recorded) = char_session(100);
        let t0 = Instant::now();

        type_text(&mut session, "gone", t0);
        session.tick(t0 + Duration::from_secs(11));
        session.tick(t0 + Duration::from_secs(12));
        session.tick(t0 + Duration::from_secs(13));

        assert_eq!(recorded.borrow().buffer_changes, 1);
    }

    #[test]
    fn key_down_cancels_pending_expiry() {
        let (mut session, recorded) = char_session(100);
        let t0 = Instant::now();

        type_text(&mut session, "kept", t0);
        session.key_down();
        session.tick(t0 + Duration::from_secs(11));

        assert_eq!(session.text(), "kept");
        assert_eq!(recorded.borrow().buffer_changes, 0);
    }

    #[test]
    fn running_tick_pushes_remaining_and_progress() {
        let (mut session, recorded) = char_session(100);
        let t0 = Instant::now();

        session.key_down();
        session.append("x");
        session.key_up(t0);
        session.tick(t0 + Duration::from_secs(5));

        let recorded = recorded.borrow();
        let (_, time, progress) = recorded.updates.last().expect("update");
        assert_eq!(time, "00:05");
        assert!((progress - 50.0).abs() < 1e-9);
    }

    #[test]
    fn idle_ticks_emit_nothing() {
        let (mut session, recorded) = char_session(100);
        let t0 = Instant::now();

        session.tick(t0);
        session.tick(t0 + Duration::from_secs(1));

        assert!(recorded.borrow().updates.is_empty());
        assert_eq!(recorded.borrow().buffer_changes, 0);
    }
}
