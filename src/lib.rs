//! Dangerous-writing session core.
//!
//! A text editor that punishes pauses: a countdown restarts on every
//! keystroke, and when it reaches zero everything after the last safepoint is
//! deleted. Safepoints are established as the word or character count crosses
//! periodic thresholds, optionally persisting the confirmed text to a dated
//! draft file.
//!
//! Invariant: the buffer is mutated only through `append` and `truncate`, and
//! exactly one truncation happens per countdown expiry.
//!
//! # Public API Overview
//! - Configure and drive a session via [`SessionController`]: `key_down` /
//!   `append` / `key_up` from the host's input layer, `tick` from its render
//!   loop.
//! - Implement [`DisplaySink`] to receive count/time/progress updates and
//!   buffer-change notifications.
//! - The pieces compose independently for hosts that need them raw:
//!   [`TextBuffer`], [`SafepointTracker`], [`CountdownTimer`].
//!
//! The core is cooperative and single-threaded; it never blocks, owns no
//! thread, and takes `Instant`s from the host so behavior is deterministic
//! under test.

pub mod config;
pub mod core;

/// Session configuration and validation.
pub use crate::config::{ConfigError, EnvConfig, SessionConfig};

/// Session orchestration.
pub use crate::core::session::SessionController;

/// Editable text storage with grapheme-offset addressing.
pub use crate::core::buffer::TextBuffer;

/// Safepoint tracking and unit measurement.
pub use crate::core::safepoint::{SafepointCheck, SafepointTracker, SafepointUnit};

/// Countdown state machine.
pub use crate::core::countdown::{CountdownTimer, Tick, RECOMMENDED_TICK_INTERVAL};

/// Presenter callbacks and label formatting.
pub use crate::core::display::{format_count, format_time_remaining, DisplaySink};

/// Host input event seam.
pub use crate::core::input_event::{InputEvent, KeyEventType};
