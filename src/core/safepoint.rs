//! Safepoint tracking.
//!
//! A safepoint is the last buffer offset considered permanently confirmed.
//! The tracker watches the buffer's unit count (words or characters) and
//! captures a new safepoint each time the count reaches the current
//! threshold; the threshold then advances by a fixed step. Safepoints only
//! move forward for the life of a session.

use unicode_segmentation::UnicodeSegmentation;

use crate::core::buffer::TextBuffer;

/// Measurement granularity for safepoint triggering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SafepointUnit {
    Words,
    Characters,
}

/// Result of a single [`SafepointTracker::check`].
///
/// `count` and `threshold` are always current so callers can refresh the
/// display; `new_safepoint` is set only on the check that captured one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SafepointCheck {
    pub count: usize,
    pub threshold: usize,
    pub new_safepoint: Option<usize>,
}

#[derive(Debug)]
pub struct SafepointTracker {
    unit: SafepointUnit,
    step: usize,
    threshold: usize,
    safepoint: Option<usize>,
}

impl SafepointTracker {
    /// `step` is the unit count between safepoints and must be nonzero
    /// (enforced by session configuration).
    #[must_use]
    pub fn new(unit: SafepointUnit, step: usize) -> Self {
        Self {
            unit,
            step,
            threshold: step,
            safepoint: None,
        }
    }

    #[must_use]
    pub fn safepoint(&self) -> Option<usize> {
        self.safepoint
    }

    #[must_use]
    pub fn threshold(&self) -> usize {
        self.threshold
    }

    /// Current unit count of `buffer`: whitespace-delimited tokens in word
    /// mode, grapheme clusters in character mode. Empty buffer measures 0.
    #[must_use]
    pub fn measure(&self, buffer: &TextBuffer) -> usize {
        match self.unit {
            SafepointUnit::Words => buffer.as_str().split_whitespace().count(),
            SafepointUnit::Characters => buffer.len(),
        }
    }

    /// Measures the buffer and captures a safepoint when the count has reached
    /// the threshold.
    ///
    /// The trigger is `count >= threshold`, not exact equality, so a paste
    /// that jumps past the threshold in one edit still confirms text. After a
    /// capture the threshold advances by whole steps until it exceeds the
    /// observed count, so one check captures at most one safepoint.
    ///
    /// Capture index:
    /// - word mode: buffer length minus (last token length + 1), clamped to
    ///   ≥ 0 — the trailing in-progress word and one boundary character stay
    ///   at risk, so only fully completed words are confirmed;
    /// - character mode: buffer length − 1, tolerating a trailing partial
    ///   keystroke.
    pub fn check(&mut self, buffer: &TextBuffer) -> SafepointCheck {
        let count = self.measure(buffer);
        let mut new_safepoint = None;

        if count >= self.threshold {
            let index = match self.unit {
                SafepointUnit::Characters => buffer.len().saturating_sub(1),
                SafepointUnit::Words => {
                    let tail = last_token_len(buffer.as_str()) + 1;
                    buffer.len().saturating_sub(tail)
                }
            };
            // Safepoints never roll back, even if an edit shortened the tail.
            let index = self.safepoint.map_or(index, |prev| index.max(prev));
            self.safepoint = Some(index);
            new_safepoint = Some(index);

            while self.threshold <= count {
                self.threshold += self.step;
            }
        }

        SafepointCheck {
            count,
            threshold: self.threshold,
            new_safepoint,
        }
    }
}

/// Grapheme length of the last whitespace-delimited token, 0 for an empty or
/// all-whitespace buffer.
fn last_token_len(text: &str) -> usize {
    text.split_whitespace()
        .next_back()
        .map_or(0, |token| token.graphemes(true).count())
}
