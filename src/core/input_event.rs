//! Host input events consumed by the session.
//!
//! The host owns raw keyboard capture and escape-sequence decoding; the core
//! only needs to know whether a key went down or came back up, and what text
//! (if any) the press produced.

/// Phase of a key event. Repeats count as presses for countdown purposes:
/// a held key is still activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEventType {
    Press,
    Repeat,
    Release,
}

impl KeyEventType {
    #[must_use]
    pub fn is_release(self) -> bool {
        matches!(self, Self::Release)
    }
}

/// Input event delivered by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// A non-text key (arrows, backspace, modifiers...). Every key resets the
    /// countdown, content-changing or not.
    Key { event_type: KeyEventType },
    /// A key that produced text to insert at the end of the buffer.
    Text {
        text: String,
        event_type: KeyEventType,
    },
}
