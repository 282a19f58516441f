//! Best-effort persistence for confirmed writing sessions.
//!
//! A draft is the confirmed prefix of a session buffer, written whole-file
//! (overwrite, UTF-8) into a dated `YYYY-MM-DD.txt` under the store root.
//! Callers treat failures as non-fatal: in-memory session state never depends
//! on a write having succeeded.

mod error;
mod paths;
mod store;

pub use error::DraftStoreError;
pub use paths::{draft_file_name, DRAFT_EXTENSION};
pub use store::DraftStore;
