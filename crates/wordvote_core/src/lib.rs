//! # WordVote Core
//!
//! Validation and durable recording of word submissions.
//!
//! A submission passes through two stages:
//!
//! 1. **Validation** ([`validate`]) - the raw slot, word and user id must
//!    already be canonical: `"3"`, `"cat"`, `"42"` are accepted while
//!    `"03"`, `"Cat"` or `"42x"` are not.
//! 2. **Recording** ([`SubmissionRecorder`]) - the word must be a whole line
//!    of the dictionary; the record is then published to the pending queue
//!    with a write-then-rename so consumers never see a partial record.
//!
//! ## Record format
//!
//! One line, five fields separated by single spaces:
//!
//! ```text
//! <timestamp> <origin_address> <slot> <user_id> <word>
//! ```
//!
//! ## Errors
//!
//! | Error | Cause |
//! |-------|-------|
//! | [`CoreError::InvalidInput`] | malformed or non-canonical parameter |
//! | [`CoreError::WordNotFound`] | word not in the dictionary |
//! | [`CoreError::Lookup`] | dictionary unreadable |
//! | [`CoreError::Storage`] | staging write or rename failed |
//!
//! No error is retried internally.

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

mod clock;
mod dictionary;
mod error;
mod id;
mod recorder;
mod submission;
mod validate;

pub use clock::{Clock, FixedClock, SystemClock};
pub use dictionary::{Dictionary, ScanningDictionary, WordList};
pub use error::{CoreError, CoreResult, InvalidField, LookupError};
pub use id::SubmissionId;
pub use recorder::{Receipt, SubmissionRecorder};
pub use submission::{RequestContext, Submission};
pub use validate::{validate, RawSubmission, ValidatedInput};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
