//! The submission record and its on-disk format.

use crate::validate::ValidatedInput;
use std::fmt;
use std::net::IpAddr;

/// Per-request context supplied by the transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestContext {
    origin: IpAddr,
}

impl RequestContext {
    /// Creates a context for a request from `origin`.
    ///
    /// IPv4-mapped IPv6 addresses are stored as plain IPv4.
    #[must_use]
    pub fn new(origin: IpAddr) -> Self {
        Self {
            origin: origin.to_canonical(),
        }
    }

    /// Returns the address the request arrived from.
    #[must_use]
    pub fn origin(&self) -> IpAddr {
        self.origin
    }
}

/// An accepted submission.
///
/// Only the recorder constructs submissions, after validation and the
/// dictionary check have passed. Its [`Display`](fmt::Display) form is the
/// persisted record: `timestamp origin slot user_id word`, single spaces,
/// no trailing newline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    timestamp: u64,
    origin: IpAddr,
    slot: u64,
    user_id: u16,
    word: String,
}

impl Submission {
    pub(crate) fn new(timestamp: u64, context: &RequestContext, input: ValidatedInput) -> Self {
        Self {
            timestamp,
            origin: context.origin(),
            slot: input.slot,
            user_id: input.user_id,
            word: input.word,
        }
    }

    /// Seconds since the Unix epoch at which the submission was recorded.
    #[must_use]
    pub fn timestamp(&self) -> u64 {
        self.timestamp
    }

    /// The address the submission arrived from.
    #[must_use]
    pub fn origin(&self) -> IpAddr {
        self.origin
    }

    /// The slot voted in.
    #[must_use]
    pub fn slot(&self) -> u64 {
        self.slot
    }

    /// The submitting user.
    #[must_use]
    pub fn user_id(&self) -> u16 {
        self.user_id
    }

    /// The submitted word.
    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    /// Returns the persisted record line.
    #[must_use]
    pub fn to_record(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Submission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {}",
            self.timestamp, self.origin, self.slot, self.user_id, self.word
        )
    }
}
