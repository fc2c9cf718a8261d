//! Submission recording.

use crate::clock::{Clock, SystemClock};
use crate::dictionary::WordList;
use crate::error::{CoreError, CoreResult};
use crate::id::SubmissionId;
use crate::submission::{RequestContext, Submission};
use crate::validate::{validate, RawSubmission, ValidatedInput};
use std::sync::Arc;
use tracing::{debug, error, info};
use wordvote_queue::QueueBackend;

/// Proof that a submission was published.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    /// Queue entry name of the published record.
    pub id: SubmissionId,
    /// The recorded submission.
    pub submission: Submission,
}

impl Receipt {
    /// Timestamp the submission was recorded at.
    #[must_use]
    pub fn timestamp(&self) -> u64 {
        self.submission.timestamp()
    }
}

/// Checks words against a dictionary and publishes accepted submissions.
///
/// The recorder holds only shared read-only collaborators; every call is
/// independent. Concurrent calls never collide because each one publishes
/// under a freshly generated [`SubmissionId`].
///
/// # Example
///
/// ```rust
/// use std::net::{IpAddr, Ipv4Addr};
/// use std::sync::Arc;
/// use wordvote_core::{Dictionary, RawSubmission, RequestContext, SubmissionRecorder};
/// use wordvote_queue::InMemoryQueue;
///
/// let queue = Arc::new(InMemoryQueue::new());
/// let recorder = SubmissionRecorder::new(
///     Arc::new(Dictionary::from_words(["cat"])),
///     queue.clone(),
/// );
///
/// let context = RequestContext::new(IpAddr::V4(Ipv4Addr::LOCALHOST));
/// let receipt = recorder
///     .submit(&context, &RawSubmission::new("3", "cat", "42"))
///     .unwrap();
/// assert_eq!(receipt.submission.word(), "cat");
/// assert_eq!(queue.len(), 1);
/// ```
#[derive(Clone)]
pub struct SubmissionRecorder {
    words: Arc<dyn WordList>,
    queue: Arc<dyn QueueBackend>,
    clock: Arc<dyn Clock>,
}

impl SubmissionRecorder {
    /// Creates a recorder using the system clock.
    pub fn new(words: Arc<dyn WordList>, queue: Arc<dyn QueueBackend>) -> Self {
        Self {
            words,
            queue,
            clock: Arc::new(SystemClock),
        }
    }

    /// Replaces the time source.
    #[must_use]
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Validates raw parameters and records the submission.
    ///
    /// # Errors
    ///
    /// - [`CoreError::InvalidInput`] if validation fails
    /// - Any error from [`SubmissionRecorder::record`]
    pub fn submit(&self, context: &RequestContext, raw: &RawSubmission) -> CoreResult<Receipt> {
        let input = validate(raw).inspect_err(|e| {
            debug!(origin = %context.origin(), error = %e, "rejected submission");
        })?;
        self.record(context, input)
    }

    /// Records already validated input.
    ///
    /// Nothing is published unless the word is in the dictionary.
    ///
    /// # Errors
    ///
    /// - [`CoreError::WordNotFound`] if the word is not in the dictionary
    /// - [`CoreError::Lookup`] if the dictionary could not be consulted
    /// - [`CoreError::Storage`] if publishing failed
    pub fn record(&self, context: &RequestContext, input: ValidatedInput) -> CoreResult<Receipt> {
        match self.words.contains(&input.word) {
            Ok(true) => {}
            Ok(false) => {
                debug!(word = %input.word, slot = input.slot, "word not in dictionary");
                return Err(CoreError::WordNotFound);
            }
            Err(e) => {
                error!(error = %e, "dictionary lookup failed");
                return Err(e.into());
            }
        }

        let timestamp = self.clock.now_secs();
        let submission = Submission::new(timestamp, context, input);
        let id = SubmissionId::generate(timestamp);

        self.queue
            .publish(id.as_str(), submission.to_record().as_bytes())
            .inspect_err(|e| {
                error!(%id, error = %e, orphan = e.may_leave_orphan(), "failed to publish submission");
            })?;

        info!(
            %id,
            slot = submission.slot(),
            user_id = submission.user_id(),
            "vote registered"
        );
        Ok(Receipt { id, submission })
    }
}
