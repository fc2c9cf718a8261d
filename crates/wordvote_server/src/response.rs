//! JSON response body of the submit endpoint.

use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use wordvote_core::{CoreError, CoreResult, Receipt};

/// Message for rejected parameters.
pub const MSG_INVALID_INPUT: &str = "Invalid input";
/// Message for words missing from the dictionary.
pub const MSG_WORD_NOT_FOUND: &str = "Word not found";
/// Message for failures writing the pending record.
pub const MSG_STORAGE_ERROR: &str = "Storage error";
/// Message for failures outside the submission pipeline.
pub const MSG_INTERNAL_ERROR: &str = "Internal error";
/// Prefix of the success message; followed by the record timestamp.
pub const MSG_REGISTERED_PREFIX: &str = "Vote registered at ";

/// Body returned for every submission: `{"error": 0|1, "message": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitResponse {
    /// 0 on success, 1 on failure.
    pub error: u8,
    /// Human-readable outcome.
    pub message: String,
}

impl SubmitResponse {
    /// Creates a success response for a vote recorded at `timestamp`.
    pub fn registered(timestamp: u64) -> Self {
        Self {
            error: 0,
            message: format!("{MSG_REGISTERED_PREFIX}{timestamp}"),
        }
    }

    /// Creates a failure response.
    pub fn failure(message: &str) -> Self {
        Self {
            error: 1,
            message: message.to_string(),
        }
    }

    /// Maps a pipeline outcome to its status code and body.
    ///
    /// User-caused rejections are ordinary answers (200); storage and
    /// dictionary failures are server errors (500). A dictionary failure
    /// still reads "Word not found" to the client.
    pub fn from_result(result: &CoreResult<Receipt>) -> (StatusCode, Self) {
        match result {
            Ok(receipt) => (StatusCode::OK, Self::registered(receipt.timestamp())),
            Err(CoreError::InvalidInput(_)) => (StatusCode::OK, Self::failure(MSG_INVALID_INPUT)),
            Err(CoreError::WordNotFound) => (StatusCode::OK, Self::failure(MSG_WORD_NOT_FOUND)),
            Err(CoreError::Lookup(_)) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Self::failure(MSG_WORD_NOT_FOUND),
            ),
            Err(CoreError::Storage(_)) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Self::failure(MSG_STORAGE_ERROR),
            ),
        }
    }

    /// Returns true if the submission was recorded.
    pub fn is_success(&self) -> bool {
        self.error == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use wordvote_core::{InvalidField, LookupError};
    use wordvote_queue::QueueError;

    #[test]
    fn json_shape() {
        let body = serde_json::to_value(SubmitResponse::registered(1_700_000_000)).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"error": 0, "message": "Vote registered at 1700000000"})
        );
    }

    #[test]
    fn rejection_mapping() {
        let (status, body) =
            SubmitResponse::from_result(&Err(CoreError::InvalidInput(InvalidField::Slot)));
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, SubmitResponse::failure("Invalid input"));

        let (status, body) = SubmitResponse::from_result(&Err(CoreError::WordNotFound));
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.message, "Word not found");
        assert!(!body.is_success());
    }

    #[test]
    fn server_failure_mapping() {
        let lookup = CoreError::Lookup(LookupError::Empty {
            path: PathBuf::from("words.txt"),
        });
        let (status, body) = SubmitResponse::from_result(&Err(lookup));
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.message, MSG_WORD_NOT_FOUND);

        let storage = CoreError::Storage(QueueError::InvalidName("x".into()));
        let (status, body) = SubmitResponse::from_result(&Err(storage));
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, SubmitResponse::failure(MSG_STORAGE_ERROR));
    }
}
