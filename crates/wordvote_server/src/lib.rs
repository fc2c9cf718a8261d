//! # WordVote Server
//!
//! HTTP endpoint accepting word votes.
//!
//! ```text
//! GET /submit?s=<slot>&i=<word>&u=<user id>
//! ```
//!
//! Every request answers with a JSON body:
//!
//! ```json
//! {"error": 0, "message": "Vote registered at 1700000000"}
//! {"error": 1, "message": "Invalid input"}
//! {"error": 1, "message": "Word not found"}
//! ```
//!
//! Accepted votes are written to the pending directory as `s<id>` files by
//! [`wordvote_core::SubmissionRecorder`]; the peer IP address becomes the
//! record's origin. `/submit.php` is served as an alias.

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

mod config;
mod error;
mod handler;
mod response;
mod server;

pub use config::{
    ServerConfig, ENV_BIND, ENV_DICTIONARY, ENV_QUEUE_DIR, ENV_SCAN_DICTIONARY, ENV_SYNC_WRITES,
};
pub use error::{ServerError, ServerResult};
pub use handler::{handle_submit, raw_from_pairs, AppState, PARAM_SLOT, PARAM_USER_ID, PARAM_WORD};
pub use response::{
    SubmitResponse, MSG_INTERNAL_ERROR, MSG_INVALID_INPUT, MSG_REGISTERED_PREFIX,
    MSG_STORAGE_ERROR, MSG_WORD_NOT_FOUND,
};
pub use server::{
    build_recorder, router, serve, shutdown_signal, WordVoteServer, LEGACY_SUBMIT_PATH,
    SUBMIT_PATH,
};
