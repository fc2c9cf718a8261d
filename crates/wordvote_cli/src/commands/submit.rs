//! Submit command implementation.

use std::net::IpAddr;
use wordvote_core::{RawSubmission, RequestContext};
use wordvote_server::{build_recorder, ServerConfig, ServerResult, SubmitResponse};

/// Records one submission through the same pipeline as the endpoint.
pub fn execute(
    config: &ServerConfig,
    origin: IpAddr,
    raw: &RawSubmission,
) -> ServerResult<SubmitResponse> {
    let recorder = build_recorder(config)?;
    let result = recorder.submit(&RequestContext::new(origin), raw);
    let (_, response) = SubmitResponse::from_result(&result);
    Ok(response)
}

/// Runs the submit command, printing the JSON response.
///
/// Fails (non-zero exit) when the submission is not recorded.
pub fn run(
    config: &ServerConfig,
    origin: IpAddr,
    slot: &str,
    word: &str,
    user: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let response = execute(config, origin, &RawSubmission::new(slot, word, user))?;
    println!("{}", serde_json::to_string(&response)?);

    if response.is_success() {
        Ok(())
    } else {
        Err(response.message.into())
    }
}
