//! Serve command implementation.

use wordvote_server::{shutdown_signal, ServerConfig, WordVoteServer};

/// Runs the HTTP endpoint until Ctrl+C or SIGTERM.
pub fn run(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let server = WordVoteServer::from_config(config)?;

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(server.run(shutdown_signal()))?;

    Ok(())
}
