//! Serve command: run the MCP server on stdio.

use anyhow::Context;
use clap::Args;
use readability_scores_core::config::Config;
use rmcp::ServiceExt;
use tracing::{info, instrument};

use crate::server::ReadabilityServer;

/// Arguments for the `serve` subcommand.
#[derive(Args, Debug, Default)]
pub struct ServeArgs {}

/// Serve until the client disconnects.
///
/// Logs go to stderr or the log file; stdout carries the protocol.
#[instrument(name = "cmd_serve", skip_all)]
pub async fn cmd_serve(
    _args: ServeArgs,
    max_input_bytes: Option<usize>,
    config: Config,
) -> anyhow::Result<()> {
    info!(?max_input_bytes, "starting MCP server on stdio");
    let server = ReadabilityServer::new(max_input_bytes).with_defaults(config.scores);
    let service = server
        .serve(rmcp::transport::stdio())
        .await
        .context("failed to start MCP server")?;
    service.waiting().await.context("MCP server failed")?;
    info!("MCP server stopped");
    Ok(())
}
