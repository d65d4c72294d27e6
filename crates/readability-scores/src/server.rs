//! MCP (Model Context Protocol) server.
//!
//! Exposes readability scoring over stdio so that editors and assistants can
//! score a draft without shelling out to the CLI. The tools wrap the same
//! core library calls that the `score` command makes.

use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo};
use rmcp::schemars;
use rmcp::{ErrorData as McpError, ServerHandler, tool, tool_handler, tool_router};

use readability_scores_core::{ScoreOptions, markdown, readability_scores};

/// Parameters for the `get_info` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct GetInfoParams {
    /// Output format: "text" or "json"
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_format() -> String {
    "text".to_string()
}

/// Parameters for the `readability_scores` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReadabilityScoresParams {
    /// The text to score.
    pub text: String,
    /// Strip markdown formatting before scoring.
    #[serde(default)]
    pub strip_markdown: bool,
    /// Metric selection and word-list options. Falls back to the server's
    /// configured defaults when omitted.
    pub options: Option<ScoreOptions>,
}

/// MCP server exposing readability scoring.
#[derive(Clone)]
pub struct ReadabilityServer {
    tool_router: rmcp::handler::server::router::tool::ToolRouter<Self>,
    max_input_bytes: Option<usize>,
    defaults: ScoreOptions,
}

impl Default for ReadabilityServer {
    fn default() -> Self {
        Self::new(Some(readability_scores_core::DEFAULT_MAX_INPUT_BYTES))
    }
}

#[tool_router]
impl ReadabilityServer {
    /// Create a server that rejects text longer than `max_input_bytes`.
    pub fn new(max_input_bytes: Option<usize>) -> Self {
        Self {
            tool_router: Self::tool_router(),
            max_input_bytes,
            defaults: ScoreOptions::default(),
        }
    }

    /// Use these options when a call does not pass its own.
    #[must_use]
    pub fn with_defaults(mut self, defaults: ScoreOptions) -> Self {
        self.defaults = defaults;
        self
    }

    fn check_input_size(&self, text: &str) -> Result<(), McpError> {
        if let Some(max) = self.max_input_bytes
            && text.len() > max
        {
            return Err(McpError::invalid_params(
                format!("input too large: {} bytes (max: {max} bytes)", text.len()),
                None,
            ));
        }
        Ok(())
    }

    /// Get project information.
    #[tool(description = "Get project name, version, and description")]
    #[tracing::instrument(skip(self), fields(otel.kind = "server"))]
    fn get_info(
        &self,
        Parameters(params): Parameters<GetInfoParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "get_info", format = %params.format, "executing MCP tool");
        let info = serde_json::json!({
            "name": env!("CARGO_PKG_NAME"),
            "version": env!("CARGO_PKG_VERSION"),
            "description": env!("CARGO_PKG_DESCRIPTION"),
        });

        let text = if params.format == "json" {
            serde_json::to_string_pretty(&info)
                .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))?
        } else {
            format!(
                "{} v{}\n{}",
                env!("CARGO_PKG_NAME"),
                env!("CARGO_PKG_VERSION"),
                env!("CARGO_PKG_DESCRIPTION"),
            )
        };

        tracing::info!(tool = "get_info", "MCP tool completed");
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// Score text with the requested readability metrics.
    #[tool(
        description = "Compute readability grade levels (Spache, Dale-Chall, ARI, Coleman-Liau, Flesch-Kincaid, SMOG, Gunning Fog) and the counts behind them. Returns null for empty text."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server", text_len = params.text.len()))]
    fn readability_scores(
        &self,
        Parameters(params): Parameters<ReadabilityScoresParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(
            tool = "readability_scores",
            strip_md = params.strip_markdown,
            "executing MCP tool"
        );
        self.check_input_size(&params.text)?;

        let prose = if params.strip_markdown {
            markdown::strip_to_prose(&params.text)
        } else {
            params.text
        };
        let options = params.options.as_ref().unwrap_or(&self.defaults);
        let scores = readability_scores(Some(&prose), Some(options));

        let json = serde_json::to_string_pretty(&scores)
            .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))?;
        tracing::info!(
            tool = "readability_scores",
            words = scores.as_ref().map_or(0, |s| s.word_count),
            "MCP tool completed"
        );
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }
}

#[tool_handler]
impl ServerHandler for ReadabilityServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: Default::default(),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            instructions: Some(format!(
                "{} MCP server. Call readability_scores with the text to grade.",
                env!("CARGO_PKG_NAME"),
            )),
        }
    }
}
