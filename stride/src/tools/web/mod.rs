//! Web fetcher tool: HTTP GET/POST as a tool for the LLM.

use async_trait::async_trait;
use serde_json::json;

use crate::tool_source::{ToolCallContent, ToolSourceError, ToolSpec};
use crate::tools::Tool;

/// Tool name for the web fetcher operation.
pub const TOOL_WEB_FETCHER: &str = "web_fetcher";

/// Tool for HTTP requests to URLs (GET or POST).
///
/// Wraps `reqwest::Client` and exposes it as a tool. Supports GET (default)
/// and POST with an optional body and headers; returns the response body as
/// text.
pub struct WebFetcherTool {
    client: reqwest::Client,
}

impl Default for WebFetcherTool {
    fn default() -> Self {
        Self::new()
    }
}

impl WebFetcherTool {
    /// Tool with a default HTTP client.
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    /// Tool with a custom HTTP client (timeouts, proxies, etc.).
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Tool for WebFetcherTool {
    fn name(&self) -> &str {
        TOOL_WEB_FETCHER
    }

    fn spec(&self) -> ToolSpec {
        ToolSpec {
            name: TOOL_WEB_FETCHER.to_string(),
            description: Some(
                "Fetch or send content to a URL. Use this tool to retrieve web pages (GET), call \
                 APIs with a body (POST), or other HTTP-accessible content. Optional: method \
                 (default GET), body (string or JSON object), headers (object). Returns the \
                 response body as text."
                    .to_string(),
            ),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "url": {
                        "type": "string",
                        "description": "The URL to request. Must be a valid HTTP/HTTPS URL."
                    },
                    "method": {
                        "type": "string",
                        "description": "HTTP method. One of: GET, POST. Default is GET.",
                        "enum": ["GET", "POST"]
                    },
                    "body": {
                        "description": "Request body for POST. A string is sent as text/plain; a JSON object as application/json."
                    },
                    "headers": {
                        "type": "object",
                        "description": "Optional HTTP headers as key-value pairs.",
                        "additionalProperties": { "type": "string" }
                    }
                },
                "required": ["url"]
            }),
        }
    }

    async fn call(&self, args: serde_json::Value) -> Result<ToolCallContent, ToolSourceError> {
        let url = args
            .get("url")
            .and_then(|v| v.as_str())
            .ok_or_else(|| ToolSourceError::InvalidInput("missing url".to_string()))?;

        let method = args
            .get("method")
            .and_then(|v| v.as_str())
            .unwrap_or("GET")
            .to_uppercase();
        if method != "GET" && method != "POST" {
            return Err(ToolSourceError::InvalidInput(format!(
                "unsupported method: {} (use GET or POST)",
                method
            )));
        }

        let mut request = match method.as_str() {
            "GET" => self.client.get(url),
            _ => self.client.post(url),
        };

        if let Some(h) = args.get("headers").and_then(|v| v.as_object()) {
            for (k, v) in h {
                if let Some(v_str) = v.as_str() {
                    request = request.header(k.as_str(), v_str);
                }
            }
        }

        if method == "POST" {
            if let Some(body) = args.get("body") {
                if let Some(s) = body.as_str() {
                    request = request
                        .body(s.to_string())
                        .header("Content-Type", "text/plain; charset=utf-8");
                } else if !body.is_null() {
                    request = request.json(body);
                }
            }
        }

        let response = request
            .send()
            .await
            .map_err(|e| ToolSourceError::Transport(format!("request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(ToolSourceError::Transport(format!(
                "request failed with status: {}",
                response.status()
            )));
        }

        let text = response
            .text()
            .await
            .map_err(|e| ToolSourceError::Transport(format!("read body failed: {}", e)))?;

        Ok(ToolCallContent { text })
    }
}
