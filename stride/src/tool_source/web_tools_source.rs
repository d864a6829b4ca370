//! Web tools source: web_fetcher for HTTP GET/POST requests.

use crate::tools::{AggregateToolSource, WebFetcherTool};

/// Builds a tool source exposing web fetching as one tool: `web_fetcher`.
///
/// Returns an [`AggregateToolSource`] that can be passed straight to the
/// executor. The struct itself only namespaces the constructors.
pub struct WebToolsSource;

impl WebToolsSource {
    /// Source with the web fetcher behind a default HTTP client.
    #[allow(clippy::new_ret_no_self)]
    pub async fn new() -> AggregateToolSource {
        let source = AggregateToolSource::new();
        source.register(Box::new(WebFetcherTool::new())).await;
        source
    }

    /// Source with the web fetcher behind a custom HTTP client
    /// (timeouts, proxies, etc.).
    pub async fn with_client(client: reqwest::Client) -> AggregateToolSource {
        let source = AggregateToolSource::new();
        source
            .register(Box::new(WebFetcherTool::with_client(client)))
            .await;
        source
    }
}
