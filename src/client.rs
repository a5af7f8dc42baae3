//! Analysis backend client.
//!
//! One GET per request: `{base}/analyze?orcid=<id>` or `?author=<id>`.
//! No retries, no timeout, no caching.

use crate::error::{Result, WrappedError};
use crate::identifier::QueryParams;
use crate::model::AnalysisResult;
use reqwest::header::ACCEPT;
use reqwest::Client;
use std::future::Future;
use tracing::{debug, info, warn};

/// Anything that can turn query parameters into an analysis result.
///
/// The controller is generic over this so it can run against a stub.
pub trait AnalysisApi {
    fn analyze(
        &self,
        base_url: &str,
        params: &QueryParams,
    ) -> impl Future<Output = Result<AnalysisResult>> + Send;
}

/// HTTP client for the analysis backend.
#[derive(Debug, Clone)]
pub struct AnalysisClient {
    client: Client,
}

impl AnalysisClient {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("research-wrapped/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| WrappedError::Config(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self { client })
    }
}

impl AnalysisApi for AnalysisClient {
    async fn analyze(&self, base_url: &str, params: &QueryParams) -> Result<AnalysisResult> {
        let url = analyze_url(base_url);
        info!(url = %url, params = %params, "Requesting analysis");

        let response = self
            .client
            .get(&url)
            .header(ACCEPT, "application/json")
            .query(&params.pairs())
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        debug!(status = status.as_u16(), bytes = body.len(), "Analysis response received");

        if !status.is_success() {
            warn!(status = status.as_u16(), "Backend returned an error status");
            return Err(WrappedError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let result = parse_response(&body)?;
        info!(
            author = result.display_name(),
            works_used = result.works_used,
            "Analysis parsed"
        );
        Ok(result)
    }
}

/// `{base}/analyze` with trailing slashes stripped from `base`.
pub fn analyze_url(base_url: &str) -> String {
    format!("{}/analyze", base_url.trim().trim_end_matches('/'))
}

/// Parse a 2xx body; an object carrying a string `error` field is a backend error.
fn parse_response(body: &str) -> Result<AnalysisResult> {
    let value: serde_json::Value = serde_json::from_str(body)
        .map_err(|e| WrappedError::Parse(format!("Failed to parse analysis response: {}", e)))?;

    let Some(object) = value.as_object() else {
        return Err(WrappedError::Parse(
            "Unexpected analysis response shape: expected a JSON object".to_string(),
        ));
    };

    if let Some(message) = object.get("error").and_then(|e| e.as_str()) {
        return Err(WrappedError::Backend(message.to_string()));
    }

    serde_json::from_value(value)
        .map_err(|e| WrappedError::Parse(format!("Unexpected analysis response shape: {}", e)))
}
