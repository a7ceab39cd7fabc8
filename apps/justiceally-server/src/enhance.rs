//! Client for the external text-completion backend
//!
//! The backend is opaque: `POST {"query": instruction}` answering with
//! `{"response": text}` (chat-style) or `{"simplifiedText": text}`
//! (document-style). Network failure, non-success status and a missing
//! result field all collapse into one uniform enhancement failure; no
//! retry happens here.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use justiceally_core::{EnhancementError, Enhancer};

#[derive(Clone)]
pub struct CompletionClient {
    http: reqwest::Client,
    endpoint: String,
}

#[derive(Serialize)]
struct CompletionRequest<'a> {
    query: &'a str,
}

#[derive(Deserialize)]
struct CompletionResponse {
    response: Option<String>,
    #[serde(rename = "simplifiedText")]
    simplified_text: Option<String>,
}

impl CompletionClient {
    pub fn new(endpoint: String, timeout: Duration) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { http, endpoint })
    }
}

impl Enhancer for CompletionClient {
    async fn complete(&self, instruction: &str) -> Result<String, EnhancementError> {
        let response = self
            .http
            .post(&self.endpoint)
            .json(&CompletionRequest { query: instruction })
            .send()
            .await
            .map_err(|e| EnhancementError(format!("request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(EnhancementError(format!("backend returned {}", status)));
        }

        let body: CompletionResponse = response
            .json()
            .await
            .map_err(|e| EnhancementError(format!("malformed response: {}", e)))?;

        body.response
            .or(body.simplified_text)
            .filter(|text| !text.trim().is_empty())
            .ok_or_else(|| EnhancementError("response missing expected field".to_string()))
    }
}
