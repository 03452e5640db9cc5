//! HTTP embedding client
//!
//! Speaks the OpenAI-compatible embeddings protocol: one POST with the whole
//! batch, `{"model", "input": [...]}` in, `{"data": [{"index", "embedding"}]}`
//! out. Synchronous by design; the request timeout is the run's only guard
//! against a hung endpoint and expiry surfaces as `EmbeddingUnavailable`.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::{validate_embeddings, Embedder, Embedding};
use crate::config::EmbeddingConfig;
use crate::error::{ParsimError, Result};

#[derive(Serialize)]
struct EmbeddingRequest<'a> {
    model: &'a str,
    input: &'a [&'a str],
}

#[derive(Deserialize)]
struct EmbeddingResponse {
    data: Vec<EmbeddingData>,
}

#[derive(Deserialize)]
struct EmbeddingData {
    index: usize,
    embedding: Vec<f64>,
}

/// Embedding oracle backed by an HTTP endpoint
pub struct HttpEmbedder {
    config: EmbeddingConfig,
    user_agent: String,
}

impl HttpEmbedder {
    pub fn new(config: EmbeddingConfig) -> Self {
        let user_agent = format!(
            "parsim/{} ({})",
            env!("CARGO_PKG_VERSION"),
            std::env::consts::OS
        );
        Self { config, user_agent }
    }

    fn send(&self, body: &str) -> Result<ureq::Response> {
        let mut request = ureq::post(&self.config.url)
            .set("Content-Type", "application/json")
            .set("User-Agent", &self.user_agent)
            .timeout(Duration::from_secs(self.config.timeout_seconds));

        if let Some(key) = &self.config.api_key {
            request = request.set("Authorization", &format!("Bearer {key}"));
        }

        match request.send_string(body) {
            Ok(response) => Ok(response),
            Err(ureq::Error::Status(code, _)) => Err(ParsimError::embedding_unavailable(
                format!("endpoint returned status {code}"),
            )),
            Err(ureq::Error::Transport(err)) => {
                Err(ParsimError::embedding_unavailable(err.to_string()))
            }
        }
    }
}

impl Embedder for HttpEmbedder {
    fn embed(&self, texts: &[&str]) -> Result<Vec<Embedding>> {
        if !self.config.is_configured() {
            return Err(ParsimError::embedding_unavailable(
                "no embedding endpoint configured",
            ));
        }

        let body = serde_json::to_string(&EmbeddingRequest {
            model: &self.config.model,
            input: texts,
        })?;

        tracing::debug!(
            url = %self.config.url,
            model = %self.config.model,
            texts = texts.len(),
            "embedding_request"
        );

        let response = self.send(&body)?;
        let parsed: EmbeddingResponse = response.into_json().map_err(|err| {
            ParsimError::embedding_unavailable(format!("malformed response: {err}"))
        })?;

        // Providers may return batch entries out of order; restore input order.
        let mut data = parsed.data;
        data.sort_by_key(|entry| entry.index);
        let embeddings: Vec<Embedding> = data.into_iter().map(|entry| entry.embedding).collect();

        validate_embeddings(texts.len(), &embeddings)?;
        Ok(embeddings)
    }
}
