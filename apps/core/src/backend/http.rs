use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, info};
use url::Url;

use super::{BackendError, Classification, ClassificationBackend};

/// Sentence used to check the endpoint is alive at startup
const WARM_UP_PROBE: &str = "The service was fine today.";

/// One label/score pair as returned by text-classification endpoints
#[derive(Debug, Deserialize)]
struct LabelScore {
    label: String,
    score: f64,
}

/// Endpoints answer either `[{..}]` or `[[{..}]]` (one list per input)
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum InferenceResponse {
    Batched(Vec<Vec<LabelScore>>),
    Single(Vec<LabelScore>),
}

impl InferenceResponse {
    fn best(self) -> Option<LabelScore> {
        let candidates = match self {
            InferenceResponse::Batched(batches) => batches.into_iter().flatten().collect(),
            InferenceResponse::Single(scores) => scores,
        };
        candidates
            .into_iter()
            .filter(|candidate| candidate.score.is_finite())
            .max_by(|a, b| {
                a.score
                    .partial_cmp(&b.score)
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
    }
}

/// Classifier backed by a hosted text-classification endpoint.
///
/// Sends `{"inputs": text}` and expects label/score pairs back, the shape
/// used by Hugging Face inference servers.
pub struct HttpClassifier {
    client: Client,
    endpoint: Url,
    headers: HeaderMap,
    max_input_chars: usize,
}

impl HttpClassifier {
    /// Creates a classifier for `endpoint`.
    ///
    /// # Arguments
    ///
    /// * `endpoint` - Full URL of the classification route.
    /// * `auth_token` - Optional bearer token sent with every request.
    /// * `max_input_chars` - Longest input forwarded to the endpoint.
    /// * `request_timeout` - Transport-level timeout for a single request.
    pub fn new(
        endpoint: Url,
        auth_token: Option<&str>,
        max_input_chars: usize,
        request_timeout: Duration,
    ) -> Result<Self, BackendError> {
        let mut headers = HeaderMap::new();
        if let Some(token) = auth_token {
            let value = HeaderValue::from_str(&format!("Bearer {}", token))
                .map_err(|e| BackendError::Load(format!("Invalid auth token: {}", e)))?;
            headers.insert(AUTHORIZATION, value);
        }

        let client = Client::builder()
            .timeout(request_timeout)
            .build()
            .map_err(|e| BackendError::Load(e.to_string()))?;

        info!("HTTP classifier configured for {}", endpoint);

        Ok(Self {
            client,
            endpoint,
            headers,
            max_input_chars,
        })
    }
}

#[async_trait]
impl ClassificationBackend for HttpClassifier {
    fn name(&self) -> &'static str {
        "http"
    }

    fn max_input_chars(&self) -> usize {
        self.max_input_chars
    }

    async fn warm_up(&self) -> Result<(), BackendError> {
        let probe = self.classify(WARM_UP_PROBE).await?;
        debug!("Warm-up probe classified as {} ({:.2})", probe.label, probe.probability);
        Ok(())
    }

    async fn classify(&self, text: &str) -> Result<Classification, BackendError> {
        let payload = serde_json::json!({ "inputs": text });

        let res = self
            .client
            .post(self.endpoint.clone())
            .headers(self.headers.clone())
            .json(&payload)
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            return Err(BackendError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = res.text().await?;
        let response: InferenceResponse = serde_json::from_str(&body)
            .map_err(|e| BackendError::Malformed(format!("{}: {}", e, body)))?;

        let best = response
            .best()
            .ok_or_else(|| BackendError::Malformed("no label in response".to_string()))?;

        Ok(Classification {
            label: best.label,
            probability: best.score,
        })
    }
}
