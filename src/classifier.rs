//! Client for the external fake-review classifier.
//!
//! The service takes `POST {"review": "..."}` and answers
//! `{"prediction": "Fake" | "Real"}`.

use gloo_net::http::Request;
use leptos::logging::log;
use serde::{Deserialize, Serialize};

use crate::error::ClassifyError;
use crate::models::review::Label;

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct PredictRequest<'a> {
    pub review: &'a str,
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct PredictResponse {
    #[serde(default)]
    pub prediction: Option<String>,
}

impl PredictResponse {
    pub fn into_label(self) -> Result<Label, ClassifyError> {
        self.prediction
            .ok_or(ClassifyError::MissingPrediction)?
            .parse()
    }
}

/// Decodes a classifier response body into a label.
pub fn decode_prediction(body: &str) -> Result<Label, ClassifyError> {
    serde_json::from_str::<PredictResponse>(body)
        .map_err(|e| ClassifyError::Decode(e.to_string()))?
        .into_label()
}

#[allow(async_fn_in_trait)]
pub trait Classifier {
    async fn classify(&self, review: &str) -> Result<Label, ClassifyError>;
}

/// Talks to the classifier over HTTP from the browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpClassifier {
    endpoint: String,
}

impl HttpClassifier {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Classifier for HttpClassifier {
    async fn classify(&self, review: &str) -> Result<Label, ClassifyError> {
        log!("[CLASSIFIER] POST {} ({} chars)", self.endpoint, review.chars().count());

        let response = Request::post(&self.endpoint)
            .json(&PredictRequest { review })
            .map_err(|e| ClassifyError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ClassifyError::Transport(e.to_string()))?;

        if !response.ok() {
            return Err(ClassifyError::Status(response.status()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| ClassifyError::Transport(e.to_string()))?;
        let label = decode_prediction(&body)?;
        log!("[CLASSIFIER] prediction: {}", label);
        Ok(label)
    }
}
