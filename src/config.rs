/// Classifier endpoint used when none is baked in at build time.
pub const DEFAULT_CLASSIFIER_URL: &str = "http://localhost:5000/predict";

/// Client-side settings, shared with the component tree through context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifierConfig {
    pub endpoint: String,
    /// Shown in a blocking alert when a review cannot be classified.
    pub unreachable_message: String,
}

impl ClassifierConfig {
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        let endpoint = endpoint.into();
        let unreachable_message = format!(
            "Failed to reach backend. Make sure the classifier is running on {}",
            endpoint
        );
        Self {
            endpoint,
            unreachable_message,
        }
    }
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self::with_endpoint(option_env!("CLASSIFIER_URL").unwrap_or(DEFAULT_CLASSIFIER_URL))
    }
}
