use thiserror::Error;

use crate::models::product::ProductId;

/// Reasons the review board refuses a draft edit or a submission.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("product {0} is not in the catalog")]
    UnknownProduct(ProductId),
    #[error("draft for product {0} is blank")]
    BlankDraft(ProductId),
    #[error("product {0} already has a review being classified")]
    AlreadyPending(ProductId),
}

/// Failures talking to the review classifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClassifyError {
    #[error("failed to reach classifier: {0}")]
    Transport(String),
    #[error("classifier responded with HTTP {0}")]
    Status(u16),
    #[error("malformed classifier response: {0}")]
    Decode(String),
    #[error("classifier response has no prediction")]
    MissingPrediction,
    #[error("classifier returned unknown label {0:?}")]
    UnknownLabel(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Rejected(#[from] BoardError),
    #[error(transparent)]
    Classify(#[from] ClassifyError),
    /// The board went away (component unmounted) before the flow finished.
    #[error("review board is no longer available")]
    Detached,
}
