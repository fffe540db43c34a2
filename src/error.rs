//! Error types

use crate::types::FormField;
use thiserror::Error;

/// Why a local submit was refused. Nothing is posted in either case.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitRejected {
    #[error("required fields are empty: {0:?}")]
    MissingFields(Vec<FormField>),
    #[error("a submission is already showing its confirmation")]
    AlreadySubmitted,
}

/// Failure of the background post to the hosted form endpoint. Logged only.
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("endpoint rejected submission with HTTP {0}")]
    Rejected(reqwest::StatusCode),
    #[error("cancelled at shutdown")]
    Cancelled,
}
