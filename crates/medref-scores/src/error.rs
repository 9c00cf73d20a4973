use thiserror::Error;

use crate::schema::ValidationError;

#[derive(Debug, Error)]
pub enum ScoreError {
    #[error("unknown calculator: {0}")]
    UnknownCalculator(String),

    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),
}
