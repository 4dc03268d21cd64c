use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Minimum accepted question length, in characters.
pub const MIN_QUESTION_CHARS: usize = 3;

#[derive(Debug, Deserialize)]
pub struct InferRequest {
    pub question: String,
}

impl InferRequest {
    pub fn validate(&self) -> Result<()> {
        if self.question.chars().count() < MIN_QUESTION_CHARS {
            return Err(Error::validation(
                "question",
                format!("must be at least {} characters long", MIN_QUESTION_CHARS),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct InferResponse {
    pub pick: String,
    /// Probability in [0.0, 1.0].
    pub confidence: f64,
    pub reasons: Vec<String>,
    pub counter: Vec<String>,
    pub context_notes: Vec<String>,
    pub sources: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub ok: bool,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
