use super::Model;
use crate::server::types::InferResponse;

const PLACEHOLDER_CONFIDENCE: f64 = 0.55;

/// Fixed-answer model used until a real backend is wired in.
#[derive(Debug, Default)]
pub struct PlaceholderModel;

impl PlaceholderModel {
    pub fn new() -> Self {
        Self
    }
}

impl Model for PlaceholderModel {
    fn infer(&self, question: &str) -> InferResponse {
        InferResponse {
            pick: "TBD".to_string(),
            // Confidence is a probability; clamp keeps the invariant when the
            // constant becomes a computed score.
            confidence: PLACEHOLDER_CONFIDENCE.clamp(0.0, 1.0),
            reasons: vec![
                "Model service wired up successfully".to_string(),
                format!("Received question: {}", question),
            ],
            counter: vec![],
            context_notes: vec!["Swap in real PyTorch model next".to_string()],
            sources: vec![],
        }
    }
}
