mod placeholder;

pub use placeholder::PlaceholderModel;

use crate::server::types::InferResponse;

/// Inference capability behind the HTTP handlers.
///
/// The handlers stay thin, stateless adapters; a real backend replaces the
/// placeholder by implementing this trait.
pub trait Model: Send + Sync {
    fn infer(&self, question: &str) -> InferResponse;
}
