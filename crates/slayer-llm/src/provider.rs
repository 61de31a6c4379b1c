//! Completion provider trait definition

use crate::{CompletionRequest, CompletionResponse, Result};
use async_trait::async_trait;

/// Trait for completion providers
///
/// Implementations of this trait provide access to a text- or vision-capable
/// generation service. The dashboard only ever sees this trait, so tests can
/// substitute a stub that never touches the network.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Generate a completion
    ///
    /// # Arguments
    ///
    /// * `request` - The completion request with prompt parts and parameters
    ///
    /// # Returns
    ///
    /// The generated text and metadata
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse>;

    /// Get the provider name (e.g., "gemini")
    fn name(&self) -> &str;
}
