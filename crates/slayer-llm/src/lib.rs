//! Completion-service client for slayer-lab
//!
//! This crate wraps the external generative-language service behind a small
//! provider abstraction:
//!
//! - [`CompletionRequest`] / [`CompletionResponse`]: provider-neutral request
//!   and response types, with support for image-conditioned prompts
//! - [`CompletionProvider`]: the trait the dashboard talks to
//! - [`GeminiProvider`]: implementation for the Google generative-language API
//!
//! Every call is independent and stateless. There is no retry or backoff in
//! this crate; callers decide how to degrade when a call fails.

mod completion;
mod error;
mod provider;
mod providers;

pub use completion::{
    CompletionRequest, CompletionRequestBuilder, CompletionResponse, FinishReason, Part,
    TokenUsage,
};
pub use error::{CompletionError, Result};
pub use provider::CompletionProvider;
pub use providers::GeminiProvider;
