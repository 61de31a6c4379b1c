//! Provider implementations

mod gemini;

pub use gemini::GeminiProvider;
