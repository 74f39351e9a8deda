//! Model infrastructure module
//!
//! Talks to the Gemini `generateContent` endpoint.
//!
//! # Structure
//! - `types` - Transport error type
//! - `envelope` - Request/response JSON shapes
//! - `traits` - `ReplySource`, the seam the dispatch controller depends on
//! - `credentials` - API key resolution from the environment
//! - `clients` - HTTP client implementations

pub mod clients;
pub mod credentials;
pub mod envelope;
pub mod traits;
pub mod types;

// Re-exports for convenience
pub use clients::GeminiClient;
pub use envelope::{ApiResponse, GenerateRequest, GenerateResponse};
pub use traits::ReplySource;
pub use types::TransportError;
