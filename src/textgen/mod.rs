//! Text-generation collaborator boundary.
//!
//! The engine only needs `generate_text(prompt) -> String`; validation and
//! defaulting of whatever comes back is the caller's job. Implementations
//! make a single attempt — a failure surfaces as an error and the caller
//! falls back, no retry loop.

mod http;

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::Result;

pub use http::HttpTextGenerator;

#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Run one prompt against the collaborator and return the raw response
    /// text. Either a bare JSON payload or prose containing one; no schema is
    /// enforced on this side of the boundary.
    async fn generate_text(&self, prompt: &str) -> Result<String>;
}

#[async_trait]
impl<G: TextGenerator + ?Sized> TextGenerator for Arc<G> {
    async fn generate_text(&self, prompt: &str) -> Result<String> {
        (**self).generate_text(prompt).await
    }
}
