//! Error types for stencil-renderer.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise from payload decoding and template rendering.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The variable payload string was not valid JSON. The serde_json
    /// message carries line/column position.
    #[error("malformed JSON payload: {0}")]
    MalformedPayload(#[from] serde_json::Error),

    /// The payload parsed as JSON, but its top-level value is not an object.
    #[error("variable payload must be a JSON object, got {found}")]
    PayloadNotObject { found: &'static str },

    /// No template with this name resolves under the loader root.
    #[error("template '{name}' not found under {}", .root.display())]
    TemplateNotFound { name: String, root: PathBuf },

    /// The template failed to parse or evaluate.
    #[error("failed to render template '{name}': {source}")]
    Render {
        name: String,
        #[source]
        source: minijinja::Error,
    },
}
