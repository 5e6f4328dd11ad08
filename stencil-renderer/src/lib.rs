//! # stencil-renderer
//!
//! Jinja-dialect template rendering over a filesystem root, driven by a
//! JSON-decoded variable payload.
//!
//! Public API surface:
//! - [`context`] — [`RenderContext`], the decoded variable payload
//! - [`engine`] — [`TemplateEngine`], the minijinja wrapper
//! - [`error`] — [`RenderError`]
//!
//! ## Usage
//!
//! ```rust,no_run
//! use stencil_renderer::{RenderContext, TemplateEngine};
//!
//! fn greet() {
//!     let ctx = RenderContext::from_json(r#"{"name": "world"}"#).unwrap();
//!     let engine = TemplateEngine::new(".");
//!     if let Ok(output) = engine.render("greeting.txt.j2", &ctx) {
//!         println!("{output}");
//!     }
//! }
//! ```

pub mod context;
pub mod engine;
pub mod error;

pub use context::RenderContext;
pub use engine::TemplateEngine;
pub use error::RenderError;
