//! minijinja rendering engine — [`TemplateEngine`].

use std::path::{Path, PathBuf};

use minijinja::{path_loader, Environment, ErrorKind, UndefinedBehavior};

use crate::context::RenderContext;
use crate::error::RenderError;

/// minijinja-based engine rendering templates from a fixed base directory.
///
/// Template names are resolved by the loader relative to `root`; names that
/// escape the root do not resolve. Block-trim is enabled: the newline
/// immediately following a `{% ... %}` tag that ends a line is dropped from
/// output. A reference to an undefined variable renders as the empty string
/// (the engine's lenient default, matching the original Jinja behaviour).
pub struct TemplateEngine {
    env: Environment<'static>,
    root: PathBuf,
}

impl TemplateEngine {
    /// Construct a [`TemplateEngine`] that loads templates from `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let mut env = Environment::new();
        env.set_loader(path_loader(&root));
        env.set_trim_blocks(true);
        env.set_undefined_behavior(UndefinedBehavior::Lenient);
        TemplateEngine { env, root }
    }

    /// Base directory that template names resolve against.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Render the template called `name` against `ctx`.
    ///
    /// The template source's final newline is stripped by the engine, so the
    /// returned string carries no trailing newline of its own.
    pub fn render(&self, name: &str, ctx: &RenderContext) -> Result<String, RenderError> {
        let template = self.env.get_template(name).map_err(|e| {
            if e.kind() == ErrorKind::TemplateNotFound {
                RenderError::TemplateNotFound {
                    name: name.to_owned(),
                    root: self.root.clone(),
                }
            } else {
                RenderError::Render {
                    name: name.to_owned(),
                    source: e,
                }
            }
        })?;
        template.render(ctx.to_value()).map_err(|e| RenderError::Render {
            name: name.to_owned(),
            source: e,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn root_is_the_configured_base_directory() {
        let dir = TempDir::new().unwrap();
        let engine = TemplateEngine::new(dir.path());
        assert_eq!(engine.root(), dir.path());
    }

    #[test]
    fn missing_template_maps_to_not_found() {
        let dir = TempDir::new().unwrap();
        let engine = TemplateEngine::new(dir.path());
        let err = engine
            .render("missing.txt", &RenderContext::default())
            .unwrap_err();
        match err {
            RenderError::TemplateNotFound { name, root } => {
                assert_eq!(name, "missing.txt");
                assert_eq!(root, dir.path());
            }
            other => panic!("expected TemplateNotFound, got {other}"),
        }
    }

    #[test]
    fn syntax_error_maps_to_render_error() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("broken.txt"), "{% if %}").unwrap();
        let engine = TemplateEngine::new(dir.path());
        let err = engine
            .render("broken.txt", &RenderContext::default())
            .unwrap_err();
        assert!(matches!(err, RenderError::Render { .. }), "got {err}");
    }
}
