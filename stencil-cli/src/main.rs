//! stencil — render a template file against a JSON variable payload.
//!
//! # Usage
//!
//! ```text
//! stencil <TEMPLATE_FILE> <RENDER_VARS>
//! stencil greeting.txt.j2 '{"name": "world", "count": 3}'
//! ```
//!
//! Template names resolve relative to the current working directory. The
//! rendered text goes to stdout; diagnostics go to stderr.

use std::env;

use anyhow::{Context, Result};
use clap::Parser;

use stencil_renderer::{RenderContext, TemplateEngine};

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "stencil",
    version,
    about = "Render a template file with JSON-supplied variables",
    long_about = None,
)]
struct Cli {
    /// Template file to render, resolved relative to the current directory.
    template_file: String,

    /// JSON-encoded object of variables passed to the template.
    render_vars: String,
}

impl Cli {
    fn run(self) -> Result<()> {
        let root = env::current_dir().context("could not determine current directory")?;

        let ctx = RenderContext::from_json(&self.render_vars)
            .context("could not decode render variables")?;
        let rendered = TemplateEngine::new(root)
            .render(&self.template_file, &ctx)
            .with_context(|| format!("could not render '{}'", self.template_file))?;

        println!("{rendered}");
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    Cli::parse().run()
}
