//! FCL-JS bindings.
//!
//! Generates an ES module exporting one async function per template. Scripts call
//! `fcl.query` and return its result; transactions call `fcl.mutate` and return the
//! transaction id. Arguments are passed as a single object, in template index order.

use std::path::{Path, PathBuf};

use crate::bindings::{BindingContext, BindingGenerator};
use crate::error::Result;
use crate::template::InteractionTemplate;
use crate::templates::embedded;
use crate::templates::renderer::TemplateRenderer;

/// FCL-JS binding generator.
///
/// Templates are read when [`generate`](BindingGenerator::generate) runs, so edits to a
/// template directory are picked up without rebuilding the generator.
pub struct FclJsGenerator {
    template_dir: Option<PathBuf>,
}

impl FclJsGenerator {
    /// Use the templates compiled into the library.
    pub fn embedded() -> Self {
        Self { template_dir: None }
    }

    /// Use every file directly inside `dir`.
    pub fn from_dir(dir: &Path) -> Self {
        Self {
            template_dir: Some(dir.to_path_buf()),
        }
    }

    fn renderer(&self) -> Result<TemplateRenderer> {
        match &self.template_dir {
            Some(dir) => TemplateRenderer::from_dir(dir),
            None => TemplateRenderer::from_sources(embedded::FCL_JS.iter().copied()),
        }
    }
}

impl Default for FclJsGenerator {
    fn default() -> Self {
        Self::embedded()
    }
}

impl BindingGenerator for FclJsGenerator {
    fn name(&self) -> &'static str {
        "fcl-js"
    }

    fn generate(
        &self,
        template: &InteractionTemplate,
        location: &str,
        is_local: bool,
    ) -> Result<String> {
        let renderer = self.renderer()?;
        let context = BindingContext::new(template, location, is_local);
        tracing::info!(
            "rendering {} binding '{}' from template '{}'",
            self.name(),
            context.title,
            renderer.entry()
        );
        renderer.render(&context)
    }
}
