//! Handlebars-based renderer for binding templates.
//!
//! Wraps the [`handlebars::Handlebars`] engine with **strict mode** enabled. Any
//! `{{variable}}` referenced in a template must be present in the rendering context,
//! otherwise rendering returns an error instead of emitting a silently broken binding.
//!
//! HTML escaping is disabled because the output is source code (`Array<string>` must
//! not become `Array&lt;string&gt;`).
//!
//! ## Template sets
//!
//! A renderer holds a set of named templates. Each one can be included from the
//! others as a partial (`{{> docs}}`). Rendering starts from the **entry** template:
//! the first one in name order (file name order when loaded from a directory).
//!
//! ## Helpers
//!
//! - `{{braced js_type}}` — wraps a value in single braces, for JSDoc annotations
//!   such as `@param {string}` that plain Handlebars syntax cannot express.
//!
//! ## Usage
//!
//! ```ignore
//! use crate::templates::renderer::TemplateRenderer;
//!
//! let renderer = TemplateRenderer::from_dir(Path::new("templates/fcl-js"))?;
//! let output = renderer.render(&context)?;
//! ```

use std::collections::HashMap;
use std::path::Path;

use handlebars::{handlebars_helper, Handlebars};
use serde::Serialize;

use crate::error::{FlixError, Result};

handlebars_helper!(braced: |value: str| format!("{{{value}}}"));

/// Template renderer for a set of binding templates.
pub struct TemplateRenderer {
    hbs: Handlebars<'static>,
    entry: String,
}

impl TemplateRenderer {
    /// Register `(name, source)` pairs. Names must be unique; the entry is the
    /// lexically smallest name.
    pub fn from_sources<'a, I>(sources: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let sources: Vec<(&str, &str)> = sources.into_iter().collect();
        let entry = sources
            .iter()
            .map(|(name, _)| *name)
            .min()
            .ok_or_else(|| FlixError::TemplateLoad {
                name: String::new(),
                message: "no templates registered".into(),
            })?
            .to_string();
        Self::register(sources, entry)
    }

    /// Register every file directly inside `dir`, named by file stem.
    ///
    /// Subdirectories are skipped. The directory must contain at least one file, and no
    /// two files may share a stem. The entry is the first file in file name order.
    pub fn from_dir(dir: &Path) -> Result<Self> {
        let read_err = |e| FlixError::TemplateDirUnreadable {
            path: dir.to_path_buf(),
            source: e,
        };

        // (file name, stem, contents)
        let mut files = Vec::new();
        for entry in std::fs::read_dir(dir).map_err(read_err)? {
            let entry = entry.map_err(read_err)?;
            if entry.file_type().map_err(read_err)?.is_dir() {
                continue;
            }
            let path = entry.path();
            let file_name = entry.file_name().to_string_lossy().into_owned();
            let stem = path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default();
            let contents = std::fs::read_to_string(&path)?;
            files.push((file_name, stem, contents));
        }

        files.sort_by(|a, b| a.0.cmp(&b.0));
        let entry = match files.first() {
            Some((_, stem, _)) => stem.clone(),
            None => return Err(FlixError::EmptyTemplateDir(dir.to_path_buf())),
        };

        let mut seen: HashMap<&str, &str> = HashMap::new();
        for (file_name, stem, _) in &files {
            if let Some(other) = seen.insert(stem, file_name) {
                return Err(FlixError::TemplateLoad {
                    name: stem.clone(),
                    message: format!("{other} and {file_name} share a template name"),
                });
            }
        }

        Self::register(
            files.iter().map(|(_, stem, c)| (stem.as_str(), c.as_str())),
            entry,
        )
    }

    fn register<'a, I>(sources: I, entry: String) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut hbs = Handlebars::new();
        hbs.set_strict_mode(true);
        hbs.register_escape_fn(handlebars::no_escape);
        hbs.register_helper("braced", Box::new(braced));

        for (name, source) in sources {
            if hbs.has_template(name) {
                return Err(FlixError::TemplateLoad {
                    name: name.to_string(),
                    message: "registered more than once".into(),
                });
            }
            tracing::debug!("registering binding template '{name}'");
            hbs.register_template_string(name, source)
                .map_err(|e| FlixError::TemplateLoad {
                    name: name.to_string(),
                    message: e.to_string(),
                })?;
        }

        Ok(Self { hbs, entry })
    }

    /// Name of the template rendering starts from.
    pub fn entry(&self) -> &str {
        &self.entry
    }

    /// Render the entry template with the given context.
    pub fn render<T: Serialize>(&self, data: &T) -> Result<String> {
        self.hbs
            .render(&self.entry, data)
            .map_err(|e| FlixError::TemplateRender(e.to_string()))
    }
}
