//! Client binding generation.
//!
//! A binding is source code that exposes an interaction template as a typed function
//! in the caller's language. Every target language implements [`BindingGenerator`];
//! [`generator_for`] resolves a language name to its generator.

mod fcl_js;

pub use fcl_js::FclJsGenerator;

use std::path::Path;

use convert_case::{Case, Casing};
use serde::Serialize;

use crate::arguments::{transform_arguments, SimpleParameter};
use crate::error::{FlixError, Result};
use crate::template::InteractionTemplate;

/// Function name used when a template has no English title.
pub const DEFAULT_TITLE: &str = "Request";

/// Data handed to binding templates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BindingContext {
    /// FLIX format version of the template.
    pub version: String,
    pub parameters: Vec<SimpleParameter>,
    /// Function name, lower camel case.
    pub title: String,
    pub description: String,
    pub location: String,
    pub is_script: bool,
    pub is_local_template: bool,
}

impl BindingContext {
    /// Build the context for `template`, loaded at runtime from `location`.
    pub fn new(template: &InteractionTemplate, location: &str, is_local: bool) -> Self {
        Self {
            version: template.f_version.clone(),
            parameters: transform_arguments(&template.data.arguments),
            title: method_name(&template.title_value(DEFAULT_TITLE)),
            description: template.description(),
            location: location.to_string(),
            is_script: template.is_script(),
            is_local_template: is_local,
        }
    }
}

/// Lower camel case identifier for a template title (`"Transfer Tokens"` → `transferTokens`).
pub fn method_name(title: &str) -> String {
    title.to_case(Case::Camel)
}

/// Every binding language must implement this trait.
pub trait BindingGenerator {
    /// Language identifier, e.g. "fcl-js".
    fn name(&self) -> &'static str;

    /// Render the binding for `template`.
    ///
    /// `location` is where the generated code loads the template from; `is_local`
    /// says whether that is a local file rather than a remote URL.
    fn generate(
        &self,
        template: &InteractionTemplate,
        location: &str,
        is_local: bool,
    ) -> Result<String>;
}

/// Create the generator for `lang`, reading templates from `template_dir` when given.
pub fn generator_for(lang: &str, template_dir: Option<&Path>) -> Result<Box<dyn BindingGenerator>> {
    match lang {
        "fcl-js" => Ok(Box::new(match template_dir {
            Some(dir) => FclJsGenerator::from_dir(dir),
            None => FclJsGenerator::embedded(),
        })),
        _ => Err(FlixError::UnknownLanguage(lang.to_string())),
    }
}
