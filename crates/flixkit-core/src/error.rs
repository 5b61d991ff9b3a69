//! Unified error types for the flixkit toolkit.

use std::path::PathBuf;
use thiserror::Error;

/// All errors that can occur during flixkit operations.
#[derive(Error, Debug)]
pub enum FlixError {
    // --- Interaction templates ---

    /// The interaction template file could not be read.
    #[error("interaction template not found at {path}")]
    TemplateNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The interaction template file exists but is not a valid template document.
    #[error("failed to parse interaction template at {path}")]
    TemplateParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// An in-memory interaction template document is not valid JSON or has the wrong shape.
    #[error("invalid interaction template: {0}")]
    InvalidTemplate(#[source] serde_json::Error),

    // --- Import rewriting ---

    /// A dependency has no binding for the requested network.
    #[error("network {network} not found for contract {contract}")]
    NetworkNotFound { network: String, contract: String },

    /// An import pattern built from dependency metadata failed to compile.
    #[error("invalid import pattern '{pattern}'")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    // --- Configuration ---

    /// The configuration file (`flixkit.config.json`) was not found.
    #[error("config file not found at {path}")]
    ConfigNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file exists but contains invalid JSON.
    #[error("failed to parse config at {path}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    // --- Binding templates ---

    /// The binding template directory could not be listed.
    #[error("cannot read binding template directory {path}")]
    TemplateDirUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The binding template directory contains no template files.
    #[error("no binding templates found in {0}")]
    EmptyTemplateDir(PathBuf),

    /// A binding template file has invalid Handlebars syntax.
    #[error("failed to load binding template '{name}': {message}")]
    TemplateLoad { name: String, message: String },

    /// Handlebars template rendering failed (invalid template or missing variables).
    #[error("template rendering failed: {0}")]
    TemplateRender(String),

    /// No binding generator exists for the requested language.
    #[error("unknown binding language: {0} (supported: fcl-js)")]
    UnknownLanguage(String),

    // --- General ---

    /// A filesystem I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Alias for `Result<T, FlixError>`.
pub type Result<T> = std::result::Result<T, FlixError>;
