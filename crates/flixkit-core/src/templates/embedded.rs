//! Compile-time embedded binding templates.
//!
//! Each constant loads a template file from `templates/` via [`include_str!`]. The paths
//! are relative to this source file (`crates/flixkit-core/src/templates/embedded.rs`).
//!
//! ## Adding a new template
//!
//! 1. Place the template file under the language's `templates/<lang>/` directory
//! 2. Add a `pub const` here with `include_str!("../../../../templates/<lang>/<file>")`
//! 3. Add it to the language's template set below, named by its file stem
//!
//! ## Warning
//!
//! Do NOT rename template files without updating the set names here: templates include
//! each other as partials by name, and the first name in order is the entry template.

// -------------------------------------------------------
// FCL-JS
// -------------------------------------------------------

pub const FCL_JS_BINDING: &str = include_str!("../../../../templates/fcl-js/binding.hbs");
pub const FCL_JS_DOCS: &str = include_str!("../../../../templates/fcl-js/docs.hbs");

/// FCL-JS template set; `binding` is the entry template.
pub const FCL_JS: &[(&str, &str)] = &[("binding", FCL_JS_BINDING), ("docs", FCL_JS_DOCS)];
