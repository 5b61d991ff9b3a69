//! Template system for binding generation.
//!
//! Binding templates are embedded into the binary at compile-time via [`include_str!`]
//! in the [`embedded`] module, or loaded from a user-supplied directory, then rendered
//! with [Handlebars](https://handlebarsjs.com/) via the [`renderer::TemplateRenderer`].
//!
//! ## Template variables
//!
//! Binding templates receive a [`BindingContext`](crate::bindings::BindingContext):
//! - `{{version}}` — FLIX format version of the source template
//! - `{{title}}` — generated function name (lower camel case)
//! - `{{description}}` — English description of the interaction
//! - `{{location}}` — where the template is loaded from at runtime
//! - `{{is_script}}`, `{{is_local_template}}` — booleans for `{{#if}}` blocks
//! - `{{parameters}}` — ordered list with `name`, `js_type`, `fcl_type`,
//!   `cadence_type`, `description`, `is_array`
//!
//! **Warning**: Template files in `templates/` and constants in [`embedded`] must stay in sync.
//! The `include_str!` paths are relative to this file and checked at compile-time.

pub mod embedded;
pub mod renderer;
