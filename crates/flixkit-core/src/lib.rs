//! Core library for the flixkit toolkit.
//!
//! Works with Flow interaction templates (FLIX): JSON documents describing a Cadence
//! script or transaction, its typed arguments and the per-network addresses of the
//! contracts it imports.
//!
//! - [`template`] — the parsed template model and its message accessors
//! - [`hash`] — SHA3-256 content hashing
//! - [`imports`] — resolving cadence import placeholders for a network
//! - [`arguments`] — ordering and typing of template arguments for code generation
//! - [`bindings`] — client binding generation behind the [`bindings::BindingGenerator`] trait
//!
//! Nothing here performs network I/O or executes cadence.

pub mod arguments;
pub mod bindings;
pub mod config;
pub mod error;
pub mod hash;
pub mod imports;
pub mod template;
pub mod templates;
