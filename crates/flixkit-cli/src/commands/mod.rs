//! CLI command implementations for flixkit.
//!
//! Each module corresponds to a subcommand (`flixkit <command>`).

pub mod cadence;
pub mod generate;
pub mod hash;
pub mod inspect;
