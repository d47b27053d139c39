//! Command-line front end
//!
//! Each subcommand lives in its own module; settings loading and logging setup
//! are shared.

pub mod check;
pub mod common;
pub mod load;
pub mod save;

pub use common::CommonArgs;
