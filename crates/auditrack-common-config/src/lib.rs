//! Configuration types for auditrack.
//!
//! This crate provides the configuration used by the `auditrack` binary,
//! read from `.auditrack/config.yaml` files.

pub mod env;
pub mod loader;
pub mod types;


pub use env::*;
pub use loader::*;
pub use types::*;
