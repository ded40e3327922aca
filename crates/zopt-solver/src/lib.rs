//! Engine-agnostic types shared by the zopt bindings.
//!
//! # Overview
//!
//! - [`ContextConfig`]: parameters applied when an engine context is created
//! - [`SatResult`]: tri-state outcome of a check
//! - [`SolverError`]: error type for binding operations

mod config;
mod error;
mod status;

pub use config::ContextConfig;
pub use error::SolverError;
pub use status::SatResult;
