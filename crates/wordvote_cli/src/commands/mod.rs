//! CLI command implementations.

pub mod lookup;
pub mod serve;
pub mod submit;
