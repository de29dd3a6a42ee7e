//! CLI command implementations.

pub mod lookup;
