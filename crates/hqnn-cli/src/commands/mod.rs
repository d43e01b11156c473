//! CLI command implementations.

pub mod build;
pub mod common;
pub mod data;
pub mod symbols;
pub mod version;
