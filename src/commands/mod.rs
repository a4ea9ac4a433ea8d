//! Command implementations for the scriptdocs binaries

pub mod pdf;
pub mod text;
