//! scriptdocs - AppleScript dictionary exporter
//!
//! Finds scriptable macOS applications, turns their scripting definitions
//! into Objective-C scripting bridge headers with `sdp`, renders those as
//! PDFs and exports the PDFs to plain text with a Markdown index.

pub mod apps;
pub mod cli;
pub mod commands;
pub mod convert;
pub mod error;
pub mod extract;
pub mod generate;
pub mod index;
pub mod paths;
pub mod temp;
pub mod text;
pub mod toolchain;
pub mod ui;

#[cfg(test)]
mod test_fixtures;
