//! Export generated dictionary PDFs to plain text

use clap::Parser;

use scriptdocs::cli::TextCli;
use scriptdocs::{commands, ui};

fn main() {
    let args = TextCli::parse();

    if let Err(e) = commands::text::run(args) {
        ui::error(e.to_string());
        std::process::exit(1);
    }
}
