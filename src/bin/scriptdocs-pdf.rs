//! Render AppleScript dictionaries of installed applications as PDFs

use clap::Parser;

use scriptdocs::cli::PdfCli;
use scriptdocs::{commands, ui};

fn main() {
    let args = PdfCli::parse();

    if let Err(e) = commands::pdf::run(args) {
        ui::error(e.to_string());
        std::process::exit(1);
    }
}
