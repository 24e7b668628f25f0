//! docindex - Inspect a directory of documents with metadata headers

use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = docindex::cli::run() {
        eprintln!("Error: {:#}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
