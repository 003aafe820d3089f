//! Regenerates the descriptor tables from the schema texts.
//!
//! Usage: `cargo run --bin tablegen > src/tables.rs`

#![forbid(unsafe_code)]

use std::process::ExitCode;

fn main() -> ExitCode {
    match ip2bin::gen::generate() {
        Ok(src) => {
            print!("{src}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("tablegen: {err}");
            ExitCode::FAILURE
        }
    }
}
