//! `missing-base64` decodes base64 text that may be missing characters.
//!
//! Usage:
//!   missing-base64 [<encoded>]
//!
//! Decodes the first argument, or standard input when no argument is given,
//! and writes the decoded bytes to standard output. Input that is not ASCII
//! exits with code 1; any other decode failure is unexpected and exits with
//! code 2.

use missing_base64::{from_base64, from_base64_bin, DecodeError};
use std::io::{self, Read, Write};

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let result = match args.get(1) {
        Some(encoded) => from_base64(encoded),
        None => {
            let mut buf = Vec::new();
            if let Err(e) = io::stdin().read_to_end(&mut buf) {
                eprintln!("{e}");
                std::process::exit(1);
            }
            from_base64_bin(&buf)
        }
    };

    match result {
        Ok(bytes) => {
            io::stdout().write_all(&bytes).unwrap();
        }
        Err(err @ DecodeError::NotAscii) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
        Err(err) => {
            eprintln!("unexpected decode failure: {err}");
            std::process::exit(2);
        }
    }
}
