//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

fn main() {
    if let Err(err) = osmxml_cli::run() {
        eprintln!("osmxml: {err}");
        std::process::exit(1);
    }
}
