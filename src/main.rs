//! panini-sandhi - Sanskrit Sandhi batch driver
//!
//! Parsing, configuration, and dispatch live in `cli::run`; this entry point
//! only sets up logging and reports failures.

use panini::cli;

fn main() {
    // warn and above unless RUST_LOG says otherwise
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(e) = cli::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
