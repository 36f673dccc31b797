//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

use env_logger::{Builder, Env, Target};

fn main() {
    init_logging();
    if let Err(err) = waypath_cli::run() {
        report(&err);
        std::process::exit(1);
    }
}

/// Log to stderr at the level given by `RUST_LOG`, warnings by default.
fn init_logging() {
    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));
    builder.target(Target::Stderr);
    if let Err(err) = builder.try_init() {
        report(&err);
    }
}

#[expect(clippy::print_stderr, reason = "the binary reports failures on stderr")]
fn report(err: &dyn std::error::Error) {
    eprintln!("waypath: {err}");
}
