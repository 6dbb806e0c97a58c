//! Ten-pin bowling at the terminal (default binary).
//!
//! Runs one interactive game on stdin/stdout. Set `RUST_LOG=debug` to
//! watch the submission flow on stderr; logging stays off by default so
//! it never interleaves with the prompts.

use std::io;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use tenpin::console::Game;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    Game::new(stdin.lock(), stdout.lock()).run()
}
