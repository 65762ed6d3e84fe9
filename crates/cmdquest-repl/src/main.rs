//! cmdquest entry point.
//!
//! Start a game:
//! ```bash
//! cargo run -p cmdquest-repl
//! CMDQUEST_LEVEL=13 cargo run -p cmdquest-repl
//! ```

use anyhow::Result;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() -> Result<()> {
    // Initialize tracing (respects RUST_LOG env var)
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    cmdquest_repl::run()
}
