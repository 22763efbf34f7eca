//! docdex CLI entry point
//!
//! # Examples
//!
//! ```bash
//! # Rebuild the whole index and refresh both sinks
//! docdex rebuild --corpus ./notes
//!
//! # Incrementally merge fresh records into the primary sink
//! docdex merge
//!
//! # Inspect sink divergence
//! docdex status
//! ```

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use docdex::cli::{run, Cli};

fn main() {
    // Warnings (skipped documents, discarded sinks) go to stderr
    // by default; raise with RUST_LOG=docdex=debug.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "docdex=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
