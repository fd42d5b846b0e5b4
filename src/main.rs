//! Writes the fixture corpus into `tests/fixtures/` under the crate root.
//!
//! Takes no arguments. Diagnostics go to stderr and are filtered with
//! `RUST_LOG` (default `warn`).

use pptx_fixtures::fixtures;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    fixtures::generate_all(fixtures::default_output_dir())?;
    Ok(())
}
