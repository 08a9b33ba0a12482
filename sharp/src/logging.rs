//! Log output for the CLI.

use eyre::{Result, eyre};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global subscriber.
///
/// `RUST_LOG` wins when set. Otherwise `-v` enables debug output for the
/// sharpcode crates and `-vv` enables trace output. Logs go to stderr so
/// rendered code on stdout can be piped.
pub fn init(verbose: u8) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(match verbose {
            0 => "warn",
            1 => "warn,sharpcode=debug,sharpcode_codegen=debug,sharpcode_manifest=debug",
            _ => "warn,sharpcode=trace,sharpcode_codegen=trace,sharpcode_manifest=trace",
        })
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init()
        .map_err(|e| eyre!("failed to initialize logging: {e}"))
}
