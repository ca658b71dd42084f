//! Loads the `hello` native module and runs the demo sequence against it.
//!
//! Set `HELLO_LIBRARY_PATH` to the directory holding `libhello.so` (for
//! example `target/release`) if it isn't on the linker's search path.

use anyhow::Result;
use hello_host::{open_bridge, run_session, BridgeConfig, ConsoleHost};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = BridgeConfig::from_env();
    let bridge = open_bridge(&config)?;

    let mut host = ConsoleHost::new();
    run_session(&bridge, &mut host, &mut std::io::stdout())?;
    tracing::debug!("Host was called back {} time(s)", host.shown());
    Ok(())
}
