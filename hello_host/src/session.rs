use crate::api::{HelloApi, ShowFromHost};
use crate::bridge::NativeBridge;
use crate::config::BridgeConfig;
use crate::display::average_line;
use anyhow::{Context, Result};
use std::io::Write;

/// Load the module named by `config`. A failure is logged before it is
/// returned, so it shows up alongside the rest of the host's diagnostics.
pub fn open_bridge(config: &BridgeConfig) -> Result<NativeBridge> {
    match NativeBridge::load(config) {
        Ok(bridge) => Ok(bridge),
        Err(e) => {
            tracing::error!("Unable to load native library `{}`: {e}", config.library_name);
            Err(e).with_context(|| {
                format!("Unable to load native library `{}`", config.library_name)
            })
        }
    }
}

/// Run the demo sequence against `api`: greet, average 5 and 10 (printing
/// the result to `out`), then have the module call back into `host`.
///
/// Returns the computed average.
pub fn run_session<A, W>(api: &A, host: &mut dyn ShowFromHost, out: &mut W) -> Result<f64>
where
    A: HelloApi + ?Sized,
    W: Write,
{
    api.say_hello().context("sayHello")?;

    let average = api.average(5, 10).context("average")?;
    writeln!(out, "{}", average_line(average))?;
    out.flush()?;

    api.call_from_rust(host).context("callFromRust")?;
    Ok(average)
}
