use seedsql_telemetry::init_tracing;

use crate::core::start_seeder;

mod config;
mod core;

fn main() -> anyhow::Result<()> {
    let app_name = env!("CARGO_BIN_NAME");

    let _log_flusher = init_tracing(app_name)?;

    // We run the conversion.
    start_seeder()?;

    Ok(())
}
