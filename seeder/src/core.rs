use std::path::Path;

use seedsql::sink::write_sql;
use seedsql::source::read_rows;
use seedsql::statement::build_insert;
use seedsql_config::shared::{OutputConfig, SeederConfig, SourceConfig};
use tracing::info;

use crate::config::load_seeder_config;

pub fn start_seeder() -> anyhow::Result<()> {
    info!("starting seeder");
    let seeder_config = load_seeder_config()?;

    log_config(&seeder_config);

    let input_path = Path::new(&seeder_config.source.input_path);
    let rows = read_rows(input_path, &seeder_config.source.column_order)?;
    info!(rows = rows.len(), "seed rows loaded");

    let sql = build_insert(&rows, &seeder_config.source.column_order)?;

    let output_path = Path::new(&seeder_config.output.output_path);
    write_sql(output_path, &sql)?;

    info!(rows = rows.len(), "seeder completed");

    // Operator-facing confirmation line with the path the statement landed at.
    let resolved = output_path
        .canonicalize()
        .unwrap_or_else(|_| output_path.to_path_buf());
    println!("Seed SQL written to {}", resolved.display());

    Ok(())
}

fn log_config(config: &SeederConfig) {
    log_source_config(&config.source);
    log_output_config(&config.output);
}

fn log_source_config(config: &SourceConfig) {
    info!(
        input_path = config.input_path,
        columns = config.column_order.len(),
        "source config"
    );
}

fn log_output_config(config: &OutputConfig) {
    info!(output_path = config.output_path, "output config");
}
