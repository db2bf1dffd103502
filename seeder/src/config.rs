use seedsql_config::load_config;
use seedsql_config::shared::SeederConfig;

/// Loads the [`SeederConfig`] and validates it.
pub fn load_seeder_config() -> anyhow::Result<SeederConfig> {
    let config = load_config::<SeederConfig>()?;
    config.validate()?;

    Ok(config)
}
