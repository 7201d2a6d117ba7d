use clap::ArgMatches;
use config::Config;
use std::error::Error;

pub fn setup(app_m: &ArgMatches) -> Result<config::Config, Box<dyn Error>> {
    let mut config = Config::default();
    config
        .set_default("debug", false)?
        .set_default("log_level", "info")?
        .set_default("database_url", "containerql.sqlite")?
        .set_default("db_pool_size", 10)?
        .set_default("db_sync_force", true)?
        .set_default("seed_count", 10)?
        .set_default("http_server_address", "0.0.0.0:3000")?
        .merge(config::File::with_name("config").required(false))?;

    if let Some(path) = app_m.get_one::<String>("config") {
        config.merge(config::File::with_name(path))?;
    }

    config.merge(config::Environment::with_prefix("APP"))?;

    if app_m.get_flag("debug") {
        config.set("debug", true)?;
        config.set("log_level", "debug")?;
    }

    Ok(config)
}
