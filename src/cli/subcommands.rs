use clap::{ArgMatches, Command};
use std::error::Error;

pub mod schema;
pub mod seed;
pub mod serve;

pub fn setup(app: Command<'static>) -> Command<'static> {
    app.subcommand(serve::app())
        .subcommand(seed::app())
        .subcommand(schema::app())
}

pub async fn execute(config: &config::Config, app_m: ArgMatches) -> Result<(), Box<dyn Error>> {
    match app_m.subcommand() {
        Some((serve::NAME, sub_m)) => serve::execute(sub_m, config).await,
        Some((seed::NAME, sub_m)) => seed::execute(sub_m, config).await,
        Some((schema::NAME, sub_m)) => schema::execute(sub_m, config).await,
        _ => Ok(()),
    }
}
