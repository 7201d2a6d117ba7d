use clap::{crate_authors, crate_description, crate_name, crate_version, Arg, ArgAction, Command};
use std::error::Error;

pub mod config;
pub mod logging;
pub mod subcommands;

pub async fn execute() -> Result<(), Box<dyn Error>> {
    let app = subcommands::setup(app());
    let app_m = app.get_matches();
    let config = config::setup(&app_m)?;
    logging::setup(&config)?;
    subcommands::execute(&config, app_m).await?;
    Ok(())
}

pub fn app() -> Command<'static> {
    Command::new(crate_name!())
        .about(crate_description!())
        .version(crate_version!())
        .author(crate_authors!())
        .arg_required_else_help(true)
        .arg(
            Arg::new("debug")
                .short('d')
                .long("debug")
                .action(ArgAction::SetTrue)
                .help("Turn debugging information on"),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .takes_value(true)
                .value_name("FILE")
                .help("Read settings from this file as well"),
        )
}
