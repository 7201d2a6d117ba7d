use clap::{ArgMatches, Command};
use containerql::gql;
use std::error::Error;

pub const NAME: &str = "schema";

pub fn app() -> Command<'static> {
    Command::new(NAME).about("Print the GraphQL schema")
}

pub async fn execute(_matches: &ArgMatches, _config: &config::Config) -> Result<(), Box<dyn Error>> {
    println!("{}", gql::schema().as_schema_language());
    Ok(())
}
