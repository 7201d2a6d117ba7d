use clap::{value_parser, Arg, ArgMatches, Command};
use containerql::{db, seed};
use std::error::Error;

pub const NAME: &str = "seed";

pub fn app() -> Command<'static> {
    Command::new(NAME)
        .about("Sync the database and fill it with sample data")
        .arg(
            Arg::new("count")
                .long("count")
                .takes_value(true)
                .value_parser(value_parser!(usize))
                .help("Number of containers to create"),
        )
}

pub async fn execute(matches: &ArgMatches, config: &config::Config) -> Result<(), Box<dyn Error>> {
    let count = match matches.get_one::<usize>("count") {
        Some(count) => *count,
        None => config.get::<usize>("seed_count")?,
    };
    let conn = db::setup(config)?;
    let report = seed::run(&conn, count, &mut rand::thread_rng());
    println!(
        "Seeded {} containers and {} sections ({} failures)",
        report.containers, report.sections, report.failures
    );
    Ok(())
}
