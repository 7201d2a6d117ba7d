use clap::{ArgMatches, Command};
use containerql::gql::{self, Context};
use containerql::{db, seed, server};
use std::error::Error;
use std::net::SocketAddr;
use std::sync::Arc;

pub const NAME: &str = "serve";

pub fn app() -> Command<'static> {
    Command::new(NAME).about("Start web API server")
}

pub async fn execute(_matches: &ArgMatches, config: &config::Config) -> Result<(), Box<dyn Error>> {
    {
        let conn = db::setup(config)?;
        let seed_count = config.get::<usize>("seed_count")?;
        if seed_count > 0 {
            seed::run(&conn, seed_count, &mut rand::thread_rng());
        }
    }

    let db_pool = db::create_pool(config)?;
    let root_node = Arc::new(gql::schema());
    let ctx = Arc::new(Context::new(db_pool));

    let server_addr: SocketAddr = config.get::<String>("http_server_address")?.parse()?;
    server::run(server_addr, root_node, ctx).await?;
    Ok(())
}
