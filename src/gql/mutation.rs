use juniper::{graphql_object, FieldResult};

use super::Context;
use crate::models;
use crate::store;

#[allow(clippy::module_name_repetitions)]
pub struct RootMutation;

#[graphql_object(
    name = "Mutation",
    description = "Functions to create database entries",
    context = Context,
)]
impl RootMutation {
    /// An empty id creates nothing and resolves to null.
    async fn add_container(context: &Context, id: String) -> FieldResult<Option<models::Container>> {
        if id.is_empty() {
            log::debug!("addContainer skipped for empty id");
            return Ok(None);
        }
        let container = context
            .run(move |conn| store::create_container(conn, &id, None))
            .await?;
        log::info!("Added container {}", &container.id);
        Ok(Some(container))
    }
}
