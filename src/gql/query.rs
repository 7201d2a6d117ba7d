use super::Context;
use crate::db::filter::{ContainerFilter, SectionFilter};
use crate::models;
use crate::store;
use juniper::{graphql_object, FieldResult};

#[allow(clippy::module_name_repetitions)]
pub struct RootQuery;

#[graphql_object(
    description = "Represents the Root Query",
    context = Context,
)]
impl RootQuery {
    async fn containers(
        context: &Context,
        id: Option<String>,
    ) -> FieldResult<Vec<models::Container>> {
        let filter = ContainerFilter { id };
        log::debug!("containers args: {:?}", &filter);
        context
            .run(move |conn| store::find_containers(conn, &filter))
            .await
    }

    async fn sections(context: &Context, id: Option<String>) -> FieldResult<Vec<models::Section>> {
        let filter = SectionFilter {
            id,
            ..SectionFilter::default()
        };
        log::debug!("sections args: {:?}", &filter);
        context
            .run(move |conn| store::find_sections(conn, &filter))
            .await
    }
}

#[graphql_object(
    description = "Represents a Container",
    context = Context,
)]
impl models::Container {
    fn id(&self) -> &str {
        &self.id
    }
    fn data(&self) -> FieldResult<Option<models::Blob>> {
        Ok(self.blob()?)
    }
    fn created_at(&self) -> &str {
        &self.created_at
    }
    fn updated_at(&self) -> &str {
        &self.updated_at
    }
    async fn sections(&self, context: &Context) -> FieldResult<Vec<models::Section>> {
        let container = self.clone();
        context
            .run(move |conn| store::sections_of(conn, &container))
            .await
    }
}

#[graphql_object(
    description = "Represents a Section",
    context = Context,
)]
impl models::Section {
    fn id(&self) -> &str {
        &self.id
    }
    fn created_at(&self) -> &str {
        &self.created_at
    }
    fn updated_at(&self) -> &str {
        &self.updated_at
    }
    async fn container(&self, context: &Context) -> FieldResult<Option<models::Container>> {
        let section = self.clone();
        context
            .run(move |conn| store::container_of(conn, &section))
            .await
    }
}
