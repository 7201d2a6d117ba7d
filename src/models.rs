use super::schema::{containers, sections};
use juniper::GraphQLObject;
use serde::{Deserialize, Serialize};

#[derive(Queryable, Identifiable, Debug, Clone, PartialEq)]
#[table_name = "containers"]
pub struct Container {
    pub id: String,
    pub data: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl Container {
    /// Decodes the stored JSON payload, if any.
    ///
    /// # Errors
    ///
    /// Will return Err if the column holds something other than a Blob
    pub fn blob(&self) -> Result<Option<Blob>, serde_json::Error> {
        match &self.data {
            Some(data) => Ok(Some(serde_json::from_str(data)?)),
            None => Ok(None),
        }
    }
}

#[derive(Queryable, Identifiable, Associations, Debug, Clone, PartialEq)]
#[belongs_to(Container)]
#[table_name = "sections"]
pub struct Section {
    pub id: String,
    pub container_id: String,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(GraphQLObject, Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[graphql(description = "Opaque three-field payload attached to a container")]
pub struct Blob {
    pub field1: Option<String>,
    pub field2: Option<String>,
    pub field3: Option<String>,
}

#[derive(Insertable)]
#[table_name = "containers"]
pub struct ContainerNew<'a> {
    pub id: &'a str,
    pub data: Option<&'a str>,
    pub created_at: &'a str,
    pub updated_at: &'a str,
}

#[derive(Insertable)]
#[table_name = "sections"]
pub struct SectionNew<'a> {
    pub id: &'a str,
    pub container_id: &'a str,
    pub created_at: &'a str,
    pub updated_at: &'a str,
}
