use diesel::prelude::*;
use diesel::sqlite::Sqlite;

use crate::schema::{containers, sections};

/// Narrows a boxed query by the columns a filter allows. Each filter field
/// maps to exactly one column; anything else a client sends never reaches
/// the query.
pub trait FilterDsl<'a, Q> {
    fn apply(&'a self, query: Q) -> Q;
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct ContainerFilter {
    pub id: Option<String>,
}

impl<'a> FilterDsl<'a, containers::BoxedQuery<'a, Sqlite>> for ContainerFilter {
    fn apply(
        &'a self,
        mut query: containers::BoxedQuery<'a, Sqlite>,
    ) -> containers::BoxedQuery<'a, Sqlite> {
        if let Some(id) = &self.id {
            query = query.filter(containers::id.eq(id));
        }
        query
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct SectionFilter {
    pub id: Option<String>,
    pub container_id: Option<String>,
}

impl<'a> FilterDsl<'a, sections::BoxedQuery<'a, Sqlite>> for SectionFilter {
    fn apply(
        &'a self,
        mut query: sections::BoxedQuery<'a, Sqlite>,
    ) -> sections::BoxedQuery<'a, Sqlite> {
        if let Some(id) = &self.id {
            query = query.filter(sections::id.eq(id));
        }
        if let Some(container_id) = &self.container_id {
            query = query.filter(sections::container_id.eq(container_id));
        }
        query
    }
}
