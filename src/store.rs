//! Creation and lookup of containers and their sections.

use chrono::prelude::*;
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::db::filter::{ContainerFilter, FilterDsl, SectionFilter};
use crate::models::{Blob, Container, ContainerNew, Section, SectionNew};
use crate::schema::{containers, sections};

mod error;

pub use error::StoreError;

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Removes the first run of whitespace from an identifier. Later runs are
/// kept: "Smith, Jones and Brown" is stored as "Smith,Jones and Brown".
#[must_use]
pub fn normalize_id(raw: &str) -> String {
    WHITESPACE.replace(raw, "").into_owned()
}

/// # Errors
///
/// Will return Err if the id is already taken or the payload fails to encode
pub fn create_container(
    conn: &SqliteConnection,
    id: &str,
    data: Option<&Blob>,
) -> Result<Container, StoreError> {
    let id = normalize_id(id);
    let data = data.map(serde_json::to_string).transpose()?;
    let now = Utc::now().to_rfc3339();

    log::trace!("Container new {}", &id);
    diesel::insert_into(containers::table)
        .values(ContainerNew {
            id: &id,
            data: data.as_deref(),
            created_at: &now,
            updated_at: &now,
        })
        .execute(conn)?;

    Ok(containers::table.find(&id).first::<Container>(conn)?)
}

/// # Errors
///
/// Will return Err if the id is already taken or no container has `container_id`
pub fn create_section(
    conn: &SqliteConnection,
    container_id: &str,
    id: &str,
) -> Result<Section, StoreError> {
    let id = normalize_id(id);
    let now = Utc::now().to_rfc3339();

    log::trace!("Section new {} in {}", &id, container_id);
    diesel::insert_into(sections::table)
        .values(SectionNew {
            id: &id,
            container_id,
            created_at: &now,
            updated_at: &now,
        })
        .execute(conn)?;

    Ok(sections::table.find(&id).first::<Section>(conn)?)
}

/// # Errors
///
/// Will return Err for any database failure
pub fn find_containers(
    conn: &SqliteConnection,
    filter: &ContainerFilter,
) -> Result<Vec<Container>, StoreError> {
    Ok(filter
        .apply(containers::table.into_boxed())
        .order((containers::created_at.asc(), containers::id.asc()))
        .load::<Container>(conn)?)
}

/// # Errors
///
/// Will return Err for any database failure
pub fn find_sections(
    conn: &SqliteConnection,
    filter: &SectionFilter,
) -> Result<Vec<Section>, StoreError> {
    Ok(filter
        .apply(sections::table.into_boxed())
        .order((sections::created_at.asc(), sections::id.asc()))
        .load::<Section>(conn)?)
}

/// # Errors
///
/// Will return Err for any database failure
pub fn sections_of(
    conn: &SqliteConnection,
    container: &Container,
) -> Result<Vec<Section>, StoreError> {
    Ok(Section::belonging_to(container)
        .order((sections::created_at.asc(), sections::id.asc()))
        .load::<Section>(conn)?)
}

/// # Errors
///
/// Will return Err for any database failure
pub fn container_of(
    conn: &SqliteConnection,
    section: &Section,
) -> Result<Option<Container>, StoreError> {
    Ok(containers::table
        .find(&section.container_id)
        .first::<Container>(conn)
        .optional()?)
}

/// # Errors
///
/// Will return Err for any database failure
pub fn count_containers(conn: &SqliteConnection) -> Result<i64, StoreError> {
    Ok(containers::table.count().get_result::<i64>(conn)?)
}

/// # Errors
///
/// Will return Err for any database failure
pub fn count_sections(conn: &SqliteConnection) -> Result<i64, StoreError> {
    Ok(sections::table.count().get_result::<i64>(conn)?)
}
