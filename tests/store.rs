mod common;

use common::TestDb;
use containerql::db;
use containerql::db::filter::{ContainerFilter, SectionFilter};
use containerql::models::Blob;
use containerql::store;

#[test]
fn create_container_normalizes_id() {
    let test_db = TestDb::new();
    let conn = test_db.conn();

    let container = store::create_container(&conn, "Acme Corp", None).unwrap();
    assert_eq!(container.id, "AcmeCorp");
    assert_eq!(container.data, None);
    assert_eq!(container.created_at, container.updated_at);

    let found = store::find_containers(
        &conn,
        &ContainerFilter {
            id: Some(String::from("AcmeCorp")),
        },
    )
    .unwrap();
    assert_eq!(found, vec![container]);
}

#[test]
fn filter_is_exact_match_on_stored_id() {
    let test_db = TestDb::new();
    let conn = test_db.conn();
    store::create_container(&conn, "Acme Corp", None).unwrap();
    store::create_container(&conn, "Globex", None).unwrap();

    let raw = ContainerFilter {
        id: Some(String::from("Acme Corp")),
    };
    assert!(store::find_containers(&conn, &raw).unwrap().is_empty());

    let prefix = ContainerFilter {
        id: Some(String::from("Acme")),
    };
    assert!(store::find_containers(&conn, &prefix).unwrap().is_empty());

    let all = store::find_containers(&conn, &ContainerFilter::default()).unwrap();
    let ids: Vec<&str> = all.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids.len(), 2);
    assert!(ids.contains(&"AcmeCorp"));
    assert!(ids.contains(&"Globex"));
}

#[test]
fn blob_payload_round_trips_through_storage() {
    let test_db = TestDb::new();
    let conn = test_db.conn();
    let data = Blob {
        field1: Some(String::from("one")),
        field2: None,
        field3: Some(String::from("three")),
    };

    let container = store::create_container(&conn, "Initech", Some(&data)).unwrap();
    assert_eq!(container.blob().unwrap(), Some(data));
}

#[test]
fn duplicate_container_is_a_constraint_violation() {
    let test_db = TestDb::new();
    let conn = test_db.conn();
    store::create_container(&conn, "AcmeCorp", None).unwrap();

    let err = store::create_container(&conn, "Acme Corp", None).unwrap_err();
    assert!(err.is_constraint_violation(), "{}", err);
    assert_eq!(store::count_containers(&conn).unwrap(), 1);
}

#[test]
fn sections_traverse_to_their_container_and_back() {
    let test_db = TestDb::new();
    let conn = test_db.conn();
    let acme = store::create_container(&conn, "AcmeCorp", None).unwrap();
    let globex = store::create_container(&conn, "Globex", None).unwrap();
    let jane = store::create_section(&conn, &acme.id, "Jane Doe").unwrap();
    store::create_section(&conn, &globex.id, "JohnRoe").unwrap();

    assert_eq!(jane.id, "JaneDoe");
    assert_eq!(jane.container_id, "AcmeCorp");

    let children = store::sections_of(&conn, &acme).unwrap();
    assert_eq!(children, vec![jane.clone()]);

    let parent = store::container_of(&conn, &jane).unwrap();
    assert_eq!(parent, Some(acme));
}

#[test]
fn container_without_sections_has_none() {
    let test_db = TestDb::new();
    let conn = test_db.conn();
    let empty = store::create_container(&conn, "Hooli", None).unwrap();

    assert!(store::sections_of(&conn, &empty).unwrap().is_empty());
}

#[test]
fn section_requires_existing_container() {
    let test_db = TestDb::new();
    let conn = test_db.conn();

    assert!(store::create_section(&conn, "Nowhere", "JaneDoe").is_err());
    assert_eq!(store::count_sections(&conn).unwrap(), 0);
}

#[test]
fn section_filter_matches_one_id() {
    let test_db = TestDb::new();
    let conn = test_db.conn();
    let acme = store::create_container(&conn, "AcmeCorp", None).unwrap();
    store::create_section(&conn, &acme.id, "JaneDoe").unwrap();
    store::create_section(&conn, &acme.id, "JohnRoe").unwrap();

    let filter = SectionFilter {
        id: Some(String::from("JohnRoe")),
        ..SectionFilter::default()
    };
    let found = store::find_sections(&conn, &filter).unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, "JohnRoe");

    let by_container = SectionFilter {
        container_id: Some(String::from("AcmeCorp")),
        ..SectionFilter::default()
    };
    assert_eq!(store::find_sections(&conn, &by_container).unwrap().len(), 2);
}

#[test]
fn forced_sync_leaves_empty_tables() {
    let test_db = TestDb::new();
    let conn = test_db.conn();
    let acme = store::create_container(&conn, "AcmeCorp", None).unwrap();
    store::create_section(&conn, &acme.id, "JaneDoe").unwrap();

    db::sync(&conn, true).unwrap();

    assert_eq!(store::count_containers(&conn).unwrap(), 0);
    assert_eq!(store::count_sections(&conn).unwrap(), 0);
    store::create_container(&conn, "AcmeCorp", None).unwrap();
}

#[test]
fn plain_sync_keeps_rows() {
    let test_db = TestDb::new();
    let conn = test_db.conn();
    store::create_container(&conn, "AcmeCorp", None).unwrap();

    db::sync(&conn, false).unwrap();

    assert_eq!(store::count_containers(&conn).unwrap(), 1);
}
