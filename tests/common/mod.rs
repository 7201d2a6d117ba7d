#![allow(dead_code)]

use containerql::db::{self, SqlitePool};
use containerql::gql::Context;
use diesel::sqlite::SqliteConnection;
use tempfile::TempDir;

/// A migrated database file that lives as long as the returned `TempDir`.
pub struct TestDb {
    pub dir: TempDir,
    pub url: String,
}

impl TestDb {
    pub fn new() -> Self {
        let _ = env_logger::builder().is_test(true).try_init();
        let dir = tempfile::tempdir().unwrap();
        let url = dir.path().join("test.sqlite").to_str().unwrap().to_owned();
        let conn = db::establish(&url).unwrap();
        db::sync(&conn, true).unwrap();
        TestDb { dir, url }
    }

    pub fn conn(&self) -> SqliteConnection {
        db::establish(&self.url).unwrap()
    }

    pub fn pool(&self) -> SqlitePool {
        db::build_pool(&self.url, 4).unwrap()
    }

    pub fn context(&self) -> Context {
        Context::new(self.pool())
    }
}
