use diesel::sqlite::SqliteConnection;
use juniper::{EmptySubscription, FieldResult};

pub mod mutation;
pub mod query;

use crate::db::SqlitePool;
use crate::gql::mutation::RootMutation;
use crate::gql::query::RootQuery;
use crate::store::StoreError;

pub struct Context {
    pub pool: SqlitePool,
}

impl juniper::Context for Context {}

impl Context {
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Context { pool }
    }

    /// Runs a blocking store call on a pooled connection off the async
    /// executor and waits for its result.
    ///
    /// # Errors
    ///
    /// Will return Err if no connection can be checked out, the worker panics,
    /// or `f` fails
    pub async fn run<T, F>(&self, f: F) -> FieldResult<T>
    where
        F: FnOnce(&SqliteConnection) -> Result<T, StoreError> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        let result = tokio::task::spawn_blocking(move || -> Result<T, StoreError> {
            let conn = pool.get()?;
            f(&*conn)
        })
        .await?;
        Ok(result?)
    }
}

// A root schema consists of a query, a mutation, and a subscription.
// Request queries can be executed against a RootNode.
pub type Schema = juniper::RootNode<'static, RootQuery, RootMutation, EmptySubscription<Context>>;

#[must_use]
pub fn schema() -> Schema {
    Schema::new(RootQuery, RootMutation, EmptySubscription::<Context>::new())
}
