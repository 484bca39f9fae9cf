use std::sync::Arc;

use crate::infrastructure::db::database::{Database, DatabaseError};
use crate::infrastructure::db::postgres::PostgresDatabase;
use crate::infrastructure::db::postgres::client_store_postgres::ClientStorePostgres;
use crate::infrastructure::db::repositories::client_repository::ClientRepository;
use crate::infrastructure::db::stores::client_store_memory::InMemoryClientStore;

#[derive(Clone)]
pub struct Repositories {
    pub db: Option<Arc<PostgresDatabase>>,
    pub client: Arc<ClientRepository>,
}

impl Repositories {
    /// Build all repositories backed by Postgres stores.
    pub fn postgres(db: Arc<PostgresDatabase>) -> Self {
        let client_store = Arc::new(ClientStorePostgres::new(db.clone()));

        Self {
            db: Some(db),
            client: Arc::new(ClientRepository::new(client_store)),
        }
    }

    /// Build all repositories backed by in-memory stores. No database
    /// connection is held, so readiness probes report not-ready.
    pub fn in_memory() -> Self {
        Self {
            db: None,
            client: Arc::new(ClientRepository::new(Arc::new(InMemoryClientStore::new()))),
        }
    }

    /// Execute a raw SQL statement against the underlying database.
    pub async fn execute(&self, query: &str) -> Result<u64, DatabaseError> {
        let Some(db) = self.db.as_ref() else {
            return Err(DatabaseError::Connection("db_unavailable".to_string()));
        };
        db.execute(query).await
    }
}
