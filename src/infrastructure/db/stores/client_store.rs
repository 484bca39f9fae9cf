use crate::infrastructure::db::database::DatabaseError;
use crate::infrastructure::db::dto::ClientRow;
use async_trait::async_trait;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientRepositoryError {
    NotFound,
    Conflict,
    InvalidInput,
    StorageUnavailable,
}

impl From<DatabaseError> for ClientRepositoryError {
    fn from(_: DatabaseError) -> Self {
        ClientRepositoryError::StorageUnavailable
    }
}

#[async_trait]
pub trait ClientStore: Send + Sync {
    /// Fetch every stored client. An empty list is a valid result.
    async fn find_all(&self) -> Result<Vec<ClientRow>, ClientRepositoryError>;
    /// Fetch a client by its ID. Returns `None` if it doesn't exist.
    async fn get(&self, client_id: i64) -> Result<Option<ClientRow>, ClientRepositoryError>;
    /// Whether any stored client carries the given CPF.
    async fn exists_by_cpf(&self, cpf: &str) -> Result<bool, ClientRepositoryError>;
    /// Create a client and return exactly what was stored.
    ///
    /// A duplicate `id` or `cpf` fails with `Conflict`. The store enforces
    /// this itself; callers may pre-check, but the insert is the backstop.
    async fn insert(&self, row: &ClientRow) -> Result<ClientRow, ClientRepositoryError>;
    /// Overwrite the mutable fields (`name`, `email`, `phone`) of an existing
    /// client and return what was stored. `cpf` and `birth_date` are never
    /// written. Returns `NotFound` if the ID doesn't exist.
    async fn update(&self, row: &ClientRow) -> Result<ClientRow, ClientRepositoryError>;
    /// Delete a client by its ID. Returns `NotFound` if it didn't exist.
    async fn delete(&self, client_id: i64) -> Result<(), ClientRepositoryError>;
}
