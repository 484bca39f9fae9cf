use crate::domain::entities::client::Client;
use crate::domain::value_objects::ids::ClientId;
use crate::infrastructure::db::dto::ClientRow;
use crate::infrastructure::db::stores::client_store::{ClientRepositoryError, ClientStore};
use std::sync::Arc;

pub struct ClientRepository {
    store: Arc<dyn ClientStore>,
}

impl ClientRepository {
    /// Build a repository that uses the given store implementation.
    pub fn new(store: Arc<dyn ClientStore>) -> Self {
        Self { store }
    }

    /// Fetch every stored client.
    pub async fn find_all(&self) -> Result<Vec<Client>, ClientRepositoryError> {
        let rows = self.store.find_all().await?;
        Ok(rows.into_iter().map(ClientRow::into_client).collect())
    }

    /// Fetch a client by its ID. Returns `None` if it doesn't exist.
    pub async fn get(&self, client_id: ClientId) -> Result<Option<Client>, ClientRepositoryError> {
        if let Some(dto) = self.store.get(client_id.0).await? {
            Ok(Some(dto.into_client()))
        } else {
            Ok(None)
        }
    }

    /// Whether any stored client carries the given CPF.
    pub async fn exists_by_cpf(&self, cpf: &str) -> Result<bool, ClientRepositoryError> {
        self.store.exists_by_cpf(cpf).await
    }

    /// Create a client and return what was actually stored.
    ///
    /// Store errors pass through untouched so `Conflict` stays observable
    /// to the register rules.
    pub async fn insert(&self, client: &Client) -> Result<Client, ClientRepositoryError> {
        let dto = ClientRow::from_client(client);
        let stored = self.store.insert(&dto).await?;
        Ok(stored.into_client())
    }

    /// Overwrite the mutable fields of an existing client and return what
    /// was actually stored.
    pub async fn update(&self, client: &Client) -> Result<Client, ClientRepositoryError> {
        let dto = ClientRow::from_client(client);
        let stored = self.store.update(&dto).await?;
        Ok(stored.into_client())
    }

    /// Delete a client by its ID. Returns `NotFound` if it didn't exist.
    pub async fn delete(&self, client_id: ClientId) -> Result<(), ClientRepositoryError> {
        self.store.delete(client_id.0).await
    }
}

#[cfg(test)]
mod tests {
    use super::ClientRepository;
    use crate::domain::entities::client::Client;
    use crate::domain::value_objects::ids::ClientId;
    use crate::infrastructure::db::stores::client_store::ClientRepositoryError;
    use crate::infrastructure::db::stores::client_store_memory::InMemoryClientStore;
    use std::sync::Arc;
    use time::macros::date;

    fn sample_client(id: i64, cpf: &str) -> Client {
        Client::new(
            ClientId(id),
            "Ana".to_string(),
            date!(2000 - 01 - 01),
            cpf.to_string(),
            None,
            None,
        )
    }

    fn repo() -> ClientRepository {
        ClientRepository::new(Arc::new(InMemoryClientStore::new()))
    }

    #[tokio::test]
    async fn given_client_when_insert_should_return_stored_client() {
        let repo = repo();
        let client = sample_client(1, "111");

        let stored = repo.insert(&client).await.unwrap();

        assert_eq!(stored, client);
    }

    #[tokio::test]
    async fn given_existing_client_when_get_should_return_client() {
        let repo = repo();
        let client = sample_client(1, "111");
        repo.insert(&client).await.unwrap();

        let fetched = repo.get(ClientId(1)).await.unwrap();

        assert_eq!(fetched, Some(client));
    }

    #[tokio::test]
    async fn given_missing_client_when_get_should_return_none() {
        let repo = repo();

        let fetched = repo.get(ClientId(999)).await.unwrap();

        assert!(fetched.is_none());
    }

    #[tokio::test]
    async fn given_duplicate_insert_when_insert_should_pass_conflict_through() {
        let repo = repo();
        repo.insert(&sample_client(1, "111")).await.unwrap();

        let err = repo.insert(&sample_client(1, "222")).await.unwrap_err();

        assert_eq!(err, ClientRepositoryError::Conflict);
    }

    #[tokio::test]
    async fn given_stored_cpf_when_exists_by_cpf_should_return_true() {
        let repo = repo();
        repo.insert(&sample_client(1, "111")).await.unwrap();

        assert!(repo.exists_by_cpf("111").await.unwrap());
        assert!(!repo.exists_by_cpf("222").await.unwrap());
    }
}
