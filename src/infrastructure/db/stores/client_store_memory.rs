use crate::infrastructure::db::dto::ClientRow;
use crate::infrastructure::db::stores::client_store::{ClientRepositoryError, ClientStore};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Mutex;

/// In-memory `ClientStore` keyed by client ID.
///
/// Enforces the same uniqueness rules as the Postgres schema (primary key on
/// `id`, unique `cpf`) under its own lock, so concurrent inserts cannot both
/// succeed with a colliding key. Used by tests and local development.
#[derive(Debug, Default)]
pub struct InMemoryClientStore {
    rows: Mutex<BTreeMap<i64, ClientRow>>,
}

impl InMemoryClientStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ClientStore for InMemoryClientStore {
    async fn find_all(&self) -> Result<Vec<ClientRow>, ClientRepositoryError> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.values().cloned().collect())
    }

    async fn get(&self, client_id: i64) -> Result<Option<ClientRow>, ClientRepositoryError> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.get(&client_id).cloned())
    }

    async fn exists_by_cpf(&self, cpf: &str) -> Result<bool, ClientRepositoryError> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.values().any(|row| row.cpf == cpf))
    }

    async fn insert(&self, row: &ClientRow) -> Result<ClientRow, ClientRepositoryError> {
        let mut rows = self.rows.lock().unwrap();
        if rows.contains_key(&row.id) || rows.values().any(|stored| stored.cpf == row.cpf) {
            return Err(ClientRepositoryError::Conflict);
        }
        rows.insert(row.id, row.clone());
        Ok(row.clone())
    }

    async fn update(&self, row: &ClientRow) -> Result<ClientRow, ClientRepositoryError> {
        let mut rows = self.rows.lock().unwrap();
        let Some(stored) = rows.get_mut(&row.id) else {
            return Err(ClientRepositoryError::NotFound);
        };
        // Mutable columns only; `cpf` and `birth_date` stay as stored.
        stored.name = row.name.clone();
        stored.email = row.email.clone();
        stored.phone = row.phone.clone();
        Ok(stored.clone())
    }

    async fn delete(&self, client_id: i64) -> Result<(), ClientRepositoryError> {
        let mut rows = self.rows.lock().unwrap();
        match rows.remove(&client_id) {
            Some(_) => Ok(()),
            None => Err(ClientRepositoryError::NotFound),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::InMemoryClientStore;
    use crate::infrastructure::db::dto::ClientRow;
    use crate::infrastructure::db::stores::client_store::{ClientRepositoryError, ClientStore};
    use time::macros::date;

    fn sample_row(id: i64, cpf: &str) -> ClientRow {
        ClientRow {
            id,
            name: "Ana".to_string(),
            birth_date: date!(2000 - 01 - 01),
            cpf: cpf.to_string(),
            email: None,
            phone: None,
        }
    }

    #[tokio::test]
    async fn given_new_row_when_insert_should_store_and_return_it() {
        let store = InMemoryClientStore::new();

        let stored = store.insert(&sample_row(1, "111")).await.unwrap();

        assert_eq!(stored.id, 1);
        assert_eq!(store.get(1).await.unwrap().unwrap().cpf, "111");
    }

    #[tokio::test]
    async fn given_duplicate_id_when_insert_should_return_conflict() {
        let store = InMemoryClientStore::new();
        store.insert(&sample_row(1, "111")).await.unwrap();

        let err = store.insert(&sample_row(1, "222")).await.unwrap_err();

        assert_eq!(err, ClientRepositoryError::Conflict);
    }

    #[tokio::test]
    async fn given_duplicate_cpf_when_insert_should_return_conflict() {
        let store = InMemoryClientStore::new();
        store.insert(&sample_row(1, "111")).await.unwrap();

        let err = store.insert(&sample_row(2, "111")).await.unwrap_err();

        assert_eq!(err, ClientRepositoryError::Conflict);
        assert!(store.get(2).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn given_update_when_row_exists_should_keep_cpf_and_birth_date() {
        let store = InMemoryClientStore::new();
        store.insert(&sample_row(1, "111")).await.unwrap();
        let mut patch = sample_row(1, "999");
        patch.name = "Ana Maria".to_string();
        patch.birth_date = date!(1990 - 06 - 15);

        let stored = store.update(&patch).await.unwrap();

        assert_eq!(stored.name, "Ana Maria");
        assert_eq!(stored.cpf, "111");
        assert_eq!(stored.birth_date, date!(2000 - 01 - 01));
    }

    #[tokio::test]
    async fn given_update_when_row_missing_should_return_not_found() {
        let store = InMemoryClientStore::new();

        let err = store.update(&sample_row(9, "111")).await.unwrap_err();

        assert_eq!(err, ClientRepositoryError::NotFound);
    }

    #[tokio::test]
    async fn given_delete_when_row_missing_should_return_not_found() {
        let store = InMemoryClientStore::new();

        let err = store.delete(999).await.unwrap_err();

        assert_eq!(err, ClientRepositoryError::NotFound);
    }

    #[tokio::test]
    async fn given_rows_when_find_all_should_return_them_in_id_order() {
        let store = InMemoryClientStore::new();
        store.insert(&sample_row(2, "222")).await.unwrap();
        store.insert(&sample_row(1, "111")).await.unwrap();

        let all = store.find_all().await.unwrap();

        assert_eq!(all.iter().map(|r| r.id).collect::<Vec<_>>(), vec![1, 2]);
    }
}
