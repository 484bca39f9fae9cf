// Use case: delete_client.

use crate::application::context::AppContext;
use crate::domain::value_objects::ids::ClientId;
use crate::infrastructure::db::stores::client_store::ClientRepositoryError;

/// Removes a client by its ID.
pub struct DeleteClientUseCase;

#[derive(Debug)]
pub enum DeleteClientError {
    NotFound,
    Storage(String),
}

impl DeleteClientUseCase {
    /// Delete the client, distinguishing "removed" from "did not exist".
    pub async fn execute(ctx: &AppContext, client_id: ClientId) -> Result<(), DeleteClientError> {
        ctx.repos
            .client
            .delete(client_id)
            .await
            .map_err(|e| match e {
                ClientRepositoryError::NotFound => DeleteClientError::NotFound,
                other => DeleteClientError::Storage(format!("{other:?}")),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::{DeleteClientError, DeleteClientUseCase};
    use crate::application::context::test_support::{failing_context, test_context};
    use crate::domain::entities::client::Client;
    use crate::domain::value_objects::ids::ClientId;
    use time::macros::date;

    fn sample_client() -> Client {
        Client::new(
            ClientId(1),
            "Ana".to_string(),
            date!(2000 - 01 - 01),
            "111".to_string(),
            None,
            None,
        )
    }

    #[tokio::test]
    async fn given_existing_client_when_execute_should_remove_it() {
        let ctx = test_context();
        ctx.repos.client.insert(&sample_client()).await.unwrap();

        DeleteClientUseCase::execute(&ctx, ClientId(1)).await.unwrap();

        assert!(ctx.repos.client.get(ClientId(1)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn given_missing_client_when_execute_should_return_not_found() {
        let ctx = test_context();

        let result = DeleteClientUseCase::execute(&ctx, ClientId(999)).await;

        assert!(matches!(result, Err(DeleteClientError::NotFound)));
    }

    #[tokio::test]
    async fn given_storage_error_when_execute_should_return_error() {
        let ctx = failing_context();

        let result = DeleteClientUseCase::execute(&ctx, ClientId(1)).await;

        assert!(matches!(result, Err(DeleteClientError::Storage(_))));
    }
}
