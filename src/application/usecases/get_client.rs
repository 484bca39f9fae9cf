// Use case: get_client.

use crate::application::context::AppContext;
use crate::domain::entities::client::Client;
use crate::domain::value_objects::ids::ClientId;

/// Fetches a client by its ID.
pub struct GetClientUseCase;

#[derive(Debug)]
pub enum GetClientError {
    NotFound,
    Storage(String),
}

impl GetClientUseCase {
    /// Get a client by ID. Any ID that matches no record, including a
    /// non-positive one, resolves to `NotFound`.
    pub async fn execute(ctx: &AppContext, client_id: ClientId) -> Result<Client, GetClientError> {
        // Step 1: Fetch the client from storage.
        let client = ctx
            .repos
            .client
            .get(client_id)
            .await
            .map_err(|e| GetClientError::Storage(format!("{e:?}")))?;

        // Step 2: Return NotFound when missing.
        client.ok_or(GetClientError::NotFound)
    }
}
