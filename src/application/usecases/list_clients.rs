// Use case: list_clients.

use crate::application::context::AppContext;
use crate::domain::entities::client::Client;

/// Fetches every registered client.
pub struct ListClientsUseCase;

#[derive(Debug)]
pub enum ListClientsError {
    Storage(String),
}

impl ListClientsUseCase {
    /// List all clients. An empty list is a valid result, not a failure;
    /// callers decide how to surface emptiness.
    pub async fn execute(ctx: &AppContext) -> Result<Vec<Client>, ListClientsError> {
        ctx.repos
            .client
            .find_all()
            .await
            .map_err(|e| ListClientsError::Storage(format!("{e:?}")))
    }
}
