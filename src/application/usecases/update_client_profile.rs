// Use case: update_client_profile.

use crate::application::context::AppContext;
use crate::domain::entities::client::{Client, ProfileUpdate};
use crate::domain::value_objects::ids::ClientId;
use crate::infrastructure::db::stores::client_store::ClientRepositoryError;

/// Overwrites the mutable profile fields of an existing client.
pub struct UpdateClientProfileUseCase;

#[derive(Debug)]
pub enum UpdateClientProfileError {
    /// The patch carries an empty name.
    InvalidName,
    NotFound,
    Storage(String),
}

impl UpdateClientProfileUseCase {
    /// Apply the patch to the client with the given ID. `id`, `cpf`, and the
    /// birth date are preserved regardless of the patch contents.
    pub async fn execute(
        ctx: &AppContext,
        client_id: ClientId,
        patch: ProfileUpdate,
    ) -> Result<Client, UpdateClientProfileError> {
        // Step 1: The name stays non-empty across every stored state.
        if patch.name.trim().is_empty() {
            return Err(UpdateClientProfileError::InvalidName);
        }

        // Step 2: The target must exist.
        let existing = ctx
            .repos
            .client
            .get(client_id)
            .await
            .map_err(|e| UpdateClientProfileError::Storage(format!("{e:?}")))?
            .ok_or(UpdateClientProfileError::NotFound)?;

        // Step 3: Overlay the mutable fields and persist.
        let updated = existing.with_profile(&patch);
        let stored = ctx
            .repos
            .client
            .update(&updated)
            .await
            .map_err(|e| match e {
                ClientRepositoryError::NotFound => UpdateClientProfileError::NotFound,
                other => UpdateClientProfileError::Storage(format!("{other:?}")),
            })?;

        Ok(stored)
    }
}
