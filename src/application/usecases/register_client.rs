// Use case: register_client.

use crate::application::context::AppContext;
use crate::domain::entities::client::Client;
use crate::infrastructure::db::stores::client_store::ClientRepositoryError;
use time::OffsetDateTime;

/// Registers a new client with a caller-assigned ID.
pub struct RegisterClientUseCase;

/// Each rejected rule stays distinct here even though the HTTP contract
/// reports them as one aggregate failure.
#[derive(Debug)]
pub enum RegisterClientError {
    /// The candidate is below the minimum age.
    Underage,
    /// Another client already holds this ID.
    IdTaken,
    /// Another client already holds this CPF.
    CpfTaken,
    /// The store rejected the insert on a uniqueness constraint. The
    /// pre-checks above are advisory; this is the backstop under
    /// concurrent registration.
    Conflict,
    Storage(String),
}

impl RegisterClientUseCase {
    /// Validate and persist the candidate unmodified. No partial write
    /// happens on failure.
    pub async fn execute(
        ctx: &AppContext,
        candidate: Client,
    ) -> Result<Client, RegisterClientError> {
        // Step 1: Eligibility, from the birth date as of today.
        let today = OffsetDateTime::now_utc().date();
        if !candidate.is_eligible_on(today) {
            return Err(RegisterClientError::Underage);
        }

        // Step 2: Advisory fast-path checks for both uniqueness rules.
        let existing = ctx
            .repos
            .client
            .get(candidate.id)
            .await
            .map_err(|e| RegisterClientError::Storage(format!("{e:?}")))?;
        if existing.is_some() {
            return Err(RegisterClientError::IdTaken);
        }

        let cpf_taken = ctx
            .repos
            .client
            .exists_by_cpf(&candidate.cpf)
            .await
            .map_err(|e| RegisterClientError::Storage(format!("{e:?}")))?;
        if cpf_taken {
            return Err(RegisterClientError::CpfTaken);
        }

        // Step 3: Insert. The store's own constraints decide races the
        // checks above could not see.
        let stored = ctx
            .repos
            .client
            .insert(&candidate)
            .await
            .map_err(|e| match e {
                ClientRepositoryError::Conflict => RegisterClientError::Conflict,
                other => RegisterClientError::Storage(format!("{other:?}")),
            })?;

        Ok(stored)
    }
}

#[cfg(test)]
mod tests {
    use super::{RegisterClientError, RegisterClientUseCase};
    use crate::application::context::test_support::{failing_context, test_context};
    use crate::domain::entities::client::Client;
    use crate::domain::value_objects::ids::ClientId;
    use time::macros::date;

    fn candidate(id: i64, name: &str, birth: time::Date, cpf: &str) -> Client {
        Client::new(ClientId(id), name.to_string(), birth, cpf.to_string(), None, None)
    }

    #[tokio::test]
    async fn given_valid_candidate_when_execute_should_store_it_unmodified() {
        let ctx = test_context();
        let ana = candidate(1, "Ana", date!(2000 - 01 - 01), "111");

        let stored = RegisterClientUseCase::execute(&ctx, ana.clone())
            .await
            .unwrap();

        assert_eq!(stored, ana);
        let fetched = ctx.repos.client.get(ClientId(1)).await.unwrap();
        assert_eq!(fetched, Some(ana));
    }

    #[tokio::test]
    async fn given_underage_candidate_when_execute_should_reject_and_not_persist() {
        let ctx = test_context();
        let kid = candidate(3, "Kid", date!(2020 - 01 - 01), "333");

        let result = RegisterClientUseCase::execute(&ctx, kid).await;

        assert!(matches!(result, Err(RegisterClientError::Underage)));
        assert!(ctx.repos.client.get(ClientId(3)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn given_taken_id_when_execute_should_reject_and_keep_existing_record() {
        let ctx = test_context();
        let ana = candidate(1, "Ana", date!(2000 - 01 - 01), "111");
        RegisterClientUseCase::execute(&ctx, ana.clone()).await.unwrap();

        let bob = candidate(1, "Bob", date!(1990 - 01 - 01), "222");
        let result = RegisterClientUseCase::execute(&ctx, bob).await;

        assert!(matches!(result, Err(RegisterClientError::IdTaken)));
        let kept = ctx.repos.client.get(ClientId(1)).await.unwrap();
        assert_eq!(kept, Some(ana));
    }

    #[tokio::test]
    async fn given_taken_cpf_when_execute_should_reject_and_keep_existing_record() {
        let ctx = test_context();
        let ana = candidate(1, "Ana", date!(2000 - 01 - 01), "111");
        RegisterClientUseCase::execute(&ctx, ana.clone()).await.unwrap();

        let bob = candidate(2, "Bob", date!(1990 - 01 - 01), "111");
        let result = RegisterClientUseCase::execute(&ctx, bob).await;

        assert!(matches!(result, Err(RegisterClientError::CpfTaken)));
        assert!(ctx.repos.client.get(ClientId(2)).await.unwrap().is_none());
        let kept = ctx.repos.client.get(ClientId(1)).await.unwrap();
        assert_eq!(kept, Some(ana));
    }

    #[tokio::test]
    async fn given_storage_error_when_execute_should_return_error() {
        let ctx = failing_context();
        let ana = candidate(1, "Ana", date!(2000 - 01 - 01), "111");

        let result = RegisterClientUseCase::execute(&ctx, ana).await;

        assert!(matches!(result, Err(RegisterClientError::Storage(_))));
    }
}
