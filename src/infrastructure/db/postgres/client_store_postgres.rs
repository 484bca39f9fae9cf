use crate::infrastructure::db::dto::ClientRow;
use crate::infrastructure::db::postgres::PostgresDatabase;
use crate::infrastructure::db::stores::client_store::{ClientRepositoryError, ClientStore};
use async_trait::async_trait;
use sqlx::PgConnection;

#[derive(Clone)]
pub struct ClientStorePostgres {
    db: std::sync::Arc<PostgresDatabase>,
}

fn map_query_error(e: sqlx::Error) -> ClientRepositoryError {
    match &e {
        sqlx::Error::Database(db) if db.is_unique_violation() => ClientRepositoryError::Conflict,
        _ => ClientRepositoryError::StorageUnavailable,
    }
}

impl ClientStorePostgres {
    /// Build a Postgres-backed client store.
    pub fn new(db: std::sync::Arc<PostgresDatabase>) -> Self {
        Self { db }
    }

    async fn find_all_impl_conn(
        conn: &mut PgConnection,
    ) -> Result<Vec<ClientRow>, ClientRepositoryError> {
        let rows = sqlx::query_as::<_, ClientRow>(
            "SELECT
                id,
                name,
                birth_date,
                cpf,
                email,
                phone
            FROM clients
            ORDER BY id",
        )
        .fetch_all(&mut *conn)
        .await
        .map_err(map_query_error)?;

        Ok(rows)
    }

    async fn get_impl_conn(
        conn: &mut PgConnection,
        client_id: i64,
    ) -> Result<Option<ClientRow>, ClientRepositoryError> {
        let row = sqlx::query_as::<_, ClientRow>(
            "SELECT
                id,
                name,
                birth_date,
                cpf,
                email,
                phone
            FROM clients
            WHERE id = $1",
        )
        .bind(client_id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(map_query_error)?;

        Ok(row)
    }

    async fn exists_by_cpf_impl_conn(
        conn: &mut PgConnection,
        cpf: &str,
    ) -> Result<bool, ClientRepositoryError> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM clients WHERE cpf = $1)",
        )
        .bind(cpf)
        .fetch_one(&mut *conn)
        .await
        .map_err(map_query_error)?;

        Ok(exists)
    }

    async fn insert_impl_conn(
        conn: &mut PgConnection,
        row: &ClientRow,
    ) -> Result<ClientRow, ClientRepositoryError> {
        // Plain INSERT: the primary key on `id` and the unique index on `cpf`
        // are the uniqueness backstop, surfaced as `Conflict`.
        let stored = sqlx::query_as::<_, ClientRow>(
            "INSERT INTO clients (
                id,
                name,
                birth_date,
                cpf,
                email,
                phone
            )
            VALUES ($1,$2,$3,$4,$5,$6)
            RETURNING
                id,
                name,
                birth_date,
                cpf,
                email,
                phone",
        )
        .bind(row.id)
        .bind(&row.name)
        .bind(row.birth_date)
        .bind(&row.cpf)
        .bind(&row.email)
        .bind(&row.phone)
        .fetch_one(&mut *conn)
        .await
        .map_err(map_query_error)?;

        Ok(stored)
    }

    async fn update_impl_conn(
        conn: &mut PgConnection,
        row: &ClientRow,
    ) -> Result<ClientRow, ClientRepositoryError> {
        // Mutable columns only. `cpf` and `birth_date` are immutable.
        let stored = sqlx::query_as::<_, ClientRow>(
            "UPDATE clients SET
                name = $2,
                email = $3,
                phone = $4
            WHERE id = $1
            RETURNING
                id,
                name,
                birth_date,
                cpf,
                email,
                phone",
        )
        .bind(row.id)
        .bind(&row.name)
        .bind(&row.email)
        .bind(&row.phone)
        .fetch_optional(&mut *conn)
        .await
        .map_err(map_query_error)?;

        match stored {
            Some(row) => Ok(row),
            None => Err(ClientRepositoryError::NotFound),
        }
    }

    async fn delete_impl_conn(
        conn: &mut PgConnection,
        client_id: i64,
    ) -> Result<(), ClientRepositoryError> {
        let result = sqlx::query("DELETE FROM clients WHERE id = $1")
            .bind(client_id)
            .execute(&mut *conn)
            .await
            .map_err(map_query_error)?;

        if result.rows_affected() == 0 {
            return Err(ClientRepositoryError::NotFound);
        }

        Ok(())
    }
}

#[async_trait]
impl ClientStore for ClientStorePostgres {
    /// Fetch every stored client, ordered by ID.
    async fn find_all(&self) -> Result<Vec<ClientRow>, ClientRepositoryError> {
        self.db
            .with_conn(move |conn| Box::pin(Self::find_all_impl_conn(conn)))
            .await
    }

    /// Fetch a client by its ID. Returns `None` if it doesn't exist.
    async fn get(&self, client_id: i64) -> Result<Option<ClientRow>, ClientRepositoryError> {
        self.db
            .with_conn(move |conn| Box::pin(Self::get_impl_conn(conn, client_id)))
            .await
    }

    /// Whether any stored client carries the given CPF.
    async fn exists_by_cpf(&self, cpf: &str) -> Result<bool, ClientRepositoryError> {
        let cpf = cpf.to_string();
        self.db
            .with_conn(move |conn| {
                let cpf = cpf;
                Box::pin(async move { Self::exists_by_cpf_impl_conn(conn, &cpf).await })
            })
            .await
    }

    /// Create a client and return exactly what was stored.
    async fn insert(&self, row: &ClientRow) -> Result<ClientRow, ClientRepositoryError> {
        let row = row.clone();
        self.db
            .with_conn(move |conn| {
                let row = row;
                Box::pin(async move { Self::insert_impl_conn(conn, &row).await })
            })
            .await
    }

    /// Overwrite the mutable fields of an existing client.
    async fn update(&self, row: &ClientRow) -> Result<ClientRow, ClientRepositoryError> {
        let row = row.clone();
        self.db
            .with_conn(move |conn| {
                let row = row;
                Box::pin(async move { Self::update_impl_conn(conn, &row).await })
            })
            .await
    }

    /// Delete a client by its ID. Returns `NotFound` if it didn't exist.
    async fn delete(&self, client_id: i64) -> Result<(), ClientRepositoryError> {
        self.db
            .with_conn(move |conn| Box::pin(Self::delete_impl_conn(conn, client_id)))
            .await
    }
}
