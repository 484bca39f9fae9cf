// HTTP routes: client registration, lookup, profile update, removal.

use crate::application::usecases::delete_client::{DeleteClientError, DeleteClientUseCase};
use crate::application::usecases::get_client::{GetClientError, GetClientUseCase};
use crate::application::usecases::list_clients::{ListClientsError, ListClientsUseCase};
use crate::application::usecases::register_client::{RegisterClientError, RegisterClientUseCase};
use crate::application::usecases::update_client_profile::{
    UpdateClientProfileError, UpdateClientProfileUseCase,
};
use crate::domain::entities::client::{Client, ProfileUpdate};
use crate::domain::value_objects::ids::ClientId;
use crate::interface::http::dto::client::{
    ClientResponse, RegisterClientRequest, UpdateClientQuery, UpdateClientRequest,
};
use crate::interface::http::problem::{
    DBK_CLIENT_DELETE_FAILED, DBK_CLIENT_NOT_FOUND, DBK_CLIENT_REJECTED,
    DBK_CLIENT_UPDATE_FAILED, DBK_REQUEST_MALFORMED, DBK_STORAGE_DB_ERROR, problem,
};
use crate::interface::http::state::AppState;
use crate::interface::http::trace::TraceId;
use axum::Json;
use axum::extract::{Extension, Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get, post, put};
use time::Date;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

const MSG_INVALID_ID: &str =
    "O Id é invalido. Apenas Id's positivos e maiores que zero são validos.";
const MSG_INVALID_NAME: &str = "O Nome é invalido.";
const MSG_INVALID_BIRTH_DATE: &str = "A data de nascimento é invalida.";
const MSG_EMPTY_LIST: &str = "A lista está vazia.";
const MSG_CLIENT_NOT_FOUND: &str = "Não existe um cliente cadastrado com esse id.";
const MSG_REGISTER_REJECTED: &str = "Falha ao cadastrar cliente:\n - O cliente não pode ser menor de idade. \n - Esse id já existe. \n - Esse CPF já existe.";
const MSG_UPDATE_FAILED: &str = "Falha ao atualizar cliente.";
const MSG_DELETE_FAILED: &str = "Falha ao deletar cliente:\n - Cliente inexistente.";
const MSG_STORAGE: &str = "storage unavailable";

/// Builds the client routes.
pub fn router() -> axum::Router<AppState> {
    axum::Router::new()
        .route("/busca_clientes", get(list_clients))
        .route("/busca_cliente_por_id/:id", get(get_client_by_id))
        .route("/cadastro_cliente", post(register_client))
        .route("/atuarliza_perfil_cliente", put(update_client_profile))
        .route("/apaga_conta_cliente_por_id/:id", delete(delete_client))
}

fn client_response(client: &Client) -> ClientResponse {
    ClientResponse {
        id: client.id.0,
        name: client.name.clone(),
        birth_date: client.birth_date.format(&DATE_FORMAT).unwrap_or_default(),
        cpf: client.cpf.clone(),
        email: client.email.clone(),
        phone: client.phone.clone(),
    }
}

/// Lists every registered client. An empty list reads as not-found at this
/// boundary, per the API contract.
async fn list_clients(
    State(state): State<AppState>,
    Extension(trace_id): Extension<TraceId>,
) -> Response {
    let trace_id = Some(trace_id.0.clone());
    // Step 1: Execute the list use case.
    let result = ListClientsUseCase::execute(&state.ctx).await;

    // Step 2: Map output to HTTP response.
    match result {
        Ok(clients) if clients.is_empty() => problem(
            StatusCode::NOT_FOUND,
            DBK_CLIENT_NOT_FOUND,
            Some(MSG_EMPTY_LIST.to_string()),
            None,
            trace_id,
        ),
        Ok(clients) => {
            let body: Vec<ClientResponse> = clients.iter().map(client_response).collect();
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(ListClientsError::Storage(_)) => problem(
            StatusCode::SERVICE_UNAVAILABLE,
            DBK_STORAGE_DB_ERROR,
            Some(MSG_STORAGE.to_string()),
            None,
            trace_id,
        ),
    }
}

/// Fetches a single client by its ID.
async fn get_client_by_id(
    State(state): State<AppState>,
    Extension(trace_id): Extension<TraceId>,
    Path(id): Path<String>,
) -> Response {
    let trace_id = Some(trace_id.0.clone());
    // Step 1: Parse and validate the id.
    let Ok(id) = id.parse::<i64>() else {
        return problem(
            StatusCode::BAD_REQUEST,
            DBK_REQUEST_MALFORMED,
            Some(MSG_INVALID_ID.to_string()),
            None,
            trace_id,
        );
    };
    let client_id = ClientId(id);
    if !client_id.is_valid() {
        return problem(
            StatusCode::BAD_REQUEST,
            DBK_REQUEST_MALFORMED,
            Some(MSG_INVALID_ID.to_string()),
            None,
            trace_id,
        );
    }

    // Step 2: Execute the get use case.
    let result = GetClientUseCase::execute(&state.ctx, client_id).await;

    // Step 3: Map output to HTTP response.
    match result {
        Ok(client) => (StatusCode::OK, Json(client_response(&client))).into_response(),
        Err(GetClientError::NotFound) => problem(
            StatusCode::NOT_FOUND,
            DBK_CLIENT_NOT_FOUND,
            Some(MSG_CLIENT_NOT_FOUND.to_string()),
            None,
            trace_id,
        ),
        Err(GetClientError::Storage(_)) => problem(
            StatusCode::SERVICE_UNAVAILABLE,
            DBK_STORAGE_DB_ERROR,
            Some(MSG_STORAGE.to_string()),
            None,
            trace_id,
        ),
    }
}

/// Registers a new client and echoes the stored record.
async fn register_client(
    State(state): State<AppState>,
    Extension(trace_id): Extension<TraceId>,
    Json(payload): Json<RegisterClientRequest>,
) -> Response {
    let trace_id = Some(trace_id.0.clone());
    // Step 1: Shape checks delegated to this boundary: positive id,
    // non-empty name.
    let client_id = ClientId(payload.id);
    if !client_id.is_valid() {
        return problem(
            StatusCode::BAD_REQUEST,
            DBK_REQUEST_MALFORMED,
            Some(MSG_INVALID_ID.to_string()),
            None,
            trace_id,
        );
    }
    if payload.name.trim().is_empty() {
        return problem(
            StatusCode::BAD_REQUEST,
            DBK_REQUEST_MALFORMED,
            Some(MSG_INVALID_NAME.to_string()),
            None,
            trace_id,
        );
    }

    // Step 2: Parse the birth date.
    let birth_date = match Date::parse(&payload.birth_date, &DATE_FORMAT) {
        Ok(date) => date,
        Err(_) => {
            return problem(
                StatusCode::BAD_REQUEST,
                DBK_REQUEST_MALFORMED,
                Some(MSG_INVALID_BIRTH_DATE.to_string()),
                None,
                trace_id,
            );
        }
    };

    // Step 3: Execute the register use case.
    let candidate = Client::new(
        client_id,
        payload.name.clone(),
        birth_date,
        payload.cpf.clone(),
        payload.email.clone(),
        payload.phone.clone(),
    );
    let result = RegisterClientUseCase::execute(&state.ctx, candidate).await;

    // Step 4: Map output to HTTP response. The three business rules (and
    // the store's own conflict backstop) share one aggregate message.
    match result {
        Ok(stored) => (StatusCode::CREATED, Json(client_response(&stored))).into_response(),
        Err(
            RegisterClientError::Underage
            | RegisterClientError::IdTaken
            | RegisterClientError::CpfTaken
            | RegisterClientError::Conflict,
        ) => problem(
            StatusCode::BAD_REQUEST,
            DBK_CLIENT_REJECTED,
            Some(MSG_REGISTER_REJECTED.to_string()),
            None,
            trace_id,
        ),
        Err(RegisterClientError::Storage(_)) => problem(
            StatusCode::SERVICE_UNAVAILABLE,
            DBK_STORAGE_DB_ERROR,
            Some(MSG_STORAGE.to_string()),
            None,
            trace_id,
        ),
    }
}

/// Overwrites the mutable profile fields of an existing client.
async fn update_client_profile(
    State(state): State<AppState>,
    Extension(trace_id): Extension<TraceId>,
    Query(query): Query<UpdateClientQuery>,
    Json(payload): Json<UpdateClientRequest>,
) -> Response {
    let trace_id = Some(trace_id.0.clone());
    // Step 1: Shape checks: positive id, non-empty name.
    let client_id = ClientId(query.id_cliente);
    if !client_id.is_valid() {
        return problem(
            StatusCode::BAD_REQUEST,
            DBK_REQUEST_MALFORMED,
            Some(MSG_INVALID_ID.to_string()),
            None,
            trace_id,
        );
    }
    if payload.name.trim().is_empty() {
        return problem(
            StatusCode::BAD_REQUEST,
            DBK_REQUEST_MALFORMED,
            Some(MSG_INVALID_NAME.to_string()),
            None,
            trace_id,
        );
    }

    // Step 2: Execute the update use case.
    let patch = ProfileUpdate {
        name: payload.name.clone(),
        email: payload.email.clone(),
        phone: payload.phone.clone(),
    };
    let result =
        UpdateClientProfileUseCase::execute(&state.ctx, client_id, patch).await;

    // Step 3: Map output to HTTP response.
    match result {
        Ok(_) => StatusCode::NO_CONTENT.into_response(),
        Err(UpdateClientProfileError::InvalidName) => problem(
            StatusCode::BAD_REQUEST,
            DBK_REQUEST_MALFORMED,
            Some(MSG_INVALID_NAME.to_string()),
            None,
            trace_id,
        ),
        Err(UpdateClientProfileError::NotFound) => problem(
            StatusCode::BAD_REQUEST,
            DBK_CLIENT_UPDATE_FAILED,
            Some(MSG_UPDATE_FAILED.to_string()),
            None,
            trace_id,
        ),
        Err(UpdateClientProfileError::Storage(_)) => problem(
            StatusCode::SERVICE_UNAVAILABLE,
            DBK_STORAGE_DB_ERROR,
            Some(MSG_STORAGE.to_string()),
            None,
            trace_id,
        ),
    }
}

/// Removes a client account by its ID.
async fn delete_client(
    State(state): State<AppState>,
    Extension(trace_id): Extension<TraceId>,
    Path(id): Path<String>,
) -> Response {
    let trace_id = Some(trace_id.0.clone());
    // Step 1: Parse and validate the id.
    let Ok(id) = id.parse::<i64>() else {
        return problem(
            StatusCode::BAD_REQUEST,
            DBK_REQUEST_MALFORMED,
            Some(MSG_INVALID_ID.to_string()),
            None,
            trace_id,
        );
    };
    let client_id = ClientId(id);
    if !client_id.is_valid() {
        return problem(
            StatusCode::BAD_REQUEST,
            DBK_REQUEST_MALFORMED,
            Some(MSG_INVALID_ID.to_string()),
            None,
            trace_id,
        );
    }

    // Step 2: Execute the delete use case.
    let result = DeleteClientUseCase::execute(&state.ctx, client_id).await;

    // Step 3: Map output to HTTP response.
    match result {
        Ok(()) => StatusCode::OK.into_response(),
        Err(DeleteClientError::NotFound) => problem(
            StatusCode::BAD_REQUEST,
            DBK_CLIENT_DELETE_FAILED,
            Some(MSG_DELETE_FAILED.to_string()),
            None,
            trace_id,
        ),
        Err(DeleteClientError::Storage(_)) => problem(
            StatusCode::SERVICE_UNAVAILABLE,
            DBK_STORAGE_DB_ERROR,
            Some(MSG_STORAGE.to_string()),
            None,
            trace_id,
        ),
    }
}
