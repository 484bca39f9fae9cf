use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct RegisterClientRequest {
    pub id: i64,
    pub name: String,
    /// Calendar date, `YYYY-MM-DD`.
    pub birth_date: String,
    pub cpf: String,
    pub email: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateClientRequest {
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateClientQuery {
    #[serde(rename = "idCliente")]
    pub id_cliente: i64,
}

#[derive(Debug, Serialize)]
pub struct ClientResponse {
    pub id: i64,
    pub name: String,
    pub birth_date: String,
    pub cpf: String,
    pub email: Option<String>,
    pub phone: Option<String>,
}
