use crate::domain::entities::client::Client;
use crate::domain::value_objects::ids::ClientId;
use time::Date;

#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct ClientRow {
    pub id: i64,
    pub name: String,
    pub birth_date: Date,
    pub cpf: String,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl ClientRow {
    pub fn from_client(client: &Client) -> Self {
        Self {
            id: client.id.0,
            name: client.name.clone(),
            birth_date: client.birth_date,
            cpf: client.cpf.clone(),
            email: client.email.clone(),
            phone: client.phone.clone(),
        }
    }

    pub fn into_client(self) -> Client {
        Client {
            id: ClientId(self.id),
            name: self.name,
            birth_date: self.birth_date,
            cpf: self.cpf,
            email: self.email,
            phone: self.phone,
        }
    }
}
