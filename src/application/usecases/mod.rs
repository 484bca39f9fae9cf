pub mod delete_client;
pub mod get_client;
pub mod list_clients;
pub mod register_client;
pub mod update_client_profile;
