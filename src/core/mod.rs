pub mod auth;
pub mod campus_data;
pub mod chat_data;
pub mod routes;
pub mod session;
