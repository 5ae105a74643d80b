use sqlx::sqlite::SqlitePool;

pub mod db;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod models;
pub mod password;
pub mod rest;
pub mod store;
pub mod token;

#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub keys: token::Keys,
    pub store: store::FileStore,
}
