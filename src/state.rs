use sqlx::SqlitePool;

#[derive(Clone)]
pub struct AppState {
    pub db: DbClient,
}

pub type DbClient = SqlitePool;
