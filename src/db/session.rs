use std::ops::{Deref, DerefMut};

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use sqlx::pool::PoolConnection;
use sqlx::{Sqlite, SqliteConnection};
use tracing::trace;

use crate::error::AppError;
use crate::state::AppState;

/// One database connection scoped to a single request.
///
/// The connection goes back to the pool when the session is dropped, which
/// happens once on every way out of the handler: normal return, an error
/// return, or unwinding from a panic.
pub struct DbSession {
    conn: PoolConnection<Sqlite>,
}

impl DbSession {
    pub async fn acquire(state: &AppState) -> Result<Self, sqlx::Error> {
        let conn = state.db.acquire().await?;
        trace!("db session opened");
        Ok(Self { conn })
    }
}

impl FromRequestParts<AppState> for DbSession {
    type Rejection = AppError;

    async fn from_request_parts(_parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        Ok(Self::acquire(state).await?)
    }
}

impl Deref for DbSession {
    type Target = SqliteConnection;

    fn deref(&self) -> &Self::Target {
        &self.conn
    }
}

impl DerefMut for DbSession {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.conn
    }
}

impl Drop for DbSession {
    fn drop(&mut self) {
        trace!("db session closed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::sqlite::SqlitePoolOptions;

    #[tokio::test]
    async fn test_connection_returns_to_pool_on_drop() {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .expect("Failed to create database");
        let state = AppState::new(pool.clone());

        let session = DbSession::acquire(&state).await.expect("Failed to acquire");
        assert_eq!(pool.num_idle(), 0);
        drop(session);

        // With a single slot, a second acquire only succeeds if the first was released.
        let again = tokio::time::timeout(
            std::time::Duration::from_secs(2),
            DbSession::acquire(&state),
        )
        .await
        .expect("connection was not released")
        .expect("Failed to acquire");
        drop(again);
    }
}
