use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A course row. The `id` is chosen by the caller, never generated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Course {
    pub id: i64,
    pub name: String,
    pub description: String,
}
