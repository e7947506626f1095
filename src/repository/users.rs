//! User accounts repository for database operations

use sqlx::{Pool, Postgres};

use crate::{error::AppResult, models::UserAccount};

#[derive(Clone)]
pub struct UsersRepository {
    pool: Pool<Postgres>,
}

impl UsersRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all user accounts
    pub async fn list_all(&self) -> AppResult<Vec<UserAccount>> {
        let users = sqlx::query_as::<_, UserAccount>("SELECT * FROM useraccount ORDER BY userid")
            .fetch_all(&self.pool)
            .await?;
        Ok(users)
    }

    /// Look up a user's display name
    pub async fn get_name(&self, id: i32) -> AppResult<Option<String>> {
        let name =
            sqlx::query_scalar::<_, String>("SELECT name FROM useraccount WHERE userid = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(name)
    }
}
