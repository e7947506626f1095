//! Publishers repository for database operations

use sqlx::{Pool, Postgres};

use crate::{error::AppResult, models::Publisher};

#[derive(Clone)]
pub struct PublishersRepository {
    pool: Pool<Postgres>,
}

impl PublishersRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all publishers
    pub async fn list_all(&self) -> AppResult<Vec<Publisher>> {
        let publishers = sqlx::query_as::<_, Publisher>("SELECT * FROM publisher ORDER BY publisherid")
            .fetch_all(&self.pool)
            .await?;
        Ok(publishers)
    }

    /// Look up a publisher's display name
    pub async fn get_name(&self, id: i32) -> AppResult<Option<String>> {
        let name =
            sqlx::query_scalar::<_, String>("SELECT name FROM publisher WHERE publisherid = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(name)
    }
}
