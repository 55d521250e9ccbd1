use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::{CalendarDay, CheckIn, NewCheckIn};
use crate::error::AppResult;

use super::traits::CheckInRepository;

pub struct CheckInRepositoryImpl {
    pool: PgPool,
}

impl CheckInRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CheckInRepository for CheckInRepositoryImpl {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<CheckIn>> {
        let check_in = sqlx::query_as::<_, CheckIn>(
            "SELECT id, user_id, gym_id, created_at, validated_at FROM check_ins WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(check_in)
    }

    async fn find_by_user_id_on_date(
        &self,
        user_id: &str,
        day: &CalendarDay,
    ) -> AppResult<Option<CheckIn>> {
        let check_in = sqlx::query_as::<_, CheckIn>(
            r#"
            SELECT id, user_id, gym_id, created_at, validated_at
            FROM check_ins
            WHERE user_id = $1 AND created_at >= $2 AND created_at < $3
            ORDER BY created_at ASC
            LIMIT 1
            "#,
        )
        .bind(user_id)
        .bind(day.start)
        .bind(day.end)
        .fetch_optional(&self.pool)
        .await?;
        Ok(check_in)
    }

    async fn create(&self, check_in: &NewCheckIn) -> AppResult<CheckIn> {
        let created = sqlx::query_as::<_, CheckIn>(
            r#"
            INSERT INTO check_ins (id, user_id, gym_id, created_at)
            VALUES ($1, $2, $3, $4)
            RETURNING id, user_id, gym_id, created_at, validated_at
            "#,
        )
        .bind(Uuid::new_v4().to_string())
        .bind(&check_in.user_id)
        .bind(&check_in.gym_id)
        .bind(check_in.created_at)
        .fetch_one(&self.pool)
        .await?;
        Ok(created)
    }
}
