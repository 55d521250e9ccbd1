use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::Gym;
use crate::error::AppResult;

use super::traits::GymRepository;

pub struct GymRepositoryImpl {
    pool: PgPool,
}

impl GymRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GymRepository for GymRepositoryImpl {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Gym>> {
        let gym = sqlx::query_as::<_, Gym>(
            "SELECT id, title, description, phone, latitude, longitude FROM gyms WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(gym)
    }

    async fn create(&self, gym: &Gym) -> AppResult<Gym> {
        let created = sqlx::query_as::<_, Gym>(
            r#"
            INSERT INTO gyms (id, title, description, phone, latitude, longitude)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, title, description, phone, latitude, longitude
            "#,
        )
        .bind(&gym.id)
        .bind(&gym.title)
        .bind(&gym.description)
        .bind(&gym.phone)
        .bind(gym.latitude)
        .bind(gym.longitude)
        .fetch_one(&self.pool)
        .await?;
        Ok(created)
    }
}
