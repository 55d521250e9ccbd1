use std::sync::Arc;

use actix_web::{web, HttpResponse};
use sqlx::PgPool;

use crate::application::CheckInService;
use crate::error::{AppError, AppResult};

pub mod check_ins;

#[derive(Clone)]
pub struct AppState {
    pub check_in_service: Arc<CheckInService>,
    pub db_pool: Option<PgPool>,
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/api/v1").configure(check_ins::configure))
        .route("/health", web::get().to(health))
        .route("/ready", web::get().to(ready));
}

async fn health() -> &'static str {
    "ok"
}

async fn ready(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    if let Some(pool) = &state.db_pool {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(pool)
            .await
            .map_err(|e| AppError::ServiceUnavailable {
                service: "database".to_string(),
                message: format!("Service not ready: {e}"),
            })?;
    }
    Ok(HttpResponse::Ok().body("ready"))
}
