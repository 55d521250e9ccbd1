use std::sync::Arc;
use std::time::Instant;

use actix_web::dev::Service as _;
use actix_web::http::header::{HeaderName, HeaderValue};
use actix_web::{middleware::Logger, web, App, HttpServer};
use anyhow::Context;
use gym_check_in::api::routes::{self, AppState};
use gym_check_in::application::CheckInService;
use gym_check_in::config::AppConfig;
use gym_check_in::infrastructure::db::{migrations::run_migrations, pool::create_pool};
use gym_check_in::infrastructure::repositories::{CheckInRepositoryImpl, GymRepositoryImpl};
use gym_check_in::infrastructure::SystemClock;
use tracing::info;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};
use uuid::Uuid;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env().context("failed to load application configuration")?;
    config.validate().context("invalid application configuration")?;
    let day_offset = config.check_in.day_offset()?;

    let registry = tracing_subscriber::registry().with(EnvFilter::new(&config.logging.level));
    if config.logging.json_format {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_span_list(true),
            )
            .init();
    } else {
        registry.with(fmt::layer()).init();
    }

    let pool = create_pool(&config.database)
        .await
        .context("failed to create database pool")?;
    run_migrations(&pool)
        .await
        .context("database migrations failed")?;

    let gym_repo = Arc::new(GymRepositoryImpl::new(pool.clone()));
    let check_in_repo = Arc::new(CheckInRepositoryImpl::new(pool.clone()));

    let state = AppState {
        check_in_service: Arc::new(
            CheckInService::new(check_in_repo, gym_repo)
                .with_clock(Arc::new(SystemClock))
                .with_day_offset(day_offset),
        ),
        db_pool: Some(pool),
    };

    info!(
        host = %config.app.host,
        port = config.app.port,
        environment = %config.app.environment,
        day_offset = %day_offset,
        "starting gym check-in service"
    );

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap_fn(|req, srv| {
                let request_id = Uuid::new_v4().to_string();
                let path = req.path().to_string();
                let method = req.method().to_string();
                let start = Instant::now();

                let fut = srv.call(req);
                async move {
                    let mut response = fut.await?;
                    response.headers_mut().insert(
                        HeaderName::from_static("x-request-id"),
                        HeaderValue::from_str(&request_id)
                            .unwrap_or_else(|_| HeaderValue::from_static("invalid-request-id")),
                    );

                    info!(
                        request_id = %request_id,
                        method = %method,
                        path = %path,
                        status = response.status().as_u16(),
                        latency_ms = start.elapsed().as_millis() as u64,
                        "request completed"
                    );
                    Ok(response)
                }
            })
            .app_data(web::Data::new(state.clone()))
            .configure(routes::configure)
    })
    .bind((config.app.host.clone(), config.app.port))?
    .run()
    .await?;

    Ok(())
}
