use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::api::dtos::{CheckInResponse, CreateCheckInRequest};
use crate::api::routes::AppState;
use crate::application::CheckInInput;
use crate::error::AppResult;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/gyms").route("/{gym_id}/check-ins", web::post().to(create_check_in)));
}

async fn create_check_in(
    state: web::Data<AppState>,
    path: web::Path<String>,
    payload: web::Json<CreateCheckInRequest>,
) -> AppResult<HttpResponse> {
    payload.validate()?;
    let request = payload.into_inner();

    let output = state
        .check_in_service
        .execute(CheckInInput {
            user_id: request.user_id,
            gym_id: path.into_inner(),
            user_latitude: request.latitude,
            user_longitude: request.longitude,
        })
        .await?;

    Ok(HttpResponse::Created().json(CheckInResponse {
        check_in: output.check_in.into(),
    }))
}
