use crate::{
    error::Error as FlowschedError,
    server::{ApiResponse, AppState},
};
use actix_web::{HttpResponse, http::StatusCode, web};

pub async fn workflows_list(state: web::Data<AppState>) -> Result<HttpResponse, FlowschedError> {
    let workflows = state.api.scheduling().get_scheduled_workflows().await?;
    Ok(HttpResponse::Ok().json(ApiResponse::new(
        StatusCode::OK,
        "Scheduled workflows retrieved",
        Some(workflows),
    )))
}
