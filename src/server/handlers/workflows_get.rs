use crate::{
    error::Error as FlowschedError,
    server::{ApiResponse, AppState},
};
use actix_web::{HttpResponse, http::StatusCode, web};
use uuid::Uuid;

pub async fn workflows_get(
    state: web::Data<AppState>,
    workflow_id: web::Path<Uuid>,
) -> Result<HttpResponse, FlowschedError> {
    Ok(
        match state
            .api
            .scheduling()
            .get_scheduled_workflow(*workflow_id)
            .await?
        {
            Some(workflow) => HttpResponse::Ok().json(ApiResponse::new(
                StatusCode::OK,
                "Scheduled workflow retrieved",
                Some(workflow),
            )),
            None => HttpResponse::NotFound().json(ApiResponse::<String>::new(
                StatusCode::NOT_FOUND,
                "No scheduled workflow found for id",
                None,
            )),
        },
    )
}
