use crate::{
    error::Error as FlowschedError,
    server::{ApiResponse, AppState},
};
use actix_web::{HttpResponse, http::StatusCode, web};
use serde_derive::Deserialize;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowsCancelParams {
    pub instance_id: String,
}

/// Cancels all scheduled workflows bound to the specified running instance id by removing the
/// matched records from the store, one removal per record.
pub async fn workflows_cancel(
    state: web::Data<AppState>,
    query: web::Query<WorkflowsCancelParams>,
) -> Result<HttpResponse, FlowschedError> {
    let instance_id = &query.instance_id;
    let Some(removed) = state
        .api
        .scheduling()
        .cancel_by_running_instance_id(instance_id)
        .await?
    else {
        return Ok(HttpResponse::NotFound().json(ApiResponse::<String>::new(
            StatusCode::NOT_FOUND,
            "No scheduled workflow found for instanceId",
            None,
        )));
    };

    tracing::debug!(
        "Removed {} scheduled workflow record(s) for instance {instance_id}.",
        removed.len()
    );

    Ok(HttpResponse::Ok().json(ApiResponse::new(
        StatusCode::OK,
        "Scheduled workflow(s) cancelled and deleted",
        Some(instance_id.clone()),
    )))
}
