use crate::{
    error::Error as FlowschedError,
    scheduling::{CronExt, ScheduleWorkflowParams},
    server::{ApiResponse, AppState},
};
use actix_web::{HttpResponse, http::StatusCode, web};
use anyhow::anyhow;
use croner::Cron;
use tracing::error;

/// Validates the scheduling parameters and persists a new scheduled workflow record.
pub async fn workflows_schedule(
    state: web::Data<AppState>,
    body_params: web::Json<ScheduleWorkflowParams>,
) -> Result<HttpResponse, FlowschedError> {
    let params = body_params.into_inner();
    if params.name.trim().is_empty() {
        return Err(FlowschedError::client("The workflow name cannot be empty."));
    }
    if params.running_instance_id.trim().is_empty() {
        return Err(FlowschedError::client(
            "The runningInstanceId cannot be empty.",
        ));
    }
    if let Err(err) = Cron::parse_pattern(&params.schedule) {
        error!("Failed to parse workflow schedule: {err}");
        return Err(FlowschedError::client_with_root_cause(
            anyhow!(err).context("Invalid workflow schedule."),
        ));
    }

    let workflow = state.api.scheduling().schedule(params).await?;
    Ok(HttpResponse::Created().json(ApiResponse::new(
        StatusCode::CREATED,
        "Workflow scheduled",
        Some(workflow),
    )))
}
