use crate::{api::Api, scheduling::ScheduledWorkflow};
use futures::{StreamExt, pin_mut};
use serde_derive::Deserialize;
use std::time::Instant;
use time::OffsetDateTime;
use tracing::{debug, info};
use uuid::Uuid;

/// Defines a maximum number of scheduled workflows that can be retrieved from the database at once.
const MAX_SCHEDULED_WORKFLOWS_PAGE_SIZE: usize = 1000;

/// Parameters of the workflow to schedule.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleWorkflowParams {
    /// Human-readable name of the workflow.
    pub name: String,
    /// Id of the running workflow instance the schedule belongs to.
    pub running_instance_id: String,
    /// Cron pattern describing when the workflow should run.
    pub schedule: String,
}

pub struct SchedulingApiExt<'a> {
    api: &'a Api,
}

impl<'a> SchedulingApiExt<'a> {
    /// Creates Scheduling API.
    pub fn new(api: &'a Api) -> Self {
        Self { api }
    }

    /// Persists a new scheduled workflow record built from the specified parameters.
    pub async fn schedule(
        &self,
        params: ScheduleWorkflowParams,
    ) -> anyhow::Result<ScheduledWorkflow> {
        let workflow = ScheduledWorkflow {
            id: Uuid::now_v7(),
            name: params.name,
            running_instance_id: params.running_instance_id,
            schedule: params.schedule,
            created_at: OffsetDateTime::now_utc(),
        };
        self.api.db.insert_scheduled_workflow(&workflow).await?;

        debug!(workflow.id = %workflow.id, "Scheduled workflow.");

        Ok(workflow)
    }

    /// Retrieves a scheduled workflow record using the record id.
    pub async fn get_scheduled_workflow(
        &self,
        id: Uuid,
    ) -> anyhow::Result<Option<ScheduledWorkflow>> {
        self.api.db.get_scheduled_workflow(id).await
    }

    /// Retrieves all scheduled workflow records bound to the specified running instance id.
    pub async fn get_by_running_instance_id(
        &self,
        running_instance_id: &str,
    ) -> anyhow::Result<Vec<ScheduledWorkflow>> {
        self.api
            .db
            .get_scheduled_workflows_by_instance_id(running_instance_id)
            .await
    }

    /// Retrieves all scheduled workflow records, in creation order.
    pub async fn get_scheduled_workflows(&self) -> anyhow::Result<Vec<ScheduledWorkflow>> {
        let workflows_stream = self
            .api
            .db
            .get_scheduled_workflows(MAX_SCHEDULED_WORKFLOWS_PAGE_SIZE);
        pin_mut!(workflows_stream);

        let mut workflows = vec![];
        while let Some(workflow) = workflows_stream.next().await {
            workflows.push(workflow?);
        }

        Ok(workflows)
    }

    /// Cancels every scheduled workflow bound to the specified running instance id by removing the
    /// matched records one by one, and returns ids of the removed records (`None` if nothing
    /// matched). The removals aren't wrapped into a transaction: a failure mid-batch leaves
    /// earlier removals in place and propagates to the caller.
    pub async fn cancel_by_running_instance_id(
        &self,
        running_instance_id: &str,
    ) -> anyhow::Result<Option<Vec<Uuid>>> {
        let cancel_start = Instant::now();
        let scheduled = self.get_by_running_instance_id(running_instance_id).await?;
        if scheduled.is_empty() {
            return Ok(None);
        }

        let mut removed = Vec::with_capacity(scheduled.len());
        for workflow in scheduled {
            self.api.db.remove_scheduled_workflow(workflow.id).await?;
            removed.push(workflow.id);
        }

        info!(
            "Cancelled {} scheduled workflow(s) for instance {running_instance_id} ({} elapsed).",
            removed.len(),
            humantime::format_duration(cancel_start.elapsed())
        );

        Ok(Some(removed))
    }
}

impl Api {
    /// Returns an API to work with scheduled workflows.
    pub fn scheduling(&self) -> SchedulingApiExt<'_> {
        SchedulingApiExt::new(self)
    }
}
