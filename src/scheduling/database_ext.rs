mod raw_scheduled_workflow;

use self::raw_scheduled_workflow::RawScheduledWorkflow;
use crate::{database::Database, scheduling::ScheduledWorkflow};
use async_stream::try_stream;
use futures::Stream;
use sqlx::{query, query_as, query_scalar};
use uuid::Uuid;

/// Extends primary database with the workflow scheduling-related methods.
impl Database {
    /// Retrieves all scheduled workflows bound to the specified running instance id from the
    /// `scheduled_workflows` table, in creation order.
    pub async fn get_scheduled_workflows_by_instance_id(
        &self,
        running_instance_id: &str,
    ) -> anyhow::Result<Vec<ScheduledWorkflow>> {
        Ok(query_as::<_, RawScheduledWorkflow>(
            r#"
SELECT id, name, running_instance_id, schedule, created_at
FROM scheduled_workflows
WHERE running_instance_id = $1
ORDER BY created_at
            "#,
        )
        .bind(running_instance_id)
        .fetch_all(&self.pool)
        .await?
        .into_iter()
        .map(ScheduledWorkflow::from)
        .collect())
    }

    /// Retrieves a scheduled workflow from the `scheduled_workflows` table using the record id.
    pub async fn get_scheduled_workflow(
        &self,
        id: Uuid,
    ) -> anyhow::Result<Option<ScheduledWorkflow>> {
        Ok(query_as::<_, RawScheduledWorkflow>(
            r#"
SELECT id, name, running_instance_id, schedule, created_at
FROM scheduled_workflows
WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .map(ScheduledWorkflow::from))
    }

    /// Inserts a scheduled workflow into the `scheduled_workflows` table, fails if a record with
    /// the same id already exists.
    pub async fn insert_scheduled_workflow(
        &self,
        workflow: &ScheduledWorkflow,
    ) -> anyhow::Result<()> {
        query(
            r#"
INSERT INTO scheduled_workflows (id, name, running_instance_id, schedule, created_at)
VALUES ( $1, $2, $3, $4, $5 )
            "#,
        )
        .bind(workflow.id)
        .bind(&workflow.name)
        .bind(&workflow.running_instance_id)
        .bind(&workflow.schedule)
        .bind(workflow.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Removes a scheduled workflow with the specified id from the `scheduled_workflows` table,
    /// returning the id of the removed record if there was one.
    pub async fn remove_scheduled_workflow(&self, id: Uuid) -> anyhow::Result<Option<Uuid>> {
        Ok(query_scalar::<_, Uuid>(
            r#"
DELETE FROM scheduled_workflows
WHERE id = $1
RETURNING id
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?)
    }

    /// Retrieves scheduled workflows from the `scheduled_workflows` table page by page. Record ids
    /// are time-ordered (UUID v7), so id order matches creation order.
    pub fn get_scheduled_workflows(
        &self,
        page_size: usize,
    ) -> impl Stream<Item = anyhow::Result<ScheduledWorkflow>> + '_ {
        let page_limit = page_size as i64;
        try_stream! {
            let mut last_id = Uuid::nil();
            let mut conn = self.pool.acquire().await?;
            loop {
                let workflows = query_as::<_, RawScheduledWorkflow>(
                    r#"
SELECT id, name, running_instance_id, schedule, created_at
FROM scheduled_workflows
WHERE id > $1
ORDER BY id
LIMIT $2
                    "#,
                )
                .bind(last_id)
                .bind(page_limit)
                .fetch_all(&mut *conn)
                .await?;

                let is_last_page = workflows.len() < page_size;
                for workflow in workflows {
                    last_id = workflow.id;
                    yield ScheduledWorkflow::from(workflow);
                }

                if is_last_page {
                    break;
                }
            }
        }
    }
}
