use serde_derive::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

/// A workflow execution scheduled for a future or recurring run. Removing the record is the only
/// way to cancel the run: the component that executes workflows only acts on records that still
/// exist in the store.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledWorkflow {
    /// Unique id of the record, assigned by the store.
    pub id: Uuid,
    /// Human-readable name of the workflow.
    pub name: String,
    /// Id of the running workflow instance this schedule belongs to. Several schedule records can
    /// share the same running instance id.
    pub running_instance_id: String,
    /// Cron pattern describing when the workflow should run.
    pub schedule: String,
    /// Timestamp of when the record was created.
    #[serde(with = "time::serde::timestamp")]
    pub created_at: OffsetDateTime,
}

#[cfg(test)]
mod tests {
    use crate::scheduling::ScheduledWorkflow;
    use insta::assert_json_snapshot;
    use time::OffsetDateTime;
    use uuid::uuid;

    #[test]
    fn serialization() -> anyhow::Result<()> {
        let workflow = ScheduledWorkflow {
            id: uuid!("00000000-0000-0000-0000-000000000001"),
            name: "nightly-report".to_string(),
            running_instance_id: "wf-42".to_string(),
            schedule: "0 0 3 * * *".to_string(),
            // January 1, 2000 10:00:00
            created_at: OffsetDateTime::from_unix_timestamp(946720800)?,
        };

        assert_json_snapshot!(workflow, @r###"
        {
          "id": "00000000-0000-0000-0000-000000000001",
          "name": "nightly-report",
          "runningInstanceId": "wf-42",
          "schedule": "0 0 3 * * *",
          "createdAt": 946720800
        }
        "###);

        Ok(())
    }

    #[test]
    fn deserialization() -> anyhow::Result<()> {
        let workflow: ScheduledWorkflow = serde_json::from_str(
            r#"
        {
          "id": "00000000-0000-0000-0000-000000000001",
          "name": "nightly-report",
          "runningInstanceId": "wf-42",
          "schedule": "0 0 3 * * *",
          "createdAt": 946720800
        }
        "#,
        )?;

        assert_eq!(
            workflow,
            ScheduledWorkflow {
                id: uuid!("00000000-0000-0000-0000-000000000001"),
                name: "nightly-report".to_string(),
                running_instance_id: "wf-42".to_string(),
                schedule: "0 0 3 * * *".to_string(),
                created_at: OffsetDateTime::from_unix_timestamp(946720800)?,
            }
        );

        Ok(())
    }
}
