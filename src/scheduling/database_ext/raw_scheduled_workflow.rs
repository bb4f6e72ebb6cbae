use crate::scheduling::ScheduledWorkflow;
use time::OffsetDateTime;
use uuid::Uuid;

/// Raw database representation of the scheduled workflow record.
#[derive(sqlx::FromRow, Debug, Clone, PartialEq)]
pub(super) struct RawScheduledWorkflow {
    pub id: Uuid,
    pub name: String,
    pub running_instance_id: String,
    pub schedule: String,
    pub created_at: OffsetDateTime,
}

impl From<RawScheduledWorkflow> for ScheduledWorkflow {
    fn from(raw: RawScheduledWorkflow) -> Self {
        Self {
            id: raw.id,
            name: raw.name,
            running_instance_id: raw.running_instance_id,
            schedule: raw.schedule,
            created_at: raw.created_at,
        }
    }
}
