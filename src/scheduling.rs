mod api_ext;
mod cron_ext;
mod database_ext;
mod scheduled_workflow;

pub use self::{
    api_ext::ScheduleWorkflowParams, cron_ext::CronExt, scheduled_workflow::ScheduledWorkflow,
};
