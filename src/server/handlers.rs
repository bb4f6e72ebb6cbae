mod status_get;
mod workflows_cancel;
mod workflows_get;
mod workflows_list;
mod workflows_schedule;

pub use self::{
    status_get::status_get, workflows_cancel::workflows_cancel, workflows_get::workflows_get,
    workflows_list::workflows_list, workflows_schedule::workflows_schedule,
};
