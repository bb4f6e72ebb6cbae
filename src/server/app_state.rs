use crate::{
    api::Api,
    config::Config,
    server::status::{Status, StatusLevel},
};
use std::sync::RwLock;

pub struct AppState {
    pub config: Config,
    pub status: RwLock<Status>,
    pub api: Api,
}

impl AppState {
    pub fn new(api: Api) -> Self {
        let config = api.config.clone();
        Self {
            status: RwLock::new(Status {
                version: config.version.clone(),
                level: StatusLevel::Available,
            }),
            config,
            api,
        }
    }
}
