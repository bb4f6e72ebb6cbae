use crate::{config::Config, database::Database};

/// Collection of the APIs that the HTTP handlers consume. Module-specific APIs are implemented as
/// extensions in the corresponding modules.
#[derive(Clone)]
pub struct Api {
    pub config: Config,
    pub db: Database,
}

impl Api {
    /// Instantiates APIs collection with the specified config and database.
    pub fn new(config: Config, db: Database) -> Self {
        Self { config, db }
    }
}

impl AsRef<Api> for Api {
    fn as_ref(&self) -> &Self {
        self
    }
}
