use sqlx::PgPool;

use crate::achievements::catalog::AchievementCatalog;
use crate::config::{ApiConfig, Environment};

#[derive(Clone)]
pub struct ApiState {
    pub pool: PgPool,
    pub environment: Environment,
    /// Badge catalog, loaded once at startup. Awarding consults this map
    /// instead of looking badges up by name per call.
    pub catalog: AchievementCatalog,
}

impl ApiState {
    pub async fn new(config: &ApiConfig, pool: PgPool) -> anyhow::Result<Self> {
        let catalog = AchievementCatalog::load(&pool).await?;

        Ok(Self {
            pool,
            environment: config.env,
            catalog,
        })
    }
}

impl std::fmt::Debug for ApiState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiState")
            .field("environment", &self.environment)
            .field("catalog", &self.catalog)
            .finish_non_exhaustive()
    }
}
