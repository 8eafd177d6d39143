//! In-memory badge catalog.
//!
//! The achievements table is static reference data, so it is read once at
//! startup into an immutable map from badge identifier to row id. A badge
//! the table does not carry is simply never awarded; the load logs which
//! ones those are so a missing seed row is visible instead of silent.

use std::collections::HashMap;
use std::sync::Arc;

use pb_core::Badge;
use sqlx::PgPool;
use uuid::Uuid;

use pb_db::repositories::achievement;

/// Immutable badge-to-row mapping, cheap to clone into request state.
#[derive(Clone, Debug, Default)]
pub struct AchievementCatalog {
    ids: Arc<HashMap<Badge, Uuid>>,
}

impl AchievementCatalog {
    /// Read the catalog from the database.
    ///
    /// Catalog rows that do not correspond to a known badge are ignored;
    /// known badges without a row are logged and stay unawardable.
    pub async fn load(pool: &PgPool) -> Result<Self, sqlx::Error> {
        let rows = achievement::find_all(pool).await?;

        let mut ids = HashMap::new();
        for row in rows {
            if let Some(badge) = Badge::from_name(&row.name) {
                ids.insert(badge, row.id);
            }
        }

        for badge in Badge::ALL {
            if !ids.contains_key(&badge) {
                tracing::warn!("badge '{badge}' has no catalog row and will never be awarded");
            }
        }

        tracing::info!("achievement catalog loaded with {} badges", ids.len());

        Ok(Self { ids: Arc::new(ids) })
    }

    /// Row id for a badge, or `None` when the catalog does not carry it.
    pub fn id_of(&self, badge: Badge) -> Option<Uuid> {
        self.ids.get(&badge).copied()
    }

    #[cfg(test)]
    pub(crate) fn from_entries(entries: impl IntoIterator<Item = (Badge, Uuid)>) -> Self {
        Self {
            ids: Arc::new(entries.into_iter().collect()),
        }
    }
}
