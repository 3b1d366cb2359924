use chrono::Utc;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// SeaORM entity for the `portfolio_links` table (sharing links).
///
/// Expiration is never stored as a flag: `is_expired` is derived from the
/// clock at read time in [`ShareLinkResponse`].
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "portfolio_links")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub portfolio_id: Uuid,
    pub value: String,
    pub created_at: DateTimeUtc,
    pub expires_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::portfolio::Entity",
        from = "Column::PortfolioId",
        to = "super::portfolio::Column::Id"
    )]
    Portfolio,
}

impl Related<super::portfolio::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Portfolio.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// ── DTOs ──

#[derive(Debug, Clone, Deserialize)]
pub struct CreateShareLink {
    /// Lifetime of the link in seconds, counted from creation.
    pub ttl_seconds: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ShareLinkResponse {
    pub id: Uuid,
    pub portfolio_id: Uuid,
    pub value: String,
    pub created_at: DateTimeUtc,
    pub expires_at: DateTimeUtc,
    pub is_expired: bool,
}

impl From<Model> for ShareLinkResponse {
    fn from(m: Model) -> Self {
        let is_expired = m.expires_at < Utc::now();
        Self {
            id: m.id,
            portfolio_id: m.portfolio_id,
            value: m.value,
            created_at: m.created_at,
            expires_at: m.expires_at,
            is_expired,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use uuid::Uuid;

    fn link(expires_at: DateTimeUtc) -> Model {
        Model {
            id: Uuid::new_v4(),
            portfolio_id: Uuid::new_v4(),
            value: "share-abc".to_string(),
            created_at: Utc::now() - Duration::hours(1),
            expires_at,
        }
    }

    #[test]
    fn expired_flag_derives_from_clock() {
        let live = ShareLinkResponse::from(link(Utc::now() + Duration::hours(1)));
        assert!(!live.is_expired);

        let stale = ShareLinkResponse::from(link(Utc::now() - Duration::seconds(5)));
        assert!(stale.is_expired);
    }
}
