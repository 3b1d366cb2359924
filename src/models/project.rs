use std::collections::BTreeSet;

use sea_orm::FromJsonQueryResult;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// SeaORM entity for the `projects` table.
///
/// Every project belongs to exactly one portfolio. `source_code_link` is
/// required and deduplicated against sibling projects on insert; categories
/// are a true set (no duplicates, order-free).
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "projects")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub portfolio_id: Uuid,
    pub source_code_link: String,
    pub hosted_link: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    #[sea_orm(column_type = "JsonBinary")]
    pub images: ImageList,
    #[sea_orm(column_type = "JsonBinary")]
    pub categories: CategorySet,
}

/// Image URLs for the project card, stored as a JSON list.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct ImageList(pub Vec<String>);

/// Category tags, stored as a JSON array but modeled as a set.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct CategorySet(pub BTreeSet<String>);

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
pub struct CreateProject {
    pub source_code_link: String,
    pub hosted_link: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub categories: BTreeSet<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EditDescription {
    pub description: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EditHostedLink {
    pub hosted_link: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EditImages {
    pub images: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EditCategories {
    pub categories: BTreeSet<String>,
}
