use sea_orm::FromJsonQueryResult;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// SeaORM entity for the `portfolios` table.
///
/// One portfolio per person (`person_id` is unique). The portfolio is the
/// aggregate root: projects, social links, share links, views and downloads
/// all hang off it and are cascade-deleted with it. `parent_portfolio_id` is
/// a self-reference used for "linked portfolios" and does not cascade.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "portfolios")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub person_id: String,
    #[sea_orm(column_type = "JsonBinary")]
    pub names: DisplayNames,
    #[sea_orm(column_type = "Text")]
    pub biography: String,
    #[sea_orm(column_type = "Double")]
    pub rating: f64,
    pub avatar_url: Option<String>,
    pub background_theme: String,
    pub main_color: String,
    pub likes: i32,
    pub is_public: bool,
    pub created_at: DateTimeUtc,
    pub cv_url: Option<String>,
    pub parent_portfolio_id: Option<Uuid>,
}

/// Display names shown on the portfolio page, stored as a JSON list.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct DisplayNames(pub Vec<String>);

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::project::Entity")]
    Projects,
    #[sea_orm(has_many = "super::social_media_link::Entity")]
    SocialMediaLinks,
    #[sea_orm(has_many = "super::portfolio_link::Entity")]
    ShareLinks,
    #[sea_orm(has_many = "super::portfolio_view::Entity")]
    Views,
    #[sea_orm(has_many = "super::portfolio_download::Entity")]
    Downloads,
}

impl Related<super::project::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Projects.def()
    }
}

impl Related<super::social_media_link::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SocialMediaLinks.def()
    }
}

impl Related<super::portfolio_link::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ShareLinks.def()
    }
}

impl Related<super::portfolio_view::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Views.def()
    }
}

impl Related<super::portfolio_download::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Downloads.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// ── DTOs ──

#[derive(Debug, Clone, Deserialize)]
pub struct CreatePortfolio {
    pub names: Vec<String>,
    pub biography: String,
    pub avatar_url: Option<String>,
    pub background_theme: Option<String>,
    pub main_color: Option<String>,
    pub is_public: Option<bool>,
    pub cv_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EditBiography {
    pub biography: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EditNames {
    pub names: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EditRating {
    pub rating: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EditAvatar {
    pub avatar_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EditTheme {
    pub background_theme: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EditMainColor {
    pub main_color: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EditVisibility {
    pub is_public: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EditCvUrl {
    pub cv_url: Option<String>,
}

/// The full aggregate: the portfolio row plus every owned collection, loaded
/// explicitly (the point-lookup path never loads relations).
#[derive(Debug, Serialize)]
pub struct PortfolioAggregate {
    #[serde(flatten)]
    pub portfolio: Model,
    pub social_media_links: Vec<super::social_media_link::Model>,
    pub projects: Vec<super::project::Model>,
    pub share_links: Vec<super::portfolio_link::ShareLinkResponse>,
    pub views: Vec<super::portfolio_view::Model>,
    pub downloads: Vec<super::portfolio_download::Model>,
    pub linked_portfolios: Vec<Model>,
}
