use chrono::{Duration, Utc};
use sea_orm::{ActiveValue::Set, ColumnTrait, Condition, QueryFilter, QueryOrder};
use uuid::Uuid;

use crate::error::ServiceError;
use crate::models::portfolio::{
    self, CreatePortfolio, DisplayNames, EditAvatar, EditBiography, EditCvUrl, EditMainColor,
    EditNames, EditRating, EditTheme, EditVisibility, PortfolioAggregate,
};
use crate::models::{portfolio_download, portfolio_link, portfolio_view, project, social_media_link};
use crate::registry::Repositories;

/// Portfolio domain operations.
///
/// Every mutation has the same shape: load the target (absence is an error
/// here, unlike at the repository boundary), apply the change, persist via
/// `Repository::update`, and turn a `false` return into `NotUpdated`.
pub struct PortfolioService {
    repos: Repositories,
}

impl PortfolioService {
    pub fn new(repos: Repositories) -> Self {
        Self { repos }
    }

    /// Load a portfolio or fail with `NotFound`.
    async fn require(&self, id: Uuid) -> Result<portfolio::Model, ServiceError> {
        self.repos
            .portfolios
            .get_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("portfolio {id}")))
    }

    async fn persist(
        &self,
        id: Uuid,
        active: portfolio::ActiveModel,
    ) -> Result<portfolio::Model, ServiceError> {
        if !self.repos.portfolios.update(active).await {
            return Err(ServiceError::NotUpdated(format!("portfolio {id}")));
        }
        self.require(id).await
    }

    /// Create the one portfolio a person may have. The unique index on
    /// `person_id` backs up this pre-check against a create/create race.
    pub async fn create_portfolio(
        &self,
        person_id: &str,
        input: CreatePortfolio,
    ) -> Result<portfolio::Model, ServiceError> {
        let existing = self
            .repos
            .portfolios
            .first_or_default(Condition::all().add(portfolio::Column::PersonId.eq(person_id)))
            .await?;
        if existing.is_some() {
            return Err(ServiceError::AlreadyExists(format!(
                "portfolio for person {person_id}"
            )));
        }

        let active = portfolio::ActiveModel {
            id: Set(Uuid::new_v4()),
            person_id: Set(person_id.to_string()),
            names: Set(DisplayNames(input.names)),
            biography: Set(input.biography),
            rating: Set(0.0),
            avatar_url: Set(input.avatar_url),
            background_theme: Set(input
                .background_theme
                .unwrap_or_else(|| "default".to_string())),
            main_color: Set(input.main_color.unwrap_or_else(|| "#000000".to_string())),
            likes: Set(0),
            is_public: Set(input.is_public.unwrap_or(true)),
            created_at: Set(Utc::now()),
            cv_url: Set(input.cv_url),
            parent_portfolio_id: Set(None),
        };
        Ok(self.repos.portfolios.add(active).await?)
    }

    pub async fn get_portfolio(&self, id: Uuid) -> Result<portfolio::Model, ServiceError> {
        self.require(id).await
    }

    pub async fn get_by_person(&self, person_id: &str) -> Result<portfolio::Model, ServiceError> {
        self.repos
            .portfolios
            .first_or_default(Condition::all().add(portfolio::Column::PersonId.eq(person_id)))
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("portfolio for person {person_id}")))
    }

    /// The portfolio plus every owned collection. Relations are requested
    /// explicitly through the attached query handles — the point lookup
    /// alone never loads them.
    pub async fn get_aggregate(&self, id: Uuid) -> Result<PortfolioAggregate, ServiceError> {
        let target = self.require(id).await?;
        let conn = self.repos.portfolios.connection();

        let social_media_links = self
            .repos
            .social_media_links
            .get_all_attached()
            .filter(social_media_link::Column::PortfolioId.eq(id))
            .all(conn)
            .await?;
        let projects = self
            .repos
            .projects
            .get_all_attached()
            .filter(project::Column::PortfolioId.eq(id))
            .all(conn)
            .await?;
        let share_links = self
            .repos
            .share_links
            .get_all_attached()
            .filter(portfolio_link::Column::PortfolioId.eq(id))
            .all(conn)
            .await?
            .into_iter()
            .map(Into::into)
            .collect();
        let views = self
            .repos
            .views
            .get_all_attached()
            .filter(portfolio_view::Column::PortfolioId.eq(id))
            .order_by_desc(portfolio_view::Column::ViewedAt)
            .all(conn)
            .await?;
        let downloads = self
            .repos
            .downloads
            .get_all_attached()
            .filter(portfolio_download::Column::PortfolioId.eq(id))
            .order_by_desc(portfolio_download::Column::DownloadedAt)
            .all(conn)
            .await?;
        let linked_portfolios = self
            .repos
            .portfolios
            .get_all_attached()
            .filter(portfolio::Column::ParentPortfolioId.eq(id))
            .all(conn)
            .await?;

        Ok(PortfolioAggregate {
            portfolio: target,
            social_media_links,
            projects,
            share_links,
            views,
            downloads,
            linked_portfolios,
        })
    }

    // ── Field edits (update is always invoked, even for a same-value edit) ──

    pub async fn edit_biography(
        &self,
        id: Uuid,
        input: EditBiography,
    ) -> Result<portfolio::Model, ServiceError> {
        let mut active: portfolio::ActiveModel = self.require(id).await?.into();
        active.biography = Set(input.biography);
        self.persist(id, active).await
    }

    pub async fn edit_names(
        &self,
        id: Uuid,
        input: EditNames,
    ) -> Result<portfolio::Model, ServiceError> {
        let mut active: portfolio::ActiveModel = self.require(id).await?.into();
        active.names = Set(DisplayNames(input.names));
        self.persist(id, active).await
    }

    pub async fn edit_rating(
        &self,
        id: Uuid,
        input: EditRating,
    ) -> Result<portfolio::Model, ServiceError> {
        let mut active: portfolio::ActiveModel = self.require(id).await?.into();
        active.rating = Set(input.rating);
        self.persist(id, active).await
    }

    pub async fn edit_avatar(
        &self,
        id: Uuid,
        input: EditAvatar,
    ) -> Result<portfolio::Model, ServiceError> {
        let mut active: portfolio::ActiveModel = self.require(id).await?.into();
        active.avatar_url = Set(input.avatar_url);
        self.persist(id, active).await
    }

    pub async fn edit_background_theme(
        &self,
        id: Uuid,
        input: EditTheme,
    ) -> Result<portfolio::Model, ServiceError> {
        let mut active: portfolio::ActiveModel = self.require(id).await?.into();
        active.background_theme = Set(input.background_theme);
        self.persist(id, active).await
    }

    pub async fn edit_main_color(
        &self,
        id: Uuid,
        input: EditMainColor,
    ) -> Result<portfolio::Model, ServiceError> {
        let mut active: portfolio::ActiveModel = self.require(id).await?.into();
        active.main_color = Set(input.main_color);
        self.persist(id, active).await
    }

    pub async fn set_visibility(
        &self,
        id: Uuid,
        input: EditVisibility,
    ) -> Result<portfolio::Model, ServiceError> {
        let mut active: portfolio::ActiveModel = self.require(id).await?.into();
        active.is_public = Set(input.is_public);
        self.persist(id, active).await
    }

    pub async fn set_cv_url(
        &self,
        id: Uuid,
        input: EditCvUrl,
    ) -> Result<portfolio::Model, ServiceError> {
        let mut active: portfolio::ActiveModel = self.require(id).await?.into();
        active.cv_url = Set(input.cv_url);
        self.persist(id, active).await
    }

    pub async fn increment_likes(&self, id: Uuid) -> Result<portfolio::Model, ServiceError> {
        let current = self.require(id).await?;
        let likes = current.likes.saturating_add(1);
        let mut active: portfolio::ActiveModel = current.into();
        active.likes = Set(likes);
        self.persist(id, active).await
    }

    // ── Social media links ──

    /// Add a link; posting a (platform, value) pair that is already present
    /// is a no-op. Returns the full link list either way.
    pub async fn add_social_media_link(
        &self,
        portfolio_id: Uuid,
        input: social_media_link::CreateSocialMediaLink,
    ) -> Result<Vec<social_media_link::Model>, ServiceError> {
        self.require(portfolio_id).await?;

        let mut existing = self
            .repos
            .social_media_links
            .get_all_attached()
            .filter(social_media_link::Column::PortfolioId.eq(portfolio_id))
            .all(self.repos.social_media_links.connection())
            .await?;

        let duplicate = existing
            .iter()
            .any(|l| l.platform == input.platform && l.value == input.value);
        if duplicate {
            return Ok(existing);
        }

        let added = self
            .repos
            .social_media_links
            .add(social_media_link::ActiveModel {
                id: Set(Uuid::new_v4()),
                portfolio_id: Set(portfolio_id),
                platform: Set(input.platform),
                value: Set(input.value),
            })
            .await?;
        existing.push(added);
        Ok(existing)
    }

    pub async fn get_social_media_links(
        &self,
        portfolio_id: Uuid,
    ) -> Result<Vec<social_media_link::Model>, ServiceError> {
        self.require(portfolio_id).await?;
        Ok(self
            .repos
            .social_media_links
            .get_all_attached()
            .filter(social_media_link::Column::PortfolioId.eq(portfolio_id))
            .all(self.repos.social_media_links.connection())
            .await?)
    }

    /// Remove a link by id. Absence is an error here, so no delete is even
    /// attempted for an unknown id. The caller must own the link's
    /// portfolio.
    pub async fn remove_social_media_link(
        &self,
        link_id: Uuid,
        person_id: &str,
    ) -> Result<(), ServiceError> {
        let link = self
            .repos
            .social_media_links
            .get_by_id(link_id)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("social media link {link_id}")))?;

        let owner = self.require(link.portfolio_id).await?;
        if owner.person_id != person_id {
            return Err(ServiceError::Forbidden(
                "you can only remove links from your own portfolio".to_string(),
            ));
        }

        if !self.repos.social_media_links.delete(link.into()).await {
            return Err(ServiceError::NotDeleted(format!(
                "social media link {link_id}"
            )));
        }
        Ok(())
    }

    // ── Share links ──

    pub async fn create_share_link(
        &self,
        portfolio_id: Uuid,
        input: portfolio_link::CreateShareLink,
    ) -> Result<portfolio_link::ShareLinkResponse, ServiceError> {
        if input.ttl_seconds <= 0 {
            return Err(ServiceError::BadInput(
                "share link ttl must be positive".to_string(),
            ));
        }
        self.require(portfolio_id).await?;

        let now = Utc::now();
        let created = self
            .repos
            .share_links
            .add(portfolio_link::ActiveModel {
                id: Set(Uuid::new_v4()),
                portfolio_id: Set(portfolio_id),
                value: Set(Uuid::new_v4().simple().to_string()),
                created_at: Set(now),
                expires_at: Set(now + Duration::seconds(input.ttl_seconds)),
            })
            .await?;
        Ok(created.into())
    }

    pub async fn get_share_links(
        &self,
        portfolio_id: Uuid,
    ) -> Result<Vec<portfolio_link::ShareLinkResponse>, ServiceError> {
        self.require(portfolio_id).await?;
        let links = self
            .repos
            .share_links
            .get_all_attached()
            .filter(portfolio_link::Column::PortfolioId.eq(portfolio_id))
            .all(self.repos.share_links.connection())
            .await?;
        Ok(links.into_iter().map(Into::into).collect())
    }

    // ── View / download events (append-only) ──

    pub async fn record_view(
        &self,
        portfolio_id: Uuid,
        viewer_id: &str,
    ) -> Result<portfolio_view::Model, ServiceError> {
        self.require(portfolio_id).await?;
        Ok(self
            .repos
            .views
            .add(portfolio_view::ActiveModel {
                id: Set(Uuid::new_v4()),
                portfolio_id: Set(portfolio_id),
                viewer_id: Set(viewer_id.to_string()),
                viewed_at: Set(Utc::now()),
            })
            .await?)
    }

    pub async fn record_download(
        &self,
        portfolio_id: Uuid,
        downloader_id: &str,
    ) -> Result<portfolio_download::Model, ServiceError> {
        self.require(portfolio_id).await?;
        Ok(self
            .repos
            .downloads
            .add(portfolio_download::ActiveModel {
                id: Set(Uuid::new_v4()),
                portfolio_id: Set(portfolio_id),
                downloader_id: Set(downloader_id.to_string()),
                downloaded_at: Set(Utc::now()),
            })
            .await?)
    }

    pub async fn get_views(
        &self,
        portfolio_id: Uuid,
    ) -> Result<Vec<portfolio_view::Model>, ServiceError> {
        self.require(portfolio_id).await?;
        Ok(self
            .repos
            .views
            .get_all_attached()
            .filter(portfolio_view::Column::PortfolioId.eq(portfolio_id))
            .order_by_desc(portfolio_view::Column::ViewedAt)
            .all(self.repos.views.connection())
            .await?)
    }

    pub async fn get_downloads(
        &self,
        portfolio_id: Uuid,
    ) -> Result<Vec<portfolio_download::Model>, ServiceError> {
        self.require(portfolio_id).await?;
        Ok(self
            .repos
            .downloads
            .get_all_attached()
            .filter(portfolio_download::Column::PortfolioId.eq(portfolio_id))
            .order_by_desc(portfolio_download::Column::DownloadedAt)
            .all(self.repos.downloads.connection())
            .await?)
    }

    // ── Linked portfolios (self-referential parent) ──

    pub async fn link_portfolio(
        &self,
        id: Uuid,
        parent_id: Uuid,
    ) -> Result<portfolio::Model, ServiceError> {
        if id == parent_id {
            return Err(ServiceError::BadInput(
                "a portfolio cannot link to itself".to_string(),
            ));
        }
        self.require(parent_id).await?;
        let mut active: portfolio::ActiveModel = self.require(id).await?.into();
        active.parent_portfolio_id = Set(Some(parent_id));
        self.persist(id, active).await
    }

    pub async fn unlink_portfolio(&self, id: Uuid) -> Result<portfolio::Model, ServiceError> {
        let mut active: portfolio::ActiveModel = self.require(id).await?.into();
        active.parent_portfolio_id = Set(None);
        self.persist(id, active).await
    }
}
