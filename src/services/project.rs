use std::collections::HashSet;

use sea_orm::{ActiveValue::Set, ColumnTrait, QueryFilter};
use uuid::Uuid;

use crate::error::ServiceError;
use crate::models::project::{
    self, CategorySet, CreateProject, EditCategories, EditDescription, EditHostedLink, EditImages,
    ImageList,
};
use crate::registry::Repositories;

/// Project domain operations. Same boundary contract as the portfolio
/// service: lookups are required-or-fail, write no-ops become `NotUpdated`
/// or `NotDeleted`.
pub struct ProjectService {
    repos: Repositories,
}

impl ProjectService {
    pub fn new(repos: Repositories) -> Self {
        Self { repos }
    }

    async fn require(&self, id: Uuid) -> Result<project::Model, ServiceError> {
        self.repos
            .projects
            .get_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("project {id}")))
    }

    async fn require_portfolio(&self, portfolio_id: Uuid) -> Result<(), ServiceError> {
        self.repos
            .portfolios
            .get_by_id(portfolio_id)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("portfolio {portfolio_id}")))?;
        Ok(())
    }

    async fn persist(
        &self,
        id: Uuid,
        active: project::ActiveModel,
    ) -> Result<project::Model, ServiceError> {
        if !self.repos.projects.update(active).await {
            return Err(ServiceError::NotUpdated(format!("project {id}")));
        }
        self.require(id).await
    }

    /// Add a batch of projects to a portfolio. A project whose source link
    /// already exists on the portfolio (or earlier in the same batch) is
    /// skipped — duplicate source links are a no-op. Each insert commits on
    /// its own, so a failure partway leaves the earlier rows in place.
    pub async fn add_projects(
        &self,
        portfolio_id: Uuid,
        inputs: Vec<CreateProject>,
    ) -> Result<Vec<project::Model>, ServiceError> {
        self.require_portfolio(portfolio_id).await?;

        let mut siblings = self
            .repos
            .projects
            .get_all_attached()
            .filter(project::Column::PortfolioId.eq(portfolio_id))
            .all(self.repos.projects.connection())
            .await?;
        let mut seen: HashSet<String> = siblings
            .iter()
            .map(|p| p.source_code_link.clone())
            .collect();

        for input in inputs {
            if !seen.insert(input.source_code_link.clone()) {
                continue;
            }
            let added = self
                .repos
                .projects
                .add(project::ActiveModel {
                    id: Set(Uuid::new_v4()),
                    portfolio_id: Set(portfolio_id),
                    source_code_link: Set(input.source_code_link),
                    hosted_link: Set(input.hosted_link),
                    description: Set(input.description),
                    images: Set(ImageList(input.images)),
                    categories: Set(CategorySet(input.categories)),
                })
                .await?;
            siblings.push(added);
        }
        Ok(siblings)
    }

    pub async fn get_project(&self, id: Uuid) -> Result<project::Model, ServiceError> {
        self.require(id).await
    }

    pub async fn get_projects(
        &self,
        portfolio_id: Uuid,
    ) -> Result<Vec<project::Model>, ServiceError> {
        self.require_portfolio(portfolio_id).await?;
        Ok(self
            .repos
            .projects
            .get_all_attached()
            .filter(project::Column::PortfolioId.eq(portfolio_id))
            .all(self.repos.projects.connection())
            .await?)
    }

    pub async fn edit_description(
        &self,
        id: Uuid,
        input: EditDescription,
    ) -> Result<project::Model, ServiceError> {
        let mut active: project::ActiveModel = self.require(id).await?.into();
        active.description = Set(input.description);
        self.persist(id, active).await
    }

    pub async fn edit_hosted_link(
        &self,
        id: Uuid,
        input: EditHostedLink,
    ) -> Result<project::Model, ServiceError> {
        let mut active: project::ActiveModel = self.require(id).await?.into();
        active.hosted_link = Set(input.hosted_link);
        self.persist(id, active).await
    }

    pub async fn edit_images(
        &self,
        id: Uuid,
        input: EditImages,
    ) -> Result<project::Model, ServiceError> {
        let mut active: project::ActiveModel = self.require(id).await?.into();
        active.images = Set(ImageList(input.images));
        self.persist(id, active).await
    }

    /// Categories arrive as a set already — the `BTreeSet` in the DTO makes
    /// duplicates impossible and ordering irrelevant.
    pub async fn edit_categories(
        &self,
        id: Uuid,
        input: EditCategories,
    ) -> Result<project::Model, ServiceError> {
        let mut active: project::ActiveModel = self.require(id).await?.into();
        active.categories = Set(CategorySet(input.categories));
        self.persist(id, active).await
    }

    pub async fn delete_project(&self, id: Uuid) -> Result<(), ServiceError> {
        let target = self.require(id).await?;
        if !self.repos.projects.delete(target.into()).await {
            return Err(ServiceError::NotDeleted(format!("project {id}")));
        }
        Ok(())
    }
}
