pub mod portfolio;
pub mod project;

pub use portfolio::PortfolioService;
pub use project::ProjectService;

#[cfg(test)]
mod tests {
    use crate::error::ServiceError;
    use crate::models::portfolio::{self, DisplayNames, EditBiography};
    use crate::models::project::{self, CategorySet, CreateProject, ImageList};
    use crate::models::social_media_link::{self, CreateSocialMediaLink, Platform};
    use crate::registry::Repositories;
    use crate::services::{PortfolioService, ProjectService};
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, DatabaseConnection, DbErr, MockDatabase};
    use uuid::Uuid;

    fn portfolio_row(person_id: &str) -> portfolio::Model {
        portfolio::Model {
            id: Uuid::new_v4(),
            person_id: person_id.to_string(),
            names: DisplayNames(vec!["Alice".to_string()]),
            biography: "B".to_string(),
            rating: 0.0,
            avatar_url: None,
            background_theme: "default".to_string(),
            main_color: "#000000".to_string(),
            likes: 0,
            is_public: true,
            created_at: Utc::now(),
            cv_url: None,
            parent_portfolio_id: None,
        }
    }

    fn project_row(portfolio_id: Uuid, source: &str) -> project::Model {
        project::Model {
            id: Uuid::new_v4(),
            portfolio_id,
            source_code_link: source.to_string(),
            hosted_link: None,
            description: None,
            images: ImageList(vec![]),
            categories: CategorySet(Default::default()),
        }
    }

    fn portfolio_service(db: DatabaseConnection) -> PortfolioService {
        PortfolioService::new(Repositories::new(&db))
    }

    fn project_service(db: DatabaseConnection) -> ProjectService {
        ProjectService::new(Repositories::new(&db))
    }

    #[tokio::test]
    async fn create_portfolio_succeeds_for_new_person() {
        let created = portfolio_row("u1");
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            // pre-check: no portfolio for u1 yet
            .append_query_results([Vec::<portfolio::Model>::new(), vec![created]])
            .into_connection();

        let svc = portfolio_service(db);
        let input = crate::models::portfolio::CreatePortfolio {
            names: vec!["Alice".to_string()],
            biography: "B".to_string(),
            avatar_url: None,
            background_theme: None,
            main_color: None,
            is_public: None,
            cv_url: None,
        };
        let got = svc.create_portfolio("u1", input).await.unwrap();
        assert_eq!(got.person_id, "u1");
    }

    #[tokio::test]
    async fn create_portfolio_twice_is_already_exists() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![portfolio_row("u1")]])
            .into_connection();

        let svc = portfolio_service(db);
        let input = crate::models::portfolio::CreatePortfolio {
            names: vec!["Alice".to_string()],
            biography: "B".to_string(),
            avatar_url: None,
            background_theme: None,
            main_color: None,
            is_public: None,
            cv_url: None,
        };
        let err = svc.create_portfolio("u1", input).await.unwrap_err();
        assert!(matches!(err, ServiceError::AlreadyExists(_)));
    }

    #[tokio::test]
    async fn missing_portfolio_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<portfolio::Model>::new()])
            .into_connection();

        let svc = portfolio_service(db);
        let err = svc.get_portfolio(Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }

    #[tokio::test]
    async fn edit_biography_to_same_value_still_updates() {
        let current = portfolio_row("u1");
        let id = current.id;
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([
                vec![current.clone()], // require
                vec![current.clone()], // update .. returning
                vec![current.clone()], // re-read after persist
            ])
            .into_connection();

        let svc = portfolio_service(db);
        let got = svc
            .edit_biography(
                id,
                EditBiography {
                    biography: "B".to_string(),
                },
            )
            .await
            .unwrap();
        assert_eq!(got.biography, "B");
    }

    #[tokio::test]
    async fn failed_update_becomes_not_updated() {
        let current = portfolio_row("u1");
        let id = current.id;
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![current]])
            .append_query_errors([DbErr::Custom("write failed".to_string())])
            .into_connection();

        let svc = portfolio_service(db);
        let err = svc
            .edit_biography(
                id,
                EditBiography {
                    biography: "new".to_string(),
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::NotUpdated(_)));
    }

    #[tokio::test]
    async fn duplicate_social_link_pair_is_noop() {
        let target = portfolio_row("u1");
        let id = target.id;
        let existing = social_media_link::Model {
            id: Uuid::new_v4(),
            portfolio_id: id,
            platform: Platform::Github,
            value: "https://github.com/alice".to_string(),
        };
        // No insert result is queued: if the service tried to insert, the
        // mock would fail the test.
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![target]])
            .append_query_results([vec![existing.clone()]])
            .into_connection();

        let svc = portfolio_service(db);
        let links = svc
            .add_social_media_link(
                id,
                CreateSocialMediaLink {
                    platform: Platform::Github,
                    value: "https://github.com/alice".to_string(),
                },
            )
            .await
            .unwrap();
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].id, existing.id);
    }

    #[tokio::test]
    async fn removing_unknown_social_link_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<social_media_link::Model>::new()])
            .into_connection();

        let svc = portfolio_service(db);
        let err = svc
            .remove_social_media_link(Uuid::new_v4(), "u1")
            .await
            .unwrap_err();
        // Absence fires before any delete is attempted.
        assert!(matches!(err, ServiceError::NotFound(_)));
    }

    #[tokio::test]
    async fn duplicate_project_source_link_is_skipped() {
        let target = portfolio_row("u1");
        let id = target.id;
        let sibling = project_row(id, "https://github.com/alice/app");
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![target]])
            .append_query_results([vec![sibling.clone()]])
            .into_connection();

        let svc = project_service(db);
        let got = svc
            .add_projects(
                id,
                vec![CreateProject {
                    source_code_link: "https://github.com/alice/app".to_string(),
                    hosted_link: None,
                    description: None,
                    images: vec![],
                    categories: Default::default(),
                }],
            )
            .await
            .unwrap();
        // The duplicate was skipped; only the existing sibling remains.
        assert_eq!(got.len(), 1);
        assert_eq!(got[0].id, sibling.id);
    }

    #[tokio::test]
    async fn new_project_is_inserted_next_to_siblings() {
        let target = portfolio_row("u1");
        let id = target.id;
        let sibling = project_row(id, "https://github.com/alice/app");
        let fresh = project_row(id, "https://github.com/alice/tool");
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![target]])
            .append_query_results([vec![sibling.clone()]])
            .append_query_results([vec![fresh.clone()]])
            .into_connection();

        let svc = project_service(db);
        let got = svc
            .add_projects(
                id,
                vec![CreateProject {
                    source_code_link: "https://github.com/alice/tool".to_string(),
                    hosted_link: None,
                    description: None,
                    images: vec![],
                    categories: Default::default(),
                }],
            )
            .await
            .unwrap();
        assert_eq!(got.len(), 2);
        assert_eq!(got[1].source_code_link, "https://github.com/alice/tool");
    }
}
