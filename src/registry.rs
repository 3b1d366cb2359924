//! Compile-time service and repository registration.
//!
//! Every entity gets exactly one [`crate::db::Repository`] binding and every
//! domain service is constructed here, explicitly. There is no runtime
//! scanning or name-convention matching: a missing binding or service is a
//! compile error, and the binding table stays introspectable for tests.

use sea_orm::{DatabaseConnection, EntityTrait, PrimaryKeyTrait};

use crate::db::Repository;
use crate::services::{PortfolioService, ProjectService};

/// One repository binding, keyed by (entity, resolved primary-key type).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityBinding {
    pub entity: &'static str,
    pub id_type: &'static str,
}

macro_rules! bind_entities {
    ($( $field:ident => $module:ident ),+ $(,)?) => {
        /// Every repository the backend uses, one typed field per entity.
        #[derive(Clone)]
        pub struct Repositories {
            $( pub $field: Repository<crate::models::$module::Entity>, )+
        }

        impl Repositories {
            pub fn new(db: &DatabaseConnection) -> Self {
                Self {
                    $( $field: Repository::new(db.clone()), )+
                }
            }

            /// The static binding table, one entry per entity. The id type
            /// is resolved from the entity's primary key at compile time.
            pub fn bindings() -> Vec<EntityBinding> {
                vec![
                    $( EntityBinding {
                        entity: stringify!($module),
                        id_type: std::any::type_name::<
                            <<crate::models::$module::Entity as EntityTrait>::PrimaryKey as PrimaryKeyTrait>::ValueType,
                        >(),
                    }, )+
                ]
            }
        }
    };
}

bind_entities! {
    portfolios => portfolio,
    projects => project,
    social_media_links => social_media_link,
    share_links => portfolio_link,
    views => portfolio_view,
    downloads => portfolio_download,
}

/// The wired service set, built once at startup and shared via `web::Data`.
pub struct Registry {
    pub portfolio_service: PortfolioService,
    pub project_service: ProjectService,
}

impl Registry {
    pub fn new(db: DatabaseConnection) -> Self {
        let repos = Repositories::new(&db);
        Self {
            portfolio_service: PortfolioService::new(repos.clone()),
            project_service: ProjectService::new(repos),
        }
    }

    /// Names of every service the registry wires, for startup logging and
    /// registration tests.
    pub fn services() -> &'static [&'static str] {
        &["PortfolioService", "ProjectService"]
    }
}
