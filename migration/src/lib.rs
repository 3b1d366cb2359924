pub use sea_orm_migration::prelude::*;

mod m20250301_000001_create_portfolios_table;
mod m20250301_000002_create_projects_table;
mod m20250301_000003_create_social_media_links_table;
mod m20250301_000004_create_portfolio_links_table;
mod m20250301_000005_create_portfolio_views_table;
mod m20250301_000006_create_portfolio_downloads_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_portfolios_table::Migration),
            Box::new(m20250301_000002_create_projects_table::Migration),
            Box::new(m20250301_000003_create_social_media_links_table::Migration),
            Box::new(m20250301_000004_create_portfolio_links_table::Migration),
            Box::new(m20250301_000005_create_portfolio_views_table::Migration),
            Box::new(m20250301_000006_create_portfolio_downloads_table::Migration),
        ]
    }
}
