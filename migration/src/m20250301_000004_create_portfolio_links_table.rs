use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Identifiers for the `portfolio_links` (sharing links) table.
#[derive(DeriveIden)]
enum PortfolioLinks {
    Table,
    Id,
    PortfolioId,
    Value,
    CreatedAt,
    ExpiresAt,
}

/// Re-declare parent table identifiers for foreign-key references.
#[derive(DeriveIden)]
enum Portfolios {
    Table,
    Id,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PortfolioLinks::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PortfolioLinks::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(PortfolioLinks::PortfolioId)
                            .uuid()
                            .not_null(),
                    )
                    .col(ColumnDef::new(PortfolioLinks::Value).string().not_null())
                    .col(
                        ColumnDef::new(PortfolioLinks::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    // `is_expired` is derived from this at read time, never
                    // stored.
                    .col(
                        ColumnDef::new(PortfolioLinks::ExpiresAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_portfolio_links_portfolio_id")
                            .from(PortfolioLinks::Table, PortfolioLinks::PortfolioId)
                            .to(Portfolios::Table, Portfolios::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PortfolioLinks::Table).to_owned())
            .await
    }
}
