use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Identifiers for the append-only `portfolio_downloads` table.
#[derive(DeriveIden)]
enum PortfolioDownloads {
    Table,
    Id,
    PortfolioId,
    DownloaderId,
    DownloadedAt,
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
                    .table(PortfolioDownloads::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PortfolioDownloads::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(PortfolioDownloads::PortfolioId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PortfolioDownloads::DownloaderId)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PortfolioDownloads::DownloadedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_portfolio_downloads_portfolio_id")
                            .from(PortfolioDownloads::Table, PortfolioDownloads::PortfolioId)
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
            .drop_table(Table::drop().table(PortfolioDownloads::Table).to_owned())
            .await
    }
}
