use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Identifiers for the `social_media_links` table and its columns.
#[derive(DeriveIden)]
enum SocialMediaLinks {
    Table,
    Id,
    PortfolioId,
    Platform,
    Value,
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
                    .table(SocialMediaLinks::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SocialMediaLinks::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(SocialMediaLinks::PortfolioId)
                            .uuid()
                            .not_null(),
                    )
                    // No unique constraint on (platform, value): the add
                    // operation dedups instead.
                    .col(
                        ColumnDef::new(SocialMediaLinks::Platform)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(SocialMediaLinks::Value).string().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_social_media_links_portfolio_id")
                            .from(SocialMediaLinks::Table, SocialMediaLinks::PortfolioId)
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
            .drop_table(Table::drop().table(SocialMediaLinks::Table).to_owned())
            .await
    }
}
