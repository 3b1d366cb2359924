use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Identifiers for the `portfolios` table and its columns.
#[derive(DeriveIden)]
enum Portfolios {
    Table,
    Id,
    PersonId,
    Names,
    Biography,
    Rating,
    AvatarUrl,
    BackgroundTheme,
    MainColor,
    Likes,
    IsPublic,
    CreatedAt,
    CvUrl,
    ParentPortfolioId,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Portfolios::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Portfolios::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    // One portfolio per person, enforced at the storage level
                    // as well as by the service pre-check.
                    .col(
                        ColumnDef::new(Portfolios::PersonId)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Portfolios::Names).json_binary().not_null())
                    .col(ColumnDef::new(Portfolios::Biography).text().not_null())
                    .col(ColumnDef::new(Portfolios::Rating).double().not_null())
                    .col(ColumnDef::new(Portfolios::AvatarUrl).string())
                    .col(
                        ColumnDef::new(Portfolios::BackgroundTheme)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Portfolios::MainColor).string().not_null())
                    .col(ColumnDef::new(Portfolios::Likes).integer().not_null())
                    .col(ColumnDef::new(Portfolios::IsPublic).boolean().not_null())
                    .col(
                        ColumnDef::new(Portfolios::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Portfolios::CvUrl).string())
                    .col(ColumnDef::new(Portfolios::ParentPortfolioId).uuid())
                    // Self-reference for linked portfolios; deliberately no
                    // cascade, unlike the child tables.
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_portfolios_parent_portfolio_id")
                            .from(Portfolios::Table, Portfolios::ParentPortfolioId)
                            .to(Portfolios::Table, Portfolios::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Portfolios::Table).to_owned())
            .await
    }
}
