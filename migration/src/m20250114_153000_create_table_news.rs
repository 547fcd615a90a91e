use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // Create news table
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(News::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(News::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(News::Title).string_len(256).not_null())
                    .col(ColumnDef::new(News::Preamble).string_len(512).not_null())
                    .col(ColumnDef::new(News::Body).text().not_null())
                    .col(
                        ColumnDef::new(News::BodyAsMarkdown)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(News::IsDeleted)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(News::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(News::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // Indexes
        // =====================================================

        // Moderation listing filters on the flag and orders by creation time
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_news_is_deleted_created_at
                ON news (is_deleted, created_at DESC);
                "#,
            )
            .await?;

        // =====================================================
        // updated_at trigger
        // =====================================================
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_news_updated_at
                BEFORE UPDATE ON news
                FOR EACH ROW
                EXECUTE FUNCTION update_updated_at_column();
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP TRIGGER IF EXISTS update_news_updated_at ON news;
                DROP INDEX IF EXISTS idx_news_is_deleted_created_at;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(News::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum News {
    Table,
    Id,
    Title,
    Preamble,
    Body,
    BodyAsMarkdown,
    IsDeleted,
    CreatedAt,
    UpdatedAt,
}
