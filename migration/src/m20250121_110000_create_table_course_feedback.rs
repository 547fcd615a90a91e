use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // Create course_feedback table
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(CourseFeedback::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CourseFeedback::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(CourseFeedback::CourseId).uuid().not_null())
                    .col(ColumnDef::new(CourseFeedback::UserId).uuid().not_null())
                    .col(
                        ColumnDef::new(CourseFeedback::Rating)
                            .small_integer()
                            .not_null()
                            .default(5)
                            .check(Expr::col(CourseFeedback::Rating).between(1, 5)),
                    )
                    .col(
                        ColumnDef::new(CourseFeedback::Feedback)
                            .text()
                            .not_null()
                            .default("Без отзыва"),
                    )
                    .col(
                        ColumnDef::new(CourseFeedback::IsDeleted)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(CourseFeedback::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(CourseFeedback::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_course_feedback_course_id")
                            .from(CourseFeedback::Table, CourseFeedback::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_course_feedback_user_id")
                            .from(CourseFeedback::Table, CourseFeedback::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // Indexes
        // =====================================================

        // Fast lookup: all feedback for a course
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_course_feedback_course_id
                ON course_feedback (course_id);
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
                CREATE TRIGGER update_course_feedback_updated_at
                BEFORE UPDATE ON course_feedback
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
                DROP TRIGGER IF EXISTS update_course_feedback_updated_at ON course_feedback;
                DROP INDEX IF EXISTS idx_course_feedback_course_id;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(CourseFeedback::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum CourseFeedback {
    Table,
    Id,
    CourseId,
    UserId,
    Rating,
    Feedback,
    IsDeleted,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Courses {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}
