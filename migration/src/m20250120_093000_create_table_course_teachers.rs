use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // Create course_teachers table
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(CourseTeachers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CourseTeachers::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(
                        ColumnDef::new(CourseTeachers::FirstName)
                            .string_len(256)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CourseTeachers::LastName)
                            .string_len(256)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CourseTeachers::IsDeleted)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(CourseTeachers::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(CourseTeachers::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // Create course_teacher_links join table
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(CourseTeacherLinks::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CourseTeacherLinks::CourseId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CourseTeacherLinks::TeacherId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CourseTeacherLinks::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    // Composite primary key
                    .primary_key(
                        Index::create()
                            .col(CourseTeacherLinks::CourseId)
                            .col(CourseTeacherLinks::TeacherId),
                    )
                    // FK → courses
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_course_teacher_links_course_id")
                            .from(CourseTeacherLinks::Table, CourseTeacherLinks::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    // FK → course_teachers
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_course_teacher_links_teacher_id")
                            .from(CourseTeacherLinks::Table, CourseTeacherLinks::TeacherId)
                            .to(CourseTeachers::Table, CourseTeachers::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // Indexes
        // =====================================================

        // Fast lookup: all teachers for a course
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_course_teacher_links_course_id
                ON course_teacher_links (course_id);
                "#,
            )
            .await?;

        // Fast lookup: all courses for a teacher
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_course_teacher_links_teacher_id
                ON course_teacher_links (teacher_id);
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
                CREATE TRIGGER update_course_teachers_updated_at
                BEFORE UPDATE ON course_teachers
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
                DROP TRIGGER IF EXISTS update_course_teachers_updated_at ON course_teachers;
                DROP INDEX IF EXISTS idx_course_teacher_links_course_id;
                DROP INDEX IF EXISTS idx_course_teacher_links_teacher_id;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(CourseTeacherLinks::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(CourseTeachers::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum CourseTeachers {
    Table,
    Id,
    FirstName,
    LastName,
    IsDeleted,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum CourseTeacherLinks {
    Table,
    CourseId,
    TeacherId,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Courses {
    Table,
    Id,
}
