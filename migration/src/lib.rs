pub use sea_orm_migration::prelude::*;

mod m20250114_101500_create_table_users;
mod m20250114_153000_create_table_news;
mod m20250120_090000_create_table_courses;
mod m20250120_091500_create_table_lessons;
mod m20250120_093000_create_table_course_teachers;
mod m20250121_110000_create_table_course_feedback;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250114_101500_create_table_users::Migration),
            Box::new(m20250114_153000_create_table_news::Migration),
            Box::new(m20250120_090000_create_table_courses::Migration),
            Box::new(m20250120_091500_create_table_lessons::Migration),
            Box::new(m20250120_093000_create_table_course_teachers::Migration),
            Box::new(m20250121_110000_create_table_course_feedback::Migration),
        ]
    }
}
