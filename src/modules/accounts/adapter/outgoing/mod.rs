pub mod sea_orm_entity;
mod account_query_postgres;
mod account_repository_postgres;
mod argon2_hasher;

pub use account_query_postgres::AccountQueryPostgres;
pub use account_repository_postgres::AccountRepositoryPostgres;
pub use argon2_hasher::Argon2Hasher;
