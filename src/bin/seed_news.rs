//! One-shot seeder for the news table.
//!
//! Inserts exactly five templated rows in a single multi-row INSERT.
//! There is no idempotence guard: running it twice leaves ten rows.

use anyhow::Context;
use sea_orm::{ConnectOptions, Database, EntityTrait, Set};
use std::env;
use uuid::Uuid;

use campus_backend::news::adapter::outgoing::sea_orm_entity as news;
use campus_backend::shared::messages::{ru, MessageId};

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const SEED_COUNT: usize = 5;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let env_name = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
    let env_file = format!(".env.{}", env_name);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let db_url = env::var("DATABASE_URL").context("DATABASE_URL is not set")?;

    let db = Database::connect(ConnectOptions::new(db_url))
        .await
        .context("Failed to connect to database")?;

    let rows: Vec<news::ActiveModel> = (0..SEED_COUNT)
        .map(|i| news::ActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(format!("{}{i}", ru(MessageId::SeedNewsTitle))),
            preamble: Set(format!("{}{i}", ru(MessageId::SeedNewsPreamble))),
            body: Set(format!("{}{i}", ru(MessageId::SeedNewsBody))),
            body_as_markdown: Set(false),
            is_deleted: Set(false),
            ..Default::default()
        })
        .collect();

    news::Entity::insert_many(rows)
        .exec(&db)
        .await
        .context("Seeding failed")?;

    info!("Inserted {SEED_COUNT} news rows");

    Ok(())
}
