use skills_backend::application::seed_catalog;
use skills_backend::config::AppConfig;
use skills_backend::infrastructure::db::{migrations::run_migrations, pool::create_pool};
use skills_backend::infrastructure::repositories::CatalogRepositoryImpl;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Seeds the default skills and interests, then exits.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.level))
        .init();

    let pool = create_pool(&config.database).await?;
    run_migrations(&pool).await?;

    let repo = CatalogRepositoryImpl::new(pool);
    let summary = seed_catalog(&repo).await?;
    info!(
        created = summary.created,
        existing = summary.existing,
        "catalog population finished"
    );
    Ok(())
}
