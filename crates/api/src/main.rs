use std::sync::Arc;

use anyhow::Context;

use labofap_api::config::ApiConfig;
use labofap_infra::{InMemoryUserService, UserService};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    labofap_observability::init();

    let config = ApiConfig::from_env()?;
    let users = user_service(&config).await?;
    let app = labofap_api::app::build_app(&config, users)?;

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}

#[cfg(feature = "postgres")]
async fn user_service(config: &ApiConfig) -> anyhow::Result<Arc<dyn UserService>> {
    match &config.database_url {
        Some(url) => {
            let service = labofap_infra::PostgresUserService::connect(url)
                .await
                .context("failed to open authority store")?;
            tracing::info!("using postgres authority store");
            Ok(Arc::new(service))
        }
        None => Ok(Arc::new(InMemoryUserService::with_default_authorities())),
    }
}

#[cfg(not(feature = "postgres"))]
async fn user_service(config: &ApiConfig) -> anyhow::Result<Arc<dyn UserService>> {
    if config.database_url.is_some() {
        tracing::warn!("DATABASE_URL ignored; built without the `postgres` feature");
    }
    Ok(Arc::new(InMemoryUserService::with_default_authorities()))
}
