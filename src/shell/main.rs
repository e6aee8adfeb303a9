use anyhow::Context;
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt};

use feedback_wall::modules::feedback::adapters::outbound::csv_file::CsvFileEntries;
use feedback_wall::modules::feedback::core::access::AccessPolicy;
use feedback_wall::modules::feedback::core::colleagues::ColleagueDirectory;
use feedback_wall::modules::feedback::core::store::EntryStore;
use feedback_wall::shell::config::Config;
use feedback_wall::shell::http::router;
use feedback_wall::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = Config::from_env()?;

    let persistence = Arc::new(CsvFileEntries::new(config.data_file.clone()));
    let store = Arc::new(EntryStore::open(persistence).await);
    let access = Arc::new(AccessPolicy::new(
        config.admin_key.clone(),
        config.delete_key.clone(),
    ));
    if !access.admin_enabled() {
        tracing::warn!("FEEDBACK_ADMIN_KEY is unset, admin mode is disabled");
    }

    let state = AppState::new(
        store,
        Arc::new(ColleagueDirectory::default()),
        access,
        &config.export_file_name,
    );
    let app = router(state);

    tracing::info!(
        data_file = %config.data_file.display(),
        "feedback wall listening on http://{}",
        config.bind_addr
    );
    tracing::info!("GraphQL endpoint: http://{}/gql", config.bind_addr);
    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("cannot bind {}", config.bind_addr))?;
    axum::serve(listener, app).await?;
    Ok(())
}
