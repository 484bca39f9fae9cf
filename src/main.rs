use digital_bank_api::application::context::AppContext;
use digital_bank_api::config;
use digital_bank_api::infrastructure::db::postgres::PostgresDatabase;
use digital_bank_api::infrastructure::db::repositories::Repositories;
use digital_bank_api::interface::http;
use digital_bank_api::interface::http::state::AppState;
use metrics_exporter_prometheus::PrometheusBuilder;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Step 1: Load configuration.
    let settings = config::load().expect("load config");

    // Step 2: Initialize logging and metrics.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    let metrics_handle = PrometheusBuilder::new()
        .install_recorder()
        .expect("install metrics recorder");

    // Step 3: Connect to the database.
    let db = Arc::new(
        PostgresDatabase::connect(&settings.db.url)
            .await
            .expect("connect database"),
    );

    // Step 4: Build repositories and the shared application context.
    let repos = Repositories::postgres(db.clone());
    let ctx = AppContext::new(repos);

    // Step 5: Assemble HTTP state and the app.
    let state = AppState {
        ctx: Arc::new(ctx),
        settings: settings.clone(),
        metrics: Some(metrics_handle),
    };
    let app = http::app(state);
    let bind_addr = format!("{}:{}", settings.server.host, settings.server.port);

    // Step 6: Bind and serve.
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .expect("bind server");

    axum::serve(listener, app).await.expect("serve");
}
