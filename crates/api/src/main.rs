#[tokio::main]
async fn main() {
    fabplan_observability::init();

    let config = fabplan_api::config::ApiConfig::from_env();
    let app = fabplan_api::app::build_app();

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {addr}: {e}"));

    tracing::info!("listening on {}", listener.local_addr().unwrap());

    axum::serve(listener, app).await.unwrap();
}
