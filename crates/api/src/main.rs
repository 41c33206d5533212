#[tokio::main]
async fn main() {
    itemstore_observability::init();

    let addr = std::env::var("ITEMSTORE_ADDR").unwrap_or_else(|_| {
        tracing::debug!("ITEMSTORE_ADDR not set; using 127.0.0.1:8000");
        "127.0.0.1:8000".to_string()
    });

    let app = itemstore_api::app::build_app();

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {addr}: {e}"));

    tracing::info!("listening on {}", listener.local_addr().unwrap());

    axum::serve(listener, app).await.unwrap();
}
