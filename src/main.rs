#[tokio::main]
async fn main() {
    if let Err(e) = app_catalog_be::start_server().await {
        tracing::error!("Server failed: {}", e);
        std::process::exit(1);
    }
}
