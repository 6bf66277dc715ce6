use player_manager::{build_app, ServerConfig};

#[shuttle_runtime::main]
async fn main() -> shuttle_axum::ShuttleAxum {
    // Initialize logger
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info");
    }

    let config = ServerConfig::default();
    let app = build_app(&config);

    log::info!(
        "Starting Player Management API v{} (CORS origin {})",
        player_manager::VERSION,
        config.cors_origin
    );

    Ok(app.into())
}
