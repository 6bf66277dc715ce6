use clap::Parser;
use player_manager::{build_app, ServerConfig};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    let config = ServerConfig::parse();
    let app = build_app(&config);

    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address).await?;

    log::info!("Player Management API v{} listening on {}", player_manager::VERSION, address);
    log::info!("CORS origin: {}", config.cors_origin);
    if config.no_demo_roster {
        log::info!("Starting with an empty roster");
    } else {
        log::info!("Starting with the demo roster");
    }
    if let Some(seed) = config.roster_seed {
        log::info!("Random rosters seeded with {}", seed);
    }

    axum::serve(listener, app).await
}
