use clap::Parser;

pub const DEFAULT_RANDOM_BATCH_SIZE: usize = 100;
pub const DEFAULT_CORS_ORIGIN: &str = "https://localhost:5173";

/// Runtime settings for the player manager server
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(name = "serve", about = "Player Management API server")]
pub struct ServerConfig {
    /// Interface to bind
    #[arg(long, env = "PLAYER_MANAGER_HOST", default_value = "127.0.0.1")]
    pub host: String,

    #[arg(long, env = "PLAYER_MANAGER_PORT", default_value_t = 5000)]
    pub port: u16,

    /// Origin allowed to call the API from a browser (the React client)
    #[arg(long, env = "PLAYER_MANAGER_CORS_ORIGIN", default_value = DEFAULT_CORS_ORIGIN)]
    pub cors_origin: String,

    /// Players added per call to /api/getrandomplayerlist
    #[arg(long, env = "PLAYER_MANAGER_RANDOM_BATCH_SIZE", default_value_t = DEFAULT_RANDOM_BATCH_SIZE)]
    pub random_batch_size: usize,

    /// Seed for reproducible random rosters
    #[arg(long, env = "PLAYER_MANAGER_ROSTER_SEED")]
    pub roster_seed: Option<u64>,

    /// Start with an empty roster instead of the five demo players
    #[arg(long, env = "PLAYER_MANAGER_NO_DEMO_ROSTER")]
    pub no_demo_roster: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
            cors_origin: DEFAULT_CORS_ORIGIN.to_string(),
            random_batch_size: DEFAULT_RANDOM_BATCH_SIZE,
            roster_seed: None,
            no_demo_roster: false,
        }
    }
}

impl ServerConfig {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
