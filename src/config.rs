use std::env;
use std::path::PathBuf;

/// Runtime configuration, loaded from the environment (and `.env`).
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Directory holding the template snapshot file.
    pub data_dir: PathBuf,
    /// Seed the sample users and templates when the stores are empty.
    pub seed_sample_data: bool,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let host = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("PORT")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(8080);
        let data_dir = env::var("DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./data"));
        let seed_sample_data = env::var("SEED_SAMPLE_DATA")
            .map(|value| value != "false" && value != "0")
            .unwrap_or(true);

        Self {
            host,
            port,
            data_dir,
            seed_sample_data,
        }
    }
}
