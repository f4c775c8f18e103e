//! Application state shared by all CLI commands.

use std::path::PathBuf;

use tracing::debug;

use jobcoach_client::config::{self, ClientConfig};
use jobcoach_client::rest::RestClient;

/// Holds the configuration and the REST client.
///
/// The chat loop clones the client into its session controller; the job
/// browser and resume wizard call it directly.
pub struct AppState {
    pub config: ClientConfig,
    pub api: RestClient,
    pub data_dir: PathBuf,
}

impl AppState {
    /// Load configuration and build the API client.
    pub async fn init() -> Self {
        let data_dir = config::resolve_data_dir();
        let config = config::load_config(&data_dir).await;
        let api = RestClient::new(&config);
        debug!(base_url = %config.base_url, "API client ready");

        Self {
            config,
            api,
            data_dir,
        }
    }
}
