use crate::config::{CliConfig, Settings};
use crate::core::client::ChaosClient;
use crate::core::dispatch::dispatch;
use crate::utils::error::Result;
use std::io::Write;

/// Resolves settings, builds the client and runs the selected command.
///
/// Settings are resolved before the client exists, so configuration errors never
/// reach the network.
pub async fn run<W: Write>(config: &CliConfig, env_key: Option<String>, out: &mut W) -> Result<()> {
    let settings = Settings::resolve(config, env_key)?;
    tracing::debug!("Resolved settings: {:?}", settings);

    let client = ChaosClient::new(&settings.api_url, &settings.credential)?;
    dispatch(&client, &settings.command, out).await
}
