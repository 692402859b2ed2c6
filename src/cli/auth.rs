use anyhow::Result;

use crate::core::AppConfig;
use crate::google::GoogleClient;

/// Print the URL to open in a browser to start the OAuth flow. Handy
/// for getting an authorization code without the frontend running.
pub fn run(state: Option<String>) -> Result<()> {
    let config = AppConfig::from_env()?;
    let client = GoogleClient::new(config.google)?;
    println!(
        "\nPlease open the following URL in your browser and authorize access:\n\n{}\n",
        client.authorization_url(state.as_deref())
    );
    Ok(())
}
