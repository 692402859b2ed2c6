use anyhow::Result;
use gcal_relay::cli;

#[tokio::main]
async fn main() -> Result<()> {
    cli::run().await
}
