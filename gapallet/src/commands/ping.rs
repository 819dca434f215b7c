use anyhow::Context;
use gapallet_submission_contracts::SubmissionClient;
use tracing::info;
use url::Url;

pub async fn ping(client: &impl SubmissionClient, base_url: &Url) -> anyhow::Result<()> {
    info!("Checking backend health at {base_url}");
    client
        .ping()
        .await
        .with_context(|| format!("Backend at {base_url} is not healthy"))?;
    println!("Backend at {base_url} is healthy");
    Ok(())
}
