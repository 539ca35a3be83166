//! CLI handler for the service liveness probe.

use anyhow::{Context, Result};

use crate::api::ApiClient;

pub async fn handle_status_command(api_url: Option<String>) -> Result<()> {
    let base_url = super::resolve_base_url(api_url);
    let client = ApiClient::new(&base_url);

    let service = client
        .health()
        .await
        .with_context(|| format!("Service unreachable at {base_url}"))?;

    println!("{}", service.message);
    Ok(())
}
