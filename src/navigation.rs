use anyhow::Result;
use chromiumoxide::page::Page;
use serde::Serialize;
use std::time::Duration;

use crate::error::HarnessError;

#[derive(Debug, Serialize)]
pub struct NavigateResult {
    pub url: String,
    pub title: String,
}

/// Load `url` and wait for the load event. No retry: an unreachable URL or a
/// load that outlives `timeout` is a navigation failure.
pub async fn goto(page: &Page, url: &str, timeout: Duration) -> Result<NavigateResult> {
    tracing::info!("Navigating to: {}", url);

    let navigation_failed = |reason: String| HarnessError::Navigation {
        url: url.to_string(),
        reason,
    };

    match tokio::time::timeout(timeout, page.goto(url)).await {
        Ok(Ok(_)) => {}
        Ok(Err(e)) => return Err(navigation_failed(e.to_string()).into()),
        Err(_) => {
            return Err(navigation_failed(format!(
                "page load exceeded {}ms",
                timeout.as_millis()
            ))
            .into())
        }
    }

    let url = page.url().await?.unwrap_or_default();
    let title = page.get_title().await?.unwrap_or_default();
    tracing::debug!("Loaded {} ({})", url, title);

    Ok(NavigateResult { url, title })
}
