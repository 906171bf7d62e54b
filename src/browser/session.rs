use anyhow::{Context, Result};
use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::cdp::browser_protocol::emulation::SetDeviceMetricsOverrideParams;
use chromiumoxide::page::Page;
use futures::StreamExt;
use std::time::Duration;
use tokio::task::JoinHandle;

use super::launcher;
use crate::config::{SessionConfig, Viewport};
use crate::error::HarnessError;

/// One browser instance with exactly one page, owned by a single scenario.
pub struct BrowserSession {
    browser: Browser,
    handler_task: JoinHandle<()>,
    page: Page,
    // Removed when the session is dropped, after Chrome has exited.
    _profile_dir: tempfile::TempDir,
}

impl BrowserSession {
    /// Launch a fresh browser, open a blank page and apply the viewport.
    pub async fn launch(config: &SessionConfig) -> Result<Self> {
        let chrome = launcher::find_chrome_binary(config.chrome_path.as_deref())
            .map_err(|e| HarnessError::Launch(e.to_string()))?;
        let profile_dir = tempfile::tempdir().context("Failed to create Chrome profile dir")?;

        let mut builder = BrowserConfig::builder()
            .chrome_executable(chrome)
            .user_data_dir(profile_dir.path())
            .args(launcher::chrome_args(config))
            .window_size(config.viewport.width, config.viewport.height)
            .viewport(None);

        if !config.headless {
            builder = builder.with_head();
        }

        let browser_config = builder.build().map_err(HarnessError::Launch)?;

        let (mut browser, mut handler) = Browser::launch(browser_config)
            .await
            .map_err(|e| HarnessError::Launch(e.to_string()))?;

        let handler_task = tokio::spawn(async move {
            while let Some(_event) = handler.next().await {
                // Drive the CDP connection
            }
        });

        let page = match browser.new_page("about:blank").await {
            Ok(page) => page,
            Err(e) => {
                if let Err(close_err) = shutdown(&mut browser, &handler_task).await {
                    tracing::warn!("Cleanup after failed page open: {:#}", close_err);
                }
                return Err(HarnessError::Launch(format!("Failed to open page: {}", e)).into());
            }
        };

        let session = Self {
            browser,
            handler_task,
            page,
            _profile_dir: profile_dir,
        };

        if let Err(e) = set_viewport(&session.page, config.viewport).await {
            if let Err(close_err) = session.close().await {
                tracing::warn!("Cleanup after failed viewport setup: {:#}", close_err);
            }
            return Err(e);
        }

        tracing::info!(
            "Browser session started (headless: {}, viewport: {}x{})",
            config.headless,
            config.viewport.width,
            config.viewport.height
        );

        Ok(session)
    }

    /// The session's page.
    pub fn page(&self) -> &Page {
        &self.page
    }

    /// Close the browser and wait for the process to exit, killing it if it
    /// outlives [`EXIT_TIMEOUT`]. Consumes the session so it cannot be closed
    /// twice.
    pub async fn close(mut self) -> Result<()> {
        shutdown(&mut self.browser, &self.handler_task).await?;
        tracing::info!("Browser session closed");
        Ok(())
    }
}

/// How long a closing browser may take to exit before it is killed.
pub const EXIT_TIMEOUT: Duration = Duration::from_secs(10);

async fn shutdown(browser: &mut Browser, handler_task: &JoinHandle<()>) -> Result<()> {
    let closed = browser.close().await;
    let waited = tokio::time::timeout(EXIT_TIMEOUT, browser.wait()).await;
    let exited = match waited {
        Ok(waited) => waited.map(|_| ()).context("Failed waiting for browser exit"),
        Err(_) => {
            tracing::warn!(
                "Browser did not exit within {}ms, killing it",
                EXIT_TIMEOUT.as_millis()
            );
            match browser.kill().await {
                Some(Err(e)) => Err(e).context("Failed to kill browser"),
                _ => Ok(()),
            }
        }
    };
    handler_task.abort();

    closed.context("Failed to close browser")?;
    exited
}

/// Override the page's layout viewport.
pub async fn set_viewport(page: &Page, viewport: Viewport) -> Result<()> {
    page.execute(SetDeviceMetricsOverrideParams::new(
        viewport.width as i64,
        viewport.height as i64,
        1.0,
        false,
    ))
    .await
    .context("Failed to set viewport size")?;
    Ok(())
}
