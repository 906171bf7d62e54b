use anyhow::{Context, Result};
use chromiumoxide::cdp::browser_protocol::page::CaptureScreenshotParams;
use chromiumoxide::page::Page;
use std::path::Path;
use std::time::Duration;

use crate::config::{Timeouts, Viewport};
use crate::interaction::{keyboard, scroll, wait, ElementState, WaitState};
use crate::locator::Locator;
use crate::navigation::{self, NavigateResult};
use crate::selectors::Selector;
use crate::site::{Route, Site};

/// The page handle a scenario body receives from the session fixture,
/// bundled with the site it targets and the run's timeouts.
#[derive(Clone)]
pub struct ScenarioPage {
    page: Page,
    site: Site,
    timeouts: Timeouts,
}

impl ScenarioPage {
    pub fn new(page: Page, site: Site, timeouts: Timeouts) -> Self {
        Self {
            page,
            site,
            timeouts,
        }
    }

    pub fn timeouts(&self) -> Timeouts {
        self.timeouts
    }

    pub async fn goto(&self, route: Route) -> Result<NavigateResult> {
        navigation::goto(&self.page, &self.site.url(route), self.timeouts.navigation).await
    }

    pub fn locator(&self, selector: impl Into<Selector>) -> Locator {
        Locator::new(self.page.clone(), selector, self.timeouts)
    }

    pub async fn fill(&self, selector: &str, text: &str) -> Result<()> {
        self.locator(selector).fill(text).await
    }

    pub async fn click(&self, selector: &str) -> Result<()> {
        self.locator(selector).click().await
    }

    /// Press `key` on whatever element currently has focus.
    pub async fn press(&self, key: &str) -> Result<()> {
        keyboard::press_key(&self.page, key).await
    }

    pub async fn scroll_into_view(&self, selector: &str, settle: Duration) -> Result<()> {
        scroll::scroll_into_view(&self.page, &Selector::parse(selector), settle).await
    }

    pub async fn wait_for_selector(&self, selector: &str, wait_state: WaitState) -> Result<ElementState> {
        wait::wait_for_selector(
            &self.page,
            &Selector::parse(selector),
            wait_state,
            self.timeouts.wait,
        )
        .await
    }

    pub async fn wait_for_function(&self, predicate: &str) -> Result<()> {
        wait::wait_for_function(&self.page, predicate, self.timeouts.wait).await
    }

    /// Current layout viewport as the page sees it.
    pub async fn viewport(&self) -> Result<Viewport> {
        let size: serde_json::Value = self
            .page
            .evaluate("({ width: window.innerWidth, height: window.innerHeight })")
            .await
            .context("Failed to read viewport")?
            .into_value()
            .context("Failed to parse viewport")?;

        Ok(Viewport::new(
            size["width"].as_u64().unwrap_or(0) as u32,
            size["height"].as_u64().unwrap_or(0) as u32,
        ))
    }

    /// Save a PNG of the visible viewport to `path`.
    pub async fn screenshot(&self, path: &Path) -> Result<()> {
        let png = self
            .page
            .screenshot(CaptureScreenshotParams::builder().build())
            .await
            .context("Failed to capture screenshot")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        std::fs::write(path, png).with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(())
    }
}
