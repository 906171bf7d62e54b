use anyhow::Result;
use chromiumoxide::page::Page;
use std::path::Path;

use crate::config::Timeouts;
use crate::interaction::click::{self, ClickOptions};
use crate::interaction::state::{self, ElementState};
use crate::interaction::wait::{self, WaitState};
use crate::interaction::{keyboard, upload};
use crate::selectors::{self, Selector};

/// A lazily-resolved handle to whatever a selector matches on a page.
///
/// Nothing is looked up until an action or query runs; every action first
/// waits (up to the wait timeout) for the element to become actionable:
/// visible and enabled for clicks, editable for `fill`.
#[derive(Clone)]
pub struct Locator {
    page: Page,
    selector: Selector,
    timeouts: Timeouts,
}

impl Locator {
    pub fn new(page: Page, selector: impl Into<Selector>, timeouts: Timeouts) -> Self {
        Self {
            page,
            selector: selector.into(),
            timeouts,
        }
    }

    pub fn selector(&self) -> &Selector {
        &self.selector
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn timeouts(&self) -> Timeouts {
        self.timeouts
    }

    // ── Actions ─────────────────────────────────────────────────────────

    pub async fn click(&self) -> Result<()> {
        self.click_with(ClickOptions::default()).await
    }

    pub async fn dblclick(&self) -> Result<()> {
        self.click_with(ClickOptions::double()).await
    }

    pub async fn right_click(&self) -> Result<()> {
        self.click_with(ClickOptions::right()).await
    }

    pub async fn click_with(&self, options: ClickOptions) -> Result<()> {
        self.wait_for(WaitState::Enabled).await?;
        let method = click::hybrid_click(&self.page, &self.selector, options).await?;
        tracing::debug!("Clicked {} via {:?}", self.selector, method);
        Ok(())
    }

    /// Waits until the element is editable, so a disabled or readonly field
    /// times out instead of being written.
    pub async fn fill(&self, text: &str) -> Result<()> {
        self.wait_for(WaitState::Editable).await?;
        keyboard::fill(&self.page, &self.selector, text).await
    }

    /// Focus the element and press `key` on it.
    pub async fn press(&self, key: &str) -> Result<()> {
        self.wait_for(WaitState::Visible).await?;
        let focus_js = format!(
            "(() => {{ const el = {}; if (el) el.focus(); return !!el; }})()",
            self.selector.first_js()?
        );
        self.page.evaluate(focus_js.as_str()).await?;
        keyboard::press_key(&self.page, key).await
    }

    /// File inputs are often visually hidden, so only attachment is awaited.
    pub async fn set_input_files(&self, files: &[&Path]) -> Result<()> {
        self.wait_for(WaitState::Attached).await?;
        upload::set_input_files(&self.page, &self.selector, files).await
    }

    pub async fn wait_for(&self, wait_state: WaitState) -> Result<ElementState> {
        wait::wait_for_selector(&self.page, &self.selector, wait_state, self.timeouts.wait).await
    }

    // ── Queries (no waiting) ────────────────────────────────────────────

    pub async fn state(&self) -> Result<ElementState> {
        state::probe(&self.page, &self.selector).await
    }

    pub async fn count(&self) -> Result<usize> {
        Ok(self.state().await?.count)
    }

    pub async fn is_visible(&self) -> Result<bool> {
        Ok(self.state().await?.visible)
    }

    pub async fn is_enabled(&self) -> Result<bool> {
        let state = self.state().await?;
        Ok(state.attached() && state.enabled)
    }

    pub async fn text_content(&self) -> Result<Option<String>> {
        Ok(self.state().await?.text)
    }

    /// Rendered text of every match, in document order.
    pub async fn all_inner_texts(&self) -> Result<Vec<String>> {
        let elements = selectors::find_elements(&self.page, &self.selector).await?;
        Ok(elements.into_iter().map(|el| el.text).collect())
    }
}

impl std::fmt::Debug for Locator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Locator")
            .field("selector", &self.selector)
            .finish()
    }
}
