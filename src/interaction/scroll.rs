use anyhow::{Context, Result};
use chromiumoxide::page::Page;
use std::time::Duration;

use crate::error::HarnessError;
use crate::selectors::Selector;

/// Scroll an element into view, then sleep for `settle` so smooth scrolling
/// and sticky layout finish before the next action.
pub async fn scroll_into_view(page: &Page, selector: &Selector, settle: Duration) -> Result<()> {
    let js = format!(
        r#"(() => {{
            const el = {selector_js};
            if (!el) return false;
            el.scrollIntoView();
            return true;
        }})()"#,
        selector_js = selector.first_js()?
    );

    let found: bool = page
        .evaluate(js.as_str())
        .await
        .context("Failed to scroll element into view")?
        .into_value()
        .context("Failed to parse scroll result")?;

    if !found {
        return Err(HarnessError::ElementNotFound {
            selector: selector.to_string(),
        }
        .into());
    }

    tokio::time::sleep(settle).await;
    Ok(())
}
