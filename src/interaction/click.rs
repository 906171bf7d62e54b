use anyhow::{Context, Result};
use chromiumoxide::page::Page;

use crate::error::HarnessError;
use crate::selectors::Selector;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MouseButton {
    #[default]
    Left,
    Right,
}

impl MouseButton {
    /// `MouseEvent.button` value.
    fn code(self) -> u8 {
        match self {
            MouseButton::Left => 0,
            MouseButton::Right => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClickOptions {
    pub button: MouseButton,
    pub click_count: u32,
}

impl Default for ClickOptions {
    fn default() -> Self {
        Self {
            button: MouseButton::Left,
            click_count: 1,
        }
    }
}

impl ClickOptions {
    pub fn double() -> Self {
        Self {
            click_count: 2,
            ..Self::default()
        }
    }

    pub fn right() -> Self {
        Self {
            button: MouseButton::Right,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickMethod {
    MouseEvents,
    JsClick,
}

/// JS that replays the mouse event sequence a real click produces.
///
/// Each press fires mousedown/mouseup; left presses add `click` with an
/// increasing `detail`, a second left press adds `dblclick`, and a right
/// press ends with `contextmenu`.
fn mouse_sequence_js(selector_js: &str, options: ClickOptions) -> String {
    format!(
        r#"(() => {{
            const el = {selector_js};
            const rect = el.getBoundingClientRect();
            const x = rect.left + rect.width / 2;
            const y = rect.top + rect.height / 2;
            const button = {button};
            const fire = (type, detail) => el.dispatchEvent(new MouseEvent(type, {{
                bubbles: true, cancelable: true, composed: true, view: window,
                clientX: x, clientY: y, button: button, buttons: type === 'mousedown' ? (1 << button) : 0, detail: detail
            }}));
            fire('mousemove', 0);
            for (let i = 1; i <= {count}; i++) {{
                fire('mousedown', i);
                fire('mouseup', i);
                if (button === 0) fire('click', i);
                else if (button === 1) fire('auxclick', i);
            }}
            if (button === 0 && {count} === 2) fire('dblclick', 2);
            if (button === 2) fire('contextmenu', 1);
            return true;
        }})()"#,
        selector_js = selector_js,
        button = options.button.code(),
        count = options.click_count.max(1),
    )
}

/// Hybrid click strategy:
/// 1. Resolve selector to element and scroll it into view
/// 2. Check visibility and obstruction at its center point
/// 3. Replay mouse events on the element if it is hit-testable
/// 4. Otherwise fall back to `el.click()` for plain left clicks
pub async fn hybrid_click(page: &Page, selector: &Selector, options: ClickOptions) -> Result<ClickMethod> {
    let selector_js = selector.first_js()?;

    let check_js = format!(
        r#"(() => {{
            const el = {selector_js};
            if (!el) return {{ found: false }};

            el.scrollIntoView({{ block: 'center', inline: 'center', behavior: 'instant' }});

            const rect = el.getBoundingClientRect();
            const centerX = rect.left + rect.width / 2;
            const centerY = rect.top + rect.height / 2;

            const style = getComputedStyle(el);
            const visible = rect.width > 0 && rect.height > 0
                && style.display !== 'none' && style.visibility !== 'hidden';

            const topEl = document.elementFromPoint(centerX, centerY);
            const unobscured = !!topEl && (el === topEl || el.contains(topEl) || topEl.contains(el));

            return {{ found: true, visible: visible, unobscured: unobscured }};
        }})()"#,
        selector_js = selector_js,
    );

    let check_result: serde_json::Value = page
        .evaluate(check_js.as_str())
        .await
        .context("Failed to evaluate click check")?
        .into_value()
        .context("Failed to parse click check result")?;

    if !check_result["found"].as_bool().unwrap_or(false) {
        return Err(HarnessError::ElementNotFound {
            selector: selector.to_string(),
        }
        .into());
    }

    let visible = check_result["visible"].as_bool().unwrap_or(false);
    let unobscured = check_result["unobscured"].as_bool().unwrap_or(false);

    // Let scroll/layout settle
    tokio::time::sleep(std::time::Duration::from_millis(50)).await;

    let plain_click = options == ClickOptions::default();

    if (visible && unobscured) || !plain_click {
        page.evaluate(mouse_sequence_js(&selector_js, options).as_str())
            .await
            .context("Failed to dispatch mouse events")?;
        tracing::debug!("Clicked {} with mouse events ({:?})", selector, options);
        Ok(ClickMethod::MouseEvents)
    } else {
        let js_click = format!(
            r#"(() => {{
                const el = {selector_js};
                if (!el) throw new Error('Element not found');
                el.click();
                return true;
            }})()"#,
            selector_js = selector_js
        );

        page.evaluate(js_click.as_str())
            .await
            .context("Failed to JS click")?;
        tracing::debug!("Clicked {} with el.click() fallback", selector);
        Ok(ClickMethod::JsClick)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_double_click_sequence() {
        let js = mouse_sequence_js("el0", ClickOptions::double());
        assert!(js.contains("const button = 0;"));
        assert!(js.contains("i <= 2"));
        assert!(js.contains("fire('dblclick', 2)"));
    }

    #[test]
    fn test_right_click_sequence() {
        let js = mouse_sequence_js("el0", ClickOptions::right());
        assert!(js.contains("const button = 2;"));
        assert!(js.contains("fire('contextmenu', 1)"));
    }

    #[test]
    fn test_click_count_never_zero() {
        let options = ClickOptions {
            click_count: 0,
            ..ClickOptions::default()
        };
        assert!(mouse_sequence_js("el0", options).contains("i <= 1"));
    }
}
