use anyhow::Result;
use chromiumoxide::page::Page;
use serde::Deserialize;

use crate::error::HarnessError;
use crate::selectors::Selector;

/// Snapshot of what a selector currently resolves to. Element-level fields
/// describe the first match.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ElementState {
    pub count: usize,
    pub visible: bool,
    pub enabled: bool,
    /// Enabled and accepts typed text: a non-readonly input or textarea, or
    /// contenteditable content.
    pub editable: bool,
    pub text: Option<String>,
    pub value: Option<String>,
}

impl ElementState {
    pub fn attached(&self) -> bool {
        self.count > 0
    }
}

/// Read the current state of `selector` in one round trip.
pub async fn probe(page: &Page, selector: &Selector) -> Result<ElementState> {
    let js = format!(
        r#"(() => {{
            const els = {all};
            const el = els[0];
            if (!el) return {{ count: 0, visible: false, enabled: false, editable: false, text: null, value: null }};
            const style = getComputedStyle(el);
            const rect = el.getBoundingClientRect();
            const enabled = !el.matches(':disabled');
            const textField = el.tagName === 'INPUT' || el.tagName === 'TEXTAREA';
            return {{
                count: els.length,
                visible: style.display !== 'none'
                    && style.visibility !== 'hidden'
                    && rect.width > 0
                    && rect.height > 0,
                enabled,
                editable: enabled && (el.isContentEditable || (textField && !el.readOnly)),
                text: el.textContent || '',
                value: ('value' in el && typeof el.value === 'string') ? el.value : null
            }};
        }})()"#,
        all = selector.all_js()?
    );

    let state = page
        .evaluate(js)
        .await
        .map_err(|e| HarnessError::Script(format!("probing {}: {}", selector, e)))?
        .into_value()
        .map_err(|e| HarnessError::Script(format!("decoding state of {}: {}", selector, e)))?;
    Ok(state)
}
