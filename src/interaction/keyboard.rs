use anyhow::{Context, Result};
use chromiumoxide::page::Page;

use crate::error::HarnessError;
use crate::selectors::Selector;

/// Replace an input's value the way a user edit would, so framework-managed
/// inputs (React) observe the change. Contenteditable elements get the text
/// inserted after selecting their current content. Disabled and readonly
/// controls are refused rather than written through.
pub async fn fill(page: &Page, selector: &Selector, text: &str) -> Result<()> {
    let js = format!(
        r#"(() => {{
            const el = {selector_js};
            if (!el) return 'missing';
            if (el.matches(':disabled') || el.readOnly) return 'not-editable';
            el.scrollIntoView({{ block: 'center', behavior: 'instant' }});
            el.focus();
            const text = {text};
            if (el.tagName === 'INPUT' || el.tagName === 'TEXTAREA') {{
                const setter = Object.getOwnPropertyDescriptor(
                    Object.getPrototypeOf(el), 'value'
                )?.set;
                if (setter) {{
                    setter.call(el, text);
                }} else {{
                    el.value = text;
                }}
                el.dispatchEvent(new Event('input', {{ bubbles: true }}));
                el.dispatchEvent(new Event('change', {{ bubbles: true }}));
            }} else if (el.isContentEditable) {{
                document.execCommand('selectAll', false, null);
                document.execCommand('insertText', false, text);
            }} else {{
                throw new Error('Element is not fillable: ' + el.tagName.toLowerCase());
            }}
            return 'filled';
        }})()"#,
        selector_js = selector.first_js()?,
        text = serde_json::to_string(text)?
    );

    let status: String = page
        .evaluate(js.as_str())
        .await
        .with_context(|| format!("Failed to fill {}", selector))?
        .into_value()
        .context("Failed to parse fill result")?;

    match status.as_str() {
        "filled" => {}
        "missing" => {
            return Err(HarnessError::ElementNotFound {
                selector: selector.to_string(),
            }
            .into())
        }
        _ => return Err(HarnessError::Script(format!("{} is not editable", selector)).into()),
    }

    tracing::debug!("Filled {} with {:?}", selector, text);
    Ok(())
}

/// Press a key (Enter, Tab, Escape, etc.) on the focused element.
pub async fn press_key(page: &Page, key: &str) -> Result<()> {
    let (code, key_code) = key_to_code(key);
    let js = format!(
        r#"(() => {{
            const el = document.activeElement || document.body;
            const opts = {{
                key: {key},
                code: {code},
                keyCode: {key_code},
                which: {key_code},
                bubbles: true,
                cancelable: true
            }};
            el.dispatchEvent(new KeyboardEvent('keydown', opts));
            el.dispatchEvent(new KeyboardEvent('keypress', opts));
            el.dispatchEvent(new KeyboardEvent('keyup', opts));
            return true;
        }})()"#,
        key = serde_json::to_string(key)?,
        code = serde_json::to_string(&code)?,
        key_code = key_code,
    );

    page.evaluate(js.as_str()).await.context("Failed to press key")?;
    tracing::debug!("Pressed {}", key);
    Ok(())
}

fn key_to_code(key: &str) -> (String, u32) {
    match key {
        "Enter" => ("Enter".into(), 13),
        "Tab" => ("Tab".into(), 9),
        "Escape" => ("Escape".into(), 27),
        "Backspace" => ("Backspace".into(), 8),
        "Delete" => ("Delete".into(), 46),
        "ArrowUp" => ("ArrowUp".into(), 38),
        "ArrowDown" => ("ArrowDown".into(), 40),
        "ArrowLeft" => ("ArrowLeft".into(), 37),
        "ArrowRight" => ("ArrowRight".into(), 39),
        "Space" | " " => ("Space".into(), 32),
        _ => (
            format!("Key{}", key.to_uppercase()),
            key.chars().next().map(|c| c.to_ascii_uppercase() as u32).unwrap_or(0),
        ),
    }
}
