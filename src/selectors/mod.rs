pub mod css;
pub mod text;
pub mod xpath;

use anyhow::{Context, Result};
use chromiumoxide::page::Page;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The type of selector to use for element resolution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SelectorType {
    #[default]
    Css,
    Text,
    Xpath,
}

/// A selector string together with how it should be resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    pub value: String,
    pub kind: SelectorType,
}

impl Selector {
    /// Detect the selector type the way Playwright does: `//`, `..` and `(`
    /// prefixes are XPath, `xpath=`/`css=`/`text=` prefixes are explicit, and
    /// `:has-text("...")` collapses to a text selector.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if let Some(rest) = trimmed.strip_prefix("xpath=") {
            return Self::new(rest, SelectorType::Xpath);
        }
        if let Some(rest) = trimmed.strip_prefix("text=") {
            return Self::new(rest, SelectorType::Text);
        }
        if let Some(rest) = trimmed.strip_prefix("css=") {
            return Self::new(rest, SelectorType::Css);
        }
        if trimmed.starts_with("//") || trimmed.starts_with("..") || trimmed.starts_with('(') {
            return Self::new(trimmed, SelectorType::Xpath);
        }
        let (value, kind) = normalize_selector_type(trimmed, SelectorType::Css);
        Self { value, kind }
    }

    pub fn new(value: impl Into<String>, kind: SelectorType) -> Self {
        Self {
            value: value.into(),
            kind,
        }
    }

    /// JS expression evaluating to an array of every matching element.
    pub fn all_js(&self) -> Result<String> {
        match self.kind {
            SelectorType::Css => css::all_js(&self.value),
            SelectorType::Text => text::all_js(&self.value),
            SelectorType::Xpath => xpath::all_js(&self.value),
        }
    }

    /// JS expression evaluating to the first matching element or `null`.
    pub fn first_js(&self) -> Result<String> {
        Ok(format!("(({}) [0] || null)", self.all_js()?))
    }
}

impl From<&str> for Selector {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

impl From<String> for Selector {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

/// Information about a found element.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ElementInfo {
    pub index: usize,
    pub tag: String,
    pub text: String,
    pub attributes: serde_json::Value,
}

/// Resolve a selector to matching elements on the page.
pub async fn find_elements(page: &Page, selector: &Selector) -> Result<Vec<ElementInfo>> {
    let js = format!(
        r#"(() => {{
            const elements = {all};
            return elements.map((el, index) => {{
                const attrs = {{}};
                for (const attr of el.attributes || []) {{
                    attrs[attr.name] = attr.value;
                }}
                return {{
                    index: index,
                    tag: el.tagName.toLowerCase(),
                    text: (el.innerText || el.textContent || '').trim(),
                    attributes: attrs
                }};
            }});
        }})()"#,
        all = selector.all_js()?
    );

    let result: serde_json::Value = page
        .evaluate(js)
        .await
        .with_context(|| format!("Failed to resolve selector {}", selector))?
        .into_value()
        .context("Failed to parse selector result")?;

    parse_element_results(&result)
}

fn parse_element_results(value: &serde_json::Value) -> Result<Vec<ElementInfo>> {
    let arr = value.as_array().context("Expected array of elements")?;
    let mut elements = Vec::new();
    for item in arr {
        elements.push(ElementInfo {
            index: item["index"].as_u64().unwrap_or(0) as usize,
            tag: item["tag"].as_str().unwrap_or("").to_string(),
            text: item["text"].as_str().unwrap_or("").to_string(),
            attributes: item["attributes"].clone(),
        });
    }
    Ok(elements)
}

/// Detect Playwright-style :has-text("...") and convert to text selector.
pub fn normalize_selector_type(selector: &str, selector_type: SelectorType) -> (String, SelectorType) {
    if matches!(selector_type, SelectorType::Css) {
        if let Some(start) = selector.find(":has-text(") {
            let after = &selector[start + ":has-text(".len()..];
            let (quote, rest) = if let Some(stripped) = after.strip_prefix('"') {
                ('"', stripped)
            } else if let Some(stripped) = after.strip_prefix('\'') {
                ('\'', stripped)
            } else {
                return (selector.to_string(), selector_type);
            };
            if let Some(end) = rest.find(quote) {
                let text = &rest[..end];
                return (text.to_string(), SelectorType::Text);
            }
        }
    }
    (selector.to_string(), selector_type)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_detects_xpath() {
        let sel = Selector::parse("//span[text()='Desktop']/..//span[@class='rct-checkbox']");
        assert_eq!(sel.kind, SelectorType::Xpath);

        let sel = Selector::parse("(//button)[2]");
        assert_eq!(sel.kind, SelectorType::Xpath);
    }

    #[test]
    fn test_parse_css_default() {
        let sel = Selector::parse(".border #currentAddress");
        assert_eq!(sel.kind, SelectorType::Css);
        assert_eq!(sel.value, ".border #currentAddress");
    }

    #[test]
    fn test_parse_explicit_prefixes() {
        assert_eq!(
            Selector::parse("text=Click Me"),
            Selector::new("Click Me", SelectorType::Text)
        );
        assert_eq!(
            Selector::parse("xpath=//div"),
            Selector::new("//div", SelectorType::Xpath)
        );
        assert_eq!(
            Selector::parse("css=div.modal"),
            Selector::new("div.modal", SelectorType::Css)
        );
    }

    #[test]
    fn test_normalize_has_text_double_quotes() {
        let (sel, st) = normalize_selector_type(r#"button:has-text("Submit")"#, SelectorType::Css);
        assert_eq!(sel, "Submit");
        assert!(matches!(st, SelectorType::Text));
    }

    #[test]
    fn test_normalize_has_text_single_quotes() {
        let sel = Selector::parse("button:has-text('Click Me')");
        assert_eq!(sel, Selector::new("Click Me", SelectorType::Text));
    }

    #[test]
    fn test_normalize_text_type_unchanged() {
        let (sel, st) = normalize_selector_type(r#"button:has-text("Submit")"#, SelectorType::Text);
        assert_eq!(sel, r#"button:has-text("Submit")"#);
        assert!(matches!(st, SelectorType::Text));
    }

    #[test]
    fn test_first_js_wraps_all_js() {
        let sel = Selector::parse("#submit");
        let first = sel.first_js().unwrap();
        assert!(first.contains(r##"document.querySelectorAll("#submit")"##));
        assert!(first.ends_with("[0] || null)"));
    }

    #[test]
    fn test_parse_element_results() {
        let value = serde_json::json!([
            { "index": 0, "tag": "div", "text": "Michael", "attributes": { "class": "rt-td" } },
            { "index": 1, "tag": "span", "text": "", "attributes": { "title": "Edit" } }
        ]);
        let elements = parse_element_results(&value).unwrap();
        assert_eq!(elements.len(), 2);
        assert_eq!(elements[0].text, "Michael");
        assert_eq!(elements[1].attributes["title"], "Edit");
    }
}
