use anyhow::Result;

/// JS array of the innermost elements whose own text contains `text`,
/// case-insensitively, in document order without duplicates. Text inside
/// `<script>`, `<style>` and `<noscript>` never matches.
pub fn all_js(text: &str) -> Result<String> {
    Ok(format!(
        r#"(() => {{
            const target = {text}.toLowerCase();
            const walker = document.createTreeWalker(
                document.body,
                NodeFilter.SHOW_TEXT,
                null
            );
            const ignored = new Set(['SCRIPT', 'STYLE', 'NOSCRIPT']);
            const found = [];
            const seen = new Set();
            while (walker.nextNode()) {{
                const node = walker.currentNode;
                if (node.textContent.trim().toLowerCase().includes(target)) {{
                    const el = node.parentElement;
                    if (el && !ignored.has(el.tagName) && !seen.has(el)) {{
                        seen.add(el);
                        found.push(el);
                    }}
                }}
            }}
            return found;
        }})()"#,
        text = serde_json::to_string(text)?
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_js_escapes_and_skips_source_text() {
        let js = all_js(r#"Say "hi""#).unwrap();
        assert!(js.contains(r#""Say \"hi\"".toLowerCase()"#));
        assert!(js.contains("'SCRIPT', 'STYLE', 'NOSCRIPT'"));
        assert!(js.contains("!ignored.has(el.tagName)"));
    }
}
