use anyhow::Result;

/// JS array of every element node matched by an XPath expression.
pub fn all_js(xpath: &str) -> Result<String> {
    Ok(format!(
        r#"(() => {{
            const snapshot = document.evaluate(
                {xpath},
                document,
                null,
                XPathResult.ORDERED_NODE_SNAPSHOT_TYPE,
                null
            );
            const found = [];
            for (let i = 0; i < snapshot.snapshotLength; i++) {{
                const node = snapshot.snapshotItem(i);
                if (node.nodeType === Node.ELEMENT_NODE) found.push(node);
            }}
            return found;
        }})()"#,
        xpath = serde_json::to_string(xpath)?
    ))
}

/// Quote `value` as an XPath string literal.
///
/// XPath 1.0 has no escape sequences, so a value containing both quote kinds
/// is assembled with `concat()`.
pub fn literal(value: &str) -> String {
    if !value.contains('\'') {
        return format!("'{}'", value);
    }
    if !value.contains('"') {
        return format!("\"{}\"", value);
    }
    let parts: Vec<String> = value
        .split('\'')
        .map(|part| format!("'{}'", part))
        .collect();
    format!("concat({})", parts.join(", \"'\", "))
}
