use anyhow::Result;

/// JS array of every element matching a CSS selector.
pub fn all_js(selector: &str) -> Result<String> {
    Ok(format!(
        "Array.from(document.querySelectorAll({}))",
        serde_json::to_string(selector)?
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selector_is_json_escaped() {
        let js = all_js(r#"input[name="q"]"#).unwrap();
        assert_eq!(
            js,
            r#"Array.from(document.querySelectorAll("input[name=\"q\"]"))"#
        );
    }
}
