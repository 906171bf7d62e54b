use anyhow::Result;

use crate::expect::expect;
use crate::page::ScenarioPage;
use crate::selectors::xpath;
use crate::site::Route;

/// Checkbox control of the tree node titled `title`.
fn node_checkbox(title: &str) -> String {
    format!(
        "//span[text()={}]/..//span[@class='rct-checkbox']",
        xpath::literal(title)
    )
}

pub async fn run(page: &ScenarioPage) -> Result<()> {
    page.goto(Route::CheckBox).await?;

    // Expand "Home" to reveal its children
    page.click(".rct-collapse-btn").await?;
    page.click(&node_checkbox("Desktop")).await?;

    let result = page.locator(".display-result");
    expect(&result).to_be_visible().await?;
    for id in ["desktop", "notes", "commands"] {
        expect(&result).to_contain_text(id).await?;
    }

    page.click(&node_checkbox("Documents")).await?;
    for id in ["documents", "workspace", "office"] {
        expect(&result).to_contain_text(id).await?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_checkbox_xpath() {
        assert_eq!(
            node_checkbox("Desktop"),
            "//span[text()='Desktop']/..//span[@class='rct-checkbox']"
        );
    }
}
