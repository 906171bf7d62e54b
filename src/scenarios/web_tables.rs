use anyhow::Result;

use crate::data::{TableRecord, EDITED_TABLE_RECORD, NEW_TABLE_RECORD};
use crate::expect::expect;
use crate::interaction::WaitState;
use crate::page::ScenarioPage;
use crate::selectors::xpath;
use crate::site::Route;

/// Table body cell showing `email`.
fn email_cell(email: &str) -> String {
    format!(
        "//div[contains(@class, 'rt-tbody')]//div[contains(text(), {})]",
        xpath::literal(email)
    )
}

/// Any element whose own text contains `email`.
fn email_text(email: &str) -> String {
    format!("//div[contains(text(), {})]", xpath::literal(email))
}

/// The row action (`Edit`/`Delete`) following the cell showing `email`.
fn row_action(email: &str, action: &str) -> String {
    format!(
        "//div[contains(text(), {})]/following::div//span[@title={}]",
        xpath::literal(email),
        xpath::literal(action)
    )
}

async fn fill_form(page: &ScenarioPage, record: &TableRecord) -> Result<()> {
    for (selector, value) in record.fields() {
        page.fill(selector, value).await?;
    }
    page.click("#submit").await
}

pub async fn run(page: &ScenarioPage) -> Result<()> {
    page.goto(Route::WebTables).await?;

    page.click("#addNewRecordButton").await?;
    fill_form(page, &NEW_TABLE_RECORD).await?;

    // Every mutation re-renders the table; wait for it before the next step.
    page.wait_for_selector(&email_cell(NEW_TABLE_RECORD.email), WaitState::Visible)
        .await?;

    page.click(&row_action(NEW_TABLE_RECORD.email, "Edit")).await?;
    fill_form(page, &EDITED_TABLE_RECORD).await?;

    page.wait_for_selector(&email_cell(EDITED_TABLE_RECORD.email), WaitState::Visible)
        .await?;

    expect(&page.locator(email_cell(EDITED_TABLE_RECORD.email)))
        .to_have_count(1)
        .await?;
    expect(&page.locator(email_cell(NEW_TABLE_RECORD.email)))
        .to_have_count(0)
        .await?;

    page.click(&row_action(EDITED_TABLE_RECORD.email, "Delete")).await?;

    expect(&page.locator(email_text(EDITED_TABLE_RECORD.email)))
        .to_have_count(0)
        .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_action_xpath() {
        assert_eq!(
            row_action("michaelsmith@example.com", "Edit"),
            "//div[contains(text(), 'michaelsmith@example.com')]/following::div//span[@title='Edit']"
        );
    }

    #[test]
    fn test_email_cell_scoped_to_table_body() {
        assert!(email_cell("a@b.c").starts_with("//div[contains(@class, 'rt-tbody')]"));
    }
}
