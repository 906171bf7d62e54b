use anyhow::{ensure, Result};
use std::time::Duration;

use crate::data::{StudentRecord, STUDENT};
use crate::expect::expect;
use crate::page::ScenarioPage;
use crate::selectors::xpath;
use crate::site::Route;

pub const CONFIRMATION_TITLE: &str = "Thanks for submitting the form";

const STATE_INPUT: &str = "#react-select-3-input";
const CITY_INPUT: &str = "#react-select-4-input";

/// Labels of the confirmation table, top to bottom.
pub const SUMMARY_LABELS: [&str; 10] = [
    "Student Name",
    "Student Email",
    "Gender",
    "Mobile",
    "Date of Birth",
    "Subjects",
    "Hobbies",
    "Picture",
    "Address",
    "State and City",
];

/// Expected confirmation values keyed by label. The picture row is empty.
pub fn summary(student: &StudentRecord) -> Vec<(&'static str, String)> {
    vec![
        ("Student Name", student.full_name()),
        ("Student Email", student.email.to_string()),
        ("Gender", student.gender.label().to_string()),
        ("Mobile", student.mobile.to_string()),
        ("Date of Birth", student.date_of_birth_display.to_string()),
        ("Subjects", student.subject.to_string()),
        ("Hobbies", student.hobby.label().to_string()),
        ("Address", student.current_address.to_string()),
        ("State and City", format!("{} {}", student.state, student.city)),
    ]
}

fn summary_value(label: &str) -> String {
    format!(
        "//div[contains(@class, 'modal-content')]//td[text()={}]/following-sibling::td",
        xpath::literal(label)
    )
}

/// Type into a select's search input and commit the highlighted option.
async fn choose(page: &ScenarioPage, input: &str, value: &str) -> Result<()> {
    let field = page.locator(input);
    field.fill(value).await?;
    field.press("Enter").await
}

pub async fn run(page: &ScenarioPage) -> Result<()> {
    let student = &STUDENT;
    page.goto(Route::PracticeForm).await?;

    page.fill("#firstName", student.first_name).await?;
    page.fill("#lastName", student.last_name).await?;
    page.fill("#userEmail", student.email).await?;
    page.click(&format!("//label[@for='{}']", student.gender.input_id()))
        .await?;
    page.fill("#userNumber", student.mobile).await?;

    let birth_date = page.locator("#dateOfBirthInput");
    birth_date.fill(student.date_of_birth).await?;
    birth_date.press("Escape").await?;
    expect(&birth_date).to_have_value(student.date_of_birth).await?;

    choose(page, "#subjectsInput", student.subject).await?;
    page.click(&format!("//label[@for='{}']", student.hobby.input_id()))
        .await?;
    page.fill("#currentAddress", student.current_address).await?;
    choose(page, STATE_INPUT, student.state).await?;
    choose(page, CITY_INPUT, student.city).await?;

    page.scroll_into_view("#submit", Duration::ZERO).await?;
    page.click("#submit").await?;

    expect(&page.locator("#example-modal-sizes-title-lg"))
        .to_have_text(CONFIRMATION_TITLE)
        .await?;

    let labels = page
        .locator("//div[contains(@class, 'modal-content')]//tbody/tr/td[1]")
        .all_inner_texts()
        .await?;
    ensure!(
        labels == SUMMARY_LABELS,
        "Unexpected confirmation rows: {:?}",
        labels
    );

    for (label, value) in summary(student) {
        expect(&page.locator(summary_value(label)))
            .to_have_text(value)
            .await?;
    }

    page.click("#closeLargeModal").await?;
    expect(&page.locator(".modal-content")).to_have_count(0).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_covers_every_filled_row() {
        let rows = summary(&STUDENT);
        for (label, _) in &rows {
            assert!(SUMMARY_LABELS.contains(label));
        }
        assert!(rows.iter().all(|(label, _)| *label != "Picture"));
        assert_eq!(rows.len(), SUMMARY_LABELS.len() - 1);
    }

    #[test]
    fn test_summary_values() {
        let rows = summary(&STUDENT);
        assert_eq!(rows[0], ("Student Name", "Vasiliy Pupkin".to_string()));
        assert_eq!(rows[8], ("State and City", "NCR Delhi".to_string()));
    }
}
