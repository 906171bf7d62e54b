//! One end-to-end scenario per demo page. Each scenario navigates to its
//! route, drives the page and asserts on the result; none depends on another.

pub mod buttons;
pub mod check_box;
pub mod dynamic_properties;
pub mod modal_dialogs;
pub mod practice_form;
pub mod radio_button;
pub mod text_box;
pub mod upload_download;
pub mod web_tables;

use anyhow::Result;
use std::future::Future;
use std::pin::Pin;

use crate::config::Suite;
use crate::page::ScenarioPage;
use crate::site::Route;

pub type ScenarioFuture<'a> = Pin<Box<dyn Future<Output = Result<()>> + 'a>>;

pub struct Scenario {
    pub name: &'static str,
    pub route: Route,
    pub suite: Suite,
    run: for<'a> fn(&'a ScenarioPage) -> ScenarioFuture<'a>,
}

impl Scenario {
    pub fn run<'a>(&self, page: &'a ScenarioPage) -> ScenarioFuture<'a> {
        (self.run)(page)
    }
}

impl std::fmt::Debug for Scenario {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scenario")
            .field("name", &self.name)
            .field("route", &self.route)
            .field("suite", &self.suite)
            .finish()
    }
}

macro_rules! scenario {
    ($name:literal, $module:ident, $route:expr, $suite:expr) => {
        Scenario {
            name: $name,
            route: $route,
            suite: $suite,
            run: {
                fn run(page: &ScenarioPage) -> ScenarioFuture<'_> {
                    Box::pin($module::run(page))
                }
                run
            },
        }
    };
}

pub static SCENARIOS: &[Scenario] = &[
    scenario!("text-box", text_box, Route::TextBox, Suite::Elements),
    scenario!("check-box", check_box, Route::CheckBox, Suite::Elements),
    scenario!("radio-button", radio_button, Route::RadioButton, Suite::Elements),
    scenario!("web-tables", web_tables, Route::WebTables, Suite::Elements),
    scenario!("buttons", buttons, Route::Buttons, Suite::Elements),
    scenario!("dynamic-properties", dynamic_properties, Route::DynamicProperties, Suite::Elements),
    scenario!("upload-download", upload_download, Route::UploadDownload, Suite::Elements),
    scenario!("modal-dialogs", modal_dialogs, Route::ModalDialogs, Suite::Elements),
    scenario!("practice-form", practice_form, Route::PracticeForm, Suite::Forms),
];

pub fn find(name: &str) -> Option<&'static Scenario> {
    SCENARIOS.iter().find(|s| s.name == name)
}

/// Resolve `names` to scenarios, keeping registry order. An empty list
/// selects everything; an unknown name is an error.
pub fn select(names: &[String]) -> Result<Vec<&'static Scenario>> {
    if names.is_empty() {
        return Ok(SCENARIOS.iter().collect());
    }
    for name in names {
        if find(name).is_none() {
            let known: Vec<&str> = SCENARIOS.iter().map(|s| s.name).collect();
            anyhow::bail!("Unknown scenario '{}'. Known: {}", name, known.join(", "));
        }
    }
    Ok(SCENARIOS
        .iter()
        .filter(|s| names.iter().any(|n| n == s.name))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_names_and_routes_unique() {
        let names: HashSet<_> = SCENARIOS.iter().map(|s| s.name).collect();
        let routes: HashSet<_> = SCENARIOS.iter().map(|s| s.route).collect();
        assert_eq!(names.len(), SCENARIOS.len());
        assert_eq!(routes.len(), SCENARIOS.len());
    }

    #[test]
    fn test_only_practice_form_uses_forms_suite() {
        for scenario in SCENARIOS {
            let expected = if scenario.name == "practice-form" {
                Suite::Forms
            } else {
                Suite::Elements
            };
            assert_eq!(scenario.suite, expected, "{}", scenario.name);
        }
    }

    #[test]
    fn test_select_keeps_registry_order() {
        let picked = select(&["buttons".into(), "text-box".into()]).unwrap();
        let names: Vec<_> = picked.iter().map(|s| s.name).collect();
        assert_eq!(names, ["text-box", "buttons"]);
    }

    #[test]
    fn test_select_rejects_unknown() {
        let err = select(&["nope".into()]).unwrap_err();
        assert!(err.to_string().contains("Unknown scenario 'nope'"));
    }

    #[test]
    fn test_select_all_by_default() {
        assert_eq!(select(&[]).unwrap().len(), SCENARIOS.len());
    }
}
