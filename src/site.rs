use std::path::Path;

/// Demo-site pages the scenarios visit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    TextBox,
    CheckBox,
    RadioButton,
    WebTables,
    Buttons,
    DynamicProperties,
    UploadDownload,
    ModalDialogs,
    PracticeForm,
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Route::TextBox => "text-box",
            Route::CheckBox => "checkbox",
            Route::RadioButton => "radio-button",
            Route::WebTables => "webtables",
            Route::Buttons => "buttons",
            Route::DynamicProperties => "dynamic-properties",
            Route::UploadDownload => "upload-download",
            Route::ModalDialogs => "modal-dialogs",
            Route::PracticeForm => "automation-practice-form",
        }
    }
}

/// Where routes are served from: the live site, or a directory of local HTML
/// copies (`file://` base, one `<route>.html` per page).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Site {
    base_url: String,
}

impl Site {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// A site backed by local HTML files in `dir`.
    pub fn local(dir: &Path) -> Self {
        Self::new(format!("file://{}", dir.display()))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn is_local(&self) -> bool {
        self.base_url.starts_with("file://")
    }

    pub fn url(&self, route: Route) -> String {
        if self.is_local() {
            format!("{}/{}.html", self.base_url, route.path())
        } else {
            format!("{}/{}", self.base_url, route.path())
        }
    }
}
