use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://demoqa.com";

/// Default timeout for auto-retrying assertions.
pub const DEFAULT_EXPECT_TIMEOUT: Duration = Duration::from_millis(5_000);
/// Default timeout for explicit synchronization waits.
pub const DEFAULT_WAIT_TIMEOUT: Duration = Duration::from_millis(30_000);
pub const DEFAULT_NAVIGATION_TIMEOUT: Duration = Duration::from_millis(30_000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Scenario groups. Each suite pins one viewport size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suite {
    Elements,
    Forms,
}

impl Suite {
    pub fn viewport(self) -> Viewport {
        match self {
            Suite::Elements => Viewport::new(1024, 600),
            Suite::Forms => Viewport::new(1920, 1080),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Suite::Elements => "elements",
            Suite::Forms => "forms",
        }
    }
}

/// How a single browser session is launched.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub headless: bool,
    pub no_sandbox: bool,
    pub chrome_path: Option<PathBuf>,
    pub viewport: Viewport,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            headless: true,
            no_sandbox: false,
            chrome_path: None,
            viewport: Suite::Elements.viewport(),
        }
    }
}

/// Timeouts handed to scenarios alongside the page.
#[derive(Debug, Clone, Copy)]
pub struct Timeouts {
    pub expect: Duration,
    pub wait: Duration,
    pub navigation: Duration,
}

impl Default for Timeouts {
    fn default() -> Self {
        Self {
            expect: DEFAULT_EXPECT_TIMEOUT,
            wait: DEFAULT_WAIT_TIMEOUT,
            navigation: DEFAULT_NAVIGATION_TIMEOUT,
        }
    }
}

/// Everything a run needs, assembled from the CLI or defaults.
#[derive(Debug, Clone)]
pub struct HarnessConfig {
    pub base_url: String,
    pub headless: bool,
    pub no_sandbox: bool,
    pub chrome_path: Option<PathBuf>,
    pub timeouts: Timeouts,
    pub artifacts_dir: Option<PathBuf>,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            headless: true,
            no_sandbox: false,
            chrome_path: None,
            timeouts: Timeouts::default(),
            artifacts_dir: None,
        }
    }
}

impl HarnessConfig {
    /// Session settings for a scenario in `suite`.
    pub fn session_for(&self, suite: Suite) -> SessionConfig {
        SessionConfig {
            headless: self.headless,
            no_sandbox: self.no_sandbox,
            chrome_path: self.chrome_path.clone(),
            viewport: suite.viewport(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suite_viewports() {
        assert_eq!(Suite::Elements.viewport(), Viewport::new(1024, 600));
        assert_eq!(Suite::Forms.viewport(), Viewport::new(1920, 1080));
    }

    #[test]
    fn test_session_for_carries_launch_flags() {
        let config = HarnessConfig {
            headless: false,
            no_sandbox: true,
            chrome_path: Some(PathBuf::from("/opt/chrome")),
            ..Default::default()
        };
        let session = config.session_for(Suite::Forms);
        assert!(!session.headless);
        assert!(session.no_sandbox);
        assert_eq!(session.chrome_path, Some(PathBuf::from("/opt/chrome")));
        assert_eq!(session.viewport, Viewport::new(1920, 1080));
    }
}
