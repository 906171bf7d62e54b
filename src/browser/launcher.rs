use anyhow::{bail, Result};
use std::path::{Path, PathBuf};

use crate::config::SessionConfig;

/// Find the Chrome/Chromium binary. An explicit path wins over discovery.
pub fn find_chrome_binary(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        if path.exists() {
            return Ok(path.to_path_buf());
        }
        bail!("Chrome binary not found at {}", path.display());
    }

    let candidates = chrome_candidates();

    for candidate in &candidates {
        let path = PathBuf::from(candidate);
        if path.exists() {
            tracing::debug!("Found Chrome at: {}", path.display());
            return Ok(path);
        }
    }

    for name in &[
        "google-chrome",
        "google-chrome-stable",
        "chromium-browser",
        "chromium",
    ] {
        if let Ok(path) = which::which(name) {
            tracing::debug!("Found Chrome in PATH: {}", path.display());
            return Ok(path);
        }
    }

    bail!(
        "Could not find Chrome or Chromium. Searched:\n{}\nSet --chrome or DEMOQA_CHROME.",
        candidates.join("\n")
    )
}

fn chrome_candidates() -> Vec<String> {
    let mut candidates = Vec::new();

    #[cfg(target_os = "macos")]
    {
        candidates.extend([
            "/Applications/Google Chrome.app/Contents/MacOS/Google Chrome".into(),
            "/Applications/Chromium.app/Contents/MacOS/Chromium".into(),
        ]);
        if let Ok(home) = std::env::var("HOME") {
            candidates.push(format!(
                "{}/Applications/Google Chrome.app/Contents/MacOS/Google Chrome",
                home
            ));
        }
    }

    #[cfg(target_os = "linux")]
    {
        candidates.extend([
            "/usr/bin/google-chrome".into(),
            "/usr/bin/google-chrome-stable".into(),
            "/usr/bin/chromium-browser".into(),
            "/usr/bin/chromium".into(),
            "/snap/bin/chromium".into(),
        ]);
    }

    #[cfg(target_os = "windows")]
    {
        for var in ["PROGRAMFILES", "PROGRAMFILES(X86)", "LOCALAPPDATA"] {
            if let Ok(dir) = std::env::var(var) {
                candidates.push(format!("{}\\Google\\Chrome\\Application\\chrome.exe", dir));
            }
        }
    }

    candidates
}

/// Extra Chrome flags for a scenario session. Headless mode, the profile
/// directory and the debugging port are set through `BrowserConfig` itself.
pub fn chrome_args(config: &SessionConfig) -> Vec<String> {
    let mut args: Vec<String> = vec![
        "--no-first-run".into(),
        "--no-default-browser-check".into(),
        "--disable-background-networking".into(),
        "--disable-client-side-phishing-detection".into(),
        "--disable-default-apps".into(),
        "--disable-extensions".into(),
        "--disable-hang-monitor".into(),
        "--disable-popup-blocking".into(),
        "--disable-prompt-on-repost".into(),
        "--disable-sync".into(),
        "--disable-translate".into(),
        "--metrics-recording-only".into(),
        "--safebrowsing-disable-auto-update".into(),
    ];

    if config.no_sandbox {
        args.push("--no-sandbox".into());
    }

    args
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chrome_args_sandbox_flag() {
        let mut config = SessionConfig::default();
        assert!(!chrome_args(&config).iter().any(|a| a == "--no-sandbox"));

        config.no_sandbox = true;
        assert!(chrome_args(&config).iter().any(|a| a == "--no-sandbox"));
    }

    #[test]
    fn test_chrome_args_never_set_profile_dir() {
        let args = chrome_args(&SessionConfig::default());
        assert!(!args.iter().any(|a| a.starts_with("--user-data-dir")));
        assert!(!args.iter().any(|a| a.starts_with("--headless")));
    }

    #[test]
    fn test_explicit_missing_binary_is_an_error() {
        let err = find_chrome_binary(Some(Path::new("/definitely/not/chrome")))
            .expect_err("missing explicit binary should error");
        assert!(err.to_string().contains("/definitely/not/chrome"));
    }
}
