//! Browser session control over the Chrome DevTools Protocol.
//!
//! One [`Browser`] process hosts any number of [`Session`]s (tabs). Each
//! scenario gets exactly one session, shared by reference with every page
//! component built from it. Lifecycle ownership stays with the scenario:
//! components never close or replace the handle.

use std::sync::Arc;

use chromiumoxide::browser::{Browser as CdpBrowser, BrowserConfig as CdpConfig};
use chromiumoxide::cdp::browser_protocol::network::{
    EnableParams as NetworkEnableParams, SetBlockedUrLsParams,
};
use chromiumoxide::cdp::browser_protocol::page::ReloadParams;
use chromiumoxide::page::Page as CdpPage;
use futures::StreamExt;
use tokio::sync::Mutex;

use crate::result::{SuiteError, SuiteResult};

/// Browser configuration
#[derive(Debug, Clone)]
pub struct BrowserConfig {
    /// Run in headless mode
    pub headless: bool,
    /// Viewport width
    pub viewport_width: u32,
    /// Viewport height
    pub viewport_height: u32,
    /// Path to chromium binary (None = auto-detect)
    pub chromium_path: Option<String>,
    /// Sandbox mode (disable for containers)
    pub sandbox: bool,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            headless: true,
            viewport_width: 1280,
            viewport_height: 800,
            chromium_path: None,
            sandbox: true,
        }
    }
}

impl BrowserConfig {
    /// Set viewport dimensions
    #[must_use]
    pub const fn with_viewport(mut self, width: u32, height: u32) -> Self {
        self.viewport_width = width;
        self.viewport_height = height;
        self
    }

    /// Set headless mode
    #[must_use]
    pub const fn with_headless(mut self, headless: bool) -> Self {
        self.headless = headless;
        self
    }

    /// Set chromium path
    #[must_use]
    pub fn with_chromium_path(mut self, path: impl Into<String>) -> Self {
        self.chromium_path = Some(path.into());
        self
    }

    /// Disable sandbox (for containers/CI)
    #[must_use]
    pub const fn with_no_sandbox(mut self) -> Self {
        self.sandbox = false;
        self
    }
}

/// A running browser instance with a live CDP connection.
#[derive(Debug)]
pub struct Browser {
    config: BrowserConfig,
    inner: Arc<Mutex<CdpBrowser>>,
    #[allow(dead_code)]
    handle: tokio::task::JoinHandle<()>,
}

impl Browser {
    /// Launch a new browser instance.
    ///
    /// # Errors
    ///
    /// Returns error if the browser cannot be launched.
    pub async fn launch(config: BrowserConfig) -> SuiteResult<Self> {
        let mut builder = CdpConfig::builder()
            .window_size(config.viewport_width, config.viewport_height);

        if !config.headless {
            builder = builder.with_head();
        }

        if !config.sandbox {
            builder = builder.no_sandbox();
        }

        if let Some(ref path) = config.chromium_path {
            builder = builder.chrome_executable(path);
        }

        let cdp_config = builder.build().map_err(|e| SuiteError::BrowserLaunch {
            message: e.to_string(),
        })?;

        let (browser, mut handler) =
            CdpBrowser::launch(cdp_config)
                .await
                .map_err(|e| SuiteError::BrowserLaunch {
                    message: e.to_string(),
                })?;

        // The handler stream must be drained for the CDP connection to
        // make progress.
        let handle = tokio::spawn(async move {
            while let Some(h) = handler.next().await {
                if h.is_err() {
                    break;
                }
            }
        });

        tracing::info!(headless = config.headless, "browser launched");

        Ok(Self {
            config,
            inner: Arc::new(Mutex::new(browser)),
            handle,
        })
    }

    /// Open a fresh session (tab) for one scenario.
    ///
    /// # Errors
    ///
    /// Returns error if the page cannot be created.
    pub async fn new_session(&self) -> SuiteResult<Session> {
        let browser = self.inner.lock().await;
        let page = browser
            .new_page("about:blank")
            .await
            .map_err(|e| SuiteError::Page {
                message: e.to_string(),
            })?;

        Ok(Session {
            inner: Some(Arc::new(Mutex::new(page))),
        })
    }

    /// Get the browser configuration
    #[must_use]
    pub const fn config(&self) -> &BrowserConfig {
        &self.config
    }

    /// Close the browser process.
    pub async fn close(self) -> SuiteResult<()> {
        let mut browser = self.inner.lock().await;
        browser.close().await.map_err(|e| SuiteError::BrowserLaunch {
            message: e.to_string(),
        })?;
        Ok(())
    }
}

/// A single browser tab, shared read-only across all page components of
/// one [`PageManager`](crate::manager::PageManager).
///
/// Cloning a `Session` clones the reference, not the tab.
///
/// A session may also be detached (no live browser), which is enough to
/// construct page components and inspect their locators in unit tests;
/// any attempt to evaluate against the page then fails immediately.
#[derive(Debug, Clone)]
pub struct Session {
    inner: Option<Arc<Mutex<CdpPage>>>,
}

impl Session {
    /// Create a detached session with no live browser behind it.
    #[must_use]
    pub fn detached() -> Self {
        Self { inner: None }
    }

    /// Whether a live browser backs this session.
    #[must_use]
    pub const fn is_live(&self) -> bool {
        self.inner.is_some()
    }

    /// Navigate the tab to a URL.
    ///
    /// # Errors
    ///
    /// Returns error if navigation fails.
    pub async fn goto(&self, url: &str) -> SuiteResult<()> {
        let inner = self.live()?;
        let page = inner.lock().await;
        page.goto(url).await.map_err(|e| SuiteError::Navigation {
            url: url.to_string(),
            message: e.to_string(),
        })?;
        tracing::info!(url, "navigated");
        Ok(())
    }

    /// Reload the current document.
    ///
    /// # Errors
    ///
    /// Returns error if the reload command fails.
    pub async fn reload(&self) -> SuiteResult<()> {
        let inner = self.live()?;
        let page = inner.lock().await;
        page.execute(ReloadParams::default())
            .await
            .map_err(|e| SuiteError::Page {
                message: e.to_string(),
            })?;
        tracing::info!("reloaded");
        Ok(())
    }

    /// Current URL of the tab.
    ///
    /// # Errors
    ///
    /// Returns error if the target cannot be queried.
    pub async fn current_url(&self) -> SuiteResult<String> {
        let Some(ref inner) = self.inner else {
            return Ok(String::from("about:blank"));
        };
        let page = inner.lock().await;
        let url = page.url().await.map_err(|e| SuiteError::Page {
            message: e.to_string(),
        })?;
        Ok(url.unwrap_or_else(|| String::from("about:blank")))
    }

    /// Evaluate a JavaScript expression and deserialize its value.
    ///
    /// # Errors
    ///
    /// Returns error if evaluation fails or the session is detached.
    pub async fn evaluate<T: serde::de::DeserializeOwned>(&self, expr: &str) -> SuiteResult<T> {
        let inner = self.live()?;
        let page = inner.lock().await;
        let result = page.evaluate(expr).await.map_err(|e| SuiteError::Evaluation {
            message: e.to_string(),
        })?;
        result.into_value().map_err(|e| SuiteError::Evaluation {
            message: e.to_string(),
        })
    }

    /// Block requests whose URL matches any of the given patterns
    /// (`*` wildcards). Used by the harness to silence the storefront's
    /// telemetry endpoint, which 401s and pollutes console output.
    ///
    /// # Errors
    ///
    /// Returns error if the CDP commands fail.
    pub async fn block_requests(&self, patterns: &[&str]) -> SuiteResult<()> {
        let inner = self.live()?;
        let page = inner.lock().await;
        page.execute(NetworkEnableParams::default())
            .await
            .map_err(|e| SuiteError::Page {
                message: e.to_string(),
            })?;
        let urls: Vec<String> = patterns.iter().map(|p| (*p).to_string()).collect();
        page.execute(SetBlockedUrLsParams::new(urls))
            .await
            .map_err(|e| SuiteError::Page {
                message: e.to_string(),
            })?;
        tracing::debug!(?patterns, "request blocking enabled");
        Ok(())
    }

    fn live(&self) -> SuiteResult<&Arc<Mutex<CdpPage>>> {
        self.inner.as_ref().ok_or_else(|| SuiteError::Evaluation {
            message: String::from("no live browser behind this session"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod config_tests {
        use super::*;

        #[test]
        fn test_defaults() {
            let config = BrowserConfig::default();
            assert!(config.headless);
            assert!(config.sandbox);
            assert_eq!(config.viewport_width, 1280);
        }

        #[test]
        fn test_builders() {
            let config = BrowserConfig::default()
                .with_viewport(1024, 768)
                .with_headless(false)
                .with_chromium_path("/usr/bin/chromium")
                .with_no_sandbox();
            assert_eq!(config.viewport_width, 1024);
            assert!(!config.headless);
            assert!(!config.sandbox);
            assert_eq!(config.chromium_path.as_deref(), Some("/usr/bin/chromium"));
        }
    }

    mod detached_tests {
        use super::*;

        #[tokio::test]
        async fn test_detached_is_not_live() {
            let session = Session::detached();
            assert!(!session.is_live());
        }

        #[tokio::test]
        async fn test_detached_evaluate_fails_fast() {
            let session = Session::detached();
            let result: SuiteResult<usize> = session.evaluate("1 + 1").await;
            assert!(matches!(result, Err(SuiteError::Evaluation { .. })));
        }

        #[tokio::test]
        async fn test_detached_url_is_blank() {
            let session = Session::detached();
            assert_eq!(session.current_url().await.unwrap(), "about:blank");
        }
    }
}
