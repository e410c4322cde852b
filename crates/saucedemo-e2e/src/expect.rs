//! Polling assertions for scenarios.
//!
//! Page components never assert; scenarios do, through these helpers.
//! Each assertion re-resolves its locator on a 50ms poll until it passes
//! or the budget lapses, then fails with the last observed state.

use std::time::Duration;

use regex::Regex;
use tokio::time::{sleep, Instant};

use crate::locator::{Locator, DEFAULT_POLL_INTERVAL_MS, DEFAULT_TIMEOUT_MS};
use crate::result::{SuiteError, SuiteResult};
use crate::session::Session;

/// Create an expectation for a locator.
#[must_use]
pub fn expect(locator: &Locator) -> Expect {
    Expect {
        locator: locator.clone(),
        timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
    }
}

/// Assertion builder bound to one locator.
#[derive(Debug, Clone)]
pub struct Expect {
    locator: Locator,
    timeout: Duration,
}

impl Expect {
    /// Override the assertion budget.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Assert the single matching element has exactly this text.
    pub async fn to_have_text(&self, expected: &str) -> SuiteResult<()> {
        let locator = &self.locator;
        self.poll(
            || async move { locator.text_content().await },
            |text| text == expected,
        )
        .await
        .map_err(|last| SuiteError::AssertionFailed {
            message: format!(
                "{}: expected text {expected:?}, last saw {:?}",
                locator.selector(),
                last.unwrap_or_default()
            ),
        })
    }

    /// Assert the single matching element's text contains the fragment.
    pub async fn to_contain_text(&self, expected: &str) -> SuiteResult<()> {
        let locator = &self.locator;
        self.poll(
            || async move { locator.text_content().await },
            |text| text.contains(expected),
        )
        .await
        .map_err(|last| SuiteError::AssertionFailed {
            message: format!(
                "{}: expected text containing {expected:?}, last saw {:?}",
                locator.selector(),
                last.unwrap_or_default()
            ),
        })
    }

    /// Assert the number of matching elements. Zero asserts absence.
    pub async fn to_have_count(&self, expected: usize) -> SuiteResult<()> {
        let locator = &self.locator;
        self.poll(
            || async move { locator.count().await },
            |count| *count == expected,
        )
        .await
        .map_err(|last| SuiteError::AssertionFailed {
            message: format!(
                "{}: expected {expected} matches, last saw {}",
                locator.selector(),
                last.map_or_else(|| String::from("none"), |c| c.to_string())
            ),
        })
    }

    /// Assert at least one match is visible.
    pub async fn to_be_visible(&self) -> SuiteResult<()> {
        let locator = &self.locator;
        self.poll(
            || async move { locator.visible_count().await },
            |count| *count > 0,
        )
        .await
        .map_err(|_| SuiteError::AssertionFailed {
            message: format!("{}: expected a visible match", locator.selector()),
        })
    }

    /// Assert no match is visible (absent elements qualify).
    pub async fn to_be_hidden(&self) -> SuiteResult<()> {
        let locator = &self.locator;
        self.poll(
            || async move { locator.visible_count().await },
            |count| *count == 0,
        )
        .await
        .map_err(|_| SuiteError::AssertionFailed {
            message: format!("{}: expected no visible match", locator.selector()),
        })
    }

    /// Generic poll loop. Probe errors (mid-navigation evaluations) count
    /// as not-yet-passing, never as assertion failures. On timeout the
    /// last successfully observed value is handed back for the message.
    async fn poll<T, F, Fut, P>(&self, mut probe: F, pass: P) -> Result<(), Option<T>>
    where
        F: FnMut() -> Fut,
        Fut: std::future::Future<Output = SuiteResult<T>>,
        P: Fn(&T) -> bool,
    {
        let deadline = Instant::now() + self.timeout;
        let mut last: Option<T> = None;
        loop {
            if let Ok(value) = probe().await {
                if pass(&value) {
                    return Ok(());
                }
                last = Some(value);
            }
            if Instant::now() >= deadline {
                return Err(last);
            }
            sleep(Duration::from_millis(DEFAULT_POLL_INTERVAL_MS)).await;
        }
    }
}

/// Assert the session's URL matches a pattern within the default budget.
pub async fn expect_url(session: &Session, pattern: &str) -> SuiteResult<()> {
    let regex = Regex::new(pattern).map_err(|e| SuiteError::AssertionFailed {
        message: format!("invalid URL pattern {pattern:?}: {e}"),
    })?;
    let deadline = Instant::now() + Duration::from_millis(DEFAULT_TIMEOUT_MS);
    let mut last = String::new();
    loop {
        if let Ok(url) = session.current_url().await {
            if regex.is_match(&url) {
                return Ok(());
            }
            last = url;
        }
        if Instant::now() >= deadline {
            return Err(SuiteError::AssertionFailed {
                message: format!("expected URL matching {pattern:?}, last saw {last:?}"),
            });
        }
        sleep(Duration::from_millis(DEFAULT_POLL_INTERVAL_MS)).await;
    }
}
