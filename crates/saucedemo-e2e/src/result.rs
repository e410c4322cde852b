//! Result and error types for the suite.

use thiserror::Error;

/// Result type for suite operations
pub type SuiteResult<T> = Result<T, SuiteError>;

/// Errors surfaced by the page-object core.
///
/// Nothing here is caught or recovered inside the core; every failure
/// propagates unchanged to the scenario that triggered it.
#[derive(Debug, Error)]
pub enum SuiteError {
    /// Browser launch error
    #[error("Failed to launch browser: {message}")]
    BrowserLaunch {
        /// Error message
        message: String,
    },

    /// Page-level error (page creation, reload, CDP command)
    #[error("Page error: {message}")]
    Page {
        /// Error message
        message: String,
    },

    /// Navigation error
    #[error("Navigation to {url} failed: {message}")]
    Navigation {
        /// URL that failed
        url: String,
        /// Error message
        message: String,
    },

    /// JavaScript evaluation error
    #[error("Evaluation failed: {message}")]
    Evaluation {
        /// Error message
        message: String,
    },

    /// A locator intended to identify exactly one element matched several
    #[error("Ambiguous match for {selector}: {matches} elements")]
    AmbiguousMatch {
        /// Selector description
        selector: String,
        /// Number of elements that matched
        matches: usize,
    },

    /// Target element never became actionable within the wait budget.
    ///
    /// Also how menu-closed style precondition violations surface, since
    /// the core does not verify caller preconditions.
    #[error("Element {selector} not actionable after {timeout_ms}ms")]
    NotActionable {
        /// Selector description
        selector: String,
        /// Wait budget that lapsed
        timeout_ms: u64,
    },

    /// Assertion failed (from the `expect` helpers)
    #[error("Assertion failed: {message}")]
    AssertionFailed {
        /// Error message
        message: String,
    },
}
