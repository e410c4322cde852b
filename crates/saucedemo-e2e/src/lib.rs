//! End-to-end UI suite for the SauceDemo storefront.
//!
//! The crate is a Page Object Model layer over the Chrome DevTools
//! Protocol: page components own declarative locators and
//! intention-revealing actions, a [`PageManager`] wires one instance of
//! each against a shared [`Session`], and scenarios (the integration
//! tests under `tests/`) orchestrate components and perform every
//! assertion themselves.
//!
//! ```text
//! scenario ──► PageManager accessor ──► component action
//!                                          │
//!                                          ▼
//!                                   Locator (lazy, strict)
//!                                          │
//!                                          ▼
//!                                 Session ──► CDP ──► page
//! ```
//!
//! Failure policy is fail fast, fail visibly: ambiguous matches and
//! elements that never become actionable surface at the call site as
//! [`SuiteError`]; nothing is caught or retried inside the core beyond
//! each action's own actionability wait.

#![warn(missing_docs)]

mod expect;
mod locator;
mod manager;
pub mod pages;
mod result;
mod session;

pub use expect::{expect, expect_url, Expect};
pub use locator::{
    Locator, LocatorOptions, Role, Selector, Step, DEFAULT_POLL_INTERVAL_MS, DEFAULT_TIMEOUT_MS,
};
pub use manager::PageManager;
pub use result::{SuiteError, SuiteResult};
pub use session::{Browser, BrowserConfig, Session};

/// The storefront under test.
pub const BASE_URL: &str = "https://www.saucedemo.com";
