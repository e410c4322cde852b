//! Shared harness for the live-browser suites.
//!
//! These suites drive the public SauceDemo site, so they are opt-in:
//!
//! ```bash
//! SAUCEDEMO_E2E=1 cargo test -p saucedemo-e2e
//! ```
//!
//! `SAUCEDEMO_HEADFUL=1` shows the browser, `CHROMIUM_PATH` overrides the
//! binary, `CHROME_NO_SANDBOX=1` is for containers.

#![allow(dead_code)]

use std::sync::Once;

use saucedemo_e2e::{expect_url, Browser, BrowserConfig, PageManager, Session, SuiteResult};

/// Skip the calling test unless live-browser runs are enabled.
macro_rules! require_e2e {
    () => {
        if std::env::var("SAUCEDEMO_E2E").is_err() {
            eprintln!(
                "[SKIP] {} requires SAUCEDEMO_E2E=1 (live browser + network)",
                module_path!()
            );
            return Ok(());
        }
    };
}

/// One credential record, as the login form consumes it.
#[derive(Debug, Clone, Copy)]
pub struct Credentials {
    pub username: &'static str,
    pub password: &'static str,
}

pub const VALID_USER: Credentials = Credentials {
    username: "standard_user",
    password: "secret_sauce",
};

pub const WRONG_PASSWORD: Credentials = Credentials {
    username: "standard_user",
    password: "wrong_password",
};

pub const LOCKED_OUT_USER: Credentials = Credentials {
    username: "locked_out_user",
    password: "secret_sauce",
};

pub const MISSING_USERNAME: Credentials = Credentials {
    username: "",
    password: "secret_sauce",
};

pub const MISSING_PASSWORD: Credentials = Credentials {
    username: "visual_user",
    password: "",
};

pub const PRODUCT_ONE: &str = "Sauce Labs Backpack";
pub const PRODUCT_TWO: &str = "Sauce Labs Bolt T-Shirt";

/// Telemetry endpoint that 401s and pollutes console output.
const TELEMETRY_PATTERN: &str = "*/submit?universe=*";

/// One scenario's worth of browser: a fresh process, a fresh tab, a
/// fresh page-manager. Nothing is shared across scenarios.
#[derive(Debug)]
pub struct Harness {
    pub browser: Browser,
    pub session: Session,
    pub pm: PageManager,
}

impl Harness {
    pub async fn launch() -> SuiteResult<Self> {
        init_tracing();

        let mut config =
            BrowserConfig::default().with_headless(std::env::var("SAUCEDEMO_HEADFUL").is_err());
        if let Ok(path) = std::env::var("CHROMIUM_PATH") {
            config = config.with_chromium_path(path);
        }
        if std::env::var("CHROME_NO_SANDBOX").is_ok() {
            config = config.with_no_sandbox();
        }

        let browser = Browser::launch(config).await?;
        let session = browser.new_session().await?;
        session.block_requests(&[TELEMETRY_PATTERN]).await?;
        let pm = PageManager::new(&session);

        Ok(Self {
            browser,
            session,
            pm,
        })
    }

    /// Navigate to the login screen and submit the given credentials.
    pub async fn login_as(&self, creds: Credentials) -> SuiteResult<()> {
        self.pm.on_login_page().goto().await?;
        self.pm
            .on_login_page()
            .login(creds.username, creds.password)
            .await
    }

    /// Standard-user login, asserted to land on the catalog.
    pub async fn login_as_standard_user(&self) -> SuiteResult<()> {
        self.login_as(VALID_USER).await?;
        expect_url(&self.session, r".*inventory\.html").await
    }

    pub async fn close(self) -> SuiteResult<()> {
        self.browser.close().await
    }
}

/// Parse a "$29.99" price label.
pub fn parse_price(text: &str) -> f64 {
    text.trim().trim_start_matches('$').parse().unwrap_or(f64::NAN)
}

fn init_tracing() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .try_init();
    });
}
