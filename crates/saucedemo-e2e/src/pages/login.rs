//! Login screen.

use crate::locator::{Locator, Role, Selector};
use crate::result::SuiteResult;
use crate::session::Session;
use crate::BASE_URL;

/// The login form at the storefront root.
///
/// `login` only drives the form; whether it succeeded is the scenario's
/// call, by URL or via [`error_message`](Self::error_message).
#[derive(Debug)]
pub struct LoginPage {
    session: Session,
    /// Username input
    pub username_input: Locator,
    /// Password input
    pub password_input: Locator,
    /// Submit control
    pub login_button: Locator,
    /// Credential/validation error banner
    pub error_message: Locator,
}

impl LoginPage {
    /// Build the component against a session.
    #[must_use]
    pub fn new(session: Session) -> Self {
        Self {
            username_input: Locator::new(session.clone(), Selector::placeholder("Username")),
            password_input: Locator::new(session.clone(), Selector::placeholder("Password")),
            login_button: Locator::new(session.clone(), Selector::role(Role::Button, "login")),
            error_message: Locator::new(session.clone(), Selector::test_id("error")),
            session,
        }
    }

    /// Navigate to the login screen.
    pub async fn goto(&self) -> SuiteResult<()> {
        self.session.goto(BASE_URL).await
    }

    /// Fill both credential fields and submit.
    pub async fn login(&self, username: &str, password: &str) -> SuiteResult<()> {
        self.username_input.fill(username).await?;
        self.password_input.fill(password).await?;
        self.login_button.click().await
    }
}
