//! Burger-menu side panel, present on every post-login screen.

use crate::locator::{Locator, Selector};
use crate::result::SuiteResult;
use crate::session::Session;

/// The navigation side panel. Open and close are distinct controls in
/// this UI, so neither is treated as an idempotent toggle.
///
/// The link actions require the panel to already be open; the component
/// does not check that. A scenario that forgets to open it sees the click
/// time out as `NotActionable`.
#[derive(Debug)]
pub struct NavigationMenu {
    /// Burger button that opens the panel
    pub open_button: Locator,
    /// Cross button inside the panel that closes it
    pub close_button: Locator,
    /// Link back to the product listing
    pub all_items_link: Locator,
    /// External about link
    pub about_link: Locator,
    /// Logout link
    pub logout_link: Locator,
    /// Link that clears cart and button state
    pub reset_app_state_link: Locator,
}

impl NavigationMenu {
    /// Build the component against a session.
    #[must_use]
    pub fn new(session: Session) -> Self {
        Self {
            open_button: Locator::new(session.clone(), Selector::css("#react-burger-menu-btn")),
            close_button: Locator::new(session.clone(), Selector::css("#react-burger-cross-btn")),
            all_items_link: Locator::new(session.clone(), Selector::css("#inventory_sidebar_link")),
            about_link: Locator::new(session.clone(), Selector::css("#about_sidebar_link")),
            logout_link: Locator::new(session.clone(), Selector::css("#logout_sidebar_link")),
            reset_app_state_link: Locator::new(session, Selector::css("#reset_sidebar_link")),
        }
    }

    /// Open the panel.
    pub async fn open(&self) -> SuiteResult<()> {
        self.open_button.click().await
    }

    /// Close the panel.
    pub async fn close(&self) -> SuiteResult<()> {
        self.close_button.click().await
    }

    /// Navigate to the product listing.
    pub async fn go_to_all_items(&self) -> SuiteResult<()> {
        self.all_items_link.click().await
    }

    /// Navigate to the vendor's about page.
    pub async fn go_to_about(&self) -> SuiteResult<()> {
        self.about_link.click().await
    }

    /// Log out, back to the login screen.
    pub async fn logout(&self) -> SuiteResult<()> {
        self.logout_link.click().await
    }

    /// Clear cart contents and control state.
    pub async fn reset_app_state(&self) -> SuiteResult<()> {
        self.reset_app_state_link.click().await
    }
}
