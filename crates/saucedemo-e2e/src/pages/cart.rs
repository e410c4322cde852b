//! Cart screen.

use crate::locator::{Locator, Role, Selector};
use crate::result::SuiteResult;
use crate::session::Session;

/// The cart's item list and its two exits: back to the listing or into
/// checkout.
#[derive(Debug)]
pub struct CartPage {
    /// Repeated cart row containers
    pub items: Locator,
    /// Checkout entry control
    pub checkout_button: Locator,
    /// Return-to-listing control
    pub continue_shopping_button: Locator,
}

impl CartPage {
    /// Build the component against a session.
    #[must_use]
    pub fn new(session: Session) -> Self {
        Self {
            items: Locator::new(session.clone(), Selector::css(".cart_item")),
            checkout_button: Locator::new(session.clone(), Selector::role(Role::Button, "checkout")),
            continue_shopping_button: Locator::new(
                session,
                Selector::role(Role::Button, "continue shopping"),
            ),
        }
    }

    /// The single cart row whose text contains `name`.
    #[must_use]
    pub fn item_by_name(&self, name: &str) -> Locator {
        self.items.filter_has_text(name)
    }

    /// Remove a product from the cart by its visible name.
    pub async fn remove_item_by_name(&self, name: &str) -> SuiteResult<()> {
        self.item_by_name(name)
            .get_by_role(Role::Button, "remove")
            .click()
            .await
    }

    /// Proceed to checkout step one.
    pub async fn checkout(&self) -> SuiteResult<()> {
        self.checkout_button.click().await
    }

    /// Return to the product listing, keeping the cart as-is.
    pub async fn continue_shopping(&self) -> SuiteResult<()> {
        self.continue_shopping_button.click().await
    }
}
