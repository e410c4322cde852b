//! Single-product detail screen.

use crate::locator::{Locator, Role, Selector};
use crate::result::SuiteResult;
use crate::session::Session;

/// Detail view for exactly one product, so its controls are page-level
/// rather than per-item.
#[derive(Debug)]
pub struct ProductDetailsPage {
    /// Add-to-cart control
    pub add_to_cart_button: Locator,
    /// Remove control (shown once the item is in the cart)
    pub remove_button: Locator,
    /// Back link to the listing
    pub back_to_products_button: Locator,
    /// Product title
    pub item_title: Locator,
}

impl ProductDetailsPage {
    /// Build the component against a session.
    #[must_use]
    pub fn new(session: Session) -> Self {
        Self {
            add_to_cart_button: Locator::new(
                session.clone(),
                Selector::role(Role::Button, "add to cart"),
            ),
            remove_button: Locator::new(session.clone(), Selector::role(Role::Button, "remove")),
            back_to_products_button: Locator::new(
                session.clone(),
                Selector::role(Role::Button, "back to products"),
            ),
            item_title: Locator::new(session, Selector::css(".inventory_details_name")),
        }
    }

    /// Add the displayed product to the cart.
    pub async fn add_to_cart(&self) -> SuiteResult<()> {
        self.add_to_cart_button.click().await
    }

    /// Remove the displayed product from the cart.
    pub async fn remove_from_cart(&self) -> SuiteResult<()> {
        self.remove_button.click().await
    }

    /// Return to the product listing.
    pub async fn back_to_products(&self) -> SuiteResult<()> {
        self.back_to_products_button.click().await
    }
}
