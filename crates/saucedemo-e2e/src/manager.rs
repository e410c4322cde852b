//! Composition root for the page components.

use crate::pages::{
    CartPage, CheckoutPage, InventoryPage, LoginPage, NavigationMenu, ProductDetailsPage,
};
use crate::session::Session;

/// Owns exactly one instance of every page component, all constructed
/// against the same session reference handed in here. Components never
/// obtain the handle from anywhere else.
///
/// Accessors are pure lookups: the same instance comes back on every
/// call, for the lifetime of the scenario. The manager performs no
/// navigation of its own.
#[derive(Debug)]
pub struct PageManager {
    login_page: LoginPage,
    inventory_page: InventoryPage,
    product_details_page: ProductDetailsPage,
    cart_page: CartPage,
    checkout_page: CheckoutPage,
    navigation_menu: NavigationMenu,
}

impl PageManager {
    /// Build every component against one session.
    #[must_use]
    pub fn new(session: &Session) -> Self {
        Self {
            login_page: LoginPage::new(session.clone()),
            inventory_page: InventoryPage::new(session.clone()),
            product_details_page: ProductDetailsPage::new(session.clone()),
            cart_page: CartPage::new(session.clone()),
            checkout_page: CheckoutPage::new(session.clone()),
            navigation_menu: NavigationMenu::new(session.clone()),
        }
    }

    /// The login screen component.
    #[must_use]
    pub const fn on_login_page(&self) -> &LoginPage {
        &self.login_page
    }

    /// The product listing component.
    #[must_use]
    pub const fn on_inventory_page(&self) -> &InventoryPage {
        &self.inventory_page
    }

    /// The product detail component.
    #[must_use]
    pub const fn on_product_details_page(&self) -> &ProductDetailsPage {
        &self.product_details_page
    }

    /// The cart component.
    #[must_use]
    pub const fn on_cart_page(&self) -> &CartPage {
        &self.cart_page
    }

    /// The checkout component.
    #[must_use]
    pub const fn on_checkout_page(&self) -> &CheckoutPage {
        &self.checkout_page
    }

    /// The navigation side-panel component.
    #[must_use]
    pub const fn on_navigation_menu(&self) -> &NavigationMenu {
        &self.navigation_menu
    }
}
