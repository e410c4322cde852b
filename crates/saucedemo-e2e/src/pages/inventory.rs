//! Product listing (catalog) screen.

use crate::locator::{Locator, Role, Selector};
use crate::result::SuiteResult;
use crate::session::Session;

/// Sort orders offered by the catalog's sort control, with the option
/// values the `<select>` actually carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// Name A to Z
    NameAsc,
    /// Name Z to A
    NameDesc,
    /// Price low to high
    PriceAsc,
    /// Price high to low
    PriceDesc,
}

impl SortOrder {
    /// The `<option>` value for this order.
    #[must_use]
    pub const fn value(self) -> &'static str {
        match self {
            Self::NameAsc => "az",
            Self::NameDesc => "za",
            Self::PriceAsc => "lohi",
            Self::PriceDesc => "hilo",
        }
    }
}

/// The product listing, addressed by visible product name.
///
/// Name-based filtering is deliberate: the catalog is small and stable,
/// and business names read better in scenarios than positional indices.
#[derive(Debug)]
pub struct InventoryPage {
    /// Repeated product card containers
    pub items: Locator,
    /// Sort `<select>` control
    pub sort_select: Locator,
    /// Cart icon link in the header
    pub cart_link: Locator,
    /// Cart quantity badge; absent (count 0) when the cart is empty
    pub cart_badge: Locator,
}

impl InventoryPage {
    /// Build the component against a session.
    #[must_use]
    pub fn new(session: Session) -> Self {
        Self {
            items: Locator::new(session.clone(), Selector::css(".inventory_item")),
            sort_select: Locator::new(
                session.clone(),
                Selector::test_id("product_sort_container"),
            ),
            cart_link: Locator::new(session.clone(), Selector::css(".shopping_cart_link")),
            cart_badge: Locator::new(session, Selector::css(".shopping_cart_badge")),
        }
    }

    /// The single product card whose text contains `name`. Exposed so
    /// scenarios can compose their own assertions (price text, control
    /// labels) without reaching for raw selectors.
    #[must_use]
    pub fn item_by_name(&self, name: &str) -> Locator {
        self.items.filter_has_text(name)
    }

    /// Open the cart via the header link.
    pub async fn open_cart(&self) -> SuiteResult<()> {
        self.cart_link.click().await
    }

    /// Open a product's detail page by clicking its title link.
    pub async fn open_item_by_name(&self, name: &str) -> SuiteResult<()> {
        self.item_by_name(name).get_by_role(Role::Link, name).click().await
    }

    /// Add a product to the cart from its listing card.
    pub async fn add_to_cart_by_name(&self, name: &str) -> SuiteResult<()> {
        self.item_by_name(name)
            .get_by_role(Role::Button, "add to cart")
            .click()
            .await
    }

    /// Remove a product from the cart from its listing card.
    pub async fn remove_from_cart_by_name(&self, name: &str) -> SuiteResult<()> {
        self.item_by_name(name)
            .get_by_role(Role::Button, "remove")
            .click()
            .await
    }

    /// Re-order the listing.
    pub async fn sort_by(&self, order: SortOrder) -> SuiteResult<()> {
        self.sort_select.select_option(order.value()).await
    }
}
