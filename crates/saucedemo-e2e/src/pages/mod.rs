//! Page components: one per logical screen or region of the storefront.
//!
//! Every component is a bundle of read-only locators plus
//! intention-revealing actions. Components drive the page; they never
//! assert and never wait for navigation beyond the engine's own
//! actionability wait.

pub mod cart;
pub mod checkout;
pub mod inventory;
pub mod login;
pub mod navigation;
pub mod product_details;

pub use cart::CartPage;
pub use checkout::CheckoutPage;
pub use inventory::{InventoryPage, SortOrder};
pub use login::LoginPage;
pub use navigation::NavigationMenu;
pub use product_details::ProductDetailsPage;
