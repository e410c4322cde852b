//! Two-step checkout plus completion screen.

use crate::locator::{Locator, Role, Selector};
use crate::result::SuiteResult;
use crate::session::Session;

/// Checkout across its three screens: shipping info, overview, complete.
///
/// The component owns its validation-error locator alongside the
/// success-path ones, so scenarios never reach past it for either
/// outcome.
#[derive(Debug)]
pub struct CheckoutPage {
    /// First-name input on step one
    pub first_name_input: Locator,
    /// Last-name input on step one
    pub last_name_input: Locator,
    /// Postal-code input on step one
    pub postal_code_input: Locator,
    /// Step-one submit
    pub continue_button: Locator,
    /// Step-two submit
    pub finish_button: Locator,
    /// Step-one cancel, back to the cart
    pub cancel_button: Locator,
    /// Payment/shipping summary block on step two
    pub summary_info: Locator,
    /// Confirmation header on the completion screen
    pub complete_header: Locator,
    /// Required-field validation banner on step one
    pub error_message: Locator,
}

impl CheckoutPage {
    /// Build the component against a session.
    #[must_use]
    pub fn new(session: Session) -> Self {
        Self {
            first_name_input: Locator::new(session.clone(), Selector::placeholder("First Name")),
            last_name_input: Locator::new(session.clone(), Selector::placeholder("Last Name")),
            postal_code_input: Locator::new(
                session.clone(),
                Selector::placeholder("Zip/Postal Code"),
            ),
            continue_button: Locator::new(session.clone(), Selector::role(Role::Button, "continue")),
            finish_button: Locator::new(session.clone(), Selector::role(Role::Button, "finish")),
            cancel_button: Locator::new(session.clone(), Selector::role(Role::Button, "cancel")),
            summary_info: Locator::new(session.clone(), Selector::css(".summary_info")),
            complete_header: Locator::new(session.clone(), Selector::css(".complete-header")),
            error_message: Locator::new(session, Selector::test_id("error")),
        }
    }

    /// Fill the three shipping inputs, first name through postal code.
    /// The inputs are independent; the order is fixed for determinism.
    pub async fn fill_shipping_info(
        &self,
        first_name: &str,
        last_name: &str,
        postal_code: &str,
    ) -> SuiteResult<()> {
        self.first_name_input.fill(first_name).await?;
        self.last_name_input.fill(last_name).await?;
        self.postal_code_input.fill(postal_code).await
    }

    /// Submit step one. (`continue` is a keyword in Rust.)
    pub async fn continue_checkout(&self) -> SuiteResult<()> {
        self.continue_button.click().await
    }

    /// Submit step two, placing the order.
    pub async fn finish(&self) -> SuiteResult<()> {
        self.finish_button.click().await
    }

    /// Abandon step one, back to the cart.
    pub async fn cancel(&self) -> SuiteResult<()> {
        self.cancel_button.click().await
    }
}
