//! Cart flows: contents tracking, removal, both exits, and price
//! consistency between listing and cart.

#[macro_use]
mod common;

use common::{Harness, PRODUCT_ONE, PRODUCT_TWO};
use saucedemo_e2e::{expect, expect_url, SuiteResult};

#[tokio::test]
async fn shows_items_added_from_inventory() -> SuiteResult<()> {
    require_e2e!();
    let h = Harness::launch().await?;
    h.login_as_standard_user().await?;
    let inventory = h.pm.on_inventory_page();
    let cart = h.pm.on_cart_page();

    inventory.add_to_cart_by_name(PRODUCT_ONE).await?;
    inventory.add_to_cart_by_name(PRODUCT_TWO).await?;
    expect(&inventory.cart_badge).to_have_text("2").await?;

    inventory.open_cart().await?;

    expect_url(&h.session, r".*cart\.html").await?;
    expect(&cart.items).to_have_count(2).await?;
    expect(&cart.item_by_name(PRODUCT_ONE)).to_be_visible().await?;
    expect(&cart.item_by_name(PRODUCT_TWO)).to_be_visible().await?;

    h.close().await
}

#[tokio::test]
async fn removes_an_item_and_updates_the_badge() -> SuiteResult<()> {
    require_e2e!();
    let h = Harness::launch().await?;
    h.login_as_standard_user().await?;
    let inventory = h.pm.on_inventory_page();
    let cart = h.pm.on_cart_page();

    inventory.add_to_cart_by_name(PRODUCT_ONE).await?;
    inventory.add_to_cart_by_name(PRODUCT_TWO).await?;
    inventory.open_cart().await?;

    cart.remove_item_by_name(PRODUCT_ONE).await?;

    expect(&cart.item_by_name(PRODUCT_ONE)).to_have_count(0).await?;
    expect(&cart.items).to_have_count(1).await?;
    expect(&inventory.cart_badge).to_have_text("1").await?;

    h.close().await
}

#[tokio::test]
async fn continue_shopping_returns_to_inventory_and_keeps_items() -> SuiteResult<()> {
    require_e2e!();
    let h = Harness::launch().await?;
    h.login_as_standard_user().await?;
    let inventory = h.pm.on_inventory_page();
    let cart = h.pm.on_cart_page();

    inventory.add_to_cart_by_name(PRODUCT_ONE).await?;
    inventory.open_cart().await?;

    cart.continue_shopping().await?;

    expect_url(&h.session, r".*inventory\.html").await?;
    expect(&inventory.cart_badge).to_have_text("1").await?;
    // The listing card must still read "Remove" for the kept item.
    expect(
        &inventory
            .item_by_name(PRODUCT_ONE)
            .get_by_role(saucedemo_e2e::Role::Button, "remove"),
    )
    .to_be_visible()
    .await?;

    h.close().await
}

#[tokio::test]
async fn checkout_from_cart_goes_to_step_one() -> SuiteResult<()> {
    require_e2e!();
    let h = Harness::launch().await?;
    h.login_as_standard_user().await?;
    let inventory = h.pm.on_inventory_page();
    let cart = h.pm.on_cart_page();
    let checkout = h.pm.on_checkout_page();

    inventory.add_to_cart_by_name(PRODUCT_ONE).await?;
    inventory.open_cart().await?;
    cart.checkout().await?;

    expect_url(&h.session, r".*checkout-step-one\.html").await?;
    expect(&checkout.first_name_input).to_be_visible().await?;
    expect(&checkout.last_name_input).to_be_visible().await?;
    expect(&checkout.postal_code_input).to_be_visible().await?;

    h.close().await
}

#[tokio::test]
async fn empty_cart_has_no_items_and_no_badge() -> SuiteResult<()> {
    require_e2e!();
    let h = Harness::launch().await?;
    h.login_as_standard_user().await?;
    let inventory = h.pm.on_inventory_page();
    let cart = h.pm.on_cart_page();

    inventory.open_cart().await?;

    expect(&cart.items).to_have_count(0).await?;
    expect(&inventory.cart_badge).to_have_count(0).await?;

    h.close().await
}

#[tokio::test]
async fn displays_consistent_price_between_inventory_and_cart() -> SuiteResult<()> {
    require_e2e!();
    let h = Harness::launch().await?;
    h.login_as_standard_user().await?;
    let inventory = h.pm.on_inventory_page();
    let cart = h.pm.on_cart_page();

    let listing_price = inventory
        .item_by_name(PRODUCT_ONE)
        .locator(".inventory_item_price");

    inventory.add_to_cart_by_name(PRODUCT_ONE).await?;
    let price_in_listing = listing_price.text_content().await?;
    assert!(
        price_in_listing.starts_with('$'),
        "unexpected price text {price_in_listing:?}"
    );

    inventory.open_cart().await?;
    let cart_price = cart
        .item_by_name(PRODUCT_ONE)
        .locator(".inventory_item_price");
    expect(&cart_price).to_have_text(&price_in_listing).await?;

    h.close().await
}

#[tokio::test]
async fn resolving_the_same_locator_twice_is_stable() -> SuiteResult<()> {
    require_e2e!();
    let h = Harness::launch().await?;
    h.login_as_standard_user().await?;
    let inventory = h.pm.on_inventory_page();

    let price = inventory
        .item_by_name(PRODUCT_ONE)
        .locator(".inventory_item_price");

    // Lazy resolution re-evaluates on every use; with no state change in
    // between, both reads must see identical content.
    let first = price.text_content().await?;
    let second = price.text_content().await?;
    assert_eq!(first, second);

    h.close().await
}
