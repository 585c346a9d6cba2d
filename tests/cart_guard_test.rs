use shop_backoffice::clients::CartClient;
use shop_backoffice::error::StoreError;
use shop_backoffice::framework::ActorClient;
use shop_backoffice::lifecycle::ShopSystem;
use shop_backoffice::model::{
    CartFields, CartPatch, CustomerFields, ProductFields, ProductId, ShoppingCart,
    ShoppingCartId,
};
use std::time::Duration;

/// Lets the clock move past the previous write so `closed_date` refreshes are observable.
async fn tick() {
    tokio::time::sleep(Duration::from_millis(5)).await;
}

async fn system_with_cart(is_closed: bool) -> (ShopSystem, ShoppingCart) {
    let system = ShopSystem::new();
    let customer = system
        .customer_client
        .create(CustomerFields {
            name: "A".into(),
            email: "a@x.com".into(),
            phone: "1".into(),
        })
        .await
        .unwrap();
    let product = system
        .product_client
        .create(ProductFields {
            name: "Mug".into(),
            description: "A mug".into(),
            image_link: "http://img/mug.png".into(),
            price: 9.99,
        })
        .await
        .unwrap();
    let cart = system
        .cart_client
        .create(CartFields {
            customer_id: customer.id,
            product_id: product.id,
            quantity: 1,
            discount_value: 0.0,
            is_closed,
        })
        .await
        .unwrap();
    (system, cart)
}

fn quantity(quantity: i32) -> CartPatch {
    CartPatch {
        quantity: Some(quantity),
        ..CartPatch::default()
    }
}

#[tokio::test]
async fn test_closed_cart_refuses_update_and_is_unchanged() {
    let (system, cart) = system_with_cart(true).await;

    let result = system.cart_client.update_cart(cart.id, quantity(5)).await;
    assert_eq!(result, Err(StoreError::CartClosed(cart.id)));
    assert_eq!(
        result.unwrap_err().to_string(),
        "Error! Cart already closed!"
    );

    // Reopening is refused as well.
    let reopen = CartPatch {
        is_closed: Some(false),
        ..CartPatch::default()
    };
    assert!(system.cart_client.update_cart(cart.id, reopen).await.is_err());

    assert_eq!(system.cart_client.fetch(cart.id).await.unwrap(), cart);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_open_cart_can_be_closed_once() {
    let (system, cart) = system_with_cart(false).await;
    tick().await;

    let updated = system
        .cart_client
        .update_cart(cart.id, quantity(3))
        .await
        .unwrap();
    assert_eq!(updated.quantity, 3);
    assert!(!updated.is_closed);
    assert!(updated.closed_date > cart.closed_date);

    let closed = system.cart_client.close_cart(cart.id).await.unwrap();
    assert!(closed.is_closed);
    assert_eq!(closed.quantity, 3);
    assert_eq!(closed.creation_date, cart.creation_date);

    let result = system.cart_client.update_cart(cart.id, quantity(4)).await;
    assert_eq!(result, Err(StoreError::CartClosed(cart.id)));
    assert_eq!(system.cart_client.fetch(cart.id).await.unwrap(), closed);

    system.shutdown().await.unwrap();
}

/// A full replace goes through the same guard as the partial update.
#[tokio::test]
async fn test_replace_of_closed_cart_is_refused() {
    let (system, cart) = system_with_cart(true).await;

    let result = system
        .cart_client
        .replace(
            cart.id,
            CartFields {
                customer_id: cart.customer_id,
                product_id: cart.product_id,
                quantity: 9,
                discount_value: 0.0,
                is_closed: false,
            },
        )
        .await;
    assert_eq!(result, Err(StoreError::CartClosed(cart.id)));
    assert_eq!(system.cart_client.fetch(cart.id).await.unwrap(), cart);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_replace_closes_open_cart_and_refreshes_closed_date() {
    let (system, cart) = system_with_cart(false).await;
    tick().await;

    let fields = |quantity, is_closed| CartFields {
        customer_id: cart.customer_id,
        product_id: cart.product_id,
        quantity,
        discount_value: 0.25,
        is_closed,
    };

    let replaced = system
        .cart_client
        .replace(cart.id, fields(2, false))
        .await
        .unwrap();
    assert_eq!(replaced.quantity, 2);
    assert_eq!(replaced.discount_value, 0.25);
    assert_eq!(replaced.creation_date, cart.creation_date);
    assert!(replaced.closed_date > cart.closed_date);
    tick().await;

    let closed = system
        .cart_client
        .replace(cart.id, fields(6, true))
        .await
        .unwrap();
    assert!(closed.is_closed);
    assert_eq!(closed.quantity, 6);
    assert_eq!(closed.creation_date, cart.creation_date);
    assert!(closed.closed_date > replaced.closed_date);

    assert_eq!(
        system.cart_client.replace(cart.id, fields(7, false)).await,
        Err(StoreError::CartClosed(cart.id))
    );
    assert_eq!(
        system.cart_client.update_cart(cart.id, quantity(8)).await,
        Err(StoreError::CartClosed(cart.id))
    );
    assert_eq!(system.cart_client.fetch(cart.id).await.unwrap(), closed);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_closed_cart_can_still_be_deleted() {
    let (system, cart) = system_with_cart(true).await;

    system.cart_client.delete(cart.id).await.unwrap();
    assert!(system.cart_client.get(cart.id).await.unwrap().is_none());

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_update_of_unknown_cart_is_not_found() {
    let (system, _) = system_with_cart(false).await;

    let result = system
        .cart_client
        .update_cart(ShoppingCartId(404), quantity(1))
        .await;
    assert_eq!(
        result,
        Err(StoreError::NotFound("shopping cart 404".to_string()))
    );

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_update_pointing_at_missing_product_is_refused() {
    let (system, cart) = system_with_cart(false).await;

    let patch = CartPatch {
        product_id: Some(ProductId(77)),
        quantity: Some(8),
        ..CartPatch::default()
    };
    let result = system.cart_client.update_cart(cart.id, patch).await;
    assert_eq!(
        result,
        Err(StoreError::MissingReference("product 77".to_string()))
    );
    assert_eq!(system.cart_client.fetch(cart.id).await.unwrap(), cart);

    system.shutdown().await.unwrap();
}

/// Concurrent closing updates: the check and the write happen in one actor turn, so exactly
/// one of them wins and every other one sees a closed cart.
#[tokio::test]
async fn test_concurrent_closes_exactly_one_succeeds() {
    let (system, cart) = system_with_cart(false).await;
    let cart_id = cart.id;

    let tasks: Vec<_> = (1..=10)
        .map(|n| {
            let carts: CartClient = system.cart_client.clone();
            tokio::spawn(async move {
                carts
                    .update_cart(
                        cart_id,
                        CartPatch {
                            quantity: Some(n),
                            is_closed: Some(true),
                            ..CartPatch::default()
                        },
                    )
                    .await
            })
        })
        .collect();

    let mut winners = Vec::new();
    for task in tasks {
        match task.await.unwrap() {
            Ok(updated) => winners.push(updated),
            Err(e) => assert_eq!(e, StoreError::CartClosed(cart.id)),
        }
    }
    assert_eq!(winners.len(), 1);
    assert_eq!(
        system.cart_client.fetch(cart.id).await.unwrap(),
        winners[0]
    );

    system.shutdown().await.unwrap();
}
