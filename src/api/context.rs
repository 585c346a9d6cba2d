use crate::clients::{
    CartClient, CustomerClient, InvoiceClient, InvoiceItemClient, ProductClient, UserClient,
};
use crate::lifecycle::ShopSystem;

/// Shared handler state: one client per actor.
#[derive(Clone)]
pub struct AppState {
    pub customers: CustomerClient,
    pub products: ProductClient,
    pub invoices: InvoiceClient,
    pub invoice_items: InvoiceItemClient,
    pub carts: CartClient,
    pub users: UserClient,
}

impl AppState {
    pub fn from_system(system: &ShopSystem) -> Self {
        Self {
            customers: system.customer_client.clone(),
            products: system.product_client.clone(),
            invoices: system.invoice_client.clone(),
            invoice_items: system.invoice_item_client.clone(),
            carts: system.cart_client.clone(),
            users: system.user_client.clone(),
        }
    }
}
