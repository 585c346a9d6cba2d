//! Response shapes.
//!
//! Customers, products and carts are returned as stored. Invoices embed their customer, and
//! invoice items embed their invoice (with its customer) and product. An embedded parent that
//! has since been deleted renders as `null`.

use super::context::AppState;
use super::error::ApiError;
use super::resource::Resource;
use crate::clients::{CartClient, CustomerClient, InvoiceClient, InvoiceItemClient, ProductClient};
use crate::framework::ActorClient;
use crate::model::{
    Customer, Invoice, InvoiceId, InvoiceItem, InvoiceItemId, Product, ShoppingCart,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceView {
    pub id: InvoiceId,
    pub customer: Option<Customer>,
    pub total_value: f64,
    pub total_quantity: i32,
    pub total_discount: f64,
    pub purchase_date: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceItemView {
    pub id: InvoiceItemId,
    pub invoice: Option<InvoiceView>,
    pub product: Option<Product>,
    pub quantity: i32,
    pub quote_price: Option<f64>,
    pub discount_value: f64,
    pub creation_date: DateTime<Utc>,
}

#[async_trait]
impl Resource for Customer {
    const PATH: &'static str = "/customers";
    type Client = CustomerClient;
    type View = Customer;

    fn client(state: &AppState) -> &CustomerClient {
        &state.customers
    }

    async fn view(self, _state: &AppState) -> Result<Customer, ApiError> {
        Ok(self)
    }
}

#[async_trait]
impl Resource for Product {
    const PATH: &'static str = "/products";
    type Client = ProductClient;
    type View = Product;

    fn client(state: &AppState) -> &ProductClient {
        &state.products
    }

    async fn view(self, _state: &AppState) -> Result<Product, ApiError> {
        Ok(self)
    }
}

#[async_trait]
impl Resource for Invoice {
    const PATH: &'static str = "/invoices";
    type Client = InvoiceClient;
    type View = InvoiceView;

    fn client(state: &AppState) -> &InvoiceClient {
        &state.invoices
    }

    async fn view(self, state: &AppState) -> Result<InvoiceView, ApiError> {
        let customer = state.customers.get(self.customer_id).await?;
        Ok(InvoiceView {
            id: self.id,
            customer,
            total_value: self.total_value,
            total_quantity: self.total_quantity,
            total_discount: self.total_discount,
            purchase_date: self.purchase_date,
        })
    }
}

#[async_trait]
impl Resource for InvoiceItem {
    const PATH: &'static str = "/invoiceitems";
    type Client = InvoiceItemClient;
    type View = InvoiceItemView;

    fn client(state: &AppState) -> &InvoiceItemClient {
        &state.invoice_items
    }

    async fn view(self, state: &AppState) -> Result<InvoiceItemView, ApiError> {
        let invoice = match state.invoices.get(self.invoice_id).await? {
            Some(invoice) => Some(invoice.view(state).await?),
            None => None,
        };
        let product = state.products.get(self.product_id).await?;
        Ok(InvoiceItemView {
            id: self.id,
            invoice,
            product,
            quantity: self.quantity,
            quote_price: self.quote_price,
            discount_value: self.discount_value,
            creation_date: self.creation_date,
        })
    }
}

#[async_trait]
impl Resource for ShoppingCart {
    const PATH: &'static str = "/shoppingcarts";
    type Client = CartClient;
    type View = ShoppingCart;

    fn client(state: &AppState) -> &CartClient {
        &state.carts
    }

    async fn view(self, _state: &AppState) -> Result<ShoppingCart, ApiError> {
        Ok(self)
    }
}
