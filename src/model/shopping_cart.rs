use crate::error::StoreError;
use crate::model::{CustomerId, ProductId, ShoppingCartId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle state of a cart, derived from `is_closed`.
///
/// `Open -> Closed` is the only transition; nothing reopens a closed cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartState {
    Open,
    Closed,
}

/// A customer's cart line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShoppingCart {
    pub id: ShoppingCartId,
    pub customer_id: CustomerId,
    pub product_id: ProductId,
    pub quantity: i32,
    pub discount_value: f64,
    pub is_closed: bool,
    pub creation_date: DateTime<Utc>,
    /// Refreshed on every successful write.
    pub closed_date: DateTime<Utc>,
}

/// Every caller-writable cart field, used for create and full replace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartFields {
    pub customer_id: CustomerId,
    pub product_id: ProductId,
    pub quantity: i32,
    pub discount_value: f64,
    pub is_closed: bool,
}

/// A partial cart update: absent fields keep their stored value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CartPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<CustomerId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_id: Option<ProductId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount_value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_closed: Option<bool>,
}

impl CartPatch {
    /// A patch that only closes the cart.
    pub fn close() -> Self {
        Self {
            is_closed: Some(true),
            ..Self::default()
        }
    }
}

impl ShoppingCart {
    pub fn new(id: ShoppingCartId, creation_date: DateTime<Utc>, fields: CartFields) -> Self {
        Self {
            id,
            customer_id: fields.customer_id,
            product_id: fields.product_id,
            quantity: fields.quantity,
            discount_value: fields.discount_value,
            is_closed: fields.is_closed,
            creation_date,
            closed_date: creation_date,
        }
    }

    pub fn state(&self) -> CartState {
        if self.is_closed {
            CartState::Closed
        } else {
            CartState::Open
        }
    }

    /// Fails with [`StoreError::CartClosed`] once the cart is closed.
    pub fn ensure_open(&self) -> Result<(), StoreError> {
        match self.state() {
            CartState::Open => Ok(()),
            CartState::Closed => Err(StoreError::CartClosed(self.id)),
        }
    }

    /// Overwrites every caller-writable field and stamps `closed_date`.
    pub fn apply(&mut self, fields: CartFields, now: DateTime<Utc>) {
        self.customer_id = fields.customer_id;
        self.product_id = fields.product_id;
        self.quantity = fields.quantity;
        self.discount_value = fields.discount_value;
        self.is_closed = fields.is_closed;
        self.closed_date = now;
    }

    /// Overwrites the fields present in `patch` and stamps `closed_date`.
    pub fn apply_patch(&mut self, patch: CartPatch, now: DateTime<Utc>) {
        if let Some(customer_id) = patch.customer_id {
            self.customer_id = customer_id;
        }
        if let Some(product_id) = patch.product_id {
            self.product_id = product_id;
        }
        if let Some(quantity) = patch.quantity {
            self.quantity = quantity;
        }
        if let Some(discount_value) = patch.discount_value {
            self.discount_value = discount_value;
        }
        if let Some(is_closed) = patch.is_closed {
            self.is_closed = is_closed;
        }
        self.closed_date = now;
    }
}
