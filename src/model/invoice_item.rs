use crate::model::{InvoiceId, InvoiceItemId, ProductId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One line of an invoice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceItem {
    pub id: InvoiceItemId,
    pub invoice_id: InvoiceId,
    pub product_id: ProductId,
    pub quantity: i32,
    pub quote_price: Option<f64>,
    pub discount_value: f64,
    pub creation_date: DateTime<Utc>,
}

/// Caller-writable line fields.
///
/// An absent `quote_price` defaults to `0.0`; an explicit `null` is kept as `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceItemFields {
    pub invoice_id: InvoiceId,
    pub product_id: ProductId,
    pub quantity: i32,
    #[serde(default = "default_quote_price")]
    pub quote_price: Option<f64>,
    #[serde(default)]
    pub discount_value: f64,
}

fn default_quote_price() -> Option<f64> {
    Some(0.0)
}

impl InvoiceItem {
    pub fn new(id: InvoiceItemId, creation_date: DateTime<Utc>, fields: InvoiceItemFields) -> Self {
        Self {
            id,
            invoice_id: fields.invoice_id,
            product_id: fields.product_id,
            quantity: fields.quantity,
            quote_price: fields.quote_price,
            discount_value: fields.discount_value,
            creation_date,
        }
    }

    pub fn apply(&mut self, fields: InvoiceItemFields) {
        self.invoice_id = fields.invoice_id;
        self.product_id = fields.product_id;
        self.quantity = fields.quantity;
        self.quote_price = fields.quote_price;
        self.discount_value = fields.discount_value;
    }
}
