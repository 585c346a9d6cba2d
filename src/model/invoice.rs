use crate::model::{CustomerId, InvoiceId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A purchase by one customer. Totals are supplied by the caller and stored as given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    pub id: InvoiceId,
    pub customer_id: CustomerId,
    pub total_value: f64,
    pub total_quantity: i32,
    pub total_discount: f64,
    pub purchase_date: DateTime<Utc>,
}

/// Caller-writable invoice fields. Only `customer_id` is required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceFields {
    pub customer_id: CustomerId,
    #[serde(default)]
    pub total_value: f64,
    #[serde(default = "default_total_quantity")]
    pub total_quantity: i32,
    #[serde(default)]
    pub total_discount: f64,
}

fn default_total_quantity() -> i32 {
    1
}

impl Invoice {
    pub fn new(id: InvoiceId, purchase_date: DateTime<Utc>, fields: InvoiceFields) -> Self {
        Self {
            id,
            customer_id: fields.customer_id,
            total_value: fields.total_value,
            total_quantity: fields.total_quantity,
            total_discount: fields.total_discount,
            purchase_date,
        }
    }

    pub fn apply(&mut self, fields: InvoiceFields) {
        self.customer_id = fields.customer_id;
        self.total_value = fields.total_value;
        self.total_quantity = fields.total_quantity;
        self.total_discount = fields.total_discount;
    }
}
