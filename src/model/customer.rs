use crate::error::{check_short_text, StoreError};
use crate::model::CustomerId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A customer of the shop. Email addresses are not required to be unique.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub creation_date: DateTime<Utc>,
}

/// Caller-writable customer fields, used for both create and replace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerFields {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl CustomerFields {
    pub fn validate(&self) -> Result<(), StoreError> {
        check_short_text("name", &self.name)?;
        check_short_text("email", &self.email)?;
        check_short_text("phone", &self.phone)
    }
}

impl Customer {
    pub fn new(id: CustomerId, creation_date: DateTime<Utc>, fields: CustomerFields) -> Self {
        Self {
            id,
            name: fields.name,
            email: fields.email,
            phone: fields.phone,
            creation_date,
        }
    }

    /// Overwrites every caller-writable field.
    pub fn apply(&mut self, fields: CustomerFields) {
        self.name = fields.name;
        self.email = fields.email;
        self.phone = fields.phone;
    }
}
