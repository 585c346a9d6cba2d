use crate::error::{check_non_negative, check_short_text, check_text, StoreError};
use crate::model::ProductId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A product in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub image_link: String,
    pub price: f64,
    pub creation_date: DateTime<Utc>,
}

/// Caller-writable product fields, used for both create and replace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductFields {
    pub name: String,
    pub description: String,
    pub image_link: String,
    pub price: f64,
}

impl ProductFields {
    pub fn validate(&self) -> Result<(), StoreError> {
        check_short_text("name", &self.name)?;
        check_text("description", &self.description)?;
        check_text("image_link", &self.image_link)?;
        check_non_negative("price", self.price)
    }
}

impl Product {
    pub fn new(id: ProductId, creation_date: DateTime<Utc>, fields: ProductFields) -> Self {
        Self {
            id,
            name: fields.name,
            description: fields.description,
            image_link: fields.image_link,
            price: fields.price,
            creation_date,
        }
    }

    pub fn apply(&mut self, fields: ProductFields) {
        self.name = fields.name;
        self.description = fields.description;
        self.image_link = fields.image_link;
        self.price = fields.price;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(price: f64) -> ProductFields {
        ProductFields {
            name: "Mug".into(),
            description: "A mug".into(),
            image_link: "http://img/mug.png".into(),
            price,
        }
    }

    #[test]
    fn test_negative_price_is_rejected() {
        assert!(fields(4.5).validate().is_ok());
        assert!(matches!(
            fields(-1.0).validate(),
            Err(StoreError::Validation(_))
        ));
    }

    #[test]
    fn test_non_numeric_price_is_a_parse_error() {
        let body = r#"{"name":"Mug","description":"d","image_link":"i","price":"cheap"}"#;
        assert!(serde_json::from_str::<ProductFields>(body).is_err());
    }
}
