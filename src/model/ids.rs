//! Store-assigned identifiers.
//!
//! Each kind gets its own newtype so a `CustomerId` can never be passed where a `ProductId` is
//! expected. On the wire they are plain integers.

macro_rules! entity_id {
    ($kind:ident, $label:literal) => {
        paste::paste! {
            #[doc = concat!("Identifier of a ", $label, " row.")]
            #[derive(
                Debug,
                Clone,
                Copy,
                PartialEq,
                Eq,
                PartialOrd,
                Ord,
                Hash,
                serde::Serialize,
                serde::Deserialize,
            )]
            #[serde(transparent)]
            pub struct [<$kind Id>](pub u32);

            impl From<u32> for [<$kind Id>] {
                fn from(raw: u32) -> Self {
                    Self(raw)
                }
            }

            impl std::fmt::Display for [<$kind Id>] {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    write!(f, "{} {}", $label, self.0)
                }
            }
        }
    };
}

entity_id!(Customer, "customer");
entity_id!(Product, "product");
entity_id!(Invoice, "invoice");
entity_id!(InvoiceItem, "invoice item");
entity_id!(ShoppingCart, "shopping cart");
entity_id!(User, "user");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_the_kind() {
        assert_eq!(CustomerId(7).to_string(), "customer 7");
        assert_eq!(InvoiceItemId(2).to_string(), "invoice item 2");
    }

    #[test]
    fn test_ids_are_plain_numbers_on_the_wire() {
        assert_eq!(serde_json::to_string(&ProductId(12)).unwrap(), "12");
        let id: ShoppingCartId = serde_json::from_str("4").unwrap();
        assert_eq!(id, ShoppingCartId(4));
    }
}
