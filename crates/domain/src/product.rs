//! Product — a catalogue item with a category and an integer price.

use serde::{Deserialize, Serialize};

use crate::id::RecordId;
use crate::record::Record;

/// A stored product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: RecordId,
    pub name: String,
    pub category: String,
    pub price: i64,
}

/// Client-supplied product fields.
///
/// Missing fields decode to their defaults and unknown fields (including a
/// stray `id`) are ignored. Capitalised keys are accepted as well.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductPayload {
    #[serde(alias = "Name")]
    pub name: String,
    #[serde(alias = "Category")]
    pub category: String,
    #[serde(alias = "Price")]
    pub price: i64,
}

impl ProductPayload {
    #[must_use]
    pub fn new(name: impl Into<String>, category: impl Into<String>, price: i64) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            price,
        }
    }
}

impl Record for Product {
    type Payload = ProductPayload;

    const KIND: &'static str = "Product";
    const FILTER_KEY: &'static str = "category";

    fn from_payload(id: RecordId, payload: ProductPayload) -> Self {
        Self {
            id,
            name: payload.name,
            category: payload.category,
            price: payload.price,
        }
    }

    fn id(&self) -> RecordId {
        self.id
    }

    fn replace(&mut self, payload: ProductPayload) {
        self.name = payload.name;
        self.category = payload.category;
        self.price = payload.price;
    }

    fn filter_field(&self) -> &str {
        &self.category
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::Filter;

    fn widget() -> Product {
        Product::from_payload(RecordId::FIRST, ProductPayload::new("Widget", "Tools", 10))
    }

    #[test]
    fn should_replace_all_fields_but_keep_id() {
        let mut product = widget();
        product.replace(ProductPayload::new("Gadget", "Toys", 25));

        assert_eq!(product.id, RecordId::FIRST);
        assert_eq!(product.name, "Gadget");
        assert_eq!(product.category, "Toys");
        assert_eq!(product.price, 25);
    }

    #[test]
    fn should_filter_on_category() {
        let product = widget();
        assert!(product.matches(Filter::parse(Some("tools")).as_ref()));
        assert!(!product.matches(Filter::parse(Some("widget")).as_ref()));
        assert!(product.matches(None));
    }

    #[test]
    fn should_ignore_client_supplied_id_in_payload() {
        let payload: ProductPayload =
            serde_json::from_str(r#"{"id":99,"name":"Widget","category":"Tools","price":10}"#)
                .unwrap();
        assert_eq!(payload, ProductPayload::new("Widget", "Tools", 10));
    }

    #[test]
    fn should_default_missing_fields() {
        let payload: ProductPayload = serde_json::from_str("{}").unwrap();
        assert_eq!(payload, ProductPayload::default());
    }

    #[test]
    fn should_serialize_with_id_first() {
        let json = serde_json::to_string(&widget()).unwrap();
        assert_eq!(
            json,
            r#"{"id":1,"name":"Widget","category":"Tools","price":10}"#
        );
    }
}
