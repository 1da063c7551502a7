//! Flat input records.
//!
//! A record source hands over [`RawRecord`]s: string keys to string values, any key may be
//! missing. [`PizzaRecord`] is the typed view the entity model reads from.

use serde::Deserialize;
use std::collections::HashMap;

/// One flat record, as produced by a record source.
pub type RawRecord = HashMap<String, String>;

/// Field names of a pizza record.
pub mod fields {
    /// Natural key of the pizza in the source system.
    pub const PIZZA_ID: &str = "pizza_id";
    /// Display name.
    pub const PIZZA_NAME: &str = "pizza_name";
    /// Comma separated ingredient list.
    pub const PIZZA_DESCRIPTION: &str = "pizza_description";
    /// Decimal price as text.
    pub const PIZZA_PRICE: &str = "pizza_price";

    /// Every field, in the order sources usually list them.
    pub const ALL: [&str; 4] = [PIZZA_ID, PIZZA_NAME, PIZZA_DESCRIPTION, PIZZA_PRICE];
}

/// Typed view of a pizza record. Fields are only checked for presence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PizzaRecord {
    /// `pizza_id`
    #[serde(default)]
    pub pizza_id: Option<String>,
    /// `pizza_name`
    #[serde(default)]
    pub pizza_name: Option<String>,
    /// `pizza_description`
    #[serde(default)]
    pub pizza_description: Option<String>,
    /// `pizza_price`
    #[serde(default)]
    pub pizza_price: Option<String>,
}

impl PizzaRecord {
    /// Pick the pizza fields out of a raw record. Unknown keys are ignored.
    pub fn from_raw(raw: &RawRecord) -> Self {
        let field = |name: &str| raw.get(name).cloned();
        Self {
            pizza_id: field(fields::PIZZA_ID),
            pizza_name: field(fields::PIZZA_NAME),
            pizza_description: field(fields::PIZZA_DESCRIPTION),
            pizza_price: field(fields::PIZZA_PRICE),
        }
    }
}

impl From<&RawRecord> for PizzaRecord {
    fn from(raw: &RawRecord) -> Self {
        Self::from_raw(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_raw_keeps_presence() {
        let mut raw = RawRecord::new();
        raw.insert("pizza_name".into(), "Margherita".into());
        raw.insert("pizza_price".into(), String::new());
        raw.insert("unrelated".into(), "x".into());

        let record = PizzaRecord::from_raw(&raw);
        assert_eq!(record.pizza_id, None);
        assert_eq!(record.pizza_name.as_deref(), Some("Margherita"));
        assert_eq!(record.pizza_description, None);
        assert_eq!(record.pizza_price.as_deref(), Some(""));
        // input untouched
        assert_eq!(raw.len(), 3);
    }

    #[test]
    fn test_deserialize_partial() {
        let record: PizzaRecord = serde_json::from_str(r#"{"pizza_name": "Pepperoni"}"#).unwrap();
        assert_eq!(record.pizza_name.as_deref(), Some("Pepperoni"));
        assert_eq!(record.pizza_price, None);
    }
}
