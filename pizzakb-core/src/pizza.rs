//! The pizza entity.

use crate::{PizzaId, PizzaRecord, RawRecord};
use std::cell::OnceCell;
use std::fmt;

/// Price used when the record has none, or an empty one.
pub const DEFAULT_PRICE: &str = "0.0";

const INGREDIENT_DELIMITER: char = ',';

/// One menu item, normalized from a record and ready for triple emission.
///
/// Everything but the identity is fixed at construction. The identity starts unset and is
/// assigned once, on first emission; later emissions reuse it.
///
/// # Example
///
/// ```rust
/// use pizzakb_core::{Pizza, PizzaRecord};
///
/// let pizza = Pizza::from_record(&PizzaRecord::default());
/// assert_eq!(pizza.label(), "");
/// assert_eq!(pizza.price(), "0.0");
/// assert_eq!(pizza.ingredients(), [""]);
/// assert!(pizza.identity().is_none());
/// ```
#[derive(Debug, Clone)]
pub struct Pizza {
    natural_key: String,
    label: String,
    ingredients: Vec<String>,
    price: String,
    identity: OnceCell<PizzaId>,
}

impl Pizza {
    /// Build a pizza from its typed record, filling defaults for missing fields.
    ///
    /// A missing description is split like an empty one and yields a single empty
    /// ingredient, not an empty list.
    pub fn from_record(record: &PizzaRecord) -> Self {
        let description = record.pizza_description.as_deref().unwrap_or_default();
        let price = match record.pizza_price.as_deref() {
            Some(price) if !price.is_empty() => price,
            _ => DEFAULT_PRICE,
        };

        Self {
            natural_key: record.pizza_id.clone().unwrap_or_default(),
            label: record.pizza_name.clone().unwrap_or_default(),
            ingredients: description
                .split(INGREDIENT_DELIMITER)
                .map(str::to_string)
                .collect(),
            price: price.to_string(),
            identity: OnceCell::new(),
        }
    }

    /// Build a pizza straight from a raw record.
    pub fn from_raw(raw: &RawRecord) -> Self {
        Self::from_record(&PizzaRecord::from_raw(raw))
    }

    /// Natural key the identity is derived from. Empty if the source had none.
    pub fn natural_key(&self) -> &str {
        &self.natural_key
    }

    /// Display name.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Ingredients, in description order.
    pub fn ingredients(&self) -> &[String] {
        &self.ingredients
    }

    /// Price text, not parsed.
    pub fn price(&self) -> &str {
        &self.price
    }

    /// The identity, if it has been assigned.
    pub fn identity(&self) -> Option<PizzaId> {
        self.identity.get().copied()
    }

    /// Return the identity, assigning it from the natural key on first call.
    pub fn ensure_identity(&self) -> PizzaId {
        *self
            .identity
            .get_or_init(|| PizzaId::assign(&self.natural_key))
    }
}

impl From<&PizzaRecord> for Pizza {
    fn from(record: &PizzaRecord) -> Self {
        Self::from_record(record)
    }
}

impl fmt::Display for Pizza {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pizza: {}, Ingredients: [", self.label)?;
        for (i, ingredient) in self.ingredients.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write_quoted(f, ingredient)?;
        }
        write!(f, "], Price: {}", self.price)
    }
}

/// Single quotes, or double quotes when the item holds a `'` and no `"`. Backslashes and the
/// enclosing quote are escaped.
fn write_quoted(f: &mut fmt::Formatter<'_>, item: &str) -> fmt::Result {
    let quote = if item.contains('\'') && !item.contains('"') {
        '"'
    } else {
        '\''
    };
    write!(f, "{quote}")?;
    for c in item.chars() {
        match c {
            '\\' => write!(f, "\\\\")?,
            '\n' => write!(f, "\\n")?,
            '\r' => write!(f, "\\r")?,
            '\t' => write!(f, "\\t")?,
            c if c == quote => write!(f, "\\{c}")?,
            c => write!(f, "{c}")?,
        }
    }
    write!(f, "{quote}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn margherita() -> PizzaRecord {
        PizzaRecord {
            pizza_id: None,
            pizza_name: Some("Margherita".into()),
            pizza_description: Some("mozzarella,cheese".into()),
            pizza_price: Some("10.00".into()),
        }
    }

    #[test]
    fn test_from_record() {
        let pizza = Pizza::from_record(&margherita());
        assert_eq!(pizza.label(), "Margherita");
        assert_eq!(pizza.ingredients(), ["mozzarella", "cheese"]);
        assert_eq!(pizza.price(), "10.00");
        assert_eq!(pizza.natural_key(), "");
        assert!(pizza.identity().is_none());
    }

    #[test]
    fn test_defaults() {
        let pizza = Pizza::from_raw(&RawRecord::new());
        assert_eq!(pizza.label(), "");
        assert_eq!(pizza.price(), DEFAULT_PRICE);
        assert_eq!(pizza.ingredients(), [""]);
    }

    #[test]
    fn test_empty_price_defaults() {
        let record = PizzaRecord {
            pizza_price: Some(String::new()),
            ..margherita()
        };
        assert_eq!(Pizza::from_record(&record).price(), "0.0");
    }

    #[test]
    fn test_malformed_price_kept() {
        let record = PizzaRecord {
            pizza_price: Some("ten".into()),
            ..margherita()
        };
        assert_eq!(Pizza::from_record(&record).price(), "ten");
    }

    #[test]
    fn test_display() {
        let pizza = Pizza::from_record(&margherita());
        assert_eq!(
            pizza.to_string(),
            "Pizza: Margherita, Ingredients: ['mozzarella', 'cheese'], Price: 10.00"
        );
    }

    #[test]
    fn test_display_apostrophe() {
        let pizza = Pizza::from_record(&PizzaRecord {
            pizza_id: None,
            pizza_name: Some("Chef".into()),
            pizza_description: Some("chef's cheese,basil".into()),
            pizza_price: None,
        });
        assert_eq!(
            pizza.to_string(),
            r#"Pizza: Chef, Ingredients: ["chef's cheese", 'basil'], Price: 0.0"#
        );
    }

    #[test]
    fn test_display_escapes() {
        let pizza = Pizza::from_record(&PizzaRecord {
            pizza_description: Some(r#"both ' and ",back\slash"#.into()),
            ..margherita()
        });
        assert_eq!(
            pizza.to_string(),
            r#"Pizza: Margherita, Ingredients: ['both \' and "', 'back\\slash'], Price: 10.00"#
        );
    }

    #[test]
    fn test_identity_assigned_once() {
        let record = PizzaRecord {
            pizza_id: Some("abc".into()),
            ..margherita()
        };
        let pizza = Pizza::from_record(&record);
        let first = pizza.ensure_identity();
        assert_eq!(pizza.identity(), Some(first));
        assert_eq!(pizza.ensure_identity(), first);
        assert_eq!(first, PizzaId::assign("abc"));
    }
}
