//! Deterministic pizza identities.

use crate::Vocabulary;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Stable identifier of a pizza node.
///
/// Derived from the record's natural key with a name-based (v5) UUID, so the same key maps to
/// the same id in every run and every process.
///
/// # Example
///
/// ```rust
/// use pizzakb_core::PizzaId;
///
/// assert_eq!(PizzaId::assign("abc"), PizzaId::assign("abc"));
/// assert_ne!(PizzaId::assign("abc"), PizzaId::assign("abd"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PizzaId(Uuid);

impl PizzaId {
    /// Namespace the natural key is hashed under.
    pub const NAMESPACE: Uuid = Uuid::NAMESPACE_DNS;

    /// Derive the id for a natural key.
    ///
    /// The empty key is accepted and yields a valid id shared by every key-less record.
    pub fn assign(natural_key: &str) -> Self {
        Self(Uuid::new_v5(&Self::NAMESPACE, natural_key.as_bytes()))
    }

    /// The underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    /// Node IRI for this id under the vocabulary's knowledge-base prefix.
    pub fn iri(&self, vocab: &Vocabulary) -> String {
        format!("{}{}", vocab.kb_base, self.0)
    }
}

impl fmt::Display for PizzaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assign_is_deterministic() {
        assert_eq!(PizzaId::assign("1"), PizzaId::assign("1"));
        assert_ne!(PizzaId::assign("1"), PizzaId::assign("2"));
    }

    #[test]
    fn test_known_value() {
        // uuid5(NAMESPACE_DNS, "python.org")
        let id = PizzaId::assign("python.org");
        assert_eq!(id.to_string(), "886313e1-3b8a-5372-9b90-0c9aee199e5d");
    }

    #[test]
    fn test_empty_key() {
        let id = PizzaId::assign("");
        assert_eq!(id, PizzaId::assign(""));
        assert_eq!(id.as_uuid().get_version_num(), 5);
    }

    #[test]
    fn test_iri() {
        let vocab = Vocabulary::default();
        let id = PizzaId::assign("abc");
        let iri = id.iri(&vocab);
        assert!(iri.starts_with("http://www.perfect-memory.com/profile/pizza/kb/"));
        assert!(iri.ends_with(&id.to_string()));
    }
}
