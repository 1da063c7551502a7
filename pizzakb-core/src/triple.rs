//! Triple type for pizza graphs.
//!
//! A triple represents a (subject, predicate, object) statement. Subjects and predicates are
//! IRIs; objects are either IRIs or literals.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A literal object value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Literal {
    /// A lexical value with a datatype IRI, e.g. `"10.00"^^xsd:float`.
    Typed {
        /// Lexical form, never parsed.
        value: String,
        /// Datatype IRI.
        datatype: String,
    },
    /// A string with a language tag, e.g. `"Margherita"@en`.
    LangString {
        /// The text.
        value: String,
        /// BCP 47 language tag.
        language: String,
    },
}

impl Literal {
    /// Create a typed literal.
    pub fn typed(value: impl Into<String>, datatype: impl Into<String>) -> Self {
        Self::Typed {
            value: value.into(),
            datatype: datatype.into(),
        }
    }

    /// Create a language-tagged string.
    pub fn lang(value: impl Into<String>, language: impl Into<String>) -> Self {
        Self::LangString {
            value: value.into(),
            language: language.into(),
        }
    }

    fn to_ntriples(&self) -> String {
        match self {
            Self::Typed { value, datatype } => format!("\"{}\"^^<{}>", escape(value), datatype),
            Self::LangString { value, language } => format!("\"{}\"@{}", escape(value), language),
        }
    }
}

/// Object position of a triple.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Term {
    /// Reference to another node.
    Iri(String),
    /// Literal value.
    Literal(Literal),
}

impl Term {
    /// Create an IRI term.
    pub fn iri(iri: impl Into<String>) -> Self {
        Self::Iri(iri.into())
    }

    /// The IRI, if this term is one.
    pub fn as_iri(&self) -> Option<&str> {
        match self {
            Self::Iri(iri) => Some(iri),
            Self::Literal(_) => None,
        }
    }
}

impl From<Literal> for Term {
    fn from(literal: Literal) -> Self {
        Self::Literal(literal)
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Iri(iri) => write!(f, "<{iri}>"),
            Self::Literal(literal) => write!(f, "{}", literal.to_ntriples()),
        }
    }
}

/// A (subject, predicate, object) triple.
///
/// # Example
///
/// ```rust
/// use pizzakb_core::{Literal, Triple};
///
/// let triple = Triple::new(
///     "http://example.org/pizza/1",
///     "http://www.w3.org/2000/01/rdf-schema#label",
///     Literal::lang("Margherita", "en"),
/// );
/// assert_eq!(
///     triple.to_ntriples(),
///     r#"<http://example.org/pizza/1> <http://www.w3.org/2000/01/rdf-schema#label> "Margherita"@en ."#
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Triple {
    /// Subject node IRI.
    pub subject: String,

    /// Predicate IRI.
    pub predicate: String,

    /// Object term.
    pub object: Term,
}

impl Triple {
    /// Create a new triple.
    pub fn new(
        subject: impl Into<String>,
        predicate: impl Into<String>,
        object: impl Into<Term>,
    ) -> Self {
        Self {
            subject: subject.into(),
            predicate: predicate.into(),
            object: object.into(),
        }
    }

    /// Convert to N-Triples format.
    pub fn to_ntriples(&self) -> String {
        format!("<{}> <{}> {} .", self.subject, self.predicate, self.object)
    }
}

impl fmt::Display for Triple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.subject, self.predicate, self.object)
    }
}

fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            _ => out.push(c),
        }
    }
    out
}
