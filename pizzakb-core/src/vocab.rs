//! Ontology URIs used when emitting pizza triples.

/// `rdf:type`.
pub const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";

/// `rdfs:label`.
pub const RDFS_LABEL: &str = "http://www.w3.org/2000/01/rdf-schema#label";

/// `xsd:float`.
pub const XSD_FLOAT: &str = "http://www.w3.org/2001/XMLSchema#float";

const PIZZA_ONTOLOGY: &str = "http://www.perfect-memory.com/ontology/pizza/1.1#";
const PIZZA_KB: &str = "http://www.perfect-memory.com/profile/pizza/kb/";

/// The URI table held by a [`TripleBuilder`](crate::TripleBuilder).
///
/// `Vocabulary::default()` is the Perfect Memory pizza ontology. Type facts always use
/// [`RDF_TYPE`], which JSON-LD binds to `@type`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    /// Prefix that a pizza id is appended to to form its node IRI.
    pub kb_base: String,
    /// Class every pizza node is typed with.
    pub pizza_type: String,
    /// Predicate carrying the price literal.
    pub price: String,
    /// Predicate carrying the display name.
    pub label: String,
    /// Datatype tag of the price literal.
    pub price_datatype: String,
    /// Language tag of the label literal.
    pub label_language: String,
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self {
            kb_base: PIZZA_KB.to_string(),
            pizza_type: format!("{PIZZA_ONTOLOGY}Pizza"),
            price: format!("{PIZZA_ONTOLOGY}price"),
            label: RDFS_LABEL.to_string(),
            price_datatype: XSD_FLOAT.to_string(),
            label_language: "en".to_string(),
        }
    }
}
