//! JSON-LD format.
//!
//! Graphs are written as a flat array of node objects, one per subject:
//!
//! ```json
//! [{
//!   "@id": "http://www.perfect-memory.com/profile/pizza/kb/…",
//!   "@type": ["http://www.perfect-memory.com/ontology/pizza/1.1#Pizza"],
//!   "http://www.perfect-memory.com/ontology/pizza/1.1#price": [
//!     {"@value": "10.00", "@type": "http://www.w3.org/2001/XMLSchema#float"}
//!   ],
//!   "http://www.w3.org/2000/01/rdf-schema#label": [
//!     {"@value": "Margherita", "@language": "en"}
//!   ]
//! }]
//! ```
//!
//! Reference: <https://www.w3.org/TR/json-ld11/>

use crate::vocab::RDF_TYPE;
use crate::{Error, Graph, Literal, Result, Term, Triple};
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use std::collections::HashMap;
use std::io::Write;

/// A value in a node object's predicate array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// Node reference, `{"@id": …}`.
    Id(String),
    /// Typed or language-tagged literal.
    Literal(Literal),
}

impl From<&Term> for Value {
    fn from(term: &Term) -> Self {
        match term {
            Term::Iri(iri) => Self::Id(iri.clone()),
            Term::Literal(literal) => Self::Literal(literal.clone()),
        }
    }
}

impl From<Value> for Term {
    fn from(value: Value) -> Self {
        match value {
            Value::Id(iri) => Term::Iri(iri),
            Value::Literal(literal) => Term::Literal(literal),
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(match self {
            Self::Id(_) => 1,
            Self::Literal(_) => 2,
        }))?;
        match self {
            Self::Id(iri) => map.serialize_entry("@id", iri)?,
            Self::Literal(Literal::Typed { value, datatype }) => {
                map.serialize_entry("@value", value)?;
                map.serialize_entry("@type", datatype)?;
            }
            Self::Literal(Literal::LangString { value, language }) => {
                map.serialize_entry("@value", value)?;
                map.serialize_entry("@language", language)?;
            }
        }
        map.end()
    }
}

/// All triples of one subject.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeObject {
    id: String,
    types: Vec<String>,
    properties: Vec<(String, Vec<Value>)>,
}

impl NodeObject {
    fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            types: Vec::new(),
            properties: Vec::new(),
        }
    }

    /// The node's `@id`.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The node's `@type` IRIs.
    pub fn types(&self) -> &[String] {
        &self.types
    }

    /// Predicates with their values, in first-seen order.
    pub fn properties(&self) -> impl Iterator<Item = (&str, &[Value])> {
        self.properties
            .iter()
            .map(|(predicate, values)| (predicate.as_str(), values.as_slice()))
    }

    /// Values of one predicate.
    pub fn get(&self, predicate: &str) -> Option<&[Value]> {
        self.properties
            .iter()
            .find(|(p, _)| p == predicate)
            .map(|(_, values)| values.as_slice())
    }

    fn push_value(&mut self, predicate: &str, value: Value) {
        match self.properties.iter_mut().find(|(p, _)| p == predicate) {
            Some((_, values)) => values.push(value),
            None => self.properties.push((predicate.to_string(), vec![value])),
        }
    }

    fn value_count(&self) -> usize {
        self.types.len() + self.properties.iter().map(|(_, v)| v.len()).sum::<usize>()
    }
}

impl Serialize for NodeObject {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("@id", &self.id)?;
        if !self.types.is_empty() {
            map.serialize_entry("@type", &self.types)?;
        }
        for (predicate, values) in &self.properties {
            map.serialize_entry(predicate, values)?;
        }
        map.end()
    }
}

/// A serialized graph: node objects in the order their subjects first appeared.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Document {
    nodes: Vec<NodeObject>,
}

impl Document {
    /// Node objects in document order.
    pub fn nodes(&self) -> &[NodeObject] {
        &self.nodes
    }

    /// Whether the document has no node.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The declared root: the `@id` of the first node.
    pub fn root(&self) -> Option<&str> {
        self.nodes.first().map(NodeObject::id)
    }

    /// Roots to declare to a consumer. At most one, the first node.
    pub fn roots(&self) -> Vec<String> {
        self.root().map(str::to_string).into_iter().collect()
    }

    /// Number of triples the document encodes.
    pub fn triple_count(&self) -> usize {
        self.nodes.iter().map(NodeObject::value_count).sum()
    }

    /// The node array as JSON.
    pub fn to_value(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }
}

/// JSON-LD format handler.
pub struct JsonLd;

impl JsonLd {
    /// Group a graph's triples into node objects.
    ///
    /// Subjects, predicates and values all keep first-seen order, so the same graph always
    /// yields the same document. An `rdf:type` triple whose object is a literal has no
    /// `@type` rendering and is rejected rather than dropped.
    pub fn to_document(graph: &Graph) -> Result<Document> {
        let mut nodes: Vec<NodeObject> = Vec::new();
        let mut index: HashMap<&str, usize> = HashMap::new();

        for triple in graph.triples() {
            let slot = *index.entry(triple.subject.as_str()).or_insert_with(|| {
                nodes.push(NodeObject::new(triple.subject.as_str()));
                nodes.len() - 1
            });
            let node = &mut nodes[slot];

            if triple.predicate == RDF_TYPE {
                match &triple.object {
                    Term::Iri(iri) => node.types.push(iri.clone()),
                    Term::Literal(_) => {
                        return Err(Error::Unrenderable(format!(
                            "rdf:type object must be an IRI: {triple}"
                        )))
                    }
                }
                continue;
            }

            node.push_value(&triple.predicate, Value::from(&triple.object));
        }

        Ok(Document { nodes })
    }

    /// Write a graph as pretty-printed JSON-LD.
    pub fn write<W: Write>(graph: &Graph, mut writer: W) -> Result<()> {
        let doc = Self::to_document(graph)?;
        let json = serde_json::to_string_pretty(&doc)?;
        writer.write_all(json.as_bytes())?;
        Ok(())
    }

    /// Convert to string.
    pub fn to_string(graph: &Graph) -> Result<String> {
        let mut buf = Vec::new();
        Self::write(graph, &mut buf)?;
        Ok(String::from_utf8_lossy(&buf).to_string())
    }

    /// Read a graph back from JSON-LD.
    ///
    /// Accepts a node array, a single node object, or an object wrapping the nodes under
    /// `@graph`. Only the value shapes this module writes are understood; anything else is an
    /// error.
    pub fn from_value(doc: &serde_json::Value) -> Result<Graph> {
        let nodes: Vec<&serde_json::Value> = if let Some(arr) = doc.as_array() {
            arr.iter().collect()
        } else if let Some(arr) = doc.get("@graph").and_then(|v| v.as_array()) {
            arr.iter().collect()
        } else if doc.get("@id").is_some() {
            vec![doc]
        } else {
            return Err(Error::ParseDocument(
                "expected a node array or an @graph object".into(),
            ));
        };

        let mut graph = Graph::new();
        for node in nodes {
            Self::parse_node(node, &mut graph)?;
        }
        Ok(graph)
    }

    /// Parse from string.
    pub fn from_str(s: &str) -> Result<Graph> {
        let doc: serde_json::Value = serde_json::from_str(s)?;
        Self::from_value(&doc)
    }

    fn parse_node(node: &serde_json::Value, graph: &mut Graph) -> Result<()> {
        let subject = node
            .get("@id")
            .and_then(|v| v.as_str())
            .ok_or_else(|| Error::ParseDocument("Missing @id".into()))?;

        for (key, value) in node.as_object().into_iter().flatten() {
            let values: Vec<&serde_json::Value> = match value.as_array() {
                Some(arr) => arr.iter().collect(),
                None => vec![value],
            };

            match key.as_str() {
                "@id" => {}
                "@type" => {
                    for val in values {
                        let iri = val.as_str().ok_or_else(|| {
                            Error::ParseDocument(format!("@type of {subject} must be a string"))
                        })?;
                        graph.add_triple(Triple::new(subject, RDF_TYPE, Term::iri(iri)));
                    }
                }
                predicate => {
                    for val in values {
                        let object = Self::parse_value(val).ok_or_else(|| {
                            Error::ParseDocument(format!(
                                "unsupported value for {predicate}: {val}"
                            ))
                        })?;
                        graph.add_triple(Triple::new(subject, predicate, Term::from(object)));
                    }
                }
            }
        }

        Ok(())
    }

    fn parse_value(val: &serde_json::Value) -> Option<Value> {
        if let Some(id) = val.get("@id").and_then(|v| v.as_str()) {
            return Some(Value::Id(id.to_string()));
        }
        let value = val.get("@value")?.as_str()?;
        if let Some(datatype) = val.get("@type").and_then(|v| v.as_str()) {
            return Some(Value::Literal(Literal::typed(value, datatype)));
        }
        let language = val.get("@language")?.as_str()?;
        Some(Value::Literal(Literal::lang(value, language)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocab::{RDFS_LABEL, XSD_FLOAT};
    use serde_json::json;

    const PRICE: &str = "http://www.perfect-memory.com/ontology/pizza/1.1#price";
    const PIZZA: &str = "http://www.perfect-memory.com/ontology/pizza/1.1#Pizza";

    fn pizza_graph(subject: &str, label: &str, price: &str) -> Graph {
        let mut graph = Graph::new();
        graph.add_triple(Triple::new(subject, RDF_TYPE, Term::iri(PIZZA)));
        graph.add_triple(Triple::new(subject, PRICE, Literal::typed(price, XSD_FLOAT)));
        graph.add_triple(Triple::new(subject, RDFS_LABEL, Literal::lang(label, "en")));
        graph
    }

    #[test]
    fn test_node_shape() {
        let graph = pizza_graph("http://kb/12345", "Margherita", "10.00");
        let value = JsonLd::to_document(&graph).unwrap().to_value().unwrap();

        assert_eq!(
            value,
            json!([{
                "@id": "http://kb/12345",
                "@type": [PIZZA],
                PRICE: [{"@value": "10.00", "@type": XSD_FLOAT}],
                RDFS_LABEL: [{"@value": "Margherita", "@language": "en"}],
            }])
        );
    }

    #[test]
    fn test_key_order() {
        let graph = pizza_graph("http://kb/1", "Margherita", "10.00");
        let text = serde_json::to_string(&JsonLd::to_document(&graph).unwrap()).unwrap();

        let id = text.find("\"@id\"").unwrap();
        let ty = text.find("\"@type\"").unwrap();
        let price = text.find(PRICE).unwrap();
        let label = text.find(RDFS_LABEL).unwrap();
        assert!(id < ty && ty < price && price < label);
    }

    #[test]
    fn test_subject_order_and_root() {
        let mut graph = pizza_graph("http://kb/b", "B", "2");
        graph.extend(pizza_graph("http://kb/a", "A", "1").triples().cloned());

        let doc = JsonLd::to_document(&graph).unwrap();
        let ids: Vec<_> = doc.nodes().iter().map(NodeObject::id).collect();
        assert_eq!(ids, ["http://kb/b", "http://kb/a"]);
        assert_eq!(doc.root(), Some("http://kb/b"));
        assert_eq!(doc.roots(), vec!["http://kb/b".to_string()]);
    }

    #[test]
    fn test_duplicates_are_kept() {
        let mut graph = pizza_graph("http://kb/1", "A", "1");
        graph.extend(pizza_graph("http://kb/1", "A", "1").triples().cloned());

        let doc = JsonLd::to_document(&graph).unwrap();
        assert_eq!(doc.nodes().len(), 1);
        assert_eq!(doc.triple_count(), 6);
        assert_eq!(doc.nodes()[0].types().len(), 2);
        assert_eq!(doc.nodes()[0].get(PRICE).map(<[Value]>::len), Some(2));
    }

    #[test]
    fn test_literal_type_is_unrenderable() {
        let mut graph = Graph::new();
        graph.add_triple(Triple::new("http://kb/1", RDF_TYPE, Literal::lang("Pizza", "en")));

        let err = JsonLd::to_document(&graph).unwrap_err();
        assert!(matches!(err, Error::Unrenderable(_)));
    }

    #[test]
    fn test_empty_graph() {
        let doc = JsonLd::to_document(&Graph::new()).unwrap();
        assert!(doc.is_empty());
        assert_eq!(doc.root(), None);
        assert!(doc.roots().is_empty());
        assert_eq!(doc.to_value().unwrap(), json!([]));
    }

    #[test]
    fn test_roundtrip() {
        let graph = pizza_graph("http://kb/1", "Margherita", "10.00");
        let json = JsonLd::to_string(&graph).unwrap();
        let parsed = JsonLd::from_str(&json).unwrap();
        assert_eq!(parsed, graph);
    }

    #[test]
    fn test_from_value_graph_wrapper() {
        let doc = json!({"@graph": [{"@id": "http://kb/1", "http://p": {"@id": "http://o"}}]});
        let graph = JsonLd::from_value(&doc).unwrap();
        assert_eq!(graph.triple_count(), 1);
        assert_eq!(
            graph.triples().next().unwrap().object,
            Term::iri("http://o")
        );
    }

    #[test]
    fn test_from_value_errors() {
        let missing_id = json!([{"http://p": [{"@id": "http://o"}]}]);
        assert!(matches!(
            JsonLd::from_value(&missing_id),
            Err(Error::ParseDocument(_))
        ));

        let plain_string = json!([{"@id": "http://kb/1", "http://p": "text"}]);
        assert!(matches!(
            JsonLd::from_value(&plain_string),
            Err(Error::ParseDocument(_))
        ));
    }
}
