//! Append-only triple graph and the builder that fills it from pizzas.

use crate::vocab::RDF_TYPE;
use crate::{Literal, Pizza, Term, Triple, Vocabulary};
use std::collections::HashSet;
use tracing::trace;

/// A multiset of triples, kept in insertion order.
///
/// There is no way to remove or rewrite a triple once added. Duplicate triples are kept.
///
/// # Example
///
/// ```rust
/// use pizzakb_core::{Graph, Term, Triple};
///
/// let mut graph = Graph::new();
/// graph.add_triple(Triple::new("http://a", "http://p", Term::iri("http://b")));
/// graph.add_triple(Triple::new("http://a", "http://q", Term::iri("http://c")));
///
/// assert_eq!(graph.triple_count(), 2);
/// assert_eq!(graph.subjects(), ["http://a"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Graph {
    triples: Vec<Triple>,
}

/// Summary counts for a graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphStats {
    /// Distinct subjects.
    pub subject_count: usize,
    /// Triples, duplicates included.
    pub triple_count: usize,
    /// Distinct predicates.
    pub predicate_count: usize,
}

impl Graph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a triple to the graph.
    pub fn add_triple(&mut self, triple: Triple) {
        self.triples.push(triple);
    }

    /// Iterate over all triples in insertion order.
    pub fn triples(&self) -> impl Iterator<Item = &Triple> {
        self.triples.iter()
    }

    /// Number of triples.
    pub fn triple_count(&self) -> usize {
        self.triples.len()
    }

    /// Whether the graph has no triples.
    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    /// Distinct subjects, in the order they were first added.
    pub fn subjects(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.triples
            .iter()
            .map(|t| t.subject.as_str())
            .filter(|s| seen.insert(*s))
            .collect()
    }

    /// All triples with the given subject.
    pub fn relations_from(&self, subject: &str) -> Vec<&Triple> {
        self.triples
            .iter()
            .filter(|t| t.subject == subject)
            .collect()
    }

    /// Whether the graph holds at least one copy of `triple`.
    pub fn contains(&self, triple: &Triple) -> bool {
        self.triples.contains(triple)
    }

    /// Compute graph statistics.
    pub fn stats(&self) -> GraphStats {
        let predicates: HashSet<&str> = self.triples.iter().map(|t| t.predicate.as_str()).collect();
        GraphStats {
            subject_count: self.subjects().len(),
            triple_count: self.triples.len(),
            predicate_count: predicates.len(),
        }
    }
}

impl Extend<Triple> for Graph {
    fn extend<I: IntoIterator<Item = Triple>>(&mut self, iter: I) {
        self.triples.extend(iter);
    }
}

/// Emits the fixed pizza facts into a graph.
///
/// Each pizza yields three triples, in this order: its type, its price as an `xsd:float`
/// literal, and its English label.
#[derive(Debug, Clone, Default)]
pub struct TripleBuilder {
    vocab: Vocabulary,
}

impl TripleBuilder {
    /// Triples emitted per pizza.
    pub const TRIPLES_PER_PIZZA: usize = 3;

    /// Create a builder over a vocabulary.
    pub fn new(vocab: Vocabulary) -> Self {
        Self { vocab }
    }

    /// The vocabulary this builder emits.
    pub fn vocab(&self) -> &Vocabulary {
        &self.vocab
    }

    /// Append the pizza's triples to `into`, or to a fresh graph when `into` is `None`.
    ///
    /// Assigns the pizza's identity if it is still unset. Never fails: the price text goes
    /// through as-is with a float datatype tag.
    pub fn emit(&self, pizza: &Pizza, into: Option<Graph>) -> Graph {
        let mut graph = into.unwrap_or_default();
        let node = pizza.ensure_identity().iri(&self.vocab);
        trace!(node = %node, "emitting pizza triples");

        graph.add_triple(Triple::new(
            node.clone(),
            RDF_TYPE,
            Term::iri(self.vocab.pizza_type.clone()),
        ));
        graph.add_triple(Triple::new(
            node.clone(),
            self.vocab.price.clone(),
            Literal::typed(pizza.price(), self.vocab.price_datatype.clone()),
        ));
        graph.add_triple(Triple::new(
            node,
            self.vocab.label.clone(),
            Literal::lang(pizza.label(), self.vocab.label_language.clone()),
        ));
        graph
    }

    /// Fold pizzas left to right into one graph.
    pub fn assemble<'a>(&self, pizzas: impl IntoIterator<Item = &'a Pizza>) -> Graph {
        pizzas
            .into_iter()
            .fold(Graph::new(), |graph, pizza| self.emit(pizza, Some(graph)))
    }
}
