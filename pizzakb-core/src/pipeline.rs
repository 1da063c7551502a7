//! Records in, submitted graph out.

use crate::formats::JsonLd;
use crate::{
    Document, Error, Graph, Pizza, RawRecord, Result, Submit, SubmissionOutcome, TripleBuilder,
    Vocabulary,
};
use tracing::{debug, info};

/// Everything one run produced before submission.
#[derive(Debug, Clone)]
pub struct Ingested {
    /// Pizzas in record order, identities assigned.
    pub pizzas: Vec<Pizza>,
    /// The merged graph, `3 * pizzas.len()` triples.
    pub graph: Graph,
    /// The graph as JSON-LD node objects.
    pub document: Document,
}

impl Ingested {
    /// Roots to declare: the first node only.
    pub fn roots(&self) -> Vec<String> {
        self.document.roots()
    }
}

/// Wires record normalization, triple emission, serialization and submission.
///
/// Records are processed strictly in input order; the first record's node becomes the
/// document root.
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    builder: TripleBuilder,
}

impl Pipeline {
    /// Create a pipeline emitting the given vocabulary.
    pub fn new(vocab: Vocabulary) -> Self {
        Self {
            builder: TripleBuilder::new(vocab),
        }
    }

    /// The triple builder in use.
    pub fn builder(&self) -> &TripleBuilder {
        &self.builder
    }

    /// Normalize, assemble and serialize.
    pub fn ingest(&self, records: &[RawRecord]) -> Result<Ingested> {
        let pizzas: Vec<Pizza> = records.iter().map(Pizza::from_raw).collect();
        for pizza in &pizzas {
            debug!("{pizza}");
        }

        let graph = self.builder.assemble(&pizzas);
        let document = JsonLd::to_document(&graph)?;
        info!(
            pizzas = pizzas.len(),
            triples = graph.triple_count(),
            nodes = document.nodes().len(),
            "assembled pizza graph"
        );

        Ok(Ingested {
            pizzas,
            graph,
            document,
        })
    }

    /// Ingest and hand the document to `sink` with the first node as the single root.
    ///
    /// The sink's outcome is returned as-is. With no records there is no root, and the sink
    /// is not called.
    pub fn run<S: Submit>(&self, records: &[RawRecord], sink: &S) -> Result<SubmissionOutcome> {
        let ingested = self.ingest(records)?;
        let roots = ingested.roots();
        if roots.is_empty() {
            return Err(Error::EmptyDocument);
        }

        info!(root = %roots[0], "submitting graph");
        Ok(sink.submit(&ingested.document, &roots))
    }
}
