//! N-Triples output.
//!
//! Line-based, one triple per line: `<subject> <predicate> <object> .`
//!
//! Reference: <https://www.w3.org/TR/rdf12-n-triples/>

use crate::{Graph, Result};
use std::io::Write;

/// N-Triples format handler.
pub struct NTriples;

impl NTriples {
    /// Write a graph to N-Triples format, in graph order.
    pub fn write<W: Write>(graph: &Graph, mut writer: W) -> Result<()> {
        for triple in graph.triples() {
            writeln!(writer, "{}", triple.to_ntriples())?;
        }
        Ok(())
    }

    /// Convert to string.
    pub fn to_string(graph: &Graph) -> Result<String> {
        let mut buf = Vec::new();
        Self::write(graph, &mut buf)?;
        Ok(String::from_utf8_lossy(&buf).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Pizza, PizzaRecord, TripleBuilder};

    #[test]
    fn test_write_pizza() {
        let pizza = Pizza::from_record(&PizzaRecord {
            pizza_id: Some("1".into()),
            pizza_name: Some("Margherita".into()),
            pizza_description: None,
            pizza_price: Some("10.00".into()),
        });
        let graph = TripleBuilder::default().emit(&pizza, None);

        let output = NTriples::to_string(&graph).unwrap();
        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].ends_with("<http://www.perfect-memory.com/ontology/pizza/1.1#Pizza> ."));
        assert!(lines[1].contains(r#""10.00"^^<http://www.w3.org/2001/XMLSchema#float>"#));
        assert!(lines[2].contains(r#""Margherita"@en"#));
    }
}
