//! Property-based tests for pizza graphs.
//!
//! These tests verify invariants that should hold for any input:
//! - Identity determinism
//! - Three triples per pizza
//! - Root is always the first record's node
//! - Serialization is lossless and stable

use pizzakb_core::formats::JsonLd;
use pizzakb_core::{Pizza, PizzaId, Pipeline, RawRecord, TripleBuilder, Vocabulary};
use proptest::prelude::*;

fn arb_record() -> impl Strategy<Value = RawRecord> {
    (
        proptest::option::of("[a-z0-9]{0,8}"),
        proptest::option::of("[A-Za-z ]{0,16}"),
        proptest::option::of("[a-z]{1,8}(,[a-z]{1,8}){0,4}"),
        proptest::option::of("[0-9]{1,3}\\.[0-9]{2}|"),
    )
        .prop_map(|(id, name, description, price)| {
            let mut record = RawRecord::new();
            let fields = [
                ("pizza_id", id),
                ("pizza_name", name),
                ("pizza_description", description),
                ("pizza_price", price),
            ];
            for (key, value) in fields {
                if let Some(value) = value {
                    record.insert(key.to_string(), value);
                }
            }
            record
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn assign_is_deterministic(key in ".{0,32}") {
        prop_assert_eq!(PizzaId::assign(&key), PizzaId::assign(&key));
    }

    #[test]
    fn three_triples_per_pizza(records in proptest::collection::vec(arb_record(), 0..20)) {
        let pizzas: Vec<Pizza> = records.iter().map(Pizza::from_raw).collect();
        let graph = TripleBuilder::default().assemble(&pizzas);
        prop_assert_eq!(graph.triple_count(), TripleBuilder::TRIPLES_PER_PIZZA * records.len());
    }

    #[test]
    fn root_is_first_record(
        first in arb_record(),
        rest in proptest::collection::vec(arb_record(), 1..10),
    ) {
        let mut records = vec![first.clone()];
        records.extend(rest);

        let ingested = Pipeline::default().ingest(&records).unwrap();
        let expected = PizzaId::assign(first.get("pizza_id").map(String::as_str).unwrap_or(""))
            .iri(&Vocabulary::default());

        prop_assert_eq!(ingested.document.root(), Some(expected.as_str()));
        prop_assert_eq!(ingested.roots(), vec![expected]);
    }

    #[test]
    fn document_encodes_every_triple(records in proptest::collection::vec(arb_record(), 0..20)) {
        let ingested = Pipeline::default().ingest(&records).unwrap();
        prop_assert_eq!(ingested.document.triple_count(), ingested.graph.triple_count());

        let text = serde_json::to_string(&ingested.document).unwrap();
        let reparsed = JsonLd::from_str(&text).unwrap();
        prop_assert_eq!(reparsed.triple_count(), ingested.graph.triple_count());
        for triple in ingested.graph.triples() {
            prop_assert!(reparsed.contains(triple));
        }
    }

    #[test]
    fn rerun_is_byte_identical(records in proptest::collection::vec(arb_record(), 0..10)) {
        let first = Pipeline::default().ingest(&records).unwrap();
        let second = Pipeline::default().ingest(&records).unwrap();
        prop_assert_eq!(
            serde_json::to_string(&first.document).unwrap(),
            serde_json::to_string(&second.document).unwrap()
        );
    }
}
