use std::sync::Arc;

use kgvec_core::SourceConfig;
use kgvec_linker::RedirectTable;
use kgvec_query::{build_engine, QueryEngine, UnboundedResultCache};
use kgvec_vectors::InMemoryVectorStore;
use proptest::prelude::*;

fn engine(rows: Vec<Vec<f32>>) -> QueryEngine {
    let store = InMemoryVectorStore::from_pairs(
        rows.into_iter().enumerate().map(|(i, v)| (format!("c{i}"), v)),
    )
    .unwrap();
    build_engine(
        "prop",
        Arc::new(store),
        SourceConfig::dbnary(),
        RedirectTable::empty(),
        None,
        Arc::new(UnboundedResultCache::new()),
    )
    .unwrap()
}

fn rows() -> impl Strategy<Value = Vec<Vec<f32>>> {
    prop::collection::vec(prop::collection::vec(0.1f32..10.0, 3), 2..24)
}

proptest! {
    #[test]
    fn closest_is_bounded_non_increasing_and_stable(rows in rows(), n in 0usize..30) {
        let engine = engine(rows);
        let first = engine.find_closest("c0", n);
        prop_assert!(first.len() <= n);
        for pair in first.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
        }
        let again = engine.find_closest("c0", n);
        prop_assert_eq!(&*first, &*again);
    }

    #[test]
    fn similarity_is_symmetric(rows in rows(), a in 0usize..24, b in 0usize..24) {
        let count = rows.len();
        let engine = engine(rows);
        let (a, b) = (format!("c{}", a % count), format!("c{}", b % count));
        let ab = engine.get_similarity(&a, &b, None, None).unwrap();
        let ba = engine.get_similarity(&b, &a, None, None).unwrap();
        prop_assert!((ab - ba).abs() < 1e-12);
    }
}
