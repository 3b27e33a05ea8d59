use kgvec_core::IVectorStore;
use kgvec_vectors::math::cosine_similarity;
use kgvec_vectors::InMemoryVectorStore;
use proptest::prelude::*;

fn vectors(dims: usize, rows: usize) -> impl Strategy<Value = Vec<Vec<f32>>> {
    prop::collection::vec(prop::collection::vec(-10.0f32..10.0, dims), 2..rows)
}

fn store_of(rows: &[Vec<f32>]) -> InMemoryVectorStore {
    InMemoryVectorStore::from_pairs(
        rows.iter()
            .enumerate()
            .map(|(i, v)| (format!("k{i}"), v.clone())),
    )
    .unwrap()
}

proptest! {
    #[test]
    fn cosine_is_symmetric(a in prop::collection::vec(-5.0f32..5.0, 8), b in prop::collection::vec(-5.0f32..5.0, 8)) {
        let ab = cosine_similarity(&a, &b);
        let ba = cosine_similarity(&b, &a);
        prop_assert!((ab - ba).abs() < 1e-12);
    }

    #[test]
    fn cosine_is_bounded(a in prop::collection::vec(-5.0f32..5.0, 8), b in prop::collection::vec(-5.0f32..5.0, 8)) {
        let sim = cosine_similarity(&a, &b);
        prop_assert!((-1.0 - 1e-9..=1.0 + 1e-9).contains(&sim));
    }

    #[test]
    fn self_similarity_is_one(v in prop::collection::vec(0.5f32..5.0, 4)) {
        let store = store_of(&[v, vec![1.0, 0.0, 0.0, 0.0]]);
        let sim = store.similarity("k0", "k0").unwrap();
        prop_assert!((sim - 1.0).abs() < 1e-6);
    }

    #[test]
    fn neighbours_are_bounded_and_sorted(rows in vectors(4, 24), top_n in 0usize..30) {
        let store = store_of(&rows);
        let result = store.nearest_neighbors("k0", top_n);
        prop_assert!(result.len() <= top_n);
        prop_assert!(result.len() <= store.len() - 1);
        prop_assert!(result.iter().all(|c| c.concept != "k0"));
        for pair in result.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
        }
    }
}
