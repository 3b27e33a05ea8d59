use kgvec_core::models::{normalize_for_search, CacheKey, ServiceDescriptor};
use proptest::prelude::*;

proptest! {
    #[test]
    fn search_normalization_is_idempotent(s in ".{0,64}") {
        let once = normalize_for_search(&s);
        prop_assert_eq!(normalize_for_search(&once), once);
    }

    #[test]
    fn search_normalization_drops_separators(s in "[a-zA-Z0-9 _-]{0,32}") {
        let normalized = normalize_for_search(&s);
        prop_assert!(!normalized.contains('-'));
        prop_assert!(!normalized.contains('_'));
        prop_assert!(!normalized.contains(' '));
    }

    #[test]
    fn descriptor_matches_itself(d in "[A-Za-z]{1,12}", v in "[0-9-]{0,8}") {
        let desc = ServiceDescriptor::new(&d, &v, "rdf2vec", "v1");
        prop_assert!(desc.matches(&d.to_uppercase(), &v, "RDF2Vec", "V1"));
    }

    #[test]
    fn cache_keys_differ_by_top_n(k in "[a-z]{1,16}", a in 1usize..100, b in 1usize..100) {
        prop_assume!(a != b);
        prop_assert_ne!(CacheKey::new(k.clone(), a), CacheKey::new(k, b));
    }
}
