use std::collections::BTreeSet;
use std::sync::Arc;

use kgvec_core::constants::VALID_POS_TAGS;
use kgvec_core::{IVectorStore, SourceConfig};
use kgvec_linker::pos::normalize_hint;
use kgvec_linker::{KeyNormalizer, Linker, RedirectTable};
use kgvec_vectors::InMemoryVectorStore;
use proptest::prelude::*;

fn store_from(keys: &BTreeSet<String>) -> Arc<InMemoryVectorStore> {
    let pairs = keys
        .iter()
        .enumerate()
        .map(|(i, k)| (k.clone(), vec![1.0 + i as f32, 1.0]));
    Arc::new(InMemoryVectorStore::from_pairs(pairs).unwrap())
}

proptest! {
    #[test]
    fn normalization_is_deterministic(s in ".{0,48}") {
        for source in [SourceConfig::wordnet(), SourceConfig::dbpedia(), SourceConfig::babelnet(), SourceConfig::alod()] {
            let normalizer = KeyNormalizer::new(&source.rules).unwrap();
            prop_assert_eq!(normalizer.normalize(&s), normalizer.normalize(&s));
        }
    }

    #[test]
    fn dbpedia_keys_have_no_separators(s in "[A-Za-z '.-]{0,32}") {
        let normalizer = KeyNormalizer::new(&SourceConfig::dbpedia().rules).unwrap();
        let key = normalizer.normalize(&s);
        prop_assert!(!key.contains(' '));
        prop_assert!(!key.contains('\''));
        prop_assert!(!key.contains('-'));
        prop_assert!(!key.contains('.'));
    }

    #[test]
    fn hints_always_map_to_valid_tags(h in ".{0,4}") {
        prop_assert!(VALID_POS_TAGS.contains(&normalize_hint(Some(&h))));
    }

    #[test]
    fn store_keys_resolve_to_themselves(keys in prop::collection::btree_set("[A-Za-z0-9_]{1,12}", 1..20)) {
        let store = store_from(&keys);
        let (linker, stats) = Linker::from_source(
            SourceConfig::dbnary(),
            store.clone(),
            Arc::new(RedirectTable::empty()),
            None,
        ).unwrap();
        prop_assert_eq!(stats.indexed, keys.len());
        for key in &keys {
            let resolution = linker.resolve(key, None);
            prop_assert_eq!(resolution.map(|r| r.key), Some(key.clone()));
        }
    }

    #[test]
    fn resolved_keys_are_in_store(
        keys in prop::collection::btree_set("[a-zA-Z]{1,8}", 1..16),
        surface in "[a-zA-Z ]{0,10}",
    ) {
        let store = store_from(&keys);
        let (linker, _) = Linker::from_source(
            SourceConfig::dbpedia(),
            store.clone(),
            Arc::new(RedirectTable::empty()),
            None,
        ).unwrap();
        if let Some(resolution) = linker.resolve(&surface, None) {
            prop_assert!(store.contains(&resolution.key));
        }
        for sense in linker.resolve_senses(&surface, None) {
            prop_assert!(store.contains(&sense));
        }
    }
}
