use crate::PrefixIndex;
use proptest::prelude::*;
use std::collections::BTreeMap;

fn key_value_pairs(
    min_pairs: usize,
    max_pairs: usize,
) -> impl Strategy<Value = Vec<(String, i32)>> {
    proptest::collection::vec(
        (
            "[a-cA-C0-9-]{0,8}".prop_map(String::from),
            proptest::num::i32::ANY,
        ),
        min_pairs..max_pairs,
    )
}

fn binary_key_value_pairs(
    min_pairs: usize,
    max_pairs: usize,
) -> impl Strategy<Value = Vec<(Vec<u8>, i32)>> {
    proptest::collection::vec(
        (
            proptest::collection::vec(any::<u8>(), 0..12),
            proptest::num::i32::ANY,
        ),
        min_pairs..max_pairs,
    )
}

fn build(pairs: &[(String, i32)]) -> (PrefixIndex<i32>, BTreeMap<String, i32>) {
    let mut index = PrefixIndex::new();
    let mut reference = BTreeMap::new();
    for (key, value) in pairs {
        index.insert(key, *value);
        reference.insert(key.clone(), *value);
    }
    (index, reference)
}

proptest! {
    #[test]
    fn inserted_keys_are_found(pairs in key_value_pairs(0, 60)) {
        let (index, reference) = build(&pairs);

        for (key, expected) in &reference {
            prop_assert_eq!(index.get(key), Some(expected));
        }
        prop_assert_eq!(index.len(), reference.len());
    }

    #[test]
    fn missing_keys_are_not_found(
        pairs in key_value_pairs(0, 60),
        probes in proptest::collection::vec("[a-cA-C0-9-]{0,9}", 0..30)
    ) {
        let (index, reference) = build(&pairs);

        for probe in &probes {
            prop_assert_eq!(index.get(probe), reference.get(probe));
            prop_assert_eq!(index.contains_key(probe), reference.contains_key(probe));
        }
    }

    #[test]
    fn prefix_iter_matches_reference_exactly(
        pairs in key_value_pairs(0, 60),
        prefix in "[a-cA-C0-9-]{0,3}"
    ) {
        let (index, reference) = build(&pairs);

        let got: Vec<(Vec<u8>, i32)> = index
            .prefix_iter(&prefix)
            .map(|(k, v)| (k, *v))
            .collect();
        let expected: Vec<(Vec<u8>, i32)> = reference
            .iter()
            .filter(|(k, _)| k.starts_with(prefix.as_str()))
            .map(|(k, v)| (k.clone().into_bytes(), *v))
            .collect();

        prop_assert_eq!(got, expected);
    }

    #[test]
    fn prefix_results_strictly_sorted(
        pairs in binary_key_value_pairs(0, 60),
        prefix in proptest::collection::vec(any::<u8>(), 0..2)
    ) {
        let mut index = PrefixIndex::new();
        for (key, value) in &pairs {
            index.insert(key, *value);
        }

        let keys: Vec<Vec<u8>> = index.prefix_keys(&prefix).collect();
        for window in keys.windows(2) {
            prop_assert!(window[0] < window[1]);
        }
        for key in &keys {
            prop_assert!(key.starts_with(&prefix));
            prop_assert!(index.contains_key(key));
        }
    }

    #[test]
    fn empty_prefix_yields_everything(pairs in binary_key_value_pairs(0, 60)) {
        let mut index = PrefixIndex::new();
        let mut reference = BTreeMap::new();
        for (key, value) in &pairs {
            index.insert(key, *value);
            reference.insert(key.clone(), *value);
        }

        let got: Vec<_> = index.iter().map(|(k, v)| (k, *v)).collect();
        let expected: Vec<_> = reference.into_iter().collect();
        prop_assert_eq!(got, expected);
    }

    #[test]
    fn reinserting_is_idempotent(pairs in key_value_pairs(1, 40)) {
        let (mut index, _) = build(&pairs);
        let snapshot = index.clone();
        let nodes = index.node_count();

        for (key, _) in &pairs {
            let current = *index.get(key).unwrap();
            index.insert(key, current);
        }

        prop_assert_eq!(&index, &snapshot);
        prop_assert_eq!(index.node_count(), nodes);
    }

    #[test]
    fn has_prefix_agrees_with_prefix_iter(
        pairs in key_value_pairs(0, 40),
        prefix in "[a-cA-C0-9-]{0,4}"
    ) {
        let (index, _) = build(&pairs);
        prop_assert_eq!(index.has_prefix(&prefix), index.prefix_iter(&prefix).next().is_some());
    }

    #[test]
    fn longest_prefix_matches_reference(
        pairs in key_value_pairs(0, 40),
        probe in "[a-cA-C0-9-]{0,10}"
    ) {
        let (index, reference) = build(&pairs);

        let expected = (0..=probe.len())
            .rev()
            .find_map(|len| reference.get(&probe[..len]).map(|v| (len, v)));
        prop_assert_eq!(index.longest_prefix(&probe), expected);
    }
}
