#![cfg(test)]

// Property tests for Keyset kept inside the crate so they can reach the
// container without going through the transforms.

use crate::keyset::Keyset;
use proptest::prelude::*;
use std::collections::HashSet;

// Pool-indexed operations to improve shrinking: indices shrink to earlier
// values, pool length shrinks, and op lists shrink in length.
#[derive(Clone, Debug)]
enum OpI {
    Insert(usize),
    Contains(String),
    IndexOf(usize),
    Iterate,
    Clear,
}

fn arb_scenario() -> impl Strategy<Value = (Vec<String>, Vec<OpI>)> {
    proptest::collection::vec("[a-z]{0,3}", 1..=8).prop_flat_map(|pool| {
        let idxs: Vec<usize> = (0..pool.len()).collect();
        let idx = proptest::sample::select(idxs);
        let contains_pool = proptest::sample::select(pool.clone());
        let op = prop_oneof![
            8 => idx.clone().prop_map(OpI::Insert),
            2 => prop_oneof![
                contains_pool.prop_map(|s: String| s),
                "[a-z]{0,3}".prop_map(|s| s)
            ]
            .prop_map(OpI::Contains),
            2 => idx.clone().prop_map(OpI::IndexOf),
            1 => Just(OpI::Iterate),
            1 => Just(OpI::Clear),
        ];
        proptest::collection::vec(op, 1..80).prop_map(move |ops| (pool.clone(), ops))
    })
}

// Property: state-machine equivalence against an insertion-ordered model
// (`Vec` for order, `HashSet` for membership).
// - `insert` returns true exactly when the model did not hold the value.
// - `contains`/`get_index_of` agree with the model; positions never move.
// - `iter` yields the model order exactly.
// - `len`/`is_empty` parity after each op.
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine((pool, ops) in arb_scenario()) {
        let mut sut: Keyset<String> = Keyset::new();
        let mut order: Vec<String> = Vec::new();
        let mut members: HashSet<String> = HashSet::new();

        for op in ops {
            match op {
                OpI::Insert(i) => {
                    let v = pool[i].clone();
                    let fresh = members.insert(v.clone());
                    if fresh {
                        order.push(v.clone());
                    }
                    prop_assert_eq!(sut.insert(v), fresh);
                }
                OpI::Contains(s) => {
                    prop_assert_eq!(sut.contains(s.as_str()), members.contains(&s));
                }
                OpI::IndexOf(i) => {
                    let v = &pool[i];
                    let expected = order.iter().position(|o| o == v);
                    prop_assert_eq!(sut.get_index_of(v.as_str()), expected);
                    if let Some(p) = expected {
                        prop_assert_eq!(sut.get_index(p), Some(v));
                    }
                }
                OpI::Iterate => {
                    let seen: Vec<&String> = sut.iter().collect();
                    let expected: Vec<&String> = order.iter().collect();
                    prop_assert_eq!(seen, expected);
                }
                OpI::Clear => {
                    sut.clear();
                    order.clear();
                    members.clear();
                }
            }

            prop_assert_eq!(sut.len(), order.len());
            prop_assert_eq!(sut.is_empty(), order.is_empty());
        }
    }
}

// Property: collecting any integer sequence keeps first occurrences in order.
proptest! {
    #[test]
    fn prop_collect_keeps_first_occurrence(values in proptest::collection::vec(-20i64..20, 0..200)) {
        let k: Keyset<i64> = values.iter().copied().collect();
        let mut seen = HashSet::new();
        let expected: Vec<i64> = values.into_iter().filter(|v| seen.insert(*v)).collect();
        prop_assert_eq!(k.into_vec(), expected);
    }
}
