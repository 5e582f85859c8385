mod common;

use common::IndexVec;
use proptest::prelude::*;

use patchkit::{PatchNode, PatchedContent};

type Content = PatchedContent<IndexVec>;
type Node = PatchNode<IndexVec>;

fn root_strategy() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(-100i64..100, 0..8)
}

/// Non-test operations only; test rollback intentionally breaks the fold
/// split property checked below.
fn mutating_op_strategy() -> impl Strategy<Value = Node> {
    let payload = prop::collection::vec(-100i64..100, 0..4);
    prop_oneof![
        (0usize..10, payload.clone()).prop_map(|(a, v)| Node::add_value(a, v)),
        (0usize..10).prop_map(|a| Node::remove(a)),
        (0usize..10, payload).prop_map(|(a, v)| Node::replace_value(a, v)),
        (0usize..10, 0usize..10).prop_map(|(f, t)| Node::copy(f, t)),
        (0usize..10, 0usize..10).prop_map(|(f, t)| Node::move_content(f, t)),
    ]
}

fn op_strategy() -> impl Strategy<Value = Node> {
    let expected = prop::collection::vec(-100i64..100, 0..3);
    prop_oneof![
        4 => mutating_op_strategy(),
        1 => (expected, 0usize..10).prop_map(|(e, a)| Node::test(e, a)),
    ]
}

proptest! {
    #[test]
    fn empty_patch_list_is_identity(root in root_strategy()) {
        let pc = Content::root(root.clone());
        prop_assert_eq!(pc.reduced().unwrap(), root);
    }

    #[test]
    fn reduce_is_deterministic(
        root in root_strategy(),
        ops in prop::collection::vec(op_strategy(), 0..12),
    ) {
        let pc = Content::new(root, ops);
        prop_assert_eq!(pc.reduced().unwrap(), pc.reduced().unwrap());
    }

    #[test]
    fn reduce_is_a_left_fold(
        root in root_strategy(),
        ops in prop::collection::vec(mutating_op_strategy(), 0..12),
        split in 0usize..12,
    ) {
        // Reducing the whole list equals reducing a prefix, then reducing
        // the suffix over the prefix's result.
        let split = split.min(ops.len());
        let (head, tail) = ops.split_at(split);

        let whole = Content::new(root.clone(), ops.clone()).reduced().unwrap();
        let mid = Content::new(root, head.to_vec()).reduced().unwrap();
        let staged = Content::new(mid, tail.to_vec()).reduced().unwrap();
        prop_assert_eq!(whole, staged);
    }

    #[test]
    fn single_op_fold_step(
        root in root_strategy(),
        first in mutating_op_strategy(),
        second in mutating_op_strategy(),
    ) {
        // [op1, op2] == op2 applied to the result of op1 alone.
        let both = Content::new(root.clone(), vec![first.clone(), second.clone()])
            .reduced()
            .unwrap();
        let after_first = Content::new(root, vec![first]).reduced().unwrap();
        let stepped = Content::new(after_first, vec![second]).reduced().unwrap();
        prop_assert_eq!(both, stepped);
    }

    #[test]
    fn passing_tests_only_lists_are_identity(
        root in root_strategy(),
        addresses in prop::collection::vec(0usize..8, 0..6),
    ) {
        // A test with empty expected content passes at any in-range address;
        // clamp to the root length so every test passes.
        let ops: Vec<Node> = addresses
            .iter()
            .map(|a| Node::test(Vec::new(), (*a).min(root.len())))
            .collect();
        let pc = Content::new(root.clone(), ops);
        prop_assert_eq!(pc.reduced().unwrap(), root.clone());
        prop_assert_eq!(pc.reduced().unwrap(), root);
    }

    #[test]
    fn pure_and_in_place_modes_agree(
        root in root_strategy(),
        ops in prop::collection::vec(op_strategy(), 0..12),
    ) {
        let pure = Content::new(root.clone(), ops.clone()).reduced().unwrap();
        let mut mutating = Content::new(root, ops);
        mutating.reduce_in_place().unwrap();
        prop_assert_eq!(pure, mutating.content);
    }
}
