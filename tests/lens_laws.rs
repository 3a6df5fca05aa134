//! Property-based tests for Lens laws.
//!
//! This module verifies that lenses, and lenses built by composition, satisfy:
//!
//! - **Get-Set Law**: `lens.get(&lens.set(source, value)) == &value`
//! - **Set-Get Law**: `lens.set(source.clone(), lens.get(&source).clone()) == source`
//! - **Set-Set Law**: `lens.set(lens.set(source, v1), v2) == lens.set(source, v2)`
//!
//! plus modify correctness and associativity of composition.

#![cfg(feature = "optics")]

use focal::lens;
use focal::optics::{FunctionLens, Lens, first, identity, second};
use proptest::prelude::*;

// =============================================================================
// Test Structures
// =============================================================================

#[derive(Clone, PartialEq, Debug)]
struct Leaf {
    text: String,
    weight: i32,
}

#[derive(Clone, PartialEq, Debug)]
struct Branch {
    leaf: Leaf,
    flag: bool,
}

#[derive(Clone, PartialEq, Debug)]
struct Root {
    branch: Branch,
    id: u64,
}

prop_compose! {
    fn arbitrary_root()(
        text in "[a-z ]{0,12}",
        weight in any::<i32>(),
        flag in any::<bool>(),
        id in any::<u64>()
    ) -> Root {
        Root { branch: Branch { leaf: Leaf { text, weight }, flag }, id }
    }
}

fn root_text_lens() -> impl Lens<Root, String> + Clone {
    lens!(Root, branch)
        .and_then(lens!(Branch, leaf))
        .and_then(lens!(Leaf, text))
}

// =============================================================================
// Single Lens Laws
// =============================================================================

proptest! {
    /// Get-Set Law for Leaf.weight
    #[test]
    fn prop_leaf_weight_get_set_law(text in ".*", weight in any::<i32>(), new_weight in any::<i32>()) {
        let weight_lens = lens!(Leaf, weight);
        let updated = weight_lens.set(Leaf { text, weight }, new_weight);
        prop_assert_eq!(*weight_lens.get(&updated), new_weight);
    }

    /// Set-Get Law for Leaf.weight
    #[test]
    fn prop_leaf_weight_set_get_law(text in ".*", weight in any::<i32>()) {
        let weight_lens = lens!(Leaf, weight);
        let leaf = Leaf { text, weight };
        let current = *weight_lens.get(&leaf);
        prop_assert_eq!(weight_lens.set(leaf.clone(), current), leaf);
    }

    /// Setting the same value twice equals setting it once
    #[test]
    fn prop_leaf_text_idempotent_set(text in ".*", weight in any::<i32>(), new_text in ".*") {
        let text_lens = lens!(Leaf, text);
        let leaf = Leaf { text, weight };
        let once = text_lens.set(leaf.clone(), new_text.clone());
        let twice = text_lens.set(once.clone(), new_text);
        prop_assert_eq!(twice, once);
    }

    /// Set-Set Law for Leaf.text
    #[test]
    fn prop_leaf_text_set_set_law(text in ".*", weight in any::<i32>(), text1 in ".*", text2 in ".*") {
        let text_lens = lens!(Leaf, text);
        let leaf = Leaf { text, weight };
        let left = text_lens.set(text_lens.set(leaf.clone(), text1), text2.clone());
        let right = text_lens.set(leaf, text2);
        prop_assert_eq!(left, right);
    }

    /// set leaves the caller's copy untouched
    #[test]
    fn prop_set_does_not_mutate_original(text in ".*", weight in any::<i32>(), new_weight in any::<i32>()) {
        let weight_lens = FunctionLens::new(
            |leaf: &Leaf| &leaf.weight,
            |leaf: Leaf, weight: i32| Leaf { weight, ..leaf },
        );
        let leaf = Leaf { text: text.clone(), weight };
        let _ = weight_lens.set(leaf.clone(), new_weight);
        prop_assert_eq!(*weight_lens.get(&leaf), weight);
        prop_assert_eq!(leaf.text, text);
    }
}

// =============================================================================
// Composed Lens Laws
// =============================================================================

proptest! {
    /// Get-Set Law for Root.branch.leaf.text
    #[test]
    fn prop_composed_get_set_law(root in arbitrary_root(), new_text in ".*") {
        let text_lens = root_text_lens();
        let updated = text_lens.set(root, new_text.clone());
        prop_assert_eq!(text_lens.get(&updated), &new_text);
    }

    /// Set-Get Law for Root.branch.leaf.text
    #[test]
    fn prop_composed_set_get_law(root in arbitrary_root()) {
        let text_lens = root_text_lens();
        let current = text_lens.get(&root).clone();
        prop_assert_eq!(text_lens.set(root.clone(), current), root);
    }

    /// Set-Set Law for Root.branch.leaf.text
    #[test]
    fn prop_composed_set_set_law(root in arbitrary_root(), text1 in ".*", text2 in ".*") {
        let text_lens = root_text_lens();
        let left = text_lens.set(text_lens.set(root.clone(), text1), text2.clone());
        let right = text_lens.set(root, text2);
        prop_assert_eq!(left, right);
    }

    /// A composed set only touches the path down to the focus
    #[test]
    fn prop_composed_set_keeps_siblings(root in arbitrary_root(), new_text in ".*") {
        let updated = root_text_lens().set(root.clone(), new_text);
        prop_assert_eq!(updated.id, root.id);
        prop_assert_eq!(updated.branch.flag, root.branch.flag);
        prop_assert_eq!(updated.branch.leaf.weight, root.branch.leaf.weight);
    }
}

// =============================================================================
// modify Tests
// =============================================================================

proptest! {
    /// modify equals set of the transformed get
    #[test]
    fn prop_modify_is_set_of_transformed_get(root in arbitrary_root(), suffix in "[a-z]{0,4}") {
        let text_lens = root_text_lens();
        let transform = |text: String| text + &suffix;

        let modified = text_lens.modify(root.clone(), transform);
        let manual = text_lens.set(root.clone(), transform(text_lens.get(&root).clone()));
        prop_assert_eq!(modified, manual);
    }

    /// modify with the identity function is a no-op
    #[test]
    fn prop_modify_identity_preserves_value(root in arbitrary_root()) {
        let result = root_text_lens().modify(root.clone(), |text| text);
        prop_assert_eq!(result, root);
    }

    /// modify(f) then modify(g) equals modify(g . f)
    #[test]
    fn prop_modify_fusion(text in ".*", weight in any::<i32>()) {
        let weight_lens = lens!(Leaf, weight);
        let leaf = Leaf { text, weight };

        let function1 = |n: i32| n.wrapping_add(1);
        let function2 = |n: i32| n.wrapping_mul(2);

        let left = weight_lens.modify(weight_lens.modify(leaf.clone(), function1), function2);
        let right = weight_lens.modify(leaf, |n| function2(function1(n)));
        prop_assert_eq!(left, right);
    }
}

// =============================================================================
// Associativity and Identity
// =============================================================================

proptest! {
    /// (l1 . l2) . l3 behaves like l1 . (l2 . l3)
    #[test]
    fn prop_and_then_associativity(root in arbitrary_root(), new_weight in any::<i32>()) {
        let left = lens!(Root, branch)
            .and_then(lens!(Branch, leaf))
            .and_then(lens!(Leaf, weight));
        let right = lens!(Root, branch)
            .and_then(lens!(Branch, leaf).and_then(lens!(Leaf, weight)));

        prop_assert_eq!(left.get(&root), right.get(&root));
        prop_assert_eq!(left.set(root.clone(), new_weight), right.set(root, new_weight));
    }

    /// identity is a unit on both sides of and_then
    #[test]
    fn prop_identity_is_unit(root in arbitrary_root(), new_text in ".*") {
        let plain = root_text_lens();
        let left_unit = identity::<Root>().and_then(root_text_lens());
        let right_unit = root_text_lens().and_then(identity::<String>());

        prop_assert_eq!(left_unit.get(&root), plain.get(&root));
        prop_assert_eq!(right_unit.get(&root), plain.get(&root));
        prop_assert_eq!(
            left_unit.set(root.clone(), new_text.clone()),
            plain.set(root.clone(), new_text.clone())
        );
        prop_assert_eq!(right_unit.set(root.clone(), new_text.clone()), plain.set(root, new_text));
    }

    /// Pair lenses satisfy Get-Set and keep the other component
    #[test]
    fn prop_pair_lenses(a in any::<i16>(), b in any::<i16>(), value in any::<i16>()) {
        let left = first::<i16, i16>();
        let right = second::<i16, i16>();

        prop_assert_eq!(left.set((a, b), value), (value, b));
        prop_assert_eq!(right.set((a, b), value), (a, value));
        prop_assert_eq!(*left.get(&left.set((a, b), value)), value);
    }
}
