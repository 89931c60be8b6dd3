use dupediff::compare::{diff, FileGroup, GroupCollection};
use proptest::prelude::*;

fn arb_group() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-z0-9/._-]{1,16}", 1..5)
}

fn arb_groups() -> impl Strategy<Value = Vec<Vec<String>>> {
    prop::collection::vec(arb_group(), 0..12)
}

fn collection(groups: Vec<Vec<String>>) -> GroupCollection {
    GroupCollection::canonicalize(groups.into_iter().map(FileGroup::new).collect())
}

proptest! {
    #[test]
    fn test_canonicalization_idempotent(groups in arb_groups()) {
        let once = collection(groups);
        let twice = GroupCollection::canonicalize(once.groups().to_vec());

        prop_assert_eq!(once, twice);
    }

    #[test]
    fn test_canonicalization_insensitive_to_group_order(
        (original, shuffled) in arb_groups()
            .prop_flat_map(|groups| (Just(groups.clone()), Just(groups).prop_shuffle()))
    ) {
        prop_assert_eq!(collection(original), collection(shuffled));
    }

    #[test]
    fn test_canonicalization_insensitive_to_path_order(groups in arb_groups()) {
        let reversed: Vec<Vec<String>> = groups
            .iter()
            .map(|paths| paths.iter().rev().cloned().collect())
            .collect();

        prop_assert_eq!(collection(groups), collection(reversed));
    }

    #[test]
    fn test_diff_reflexive(groups in arb_groups()) {
        let c = collection(groups);
        let report = diff(&c, &c);

        prop_assert!(report.is_match());
        prop_assert_eq!(report.candidate_total, report.reference_total);
    }

    #[test]
    fn test_diff_symmetric(a in arb_groups(), b in arb_groups()) {
        let (ca, cb) = (collection(a), collection(b));
        let forward = diff(&ca, &cb);
        let backward = diff(&cb, &ca);

        prop_assert_eq!(forward.only_in_candidate, backward.only_in_reference);
        prop_assert_eq!(forward.only_in_reference, backward.only_in_candidate);
        prop_assert_eq!(forward.candidate_total, backward.reference_total);
        prop_assert_eq!(forward.reference_total, backward.candidate_total);
    }

    #[test]
    fn test_match_is_exactly_structural_equality(a in arb_groups(), b in arb_groups()) {
        // Canonical collections are totally ordered sequences, so multiset
        // equality coincides with structural equality.
        let (ca, cb) = (collection(a), collection(b));

        prop_assert_eq!(diff(&ca, &cb).is_match(), ca == cb);
    }

    #[test]
    fn test_extra_copies_are_reported_with_multiplicity(
        group in arb_group(),
        extra in 1usize..4,
    ) {
        let a = collection(vec![group.clone(); 1 + extra]);
        let b = collection(vec![group]);
        let report = diff(&a, &b);

        prop_assert_eq!(report.only_in_candidate.len(), extra);
        prop_assert!(report.only_in_reference.is_empty());
    }

    #[test]
    fn test_unmatched_counts_bound_totals(a in arb_groups(), b in arb_groups()) {
        let (ca, cb) = (collection(a), collection(b));
        let report = diff(&ca, &cb);

        prop_assert!(report.only_in_candidate.len() <= report.candidate_total);
        prop_assert!(report.only_in_reference.len() <= report.reference_total);
        // The matched counts on both sides agree.
        prop_assert_eq!(
            report.candidate_total - report.only_in_candidate.len(),
            report.reference_total - report.only_in_reference.len()
        );
    }
}
