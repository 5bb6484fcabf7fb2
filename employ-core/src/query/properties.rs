use std::cmp::Ordering;

use employ_model::UserRecord;
use proptest::prelude::*;

use super::{SortKey, compare_records, derive_view, matches_search};

fn arb_name() -> impl Strategy<Value = String> {
    "[a-cA-C]{0,4}"
}

fn arb_records() -> impl Strategy<Value = Vec<UserRecord>> {
    prop::collection::vec((arb_name(), arb_name(), arb_name()), 0..12)
        .prop_map(|rows| {
            rows.into_iter()
                .enumerate()
                .map(|(i, (first, last, email))| {
                    UserRecord::new(i as u64 + 1, first, last, email)
                })
                .collect()
        })
}

fn arb_sort() -> impl Strategy<Value = Option<SortKey>> {
    prop_oneof![
        Just(None),
        (0..SortKey::ALL.len()).prop_map(|i| Some(SortKey::ALL[i])),
    ]
}

fn contains_term(record: &UserRecord, term: &str) -> bool {
    let term = term.to_lowercase();
    record.first_name.to_lowercase().contains(&term)
        || record.last_name.to_lowercase().contains(&term)
        || record.email.to_lowercase().contains(&term)
}

proptest! {
    #[test]
    fn filter_is_sound_and_complete(
        records in arb_records(),
        term in "[a-cA-C]{0,2}",
        sort in arb_sort(),
    ) {
        let view = derive_view(&records, &term, sort);

        for record in &view {
            prop_assert!(contains_term(record, &term));
        }
        let kept = records.iter().filter(|r| contains_term(r, &term)).count();
        prop_assert_eq!(view.len(), kept);
        for record in &records {
            prop_assert_eq!(
                matches_search(record, &term),
                view.iter().any(|v| v.id == record.id)
            );
        }
    }

    #[test]
    fn sorted_view_is_ordered_and_stable(
        records in arb_records(),
        index in 0..SortKey::ALL.len(),
    ) {
        let key = SortKey::ALL[index];
        let view = derive_view(&records, "", Some(key));

        for pair in view.windows(2) {
            let ord = compare_records(&pair[0], &pair[1], key);
            prop_assert_ne!(ord, Ordering::Greater);
            // Ids follow server order, so ties must keep ascending ids.
            if ord == Ordering::Equal {
                prop_assert!(pair[0].id < pair[1].id);
            }
        }
    }

    #[test]
    fn empty_term_without_sort_is_identity(records in arb_records()) {
        prop_assert_eq!(derive_view(&records, "", None), records);
    }
}
