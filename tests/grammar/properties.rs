//! Property tests for the grammar
//!
//! Names are generated from grammar-legal tokens and must survive
//! compose/decompose unchanged.

use proptest::prelude::*;
use stdnames_grammar::{compose, decompose, is_valid};

/// A lowercase word that is never the reserved `of`.
fn word() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9]{1,6}".prop_filter("`of` separates operators", |w| w != "of")
}

/// One or more words joined by `_`, `-` or `~`.
fn part() -> impl Strategy<Value = String> {
    (word(), prop::collection::vec(("[-~_]", word()), 0..3)).prop_map(|(first, rest)| {
        let mut part = first;
        for (sep, w) in rest {
            part.push_str(&sep);
            part.push_str(&w);
        }
        part
    })
}

proptest! {
    #[test]
    fn compose_decompose_round_trip(
        object in part(),
        quantity in part(),
        operators in prop::collection::vec(part(), 0..3),
    ) {
        let name = compose(&object, &quantity, &operators);
        prop_assert!(is_valid(&name), "{name} should be valid");

        let (o, q, ops) = decompose(&name).unwrap();
        prop_assert_eq!(o, object);
        prop_assert_eq!(q, quantity);
        prop_assert_eq!(ops, operators);
    }

    #[test]
    fn valid_iff_decomposable(s in "[a-zA-Z0-9_~-]{0,24}") {
        prop_assert_eq!(is_valid(&s), decompose(&s).is_ok());
    }

    #[test]
    fn valid_iff_decomposable_near_names(object in part(), quantity in part(), sep in "_{1,3}") {
        let s = format!("{object}{sep}{quantity}");
        prop_assert_eq!(is_valid(&s), decompose(&s).is_ok());
    }
}
