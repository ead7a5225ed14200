use proptest::prelude::*;
use shapematch::{ARRAY_WILDCARD, ArrayMatcher, MatchError, Matcher, Value, ValueMatcher, leaf_chain};

fn scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::Int),
        (-1.0e6..1.0e6f64).prop_map(Value::Float),
        "[a-z]{0,8}".prop_map(Value::Text),
    ]
}

fn value() -> impl Strategy<Value = Value> {
    scalar().prop_recursive(4, 32, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::list),
            prop::collection::vec(("[a-z]{1,6}", inner), 0..6).prop_map(Value::map),
        ]
    })
}

fn container() -> impl Strategy<Value = Value> {
    prop_oneof![
        prop::collection::vec(value(), 0..6).prop_map(Value::list),
        prop::collection::vec(("[a-z]{1,6}", value()), 0..6).prop_map(Value::map),
    ]
}

proptest! {
    #[test]
    fn scalar_values_are_never_arrays(v in scalar(), p in value()) {
        let m = ArrayMatcher::new(leaf_chain());
        let is_not_a_container = matches!(
            m.match_value(&v, &p),
            Err(MatchError::NotAContainer { .. })
        );
        prop_assert!(is_not_a_container);
    }

    #[test]
    fn array_wildcard_accepts_every_container(v in container()) {
        let m = ArrayMatcher::new(leaf_chain());
        prop_assert_eq!(m.match_value(&v, &Value::from(ARRAY_WILDCARD)), Ok(()));
    }

    #[test]
    fn every_value_matches_itself(v in value()) {
        prop_assert_eq!(Matcher::new().match_values(&v, &v), Ok(()));
    }

    #[test]
    fn repeated_matches_agree(v in value(), p in value()) {
        let m = Matcher::new();
        let first = m.match_values(&v, &p);
        let _ = m.match_values(&p, &v);
        prop_assert_eq!(m.match_values(&v, &p), first);
    }

    #[test]
    fn equal_shaped_lists_match_iff_equal(
        (a, b) in (0usize..6).prop_flat_map(|n| (
            prop::collection::vec(0i64..3, n),
            prop::collection::vec(0i64..3, n),
        ))
    ) {
        let matched = Matcher::new().matches(&Value::list(a.clone()), &Value::list(b.clone()));
        prop_assert_eq!(matched, a == b);
    }
}
