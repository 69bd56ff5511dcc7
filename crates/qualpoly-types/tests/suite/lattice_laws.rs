use proptest::prelude::*;
use qualpoly_types::{
    CombiningOperation, Lub, PolyQual, QualifierHierarchy, Tainting, TaintingHierarchy, Wildcard,
};

fn tainting() -> impl Strategy<Value = Tainting> {
    prop_oneof![Just(Tainting::Untainted), Just(Tainting::Tainted)]
}

fn poly_qual() -> impl Strategy<Value = PolyQual<Tainting>> {
    prop_oneof![
        tainting().prop_map(PolyQual::Ground),
        ("[uvw]", tainting())
            .prop_map(|(name, upper)| PolyQual::var(name, Tainting::Untainted, upper)),
    ]
}

/// Variables that range over the whole lattice.
fn free_var() -> impl Strategy<Value = PolyQual<Tainting>> {
    "[uvw]".prop_map(|name| PolyQual::var(name, Tainting::Untainted, Tainting::Tainted))
}

fn wildcard() -> impl Strategy<Value = Wildcard<Tainting>> {
    (poly_qual(), poly_qual()).prop_map(|(lower, upper)| Wildcard::new(lower, upper))
}

proptest! {
    #[test]
    fn ground_lub_is_a_join(a in tainting(), b in tainting(), c in tainting()) {
        let h = TaintingHierarchy;
        prop_assert_eq!(h.lub(&a, &b), h.lub(&b, &a));
        prop_assert_eq!(h.lub(&a, &a), a);
        prop_assert_eq!(h.lub(&h.lub(&a, &b), &c), h.lub(&a, &h.lub(&b, &c)));
        prop_assert!(h.is_subtype(&a, &h.lub(&a, &b)));
    }

    #[test]
    fn lifted_lub_is_commutative(a in poly_qual(), b in poly_qual()) {
        let lub = Lub::new(TaintingHierarchy);
        prop_assert_eq!(lub.combine(&a, &b), lub.combine(&b, &a));
    }

    #[test]
    fn lifted_lub_is_associative(a in poly_qual(), b in poly_qual(), c in poly_qual()) {
        let lub = Lub::new(TaintingHierarchy);
        let left = lub.combine(&lub.combine(&a, &b), &c);
        let right = lub.combine(&a, &lub.combine(&b, &c));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn lifted_lub_is_idempotent(a in poly_qual()) {
        let lub = Lub::new(TaintingHierarchy);
        prop_assert_eq!(lub.combine(&a, &a), a);
    }

    #[test]
    fn ground_bottom_is_an_identity(
        a in prop_oneof![tainting().prop_map(PolyQual::Ground), free_var()],
    ) {
        let lub = Lub::new(TaintingHierarchy);
        let bottom = PolyQual::Ground(TaintingHierarchy.bottom());
        prop_assert_eq!(lub.combine(&bottom, &a), a.clone());
        prop_assert_eq!(lub.combine(&a, &bottom), a);
    }

    #[test]
    fn ground_top_absorbs_everything(a in poly_qual()) {
        let lub = Lub::new(TaintingHierarchy);
        let top = PolyQual::Ground(TaintingHierarchy.top());
        prop_assert_eq!(lub.combine(&top, &a), top.clone());
        prop_assert_eq!(lub.combine(&a, &top), top);
    }

    #[test]
    fn wildcard_combination_is_commutative(a in wildcard(), b in wildcard()) {
        let lub = Lub::new(TaintingHierarchy);
        prop_assert_eq!(a.combine_with(&b, &lub, &lub), b.combine_with(&a, &lub, &lub));
    }
}
