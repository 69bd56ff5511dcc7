use proptest::prelude::*;
use qualpoly_hir::Annotation;
use qualpoly_tainting::{QualifierParameterAnnotationConverter, TaintingAnnotationConverter};
use qualpoly_types::TaintingHierarchy;

use super::{multi, targeted, var};

fn target() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("Main"), Just("X"), Just("Y")]
}

fn binding() -> impl Strategy<Value = Annotation> {
    prop_oneof![
        target().prop_map(|t| targeted("Tainted", t)),
        target().prop_map(|t| targeted("Untainted", t)),
        target().prop_map(|t| targeted("Wild", t)),
        target().prop_map(|t| targeted("PolyTainting", t)),
        (target(), prop_oneof![Just("u"), Just("v")]).prop_map(|(t, v)| var(t, v)),
    ]
}

fn bindings_and_shuffled() -> impl Strategy<Value = (Vec<Annotation>, Vec<Annotation>)> {
    prop::collection::vec(binding(), 0..8)
        .prop_flat_map(|annos| (Just(annos.clone()), Just(annos).prop_shuffle()))
}

proptest! {
    #[test]
    fn conversion_ignores_binding_order((annos, shuffled) in bindings_and_shuffled()) {
        let converter = TaintingAnnotationConverter::new();
        prop_assert_eq!(
            converter.from_annotations(&annos).unwrap(),
            converter.from_annotations(&shuffled).unwrap()
        );
    }

    #[test]
    fn wrapping_in_an_aggregate_changes_nothing(annos in prop::collection::vec(binding(), 0..8)) {
        let converter = TaintingAnnotationConverter::new();
        let wrapped = [multi("Tainted", annos.clone())];
        prop_assert_eq!(
            converter.from_annotations(&annos).unwrap(),
            converter.from_annotations(&wrapped).unwrap()
        );
    }

    #[test]
    fn converted_ranges_are_well_formed(annos in prop::collection::vec(binding(), 1..8)) {
        let converted = TaintingAnnotationConverter::new()
            .from_annotations(&annos)
            .unwrap()
            .expect("at least one binding");
        for (name, wild) in converted.iter() {
            prop_assert!(wild.is_well_formed(&TaintingHierarchy), "{} = {}", name, wild);
        }
    }

    #[test]
    fn modifiers_only_touch_their_bound(
        annos in prop::collection::vec(binding(), 1..6),
        modifier in prop_oneof![Just("Extends"), Just("Super")],
    ) {
        let converter = TaintingAnnotationConverter::new();
        let base = converter.from_annotations(&annos).unwrap().expect("at least one binding");
        let (name, before) = base.iter().next().map(|(n, w)| (n.to_owned(), w.clone())).unwrap();

        let mut modified = annos.clone();
        modified.insert(0, targeted(modifier, &name));
        let after = converter.from_annotations(&modified).unwrap().expect("at least one binding");
        let after = after.get(&name).unwrap();

        if modifier == "Extends" {
            prop_assert_eq!(after.upper_bound(), before.upper_bound());
        } else {
            prop_assert_eq!(after.lower_bound(), before.lower_bound());
        }
    }
}
