use super::*;
use crate::traits::identity::FALLBACK_SEED;

fn full() -> TraitSetBuilder {
    TraitSet::builder()
        .trait_value(TraitCategory::BodyColor, "golden")
        .trait_value(TraitCategory::Expression, "happy")
        .trait_value(TraitCategory::Accessory, "none")
        .trait_value(TraitCategory::Pattern, "solid")
        .trait_value(TraitCategory::Background, "space")
        .trait_value(TraitCategory::Special, "none")
}

#[test]
fn resolve_reads_every_category() {
    let set = full().identity_hash("0000000a").build();
    let r = set.resolve().unwrap();
    assert_eq!(r.body_color, "golden");
    assert_eq!(r.expression, "happy");
    assert_eq!(r.pattern, "solid");
    assert_eq!(r.background, "space");
    assert_eq!(r.seed, 10);
}

#[test]
fn resolve_names_the_missing_category() {
    let set = TraitSet::builder()
        .trait_value(TraitCategory::BodyColor, "gray")
        .trait_value(TraitCategory::Expression, "happy")
        .trait_value(TraitCategory::Accessory, "none")
        .trait_value(TraitCategory::Pattern, "solid")
        .trait_value(TraitCategory::Special, "none")
        .build();
    let err = set.resolve().unwrap_err();
    assert!(matches!(
        err,
        FelisError::MissingTrait(TraitCategory::Background)
    ));
}

#[test]
fn missing_hash_uses_fallback_seed() {
    let set = full().build();
    assert!(set.identity_hash().is_none());
    assert_eq!(set.seed(), FALLBACK_SEED);
}

#[test]
fn json_accepts_face_expression_alias() {
    let set = TraitSet::from_json_str(
        r#"{
            "traits": {
                "body_color": "tan",
                "face_expression": "sleepy",
                "accessory": "none",
                "pattern": "solid",
                "background": "white",
                "special": "none"
            }
        }"#,
    )
    .unwrap();
    assert_eq!(set.get(TraitCategory::Expression), Some("sleepy"));
    assert_eq!(set.seed(), FALLBACK_SEED);
}

#[test]
fn json_rejects_unknown_category() {
    let err = TraitSet::from_json_str(r#"{"traits": {"tail": "long"}}"#).unwrap_err();
    assert!(err.to_string().contains("validation error:"));
}

#[test]
fn first_missing_category_in_declaration_order_is_reported() {
    let set = TraitSet::builder()
        .trait_value(TraitCategory::BodyColor, "gray")
        .trait_value(TraitCategory::Accessory, "none")
        .trait_value(TraitCategory::Pattern, "solid")
        .trait_value(TraitCategory::Background, "white")
        .build();
    let err = set.resolve().unwrap_err();
    assert_eq!(err.missing_category(), Some(TraitCategory::Expression));
}

#[test]
fn every_listed_category_is_required() {
    for missing in TraitCategory::ALL {
        let mut b = TraitSet::builder();
        for c in TraitCategory::ALL.into_iter().filter(|c| *c != missing) {
            b = b.trait_value(c, "x");
        }
        let err = b.build().resolve().unwrap_err();
        assert_eq!(err.missing_category(), Some(missing));
    }
}
