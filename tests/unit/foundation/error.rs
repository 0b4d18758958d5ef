use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        FelisError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(FelisError::render("x").to_string().contains("render error:"));
    assert_eq!(
        FelisError::MissingTrait(TraitCategory::Background).to_string(),
        "missing trait: background"
    );
}

#[test]
fn missing_category_only_for_missing_trait() {
    let err = FelisError::MissingTrait(TraitCategory::Pattern);
    assert_eq!(err.missing_category(), Some(TraitCategory::Pattern));
    assert_eq!(FelisError::validation("x").missing_category(), None);
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = FelisError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
