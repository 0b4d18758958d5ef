use super::*;

#[test]
fn recipes_cover_all_three_kinds() {
    assert_eq!(
        background_recipe("white"),
        BackgroundRecipe::Solid { color: "#F8F9FA" }
    );
    assert_eq!(
        background_recipe("sunset"),
        BackgroundRecipe::Gradient {
            id: "sunset-gradient"
        }
    );
    assert!(matches!(
        background_recipe("space"),
        BackgroundRecipe::Scene {
            base: "#0D1B2A",
            elements: SceneElements::Stars
        }
    ));
}

#[test]
fn unknown_background_falls_back_to_white() {
    assert_eq!(
        background_recipe("volcano"),
        background_recipe(DEFAULT_BACKGROUND)
    );
}

#[test]
fn every_gradient_recipe_has_a_definition() {
    for (name, recipe) in BACKGROUNDS {
        if let BackgroundRecipe::Gradient { id } = recipe {
            assert!(gradient(id).is_some(), "{name} references undefined {id}");
        }
    }
    assert!(gradient("nope").is_none());
}

#[test]
fn recipe_serializes_with_type_tag() {
    let v = serde_json::to_value(background_recipe("space")).unwrap();
    assert_eq!(v["type"], "scene");
    assert_eq!(v["elements"], "stars");
}
