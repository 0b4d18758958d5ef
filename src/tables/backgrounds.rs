/// Decorative element set drawn over a scene background.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SceneElements {
    /// Scattered seeded star dots.
    Stars,
}

/// How a named background is drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BackgroundRecipe {
    /// Flat fill.
    Solid {
        /// Fill colour.
        color: &'static str,
    },
    /// Fill with a gradient from [`GRADIENTS`].
    Gradient {
        /// Gradient element id.
        id: &'static str,
    },
    /// Base fill plus decorative elements.
    Scene {
        /// Base fill colour.
        base: &'static str,
        /// Decoration drawn on top.
        elements: SceneElements,
    },
}

/// Vertical two-stop linear gradient.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GradientDef {
    /// Element id referenced as `url(#id)`.
    pub id: &'static str,
    /// Colour at the top edge.
    pub top: &'static str,
    /// Colour at the bottom edge.
    pub bottom: &'static str,
}

/// Background name used when a lookup misses.
pub const DEFAULT_BACKGROUND: &str = "white";

/// Id of the gradient every document defines.
pub const SKY_GRADIENT_ID: &str = "sky-gradient";

const WHITE: BackgroundRecipe = BackgroundRecipe::Solid { color: "#F8F9FA" };

/// Known backgrounds, by trait value.
pub static BACKGROUNDS: [(&str, BackgroundRecipe); 5] = [
    (DEFAULT_BACKGROUND, WHITE),
    ("blue_sky", BackgroundRecipe::Gradient { id: SKY_GRADIENT_ID }),
    ("green_grass", BackgroundRecipe::Gradient { id: "grass-gradient" }),
    ("sunset", BackgroundRecipe::Gradient { id: "sunset-gradient" }),
    (
        "space",
        BackgroundRecipe::Scene {
            base: "#0D1B2A",
            elements: SceneElements::Stars,
        },
    ),
];

/// Gradients a background recipe may reference.
pub static GRADIENTS: [GradientDef; 3] = [
    GradientDef {
        id: SKY_GRADIENT_ID,
        top: "#87CEEB",
        bottom: "#E0F4FF",
    },
    GradientDef {
        id: "grass-gradient",
        top: "#B7F0A1",
        bottom: "#3C9D2F",
    },
    GradientDef {
        id: "sunset-gradient",
        top: "#FF7E5F",
        bottom: "#FEB47B",
    },
];

/// Recipe for `name`, or the plain white recipe when the name is unknown.
pub fn background_recipe(name: &str) -> BackgroundRecipe {
    match BACKGROUNDS.iter().find(|(key, _)| *key == name) {
        Some((_, r)) => *r,
        None => {
            tracing::debug!(
                background = name,
                fallback = DEFAULT_BACKGROUND,
                "unknown background"
            );
            WHITE
        }
    }
}

/// Gradient definition by element id.
pub fn gradient(id: &str) -> Option<&'static GradientDef> {
    GRADIENTS.iter().find(|g| g.id == id)
}

#[cfg(test)]
#[path = "../../tests/unit/tables/backgrounds.rs"]
mod tests;
