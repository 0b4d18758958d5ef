use crate::compose::BackgroundMode;
use crate::compose::markup::{Element, join_lines};
use crate::foundation::core::Canvas;
use crate::foundation::math::Rng64;
use crate::tables::backgrounds::{
    BackgroundRecipe, GradientDef, SceneElements, background_recipe, gradient,
};

/// Fill of the flat backdrop drawn in [`BackgroundMode::Flat`].
pub(crate) const FLAT_FILL: &str = "#F0F8FF";

const STAR_COUNT: usize = 24;

/// Background markup plus the gradient it needs defined, if any.
pub(crate) struct BackgroundFragment {
    pub(crate) markup: String,
    pub(crate) gradient: Option<&'static GradientDef>,
}

pub(crate) fn background(
    name: &str,
    canvas: Canvas,
    seed: u32,
    mode: BackgroundMode,
) -> BackgroundFragment {
    match mode {
        BackgroundMode::Flat => BackgroundFragment {
            markup: full_rect(canvas, FLAT_FILL).to_string(),
            gradient: None,
        },
        BackgroundMode::Recipe => recipe(background_recipe(name), canvas, seed),
    }
}

fn recipe(recipe: BackgroundRecipe, canvas: Canvas, seed: u32) -> BackgroundFragment {
    match recipe {
        BackgroundRecipe::Solid { color } => BackgroundFragment {
            markup: full_rect(canvas, color).to_string(),
            gradient: None,
        },
        BackgroundRecipe::Gradient { id } => match gradient(id) {
            Some(g) => BackgroundFragment {
                markup: full_rect(canvas, format!("url(#{})", g.id)).to_string(),
                gradient: Some(g),
            },
            None => {
                tracing::debug!(gradient = id, "undefined gradient; drawing flat backdrop");
                BackgroundFragment {
                    markup: full_rect(canvas, FLAT_FILL).to_string(),
                    gradient: None,
                }
            }
        },
        BackgroundRecipe::Scene { base, elements } => {
            let mut lines = vec![full_rect(canvas, base).to_string()];
            match elements {
                SceneElements::Stars => lines.extend(stars(canvas, seed)),
            }
            BackgroundFragment {
                markup: join_lines(lines),
                gradient: None,
            }
        }
    }
}

fn full_rect(canvas: Canvas, fill: impl std::fmt::Display) -> Element {
    Element::new("rect")
        .attr("width", canvas.width)
        .attr("height", canvas.height)
        .attr("fill", fill)
}

fn stars(canvas: Canvas, seed: u32) -> impl Iterator<Item = String> {
    let mut rng = Rng64::new(u64::from(seed));
    (0..STAR_COUNT).map(move |_| {
        let cx = rng.next_below(canvas.width);
        let cy = rng.next_below(canvas.height);
        let r = 1 + rng.next_below(2);
        let opacity = 0.4 + 0.6 * rng.next_f64_01();
        Element::new("circle")
            .attr("cx", cx)
            .attr("cy", cy)
            .attr("r", r)
            .attr("fill", "#FFF")
            .attr("opacity", format!("{opacity:.2}"))
            .to_string()
    })
}

#[cfg(test)]
#[path = "../../tests/unit/compose/background.rs"]
mod tests;
