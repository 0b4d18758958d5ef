//! Portrait composition: trait set in, SVG document out.

pub(crate) mod background;
pub(crate) mod body;
pub(crate) mod defs;
pub(crate) mod document;
pub(crate) mod face;
pub(crate) mod markup;

use crate::compose::document::ImageDocument;
use crate::foundation::core::{Canvas, DEFAULT_THUMBNAIL_SIZE};
use crate::foundation::error::FelisResult;
use crate::traits::set::TraitSet;

const SVG_NS: &str = "http://www.w3.org/2000/svg";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
/// How the background trait is drawn.
pub enum BackgroundMode {
    /// One light full-canvas rectangle regardless of the background trait.
    #[default]
    Flat,
    /// Draw the background trait's recipe (solid, gradient or seeded scene).
    Recipe,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Composition options.
pub struct ComposeOpts {
    /// Background drawing mode.
    pub background: BackgroundMode,
}

#[tracing::instrument(skip(traits))]
/// Compose a portrait for `traits` on `canvas` with explicit options.
///
/// Fails when a trait category is missing or the canvas is empty; unknown trait values fall
/// back to defaults.
pub fn generate_with(
    traits: &TraitSet,
    canvas: Canvas,
    opts: &ComposeOpts,
) -> FelisResult<ImageDocument> {
    let resolved = traits.resolve()?;
    let canvas = Canvas::new(canvas.width, canvas.height)?;
    tracing::trace!(
        accessory = resolved.accessory,
        special = resolved.special,
        "traits without dedicated rendering"
    );

    let bg = background::background(resolved.background, canvas, resolved.seed, opts.background);
    let parts = [
        format!(
            r#"<svg width="{w}" height="{h}" viewBox="0 0 {w} {h}" xmlns="{SVG_NS}">"#,
            w = canvas.width,
            h = canvas.height
        ),
        defs::defs(bg.gradient),
        bg.markup,
        body::body(resolved.body_color, resolved.pattern, canvas, resolved.seed),
        face::face(resolved.expression, canvas),
        "</svg>".to_owned(),
    ];

    Ok(ImageDocument::new(parts.join("\n"), canvas))
}

/// Compose a `width × height` portrait with default options.
pub fn generate(traits: &TraitSet, width: u32, height: u32) -> FelisResult<ImageDocument> {
    // generate_with validates the canvas after resolving traits.
    let canvas = Canvas { width, height };
    generate_with(traits, canvas, &ComposeOpts::default())
}

/// Compose a portrait at the default 400×400 size.
pub fn generate_default(traits: &TraitSet) -> FelisResult<ImageDocument> {
    generate_with(traits, Canvas::default(), &ComposeOpts::default())
}

/// Square thumbnail; identical to `generate(traits, size, size)`.
pub fn generate_thumbnail(traits: &TraitSet, size: u32) -> FelisResult<ImageDocument> {
    generate(traits, size, size)
}

/// Thumbnail at the default 100×100 size.
pub fn generate_default_thumbnail(traits: &TraitSet) -> FelisResult<ImageDocument> {
    generate_thumbnail(traits, DEFAULT_THUMBNAIL_SIZE)
}
