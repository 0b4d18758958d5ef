//! Felis turns a resolved genetic-trait record into a stylized cat portrait, as SVG.
//!
//! Composition is a pure function of its input:
//!
//! 1. **Resolve**: `TraitSet -> ResolvedTraits` (every category must be present)
//! 2. **Seed**: the first eight hex digits of the identity hash, or a fixed fallback
//! 3. **Compose**: shared defs, background, body and face fragments, in that order, inside one
//!    `<svg>` root sized `width × height` with a matching `viewBox`
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: identical input yields byte-identical markup.
//! - **Degrade, don't fail**: unknown trait values fall back to default table entries. The only
//!   error surfaced for well-formed input is a missing trait category.
//! - **No IO**: documents are returned as strings; writing them anywhere is up to the caller.
//!
//! ```no_run
//! use felis::{TraitCategory, TraitSet, generate};
//!
//! let traits = TraitSet::builder()
//!     .trait_value(TraitCategory::BodyColor, "golden")
//!     .trait_value(TraitCategory::Expression, "happy")
//!     .trait_value(TraitCategory::Accessory, "none")
//!     .trait_value(TraitCategory::Pattern, "solid")
//!     .trait_value(TraitCategory::Background, "space")
//!     .trait_value(TraitCategory::Special, "none")
//!     .identity_hash("deadbeef00112233")
//!     .build();
//!
//! let doc = generate(&traits, 400, 400)?;
//! assert!(doc.as_str().starts_with("<svg "));
//! # Ok::<(), felis::FelisError>(())
//! ```
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod compose;
mod foundation;
mod tables;
mod traits;

pub use compose::document::ImageDocument;
pub use compose::{
    BackgroundMode, ComposeOpts, generate, generate_default, generate_default_thumbnail,
    generate_thumbnail, generate_with,
};
pub use foundation::core::{Canvas, DEFAULT_SIZE, DEFAULT_THUMBNAIL_SIZE, Point, Vec2};
pub use foundation::error::{FelisError, FelisResult};
pub use tables::backgrounds::{
    BACKGROUNDS, BackgroundRecipe, DEFAULT_BACKGROUND, GRADIENTS, GradientDef, SceneElements,
    background_recipe,
};
pub use tables::palette::{BODY_COLORS, ColorPalette, DEFAULT_BODY_COLOR, body_palette};
pub use traits::category::TraitCategory;
pub use traits::identity::{FALLBACK_SEED, IdentityHash};
pub use traits::set::{ResolvedTraits, TraitSet, TraitSetBuilder};
