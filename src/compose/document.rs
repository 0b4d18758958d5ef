use std::fmt;

use anyhow::Context;

use crate::foundation::core::Canvas;
use crate::foundation::error::{FelisError, FelisResult};

/// A composed, self-contained SVG document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageDocument {
    markup: String,
    canvas: Canvas,
}

impl ImageDocument {
    pub(crate) fn new(markup: String, canvas: Canvas) -> Self {
        Self { markup, canvas }
    }

    /// SVG markup.
    pub fn as_str(&self) -> &str {
        &self.markup
    }

    /// Take ownership of the SVG markup.
    pub fn into_string(self) -> String {
        self.markup
    }

    /// Canvas the document was composed for.
    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Stable 64-bit digest of the markup.
    pub fn fingerprint(&self) -> u64 {
        xxhash_rust::xxh3::xxh3_64(self.markup.as_bytes())
    }

    /// Parse the markup with `usvg`, which rejects malformed documents and dangling references
    /// it cannot resolve.
    pub fn parse(&self) -> FelisResult<usvg::Tree> {
        let opts = usvg::Options::default();
        let tree = usvg::Tree::from_data(self.markup.as_bytes(), &opts)
            .context("parse composed svg")?;
        Ok(tree)
    }

    /// Rasterize into premultiplied RGBA8 pixels at `width × height`.
    pub fn rasterize_premul_rgba8(&self, width: u32, height: u32) -> FelisResult<Vec<u8>> {
        let tree = self.parse()?;
        let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
            .ok_or_else(|| FelisError::render("failed to allocate svg pixmap"))?;

        let sx = (width as f32) / tree.size().width();
        let sy = (height as f32) / tree.size().height();
        let xform = resvg::tiny_skia::Transform::from_scale(sx, sy);

        resvg::render(&tree, xform, &mut pixmap.as_mut());
        Ok(pixmap.data().to_vec())
    }
}

impl fmt::Display for ImageDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.markup)
    }
}

impl AsRef<str> for ImageDocument {
    fn as_ref(&self) -> &str {
        &self.markup
    }
}
