use crate::foundation::error::{FelisError, FelisResult};

pub use kurbo::{Point, Vec2};

/// Default edge length of a full portrait, in pixels.
pub const DEFAULT_SIZE: u32 = 400;
/// Default edge length of a thumbnail, in pixels.
pub const DEFAULT_THUMBNAIL_SIZE: u32 = 100;

/// Pixel dimensions of a composed document.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels (> 0).
    pub width: u32,
    /// Height in pixels (> 0).
    pub height: u32,
}

impl Canvas {
    /// Build a canvas, rejecting zero-sized dimensions.
    pub fn new(width: u32, height: u32) -> FelisResult<Self> {
        if width == 0 || height == 0 {
            return Err(FelisError::validation(format!(
                "canvas dimensions must be > 0 (got {width}x{height})"
            )));
        }
        Ok(Self { width, height })
    }

    /// Square canvas of `size × size`.
    pub fn square(size: u32) -> FelisResult<Self> {
        Self::new(size, size)
    }

    /// Anchor point of the portrait. Uses integer halving so odd sizes land on a whole pixel.
    pub fn center(self) -> Point {
        Point::new(f64::from(self.width / 2), f64::from(self.height / 2))
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            width: DEFAULT_SIZE,
            height: DEFAULT_SIZE,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
