use crate::compose::defs::shadow_ref;
use crate::compose::markup::{Element, join_lines, points};
use crate::foundation::core::{Canvas, Point, Vec2};
use crate::tables::palette::body_palette;

/// Fill shared by inner ears and nose.
pub(crate) const PINK_FILL: &str = "#FFB6C1";

const HEAD_RADII: (u32, u32) = (100, 90);
const WHISKER_ROWS: [f64; 3] = [10.0, 20.0, 30.0];

fn at(c: Point, dx: f64, dy: f64) -> Point {
    c + Vec2::new(dx, dy)
}

/// Ears, head and whiskers, anchored on the canvas centre.
///
/// `pattern` and `seed` do not alter the drawing yet; both are reserved for pattern overlays and
/// seeded placement.
pub(crate) fn body(color: &str, pattern: &str, canvas: Canvas, seed: u32) -> String {
    tracing::trace!(pattern, seed, "body pattern and seed are not rendered");

    let c = canvas.center();
    let palette = body_palette(color);
    let shadow = shadow_ref();
    let mut parts = Vec::with_capacity(11);

    // Outer ears, mirrored.
    for side in [-1.0, 1.0] {
        let ear = [
            at(c, side * 60.0, -80.0),
            at(c, side * 90.0, -140.0),
            at(c, side * 30.0, -100.0),
        ];
        parts.push(
            Element::new("polygon")
                .attr("points", points(&ear))
                .attr("fill", palette.main)
                .attr("filter", &shadow),
        );
    }

    for side in [-1.0, 1.0] {
        let inner = [
            at(c, side * 60.0, -85.0),
            at(c, side * 80.0, -125.0),
            at(c, side * 40.0, -100.0),
        ];
        parts.push(
            Element::new("polygon")
                .attr("points", points(&inner))
                .attr("fill", PINK_FILL),
        );
    }

    parts.push(
        Element::new("ellipse")
            .attr("cx", c.x)
            .attr("cy", c.y)
            .attr("rx", HEAD_RADII.0)
            .attr("ry", HEAD_RADII.1)
            .attr("fill", palette.main)
            .attr("filter", &shadow),
    );

    for dy in WHISKER_ROWS {
        for side in [-1.0, 1.0] {
            let from = at(c, side * 40.0, dy);
            let to = at(c, side * 120.0, dy - 10.0);
            parts.push(
                Element::new("line")
                    .attr("x1", from.x)
                    .attr("y1", from.y)
                    .attr("x2", to.x)
                    .attr("y2", to.y)
                    .attr("stroke", "#000")
                    .attr("stroke-width", 2)
                    .attr("opacity", 0.5),
            );
        }
    }

    join_lines(parts)
}

#[cfg(test)]
#[path = "../../tests/unit/compose/body.rs"]
mod tests;
