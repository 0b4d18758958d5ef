use crate::compose::body::PINK_FILL;
use crate::compose::markup::{Element, join_lines, points};
use crate::foundation::core::{Canvas, Point, Vec2};

const EYE_DX: f64 = 35.0;
const EYE_DY: f64 = -15.0;

fn at(c: Point, dx: f64, dy: f64) -> Point {
    c + Vec2::new(dx, dy)
}

fn ellipse(center: Point, rx: u32, ry: u32, fill: &str) -> Element {
    Element::new("ellipse")
        .attr("cx", center.x)
        .attr("cy", center.y)
        .attr("rx", rx)
        .attr("ry", ry)
        .attr("fill", fill)
}

/// Eyes with slit pupils, nose and a two-curve smile.
///
/// Every expression currently draws the same face.
pub(crate) fn face(expression: &str, canvas: Canvas) -> String {
    tracing::trace!(expression, "expression does not vary the face");

    let c = canvas.center();
    let eyes = [at(c, -EYE_DX, EYE_DY), at(c, EYE_DX, EYE_DY)];
    let mut parts = Vec::with_capacity(7);

    for eye in eyes {
        parts.push(ellipse(eye, 20, 25, "#FFF"));
    }
    for eye in eyes {
        parts.push(ellipse(eye, 5, 18, "#000"));
    }

    let nose = [at(c, -10.0, 25.0), at(c, 10.0, 25.0), at(c, 0.0, 35.0)];
    parts.push(
        Element::new("polygon")
            .attr("points", points(&nose))
            .attr("fill", PINK_FILL),
    );

    for side in [-1.0, 1.0] {
        let start = at(c, side * 10.0, 35.0);
        let ctrl = at(c, side * 15.0, 45.0);
        let end = at(c, side * 25.0, 40.0);
        parts.push(
            Element::new("path")
                .attr(
                    "d",
                    format!(
                        "M{} {} Q{} {} {} {}",
                        start.x, start.y, ctrl.x, ctrl.y, end.x, end.y
                    ),
                )
                .attr("stroke", "#000")
                .attr("stroke-width", 2)
                .attr("fill", "none"),
        );
    }

    join_lines(parts)
}

#[cfg(test)]
#[path = "../../tests/unit/compose/face.rs"]
mod tests;
