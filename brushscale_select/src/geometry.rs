// Copyright 2025 the Brushscale Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Point-in-region predicates used by selectors.
//!
//! All functions are pure and never panic. Degenerate input (too few lasso vertices,
//! non-positive radii, NaN coordinates) answers "not contained".

use kurbo::{Affine, Point, Rect, Vec2};

/// Even-odd (crossing number) test against a closed polygon.
///
/// The last vertex implicitly connects back to the first. Polygons with fewer than three
/// vertices contain nothing. Points exactly on an edge may classify either way, but the answer
/// is the same for repeated calls with identical input. Self-intersecting polygons follow the
/// even-odd rule as is.
pub fn point_in_lasso(point: Point, vertices: &[Point]) -> bool {
    if vertices.len() < 3 {
        return false;
    }
    let Point { x, y } = point;
    let mut inside = false;
    let mut j = vertices.len() - 1;
    for (i, vi) in vertices.iter().enumerate() {
        let vj = vertices[j];
        if (vi.y > y) != (vj.y > y) && x < (vj.x - vi.x) * (y - vi.y) / (vj.y - vi.y) + vi.x {
            inside = !inside;
        }
        j = i;
    }
    inside
}

/// Tests a point against an ellipse with semi-axes `radii`, rotated by `rotation` radians
/// around `center`. The boundary counts as inside.
pub fn point_in_ellipse(point: Point, center: Point, radii: Vec2, rotation: f64) -> bool {
    if !radii.is_finite() || radii.x <= 0.0 || radii.y <= 0.0 {
        return false;
    }
    let local = Affine::rotate(-rotation) * (point - center).to_point();
    let nx = local.x / radii.x;
    let ny = local.y / radii.y;
    nx * nx + ny * ny <= 1.0
}

/// Axis-aligned rectangle test with inclusive edges. Negative extents are normalized.
pub fn point_in_rect(point: Point, origin: Point, width: f64, height: f64) -> bool {
    let r = Rect::new(origin.x, origin.y, origin.x + width, origin.y + height).abs();
    point.x >= r.x0 && point.x <= r.x1 && point.y >= r.y0 && point.y <= r.y1
}

/// Inclusive 1-D interval test; `start` and `end` may come in either order.
pub fn point_in_interval(value: f64, start: f64, end: f64) -> bool {
    let (lo, hi) = if start <= end { (start, end) } else { (end, start) };
    value >= lo && value <= hi
}

/// Whether two rectangles overlap, touching edges included.
pub fn rect_intersects_rect(a: Rect, b: Rect) -> bool {
    let a = a.abs();
    let b = b.abs();
    a.x0 <= b.x1 && b.x0 <= a.x1 && a.y0 <= b.y1 && b.y0 <= a.y1
}
