// Copyright 2025 the Brushscale Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Selection shapes and the point-membership trait shared by all selectors.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::{Point, Rect, Vec2};

use crate::geometry::{
    point_in_ellipse, point_in_interval, point_in_lasso, point_in_rect, rect_intersects_rect,
};

/// A selection region in pixel space.
#[derive(Clone, Debug, PartialEq)]
pub enum SelectorShape {
    /// A closed polygon, tested with the even-odd rule.
    Lasso(Vec<Point>),
    /// An axis-aligned rectangle with inclusive edges.
    Rect(Rect),
    /// A rotated ellipse.
    Ellipse {
        /// Center of the ellipse.
        center: Point,
        /// Semi-axis lengths before rotation.
        radii: Vec2,
        /// Rotation in radians.
        rotation: f64,
    },
    /// A 1-D span along x. The y coordinate of candidates is ignored.
    Interval {
        /// One end of the span.
        start: f64,
        /// The other end of the span.
        end: f64,
    },
}

impl SelectorShape {
    /// Whether an extended mark's bounding box touches this shape.
    ///
    /// Rectangles and intervals test overlap. Lassos and ellipses test the box center.
    pub fn intersects_rect(&self, rect: Rect) -> bool {
        match self {
            Self::Rect(r) => rect_intersects_rect(*r, rect),
            Self::Interval { start, end } => {
                let r = rect.abs();
                let (lo, hi) = if start <= end {
                    (*start, *end)
                } else {
                    (*end, *start)
                };
                r.x0 <= hi && lo <= r.x1
            }
            Self::Lasso(_) | Self::Ellipse { .. } => self.contains(rect.center()),
        }
    }
}

/// Something that can answer point-membership queries over pixel space.
pub trait Selector {
    /// Whether `point` falls inside the current selection.
    fn contains(&self, point: Point) -> bool;

    /// Indices of the candidates inside the selection, in input order.
    fn select(&self, points: &[Point]) -> Vec<usize> {
        points
            .iter()
            .enumerate()
            .filter(|(_, p)| self.contains(**p))
            .map(|(i, _)| i)
            .collect()
    }

    /// One flag per candidate.
    fn mask(&self, points: &[Point]) -> Vec<bool> {
        points.iter().map(|p| self.contains(*p)).collect()
    }
}

impl Selector for SelectorShape {
    fn contains(&self, point: Point) -> bool {
        match self {
            Self::Lasso(vertices) => point_in_lasso(point, vertices),
            Self::Rect(r) => point_in_rect(point, r.origin(), r.width(), r.height()),
            Self::Ellipse {
                center,
                radii,
                rotation,
            } => point_in_ellipse(point, *center, *radii, *rotation),
            Self::Interval { start, end } => point_in_interval(point.x, *start, *end),
        }
    }
}
