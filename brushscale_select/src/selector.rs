// Copyright 2025 the Brushscale Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture state machines that accumulate a selection shape in pixel space.
//!
//! Selectors do not know about marks. Callers project their data through the relevant
//! [`ScaleView`]s (see [`project_points`]), then ask a selector which candidates it covers.
//! Brushes can also report their extent back in data space by inverting their corners.

extern crate alloc;

use alloc::vec::Vec;

use brushscale_scales::{DomainValue, ScaleView};
use kurbo::{Point, Rect, Vec2};
use log::debug;

use crate::geometry::point_in_lasso;
use crate::shape::{Selector, SelectorShape};

/// Projects `(x, y)` data pairs into pixel space.
///
/// Pairs that either view cannot map become NaN points, which no selector contains.
pub fn project_points(
    x_view: &ScaleView,
    y_view: &ScaleView,
    data: &[(DomainValue, DomainValue)],
) -> Vec<Point> {
    data.iter()
        .map(|(x, y)| match (x_view.position(x), y_view.position(y)) {
            (Some(px), Some(py)) => Point::new(px, py),
            _ => Point::new(f64::NAN, f64::NAN),
        })
        .collect()
}

/// Orders a pair of inverted values ascending; categories keep pixel order.
fn ordered(a: DomainValue, b: DomainValue) -> (DomainValue, DomainValue) {
    let swap = match (&a, &b) {
        (DomainValue::Number(x), DomainValue::Number(y)) => x > y,
        (DomainValue::Date(x), DomainValue::Date(y)) => x > y,
        _ => false,
    };
    if swap { (b, a) } else { (a, b) }
}

fn invert_span(view: &ScaleView, p0: f64, p1: f64) -> Option<(DomainValue, DomainValue)> {
    let (lo, hi) = if p0 <= p1 { (p0, p1) } else { (p1, p0) };
    Some(ordered(view.invert(lo)?, view.invert(hi)?))
}

/// A rectangular brush's extent in data space.
#[derive(Clone, Debug, PartialEq)]
pub struct BrushExtent {
    /// Low and high ends along x.
    pub x: (DomainValue, DomainValue),
    /// Low and high ends along y.
    pub y: (DomainValue, DomainValue),
}

/// A rectangular brush defined by dragging from an anchor corner.
#[derive(Clone, Debug, Default)]
pub struct BrushSelector {
    anchor: Option<Point>,
    extent: Option<Rect>,
    brushing: bool,
}

impl BrushSelector {
    /// Creates an empty brush.
    pub fn new() -> Self {
        Self::default()
    }

    /// Begins a drag at `p`, replacing any previous extent.
    pub fn start(&mut self, p: Point) {
        self.anchor = Some(p);
        self.extent = Some(Rect::from_points(p, p));
        self.brushing = true;
    }

    /// Moves the free corner to `p`. Ignored outside a drag.
    pub fn drag(&mut self, p: Point) {
        if !self.brushing {
            return;
        }
        if let Some(anchor) = self.anchor {
            self.extent = Some(Rect::from_points(anchor, p));
        }
    }

    /// Finishes the drag; the extent stays selectable.
    pub fn end(&mut self) {
        if self.brushing {
            self.brushing = false;
            debug!("brush ended at {:?}", self.extent);
        }
    }

    /// Drops the extent.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Whether a drag is in progress.
    pub fn brushing(&self) -> bool {
        self.brushing
    }

    /// The current rectangle, if any.
    pub fn shape(&self) -> Option<SelectorShape> {
        self.extent.map(SelectorShape::Rect)
    }

    /// Indices of bars (or other boxed marks) whose bounds overlap the brush.
    pub fn select_rects(&self, rects: &[Rect]) -> Vec<usize> {
        let Some(shape) = self.shape() else {
            return Vec::new();
        };
        rects
            .iter()
            .enumerate()
            .filter(|(_, r)| shape.intersects_rect(**r))
            .map(|(i, _)| i)
            .collect()
    }

    /// Inverts the brush corners through the axis views.
    ///
    /// Returns `None` without an extent, or when either view cannot invert (undefined or color
    /// mappings, pixels outside every ordinal band).
    pub fn selected_extent(&self, x_view: &ScaleView, y_view: &ScaleView) -> Option<BrushExtent> {
        let r = self.extent?;
        Some(BrushExtent {
            x: invert_span(x_view, r.x0, r.x1)?,
            y: invert_span(y_view, r.y0, r.y1)?,
        })
    }
}

impl Selector for BrushSelector {
    fn contains(&self, point: Point) -> bool {
        self.shape().is_some_and(|s| s.contains(point))
    }
}

/// A one-dimensional brush along x.
#[derive(Clone, Debug, Default)]
pub struct BrushIntervalSelector {
    anchor: Option<f64>,
    span: Option<(f64, f64)>,
    brushing: bool,
}

impl BrushIntervalSelector {
    /// Creates an empty interval brush.
    pub fn new() -> Self {
        Self::default()
    }

    /// Begins a drag at pixel `x`.
    pub fn start(&mut self, x: f64) {
        self.anchor = Some(x);
        self.span = Some((x, x));
        self.brushing = true;
    }

    /// Moves the free end to pixel `x`. Ignored outside a drag.
    pub fn drag(&mut self, x: f64) {
        if !self.brushing {
            return;
        }
        if let Some(anchor) = self.anchor {
            self.span = Some((anchor, x));
        }
    }

    /// Finishes the drag.
    pub fn end(&mut self) {
        if self.brushing {
            self.brushing = false;
            debug!("interval brush ended at {:?}", self.span);
        }
    }

    /// Drops the span.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Whether a drag is in progress.
    pub fn brushing(&self) -> bool {
        self.brushing
    }

    /// The current span, if any.
    pub fn shape(&self) -> Option<SelectorShape> {
        self.span
            .map(|(start, end)| SelectorShape::Interval { start, end })
    }

    /// Indices of boxed marks whose x extent overlaps the span.
    pub fn select_rects(&self, rects: &[Rect]) -> Vec<usize> {
        let Some(shape) = self.shape() else {
            return Vec::new();
        };
        rects
            .iter()
            .enumerate()
            .filter(|(_, r)| shape.intersects_rect(**r))
            .map(|(i, _)| i)
            .collect()
    }

    /// Inverts the span's ends through `view`.
    pub fn selected_extent(&self, view: &ScaleView) -> Option<(DomainValue, DomainValue)> {
        let (a, b) = self.span?;
        invert_span(view, a, b)
    }
}

impl Selector for BrushIntervalSelector {
    fn contains(&self, point: Point) -> bool {
        self.shape().is_some_and(|s| s.contains(point))
    }
}

/// An elliptical brush: the drag start is the center, the drag distance sets the radii.
#[derive(Clone, Debug, Default)]
pub struct BrushEllipseSelector {
    center: Option<Point>,
    radii: Vec2,
    rotation: f64,
    brushing: bool,
}

impl BrushEllipseSelector {
    /// Creates an empty ellipse brush.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the rotation (radians) applied to the ellipse.
    pub fn set_rotation(&mut self, rotation: f64) {
        self.rotation = rotation;
    }

    /// Current rotation in radians.
    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    /// Begins a drag with the center at `p`.
    pub fn start(&mut self, p: Point) {
        self.center = Some(p);
        self.radii = Vec2::ZERO;
        self.brushing = true;
    }

    /// Sets the radii from the distance between the center and `p` along each axis.
    pub fn drag(&mut self, p: Point) {
        if !self.brushing {
            return;
        }
        if let Some(center) = self.center {
            let span = Rect::from_points(center, p);
            self.radii = Vec2::new(span.width(), span.height());
        }
    }

    /// Finishes the drag.
    pub fn end(&mut self) {
        if self.brushing {
            self.brushing = false;
            debug!(
                "ellipse brush ended at {:?} with radii {:?}",
                self.center, self.radii
            );
        }
    }

    /// Drops the ellipse; the rotation is kept.
    pub fn clear(&mut self) {
        self.center = None;
        self.radii = Vec2::ZERO;
        self.brushing = false;
    }

    /// Whether a drag is in progress.
    pub fn brushing(&self) -> bool {
        self.brushing
    }

    /// The current ellipse, if any.
    pub fn shape(&self) -> Option<SelectorShape> {
        self.center.map(|center| SelectorShape::Ellipse {
            center,
            radii: self.radii,
            rotation: self.rotation,
        })
    }
}

impl Selector for BrushEllipseSelector {
    fn contains(&self, point: Point) -> bool {
        self.shape().is_some_and(|s| s.contains(point))
    }
}

/// Freehand lasso selection. Several closed lassos may coexist; a point is selected when it
/// lies in any of them.
#[derive(Clone, Debug, Default)]
pub struct LassoSelector {
    current: Vec<Point>,
    drawing: bool,
    lassos: Vec<Vec<Point>>,
}

impl LassoSelector {
    /// Creates a selector with no lassos.
    pub fn new() -> Self {
        Self::default()
    }

    /// Begins a new lasso at `p`. An unfinished lasso is discarded.
    pub fn start(&mut self, p: Point) {
        self.current.clear();
        self.current.push(p);
        self.drawing = true;
    }

    /// Appends a vertex to the lasso being drawn.
    pub fn extend(&mut self, p: Point) {
        if self.drawing {
            self.current.push(p);
        }
    }

    /// Closes the lasso being drawn and returns its index.
    ///
    /// Paths with fewer than three vertices enclose nothing and are dropped.
    pub fn end(&mut self) -> Option<usize> {
        if !self.drawing {
            return None;
        }
        self.drawing = false;
        let path = core::mem::take(&mut self.current);
        if path.len() < 3 {
            debug!("dropping lasso with {} vertices", path.len());
            return None;
        }
        self.lassos.push(path);
        debug!("closed lasso {}", self.lassos.len() - 1);
        Some(self.lassos.len() - 1)
    }

    /// Removes the closed lasso at `index`; later lassos shift down by one.
    pub fn delete(&mut self, index: usize) -> bool {
        if index < self.lassos.len() {
            self.lassos.remove(index);
            true
        } else {
            false
        }
    }

    /// Removes every lasso, including one being drawn.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Whether a lasso is being drawn.
    pub fn brushing(&self) -> bool {
        self.drawing
    }

    /// Closed lasso vertices in creation order.
    pub fn lassos(&self) -> &[Vec<Point>] {
        &self.lassos
    }

    /// The closed lassos as shapes.
    pub fn shapes(&self) -> Vec<SelectorShape> {
        self.lassos
            .iter()
            .cloned()
            .map(SelectorShape::Lasso)
            .collect()
    }
}

impl Selector for LassoSelector {
    fn contains(&self, point: Point) -> bool {
        self.lassos
            .iter()
            .any(|vertices| point_in_lasso(point, vertices))
    }
}
