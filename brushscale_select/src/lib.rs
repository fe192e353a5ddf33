// Copyright 2025 the Brushscale Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Interactive selection over plotted data.
//!
//! This crate provides:
//! - pure point-in-region predicates ([`point_in_lasso`], [`point_in_ellipse`],
//!   [`point_in_rect`]) that never panic on degenerate input, and
//! - gesture state machines ([`BrushSelector`], [`BrushIntervalSelector`],
//!   [`BrushEllipseSelector`], [`LassoSelector`]) that accumulate a [`SelectorShape`] in pixel
//!   space and report which candidate points it covers.
//!
//! Brushes can invert their extent back into data space through a
//! [`brushscale_scales::ScaleView`].
//!
//! ```
//! use brushscale_select::{LassoSelector, Selector};
//! use kurbo::Point;
//!
//! let mut lasso = LassoSelector::new();
//! lasso.start(Point::new(0.0, 0.0));
//! lasso.extend(Point::new(10.0, 0.0));
//! lasso.extend(Point::new(10.0, 10.0));
//! lasso.extend(Point::new(0.0, 10.0));
//! lasso.end();
//!
//! let points = [Point::new(5.0, 5.0), Point::new(15.0, 15.0)];
//! assert_eq!(lasso.select(&points), vec![0]);
//! ```

#![no_std]

extern crate alloc;

mod geometry;
mod selector;
mod shape;

pub use geometry::{
    point_in_ellipse, point_in_interval, point_in_lasso, point_in_rect, rect_intersects_rect,
};
pub use selector::{
    BrushEllipseSelector, BrushExtent, BrushIntervalSelector, BrushSelector, LassoSelector,
    project_points,
};
pub use shape::{Selector, SelectorShape};
