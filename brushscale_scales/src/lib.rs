// Copyright 2025 the Brushscale Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Declarative scales for interactive plots.
//!
//! This crate is the data-to-visual core that marks draw through:
//! - **Models** ([`ScaleModel`]) aggregate sub-domains pushed by many marks into one
//!   effective domain, keyed by [`ContributorId`], and queue a notification on every change.
//! - **Views** ([`ScaleView`]) bind a model's domain and a [`ViewRange`] into a concrete
//!   [`Mapping`] (linear, symmetric log, date, ordinal bands, color gradients, palettes).
//!
//! Everything is synchronous: each `set_domain`/`del_domain` recomputes immediately, and a
//! view rebuilds when it is [`sync`](ScaleView::sync)ed. Rendering and widget wiring are
//! left to callers.
//!
//! ```
//! use brushscale_scales::{ContributorId, Domain, ScaleKind, ScaleModel, ScaleView, ViewRange};
//!
//! let mut x = ScaleModel::new(ScaleKind::Linear).unwrap();
//! x.set_domain(Domain::Numeric(0.0, 10.0), &ContributorId::new("a")).unwrap();
//! x.set_domain(Domain::Numeric(5.0, 20.0), &ContributorId::new("b")).unwrap();
//! assert_eq!(x.domain(), &Domain::Numeric(0.0, 20.0));
//!
//! let mut view = ScaleView::new(ViewRange::Interval(0.0, 200.0));
//! view.sync(&x).unwrap();
//! assert_eq!(view.position(&10.0_f64.into()), Some(100.0));
//! ```

#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod config;
pub mod date;
mod error;
#[cfg(not(feature = "std"))]
mod float;
mod model;
pub mod palette;
mod value;
mod view;


pub use config::{ScaleConfig, ScaleKind};
pub use error::ScaleError;
pub use model::{ContributorId, ScaleEvent, ScaleModel};
pub use palette::Scheme;
pub use value::{Domain, DomainValue, ValueType};
pub use view::{
    BandMap, BandPadding, GradientMap, LinearMap, Mapped, Mapping, PaletteMap, ScaleView,
    SymLogMap, ViewEvent, ViewRange,
};
