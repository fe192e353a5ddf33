// Copyright 2025 the Brushscale Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scale views: concrete mappings built from a model's domain and a range.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use log::{debug, warn};
use peniko::Color;
use smallvec::SmallVec;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use crate::date;
use crate::palette::{self, Scheme};
use crate::value::millis_to_date;
use crate::{Domain, DomainValue, ScaleConfig, ScaleError, ScaleKind, ScaleModel};

/// The output space of a view.
#[derive(Clone, Debug, PartialEq)]
pub enum ViewRange {
    /// A pixel interval `(start, end)`; `end < start` flips the axis.
    Interval(f64, f64),
    /// Custom color stops (gradients) or custom palette (ordinal colors).
    Colors(Vec<Color>),
    /// A named scheme.
    Scheme(Scheme),
}

impl ViewRange {
    /// A reasonable default range for `kind`.
    pub fn default_for(kind: ScaleKind) -> Self {
        match kind {
            ScaleKind::Color | ScaleKind::DateColor => Self::Scheme(Scheme::RdYlGn),
            ScaleKind::OrdinalColor => Self::Scheme(Scheme::Category10),
            ScaleKind::Linear | ScaleKind::Log | ScaleKind::Date | ScaleKind::Ordinal => {
                Self::Interval(0.0, 1.0)
            }
        }
    }
}

/// The result of mapping one value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Mapped {
    /// A position in range units.
    Position(f64),
    /// A color.
    Color(Color),
}

/// An affine mapping from a continuous domain to a continuous range.
///
/// A degenerate domain (`d0 == d1`) is widened to the unit interval centered on `d0`, so its
/// single value lands on the middle of the range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearMap {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearMap {
    /// Creates a mapping of `domain` onto `range`.
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        let (d0, d1) = domain;
        let domain = if d0 == d1 {
            (d0 - 0.5, d0 + 0.5)
        } else {
            domain
        };
        Self { domain, range }
    }

    /// Maps a value from domain space into range space.
    pub fn map(&self, x: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let t = (x - d0) / (d1 - d0);
        r0 + t * (r1 - r0)
    }

    /// Maps a range value back into the domain. A degenerate range inverts to `d0`.
    pub fn invert(&self, y: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let denom = r1 - r0;
        if denom == 0.0 {
            return d0;
        }
        d0 + (y - r0) / denom * (d1 - d0)
    }

    /// The domain actually used (after the degenerate fallback).
    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    /// The range.
    pub fn range(&self) -> (f64, f64) {
        self.range
    }
}

/// A symmetric-log mapping: linear in `sign(x) * ln(1 + |x| / c)`.
///
/// Unlike a plain log scale it is defined at and across zero.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SymLogMap {
    inner: LinearMap,
    constant: f64,
}

impl SymLogMap {
    /// Creates a mapping of `domain` onto `range` with linear-region width `constant`.
    ///
    /// A constant that is not finite and positive falls back to 1.
    pub fn new(domain: (f64, f64), range: (f64, f64), constant: f64) -> Self {
        let constant = if constant.is_finite() && constant > 0.0 {
            constant
        } else {
            1.0
        };
        let (d0, d1) = domain;
        Self {
            inner: LinearMap::new((symlog(d0, constant), symlog(d1, constant)), range),
            constant,
        }
    }

    /// Maps a value from domain space into range space.
    pub fn map(&self, x: f64) -> f64 {
        self.inner.map(symlog(x, self.constant))
    }

    /// Maps a range value back into the domain.
    pub fn invert(&self, y: f64) -> f64 {
        symexp(self.inner.invert(y), self.constant)
    }
}

fn symlog(x: f64, c: f64) -> f64 {
    if x < 0.0 {
        -(1.0 - x / c).ln()
    } else {
        (1.0 + x / c).ln()
    }
}

fn symexp(y: f64, c: f64) -> f64 {
    if y < 0.0 {
        -c * ((-y).exp() - 1.0)
    } else {
        c * (y.exp() - 1.0)
    }
}

/// Evenly subdivided bands, one per category, in domain order.
#[derive(Clone, Debug, PartialEq)]
pub struct BandMap {
    categories: Vec<String>,
    range: (f64, f64),
    padding_inner: f64,
    padding_outer: f64,
}

impl BandMap {
    /// Creates a band mapping with the given inner/outer padding in band units.
    pub fn new(categories: Vec<String>, range: (f64, f64), inner: f64, outer: f64) -> Self {
        Self {
            categories,
            range,
            padding_inner: inner.max(0.0),
            padding_outer: outer.max(0.0),
        }
    }

    /// Returns the computed band width.
    pub fn bandwidth(&self) -> f64 {
        let (r0, r1) = self.range;
        let n = self.categories.len() as f64;
        if n <= 0.0 {
            return 0.0;
        }
        let span = if r1 >= r0 { r1 - r0 } else { r0 - r1 };
        let denom = n + self.padding_inner * (n - 1.0) + 2.0 * self.padding_outer;
        if denom == 0.0 { 0.0 } else { span / denom }
    }

    fn step(&self) -> f64 {
        self.bandwidth() * (1.0 + self.padding_inner)
    }

    fn direction(&self) -> f64 {
        let (r0, r1) = self.range;
        if r1 >= r0 { 1.0 } else { -1.0 }
    }

    /// Returns the edge of the band at `index` nearest the range start.
    ///
    /// Bands are laid out from the first range endpoint towards the second, so a flipped
    /// range puts the first category at the higher pixel value.
    pub fn band_start(&self, index: usize) -> f64 {
        let offset = self.bandwidth() * self.padding_outer + self.step() * index as f64;
        self.range.0 + self.direction() * offset
    }

    /// Returns the center of `category`'s band.
    pub fn map(&self, category: &str) -> Option<f64> {
        let index = self.categories.iter().position(|c| c == category)?;
        Some(self.band_start(index) + self.direction() * self.bandwidth() * 0.5)
    }

    /// Returns the category whose step (band plus trailing inner padding) contains `y`.
    ///
    /// Pixels inside the range but in outer padding resolve to the nearest end band.
    /// Pixels outside the range resolve to nothing.
    pub fn invert(&self, y: f64) -> Option<&str> {
        let step = self.step();
        if step <= 0.0 || !y.is_finite() {
            return None;
        }
        let (r0, r1) = self.range;
        let along = (y - r0) * self.direction();
        if along < 0.0 || along > (r1 - r0).abs() {
            return None;
        }
        let last = self.categories.len().checked_sub(1)?;
        let offset = ((along - self.bandwidth() * self.padding_outer) / step).max(0.0);
        #[allow(
            clippy::cast_possible_truncation,
            reason = "non-negative and finite; clamped to the last band below"
        )]
        let index = (offset.floor() as usize).min(last);
        self.categories.get(index).map(String::as_str)
    }

    /// The categories in band order.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }
}

/// A piecewise-linear color gradient over a continuous domain.
///
/// With a midpoint, the lower half of the stops spans `[d0, mid]` and the upper half spans
/// `[mid, d1]`. A midpoint not strictly inside the domain is ignored. Values outside the
/// domain clamp to the end stops.
#[derive(Clone, Debug, PartialEq)]
pub struct GradientMap {
    position: LinearMap,
    mid: Option<f64>,
    stops: Vec<Color>,
}

impl GradientMap {
    /// Creates a gradient over `domain` with evenly spaced `stops`.
    pub fn new(domain: (f64, f64), mid: Option<f64>, stops: Vec<Color>) -> Self {
        let (d0, d1) = domain;
        let (lo, hi) = if d0 <= d1 { (d0, d1) } else { (d1, d0) };
        Self {
            position: LinearMap::new(domain, (0.0, 1.0)),
            mid: mid.filter(|m| m.is_finite() && *m > lo && *m < hi),
            stops,
        }
    }

    /// Returns the gradient parameter in `[0, 1]` for `x` (before clamping).
    pub fn t(&self, x: f64) -> f64 {
        let Some(mid) = self.mid else {
            return self.position.map(x);
        };
        let (d0, d1) = self.position.domain();
        if (x - mid) * (d0 - mid) >= 0.0 {
            0.5 * (x - d0) / (mid - d0)
        } else {
            0.5 + 0.5 * (x - mid) / (d1 - mid)
        }
    }

    /// Maps a value to a color.
    pub fn map(&self, x: f64) -> Option<Color> {
        palette::interpolate_stops(&self.stops, self.t(x))
    }
}

/// Category → color lookup.
#[derive(Clone, Debug, PartialEq)]
pub struct PaletteMap {
    categories: Vec<String>,
    colors: Vec<Color>,
}

impl PaletteMap {
    /// Pairs categories with colors positionally.
    pub fn new(categories: Vec<String>, colors: Vec<Color>) -> Self {
        Self { categories, colors }
    }

    /// Returns the color assigned to `category`.
    pub fn map(&self, category: &str) -> Option<Color> {
        let index = self.categories.iter().position(|c| c == category)?;
        self.colors.get(index).copied()
    }

    /// The assigned colors, aligned with the domain's categories.
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }
}

/// A concrete mapping, one variant per [`ScaleKind`].
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Mapping {
    /// The domain is empty; every lookup yields `None`.
    #[default]
    Undefined,
    /// See [`ScaleKind::Linear`].
    Linear(LinearMap),
    /// See [`ScaleKind::Log`].
    Log(SymLogMap),
    /// See [`ScaleKind::Date`]; the domain is in epoch milliseconds.
    Date(LinearMap),
    /// See [`ScaleKind::Ordinal`].
    Ordinal(BandMap),
    /// See [`ScaleKind::Color`].
    Color(GradientMap),
    /// See [`ScaleKind::DateColor`]; the domain is in epoch milliseconds.
    DateColor(GradientMap),
    /// See [`ScaleKind::OrdinalColor`].
    OrdinalColor(PaletteMap),
}

/// Band padding used for ordinal positions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BandPadding {
    /// Gap between bands, in band units.
    pub inner: f64,
    /// Gap before the first and after the last band, in band units.
    pub outer: f64,
}

impl Mapping {
    /// Builds the mapping for `config.kind` over `domain` and `range`.
    ///
    /// This is the single dispatch point over scale kinds.
    pub fn build(
        config: &ScaleConfig,
        domain: &Domain,
        range: &ViewRange,
        padding: BandPadding,
    ) -> Result<Self, ScaleError> {
        let kind = config.kind;
        let compatible = match range {
            ViewRange::Interval(..) => !kind.is_color(),
            ViewRange::Colors(_) | ViewRange::Scheme(_) => kind.is_color(),
        };
        if !compatible {
            return Err(ScaleError::RangeMismatch { kind });
        }
        if domain.is_empty() {
            return Ok(Self::Undefined);
        }
        let interval = match range {
            ViewRange::Interval(r0, r1) => (*r0, *r1),
            _ => (0.0, 1.0),
        };
        let mid_millis = || {
            config
                .mid
                .as_ref()
                .and_then(DomainValue::as_date)
                .map(|d| date::to_millis(d) as f64)
        };
        Ok(match (kind, domain) {
            (ScaleKind::Linear, Domain::Numeric(d0, d1)) => {
                Self::Linear(LinearMap::new((*d0, *d1), interval))
            }
            (ScaleKind::Log, Domain::Numeric(d0, d1)) => {
                Self::Log(SymLogMap::new((*d0, *d1), interval, config.log_constant))
            }
            (ScaleKind::Date, Domain::Date(..)) => match domain.continuous_bounds() {
                Some(bounds) => Self::Date(LinearMap::new(bounds, interval)),
                None => Self::Undefined,
            },
            (ScaleKind::Ordinal, Domain::Ordinal(cats)) => Self::Ordinal(BandMap::new(
                cats.clone(),
                interval,
                padding.inner,
                padding.outer,
            )),
            (ScaleKind::Color, Domain::Numeric(d0, d1)) => {
                let mid = config.mid.as_ref().and_then(DomainValue::as_number);
                Self::Color(GradientMap::new((*d0, *d1), mid, gradient_stops(range)))
            }
            (ScaleKind::DateColor, Domain::Date(..)) => match domain.continuous_bounds() {
                Some(bounds) => {
                    Self::DateColor(GradientMap::new(bounds, mid_millis(), gradient_stops(range)))
                }
                None => Self::Undefined,
            },
            (ScaleKind::OrdinalColor, Domain::Ordinal(cats)) => {
                let colors = ordinal_colors(range, cats.len());
                Self::OrdinalColor(PaletteMap::new(cats.clone(), colors))
            }
            _ => {
                let expected = kind.value_type();
                let found = domain.value_type().unwrap_or(expected);
                return Err(ScaleError::TypeMismatch { expected, found });
            }
        })
    }

    /// Maps a value; `None` if the mapping is undefined or the value does not belong to it.
    pub fn map(&self, value: &DomainValue) -> Option<Mapped> {
        match (self, value) {
            (Self::Linear(m), DomainValue::Number(x)) => Some(Mapped::Position(m.map(*x))),
            (Self::Log(m), DomainValue::Number(x)) => Some(Mapped::Position(m.map(*x))),
            (Self::Date(m), DomainValue::Date(d)) => {
                Some(Mapped::Position(m.map(date::to_millis(*d) as f64)))
            }
            (Self::Ordinal(m), DomainValue::Category(c)) => m.map(c).map(Mapped::Position),
            (Self::Color(m), DomainValue::Number(x)) => m.map(*x).map(Mapped::Color),
            (Self::DateColor(m), DomainValue::Date(d)) => {
                m.map(date::to_millis(*d) as f64).map(Mapped::Color)
            }
            (Self::OrdinalColor(m), DomainValue::Category(c)) => m.map(c).map(Mapped::Color),
            _ => None,
        }
    }

    /// Maps a range position back into the domain. Color mappings do not invert.
    pub fn invert(&self, y: f64) -> Option<DomainValue> {
        match self {
            Self::Linear(m) => Some(DomainValue::Number(m.invert(y))),
            Self::Log(m) => Some(DomainValue::Number(m.invert(y))),
            Self::Date(m) => {
                let (d0, d1) = m.domain();
                let start = DomainValue::Date(millis_to_date(d0)?);
                let end = DomainValue::Date(millis_to_date(d1)?);
                let (r0, r1) = m.range();
                if r1 == r0 {
                    return Some(start);
                }
                start.interpolate(&end, (y - r0) / (r1 - r0))
            }
            Self::Ordinal(m) => m.invert(y).map(DomainValue::from),
            Self::Undefined | Self::Color(_) | Self::DateColor(_) | Self::OrdinalColor(_) => None,
        }
    }

    /// Returns `true` for [`Mapping::Undefined`].
    pub fn is_undefined(&self) -> bool {
        matches!(self, Self::Undefined)
    }
}

fn gradient_stops(range: &ViewRange) -> Vec<Color> {
    match range {
        ViewRange::Colors(colors) if !colors.is_empty() => colors.clone(),
        ViewRange::Scheme(scheme) => scheme.colors(),
        _ => Scheme::RdYlGn.colors(),
    }
}

fn ordinal_colors(range: &ViewRange, n: usize) -> Vec<Color> {
    match range {
        ViewRange::Colors(colors) if !colors.is_empty() => palette::cycle(colors, n),
        ViewRange::Scheme(scheme) => scheme.sample(n),
        _ => Scheme::Category10.sample(n),
    }
}

/// Notifications queued by a [`ScaleView`] after a successful rebuild.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewEvent {
    /// The model's domain (or configuration) changed since the last build.
    DomainChanged,
    /// The view's range changed since the last build.
    RangeChanged,
}

/// Binds one [`ScaleModel`] to a range and owns the resulting [`Mapping`].
///
/// A view follows a single model; call [`ScaleView::sync`] after the model changes.
#[derive(Clone, Debug)]
pub struct ScaleView {
    range: ViewRange,
    band_padding: BandPadding,
    mapping: Mapping,
    synced_version: Option<u64>,
    range_dirty: bool,
    events: SmallVec<[ViewEvent; 2]>,
}

impl ScaleView {
    /// Creates an unsynced view; its mapping stays undefined until the first [`Self::sync`].
    pub fn new(range: ViewRange) -> Self {
        Self {
            range,
            band_padding: BandPadding {
                inner: 0.0,
                outer: 0.0,
            },
            mapping: Mapping::Undefined,
            synced_version: None,
            range_dirty: true,
            events: SmallVec::new(),
        }
    }

    /// Sets ordinal band padding (in band units).
    pub fn with_band_padding(mut self, inner: f64, outer: f64) -> Self {
        self.band_padding = BandPadding {
            inner: inner.max(0.0),
            outer: outer.max(0.0),
        };
        self.range_dirty = true;
        self
    }

    /// Returns the configured range.
    pub fn range(&self) -> &ViewRange {
        &self.range
    }

    /// Replaces the range; the mapping is rebuilt on the next [`Self::sync`].
    pub fn set_range(&mut self, range: ViewRange) {
        if range != self.range {
            self.range = range;
            self.range_dirty = true;
        }
    }

    /// Rebuilds the mapping if the model or the range changed since the last build.
    ///
    /// Returns whether a rebuild happened. On error the previous mapping is kept.
    pub fn sync(&mut self, model: &ScaleModel) -> Result<bool, ScaleError> {
        let domain_changed = self.synced_version != Some(model.version());
        if !domain_changed && !self.range_dirty {
            return Ok(false);
        }
        let mapping = Mapping::build(model.config(), model.domain(), &self.range, self.band_padding)
            .inspect_err(|e| warn!("scale view rebuild failed: {e}"))?;
        debug!(
            "{:?} scale view rebuilt (domain changed: {domain_changed}, range changed: {})",
            model.kind(),
            self.range_dirty
        );
        self.mapping = mapping;
        if domain_changed {
            self.events.push(ViewEvent::DomainChanged);
        }
        if self.range_dirty {
            self.events.push(ViewEvent::RangeChanged);
        }
        self.synced_version = Some(model.version());
        self.range_dirty = false;
        Ok(true)
    }

    /// Returns the current mapping.
    pub fn mapping(&self) -> &Mapping {
        &self.mapping
    }

    /// Maps a value through the current mapping.
    pub fn map(&self, value: &DomainValue) -> Option<Mapped> {
        self.mapping.map(value)
    }

    /// Maps a value to a position, if this is a positional mapping.
    pub fn position(&self, value: &DomainValue) -> Option<f64> {
        match self.map(value)? {
            Mapped::Position(p) => Some(p),
            Mapped::Color(_) => None,
        }
    }

    /// Maps a value to a color, if this is a color mapping.
    pub fn color(&self, value: &DomainValue) -> Option<Color> {
        match self.map(value)? {
            Mapped::Color(c) => Some(c),
            Mapped::Position(_) => None,
        }
    }

    /// Maps a range position back into the domain.
    pub fn invert(&self, y: f64) -> Option<DomainValue> {
        self.mapping.invert(y)
    }

    /// Drains queued notifications in the order they were produced.
    pub fn drain_events(&mut self) -> impl Iterator<Item = ViewEvent> + '_ {
        self.events.drain(..)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use super::*;
    use crate::{ContributorId, ValueType};

    fn num(x: f64) -> DomainValue {
        DomainValue::Number(x)
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn model_with(config: impl Into<ScaleConfig>, sub: Domain) -> ScaleModel {
        let mut m = ScaleModel::new(config).unwrap();
        m.set_domain(sub, &ContributorId::new("mark")).unwrap();
        m
    }

    fn synced(model: &ScaleModel, range: ViewRange) -> ScaleView {
        let mut v = ScaleView::new(range);
        assert!(v.sync(model).unwrap(), "first sync should build");
        v
    }

    #[test]
    fn linear_maps_endpoints_and_inverts() {
        let m = model_with(ScaleKind::Linear, Domain::Numeric(0.0, 10.0));
        let v = synced(&m, ViewRange::Interval(0.0, 500.0));
        assert!(close(v.position(&num(0.0)).unwrap(), 0.0));
        assert!(close(v.position(&num(10.0)).unwrap(), 500.0));
        assert!(close(v.position(&num(2.5)).unwrap(), 125.0));
        assert_eq!(v.invert(250.0), Some(DomainValue::Number(5.0)));
    }

    #[test]
    fn reversed_linear_mirrors_normal() {
        let normal = model_with(ScaleKind::Linear, Domain::Numeric(2.0, 12.0));
        let reversed = model_with(
            ScaleConfig::new(ScaleKind::Linear).with_reverse(true),
            Domain::Numeric(2.0, 12.0),
        );
        let vn = synced(&normal, ViewRange::Interval(0.0, 100.0));
        let vr = synced(&reversed, ViewRange::Interval(0.0, 100.0));
        for x in [2.0, 3.5, 7.0, 12.0, 20.0] {
            let mirrored = 2.0 + 12.0 - x;
            let a = vr.position(&num(x)).unwrap();
            let b = vn.position(&num(mirrored)).unwrap();
            assert!(close(a, b), "x={x}: {a} != {b}");
        }
    }

    #[test]
    fn degenerate_domain_maps_to_range_middle() {
        let m = model_with(ScaleKind::Linear, Domain::Numeric(4.0, 4.0));
        let v = synced(&m, ViewRange::Interval(0.0, 100.0));
        let p = v.position(&num(4.0)).unwrap();
        assert!(p.is_finite());
        assert!(close(p, 50.0));

        let d = date::from_millis(1_000).unwrap();
        let m = model_with(ScaleKind::Date, Domain::Date(d, d));
        let v = synced(&m, ViewRange::Interval(0.0, 10.0));
        assert!(close(v.position(&d.into()).unwrap(), 5.0));
    }

    #[test]
    fn empty_domain_is_undefined_not_an_error() {
        let m = ScaleModel::new(ScaleKind::Linear).unwrap();
        let v = synced(&m, ViewRange::Interval(0.0, 100.0));
        assert!(v.mapping().is_undefined());
        assert_eq!(v.position(&num(1.0)), None);
        assert_eq!(v.invert(3.0), None);
    }

    #[test]
    fn symlog_is_defined_across_zero_and_odd() {
        let m = model_with(ScaleKind::Log, Domain::Numeric(-100.0, 100.0));
        let v = synced(&m, ViewRange::Interval(-1.0, 1.0));
        assert!(close(v.position(&num(0.0)).unwrap(), 0.0));
        let a = v.position(&num(10.0)).unwrap();
        let b = v.position(&num(-10.0)).unwrap();
        assert!(close(a, -b));
        // Compression: 10 is a tenth of the span but lands much further out than linear.
        assert!(a > 0.1);
        let back = v.invert(a).unwrap().as_number().unwrap();
        assert!((back - 10.0).abs() < 1e-9);
    }

    #[test]
    fn ordinal_bands_follow_first_seen_order() {
        let m = model_with(
            ScaleKind::Ordinal,
            Domain::Ordinal(vec!["b".into(), "a".into(), "c".into(), "d".into()]),
        );
        let v = synced(&m, ViewRange::Interval(0.0, 400.0));
        assert!(close(v.position(&"b".into()).unwrap(), 50.0));
        assert!(close(v.position(&"a".into()).unwrap(), 150.0));
        assert!(close(v.position(&"d".into()).unwrap(), 350.0));
        assert_eq!(v.position(&"zzz".into()), None);
        let Mapping::Ordinal(bands) = v.mapping() else {
            panic!("expected an ordinal mapping");
        };
        assert!(close(bands.bandwidth(), 100.0));
        assert_eq!(v.invert(160.0), Some(DomainValue::from("a")));
        assert_eq!(v.invert(-1.0), None);
        assert_eq!(v.invert(401.0), None);
    }

    #[test]
    fn ordinal_band_padding_shrinks_bands() {
        let m = model_with(
            ScaleKind::Ordinal,
            Domain::Ordinal(vec!["a".into(), "b".into()]),
        );
        let mut v = ScaleView::new(ViewRange::Interval(10.0, 30.0)).with_band_padding(0.0, 0.5);
        v.sync(&m).unwrap();
        let Mapping::Ordinal(bands) = v.mapping() else {
            panic!("expected an ordinal mapping");
        };
        assert!(close(bands.bandwidth(), 20.0 / 3.0));
        assert!(close(bands.band_start(0), 10.0 + 10.0 / 3.0));
    }

    #[test]
    fn ordinal_range_end_inverts_to_last_band() {
        let m = model_with(
            ScaleKind::Ordinal,
            Domain::Ordinal(vec!["a".into(), "b".into(), "c".into(), "d".into()]),
        );
        let v = synced(&m, ViewRange::Interval(0.0, 400.0));
        assert_eq!(v.invert(400.0), Some(DomainValue::from("d")));
        assert_eq!(v.invert(0.0), Some(DomainValue::from("a")));

        let mut padded =
            ScaleView::new(ViewRange::Interval(0.0, 400.0)).with_band_padding(0.0, 0.5);
        padded.sync(&m).unwrap();
        assert_eq!(padded.invert(1.0), Some(DomainValue::from("a")));
        assert_eq!(padded.invert(399.0), Some(DomainValue::from("d")));
        assert_eq!(padded.invert(400.5), None);
    }

    #[test]
    fn flipped_interval_lays_bands_from_range_start() {
        let m = model_with(
            ScaleKind::Ordinal,
            Domain::Ordinal(vec!["a".into(), "b".into()]),
        );
        let v = synced(&m, ViewRange::Interval(200.0, 0.0));
        assert!(close(v.position(&"a".into()).unwrap(), 150.0));
        assert!(close(v.position(&"b".into()).unwrap(), 50.0));
        assert_eq!(v.invert(180.0), Some(DomainValue::from("a")));
        assert_eq!(v.invert(20.0), Some(DomainValue::from("b")));
        assert_eq!(v.invert(200.0), Some(DomainValue::from("a")));
        assert_eq!(v.invert(-1.0), None);
        assert_eq!(v.invert(201.0), None);
        let Mapping::Ordinal(bands) = v.mapping() else {
            panic!("expected an ordinal mapping");
        };
        assert!(close(bands.band_start(0), 200.0));
        assert!(close(bands.band_start(1), 100.0));
    }

    #[test]
    fn ordinal_color_cycles_short_custom_palette() {
        let palette = vec![
            Color::from_rgba8(255, 0, 0, 255),
            Color::from_rgba8(0, 255, 0, 255),
            Color::from_rgba8(0, 0, 255, 255),
        ];
        let cats: Vec<String> = (0..8).map(|i| alloc::format!("c{i}")).collect();
        let m = model_with(ScaleKind::OrdinalColor, Domain::Ordinal(cats.clone()));
        let v = synced(&m, ViewRange::Colors(palette.clone()));
        for (i, cat) in cats.iter().enumerate() {
            assert_eq!(
                v.color(&cat.as_str().into()),
                Some(palette[i % palette.len()]),
                "category {i}"
            );
        }
    }

    #[test]
    fn ordinal_color_samples_scheme_to_category_count() {
        let cats: Vec<String> = ["x", "y", "z"].map(String::from).to_vec();
        let m = model_with(ScaleKind::OrdinalColor, Domain::Ordinal(cats));
        let v = synced(&m, ViewRange::Scheme(Scheme::Viridis));
        let Mapping::OrdinalColor(p) = v.mapping() else {
            panic!("expected an ordinal color mapping");
        };
        assert_eq!(p.colors(), Scheme::Viridis.sample(3).as_slice());
        assert_eq!(v.color(&"x".into()), Some(Scheme::Viridis.colors()[0]));
    }

    #[test]
    fn color_gradient_endpoints_and_clamping() {
        let black = Color::from_rgba8(0, 0, 0, 255);
        let white = Color::from_rgba8(255, 255, 255, 255);
        let m = model_with(ScaleKind::Color, Domain::Numeric(0.0, 10.0));
        let v = synced(&m, ViewRange::Colors(vec![black, white]));
        assert_eq!(v.color(&num(0.0)), Some(black));
        assert_eq!(v.color(&num(10.0)), Some(white));
        assert_eq!(v.color(&num(50.0)), Some(white));
        assert_eq!(v.color(&num(-5.0)), Some(black));
        assert_eq!(v.invert(0.5), None);
    }

    #[test]
    fn diverging_gradient_puts_mid_on_center_stop() {
        let red = Color::from_rgba8(255, 0, 0, 255);
        let white = Color::from_rgba8(255, 255, 255, 255);
        let blue = Color::from_rgba8(0, 0, 255, 255);
        let m = model_with(
            ScaleConfig::new(ScaleKind::Color).with_mid(2.0),
            Domain::Numeric(0.0, 10.0),
        );
        let v = synced(&m, ViewRange::Colors(vec![red, white, blue]));
        let Mapping::Color(g) = v.mapping() else {
            panic!("expected a color mapping");
        };
        assert!(close(g.t(2.0), 0.5));
        assert!(close(g.t(1.0), 0.25));
        assert!(close(g.t(6.0), 0.75));
        assert_eq!(v.color(&num(10.0)), Some(blue));
    }

    #[test]
    fn mid_outside_domain_is_ignored() {
        let red = Color::from_rgba8(255, 0, 0, 255);
        let white = Color::from_rgba8(255, 255, 255, 255);
        let blue = Color::from_rgba8(0, 0, 255, 255);
        let m = model_with(
            ScaleConfig::new(ScaleKind::Color).with_mid(20.0),
            Domain::Numeric(0.0, 10.0),
        );
        let v = synced(&m, ViewRange::Colors(vec![red, white, blue]));
        assert_eq!(v.color(&num(0.0)), Some(red));
        assert_eq!(v.color(&num(5.0)), Some(white));
        assert_eq!(v.color(&num(10.0)), Some(blue));

        let below = GradientMap::new((0.0, 10.0), Some(-3.0), vec![red, white, blue]);
        assert!(close(below.t(10.0), 1.0));
        let reversed = GradientMap::new((10.0, 0.0), Some(4.0), vec![red, white, blue]);
        assert!(close(reversed.t(4.0), 0.5));
    }

    #[test]
    fn non_positive_log_constant_falls_back_to_one() {
        let config = ScaleConfig {
            log_constant: 0.0,
            ..ScaleConfig::new(ScaleKind::Log)
        };
        let m = model_with(config, Domain::Numeric(-10.0, 10.0));
        let v = synced(&m, ViewRange::Interval(0.0, 100.0));
        assert!(close(v.position(&num(0.0)).unwrap(), 50.0));
        for x in [-10.0, -1.0, 3.0, 10.0] {
            assert!(v.position(&num(x)).unwrap().is_finite());
        }
        assert!(close(v.position(&num(10.0)).unwrap(), 100.0));

        let direct = SymLogMap::new((-10.0, 10.0), (0.0, 100.0), f64::NAN);
        assert_eq!(direct, SymLogMap::new((-10.0, 10.0), (0.0, 100.0), 1.0));
    }

    #[test]
    fn date_positions_and_inversion() {
        let a = date::parse_date("2020-01-01T00:00:00.000000").unwrap();
        let b = date::parse_date("2020-01-11T00:00:00.000000").unwrap();
        let m = model_with(ScaleKind::Date, Domain::Date(a, b));
        let v = synced(&m, ViewRange::Interval(0.0, 10.0));
        let c = date::parse_date("2020-01-06T00:00:00.000000").unwrap();
        assert!(close(v.position(&c.into()).unwrap(), 5.0));
        assert_eq!(v.invert(5.0), Some(DomainValue::Date(c)));
    }

    #[test]
    fn wrong_value_tag_maps_to_none() {
        let m = model_with(ScaleKind::Linear, Domain::Numeric(0.0, 1.0));
        let v = synced(&m, ViewRange::Interval(0.0, 1.0));
        assert_eq!(v.map(&"a".into()), None);
    }

    #[test]
    fn incompatible_range_is_reported_and_previous_mapping_kept() {
        let m = model_with(ScaleKind::Linear, Domain::Numeric(0.0, 1.0));
        let mut v = synced(&m, ViewRange::Interval(0.0, 10.0));
        v.set_range(ViewRange::Scheme(Scheme::Blues));
        assert_eq!(
            v.sync(&m),
            Err(ScaleError::RangeMismatch {
                kind: ScaleKind::Linear
            })
        );
        assert!(close(v.position(&num(1.0)).unwrap(), 10.0));
    }

    #[test]
    fn sync_is_idempotent_and_reports_what_changed() {
        let mut m = model_with(ScaleKind::Linear, Domain::Numeric(0.0, 10.0));
        let mut v = ScaleView::new(ViewRange::Interval(0.0, 100.0));
        assert!(v.sync(&m).unwrap());
        let first: Vec<ViewEvent> = v.drain_events().collect();
        assert_eq!(first, vec![ViewEvent::DomainChanged, ViewEvent::RangeChanged]);

        let before = v.mapping().clone();
        assert!(!v.sync(&m).unwrap());
        assert_eq!(v.mapping(), &before);
        assert_eq!(v.drain_events().count(), 0);

        m.set_domain(Domain::Numeric(0.0, 20.0), &ContributorId::new("other"))
            .unwrap();
        assert!(v.sync(&m).unwrap());
        assert_eq!(v.drain_events().collect::<Vec<_>>(), vec![ViewEvent::DomainChanged]);
        assert!(close(v.position(&num(10.0)).unwrap(), 50.0));

        v.set_range(ViewRange::Interval(0.0, 40.0));
        assert!(v.sync(&m).unwrap());
        assert_eq!(v.drain_events().collect::<Vec<_>>(), vec![ViewEvent::RangeChanged]);
        assert!(close(v.position(&num(10.0)).unwrap(), 20.0));
    }

    #[test]
    fn config_changes_trigger_rebuild() {
        let mut m = model_with(ScaleKind::Linear, Domain::Numeric(0.0, 100.0));
        let mut v = synced(&m, ViewRange::Interval(0.0, 1.0));
        m.set_config(ScaleConfig::new(ScaleKind::Log)).unwrap();
        assert!(v.sync(&m).unwrap());
        assert!(matches!(v.mapping(), Mapping::Log(_)));
    }

    #[test]
    fn mapping_build_rejects_mismatched_domain() {
        let config = ScaleConfig::new(ScaleKind::Linear);
        let err = Mapping::build(
            &config,
            &Domain::Ordinal(vec!["a".into()]),
            &ViewRange::Interval(0.0, 1.0),
            BandPadding {
                inner: 0.0,
                outer: 0.0,
            },
        )
        .unwrap_err();
        assert_eq!(
            err,
            ScaleError::TypeMismatch {
                expected: ValueType::Number,
                found: ValueType::Category,
            }
        );
    }
}
