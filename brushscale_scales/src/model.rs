// Copyright 2025 the Brushscale Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scale models: domain aggregation over many contributors.
//!
//! Each mark that draws through a scale contributes a sub-domain under its own
//! [`ContributorId`]. The model keeps the effective domain equal to the union of all live
//! sub-domains (subject to explicit bounds, padding and reversal) and recomputes it
//! synchronously on every change.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use core::borrow::Borrow;
use core::fmt;

use chrono::NaiveDateTime;
use hashbrown::HashMap;
use log::{debug, trace, warn};
use smallvec::SmallVec;

use crate::date::{self, Clock};
use crate::value::millis_to_date;
use crate::{Domain, DomainValue, ScaleConfig, ScaleError, ScaleKind};

/// Identifies one domain contributor (typically one mark along one dimension).
///
/// Ids are issued by the owning figure; the model only requires them to be unique per scale.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContributorId(String);

impl ContributorId {
    /// Wraps an id string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Builds the conventional `"{owner}_{dimension}"` id, e.g. `"scatter3_x"`.
    pub fn scoped(owner: &str, dimension: &str) -> Self {
        Self(alloc::format!("{owner}_{dimension}"))
    }

    /// Returns the id string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for ContributorId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContributorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ContributorId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ContributorId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Notifications queued by a [`ScaleModel`].
#[derive(Clone, Debug, PartialEq)]
pub enum ScaleEvent {
    /// The effective domain changed; carries the new (reported) domain.
    DomainChanged(Domain),
}

#[derive(Clone, Debug)]
struct Contribution {
    /// Registration order; ordinal unions follow it.
    seq: u64,
    domain: Domain,
}

/// A scale's configuration plus the registry of domain contributors.
///
/// Observers poll [`ScaleModel::drain_events`]. Every `set_domain`/`del_domain` performs one
/// recompute, so a batch of registrations can queue several intermediate domains before the
/// final one.
#[derive(Clone, Debug)]
pub struct ScaleModel {
    config: ScaleConfig,
    contributors: HashMap<ContributorId, Contribution>,
    next_seq: u64,
    padding: Option<f64>,
    domain: Domain,
    version: u64,
    clock: Clock,
    events: SmallVec<[ScaleEvent; 4]>,
}

impl ScaleModel {
    /// Creates a model with no contributors.
    ///
    /// Fails if an explicit bound or midpoint does not match the kind's value type.
    pub fn new(config: impl Into<ScaleConfig>) -> Result<Self, ScaleError> {
        let config = config.into();
        config.validate()?;
        let mut model = Self {
            config,
            contributors: HashMap::new(),
            next_seq: 0,
            padding: None,
            domain: Domain::Empty,
            version: 0,
            clock: date::system_clock,
            events: SmallVec::new(),
        };
        model.domain = model.compute_domain();
        Ok(model)
    }

    /// Replaces the source of "now" used as the upper fallback bound of empty date scales.
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self.domain = self.compute_domain();
        self
    }

    /// Returns the scale kind.
    pub fn kind(&self) -> ScaleKind {
        self.config.kind
    }

    /// Returns the configuration.
    pub fn config(&self) -> &ScaleConfig {
        &self.config
    }

    /// Returns the effective domain as reported (mirrored when `reverse` is set).
    pub fn domain(&self) -> &Domain {
        &self.domain
    }

    /// Incremented every time the effective domain or the configuration changes.
    ///
    /// Views compare it against the revision they last built from.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Returns the number of live contributors.
    pub fn contributor_count(&self) -> usize {
        self.contributors.len()
    }

    /// Returns the sub-domain stored for `id`, if registered.
    pub fn contributor_domain(&self, id: &str) -> Option<&Domain> {
        self.contributors.get(id).map(|c| &c.domain)
    }

    /// Returns the padding fraction supplied by the caller.
    pub fn padding(&self) -> Option<f64> {
        self.padding
    }

    /// Stores (or overwrites) `id`'s sub-domain and recomputes the effective domain.
    ///
    /// [`Domain::Empty`] is accepted for every kind and contributes nothing. A sub-domain whose
    /// tag differs from the kind's value type is rejected and leaves the model untouched.
    pub fn set_domain(
        &mut self,
        subdomain: Domain,
        id: &ContributorId,
    ) -> Result<(), ScaleError> {
        let expected = self.config.kind.value_type();
        if let Some(found) = subdomain.value_type()
            && found != expected
        {
            warn!("scale rejected {found:?} sub-domain from `{id}`, expected {expected:?}");
            return Err(ScaleError::TypeMismatch { expected, found });
        }
        let domain = sanitize(subdomain);
        if let Some(existing) = self.contributors.get_mut(id.as_str()) {
            existing.domain = domain;
        } else {
            let seq = self.next_seq;
            self.next_seq += 1;
            self.contributors.insert(id.clone(), Contribution { seq, domain });
        }
        self.update_domain();
        Ok(())
    }

    /// Derives `id`'s sub-domain from raw data values, then behaves like [`Self::set_domain`].
    pub fn compute_and_set_domain(
        &mut self,
        values: &[DomainValue],
        id: &ContributorId,
    ) -> Result<(), ScaleError> {
        let subdomain = Domain::from_values(values)?;
        self.set_domain(subdomain, id)
    }

    /// Removes `id`'s sub-domain. Unknown ids are ignored.
    pub fn del_domain(&mut self, id: &ContributorId) {
        if self.contributors.remove(id.as_str()).is_some() {
            self.update_domain();
        } else {
            trace!("del_domain for unknown contributor `{id}` ignored");
        }
    }

    /// Sets the padding fraction applied to auto-computed continuous bounds.
    ///
    /// Only honored while `allow_padding` is set. Negative or non-finite fractions are ignored.
    pub fn set_padding(&mut self, padding: Option<f64>) {
        self.padding = padding.filter(|p| p.is_finite() && *p >= 0.0);
        self.update_domain();
    }

    /// Sets the `reverse` flag.
    pub fn set_reverse(&mut self, reverse: bool) {
        if self.config.reverse != reverse {
            self.config.reverse = reverse;
            self.version += 1;
            self.update_domain();
        }
    }

    /// Sets the `allow_padding` flag.
    pub fn set_allow_padding(&mut self, allow_padding: bool) {
        if self.config.allow_padding != allow_padding {
            self.config.allow_padding = allow_padding;
            self.version += 1;
            self.update_domain();
        }
    }

    /// Sets or clears the explicit lower bound.
    pub fn set_explicit_min(&mut self, min: Option<DomainValue>) -> Result<(), ScaleError> {
        let config = ScaleConfig {
            explicit_min: min,
            ..self.config.clone()
        };
        self.set_config(config)
    }

    /// Sets or clears the explicit upper bound.
    pub fn set_explicit_max(&mut self, max: Option<DomainValue>) -> Result<(), ScaleError> {
        let config = ScaleConfig {
            explicit_max: max,
            ..self.config.clone()
        };
        self.set_config(config)
    }

    /// Replaces the whole configuration.
    ///
    /// The new kind must accept the same value type as the old one, since stored sub-domains
    /// are kept.
    pub fn set_config(&mut self, config: ScaleConfig) -> Result<(), ScaleError> {
        config.validate()?;
        let expected = self.config.kind.value_type();
        let found = config.kind.value_type();
        if expected != found {
            return Err(ScaleError::TypeMismatch { expected, found });
        }
        if config != self.config {
            self.config = config;
            self.version += 1;
            self.update_domain();
        }
        Ok(())
    }

    /// Drains queued notifications in the order they were produced.
    pub fn drain_events(&mut self) -> impl Iterator<Item = ScaleEvent> + '_ {
        self.events.drain(..)
    }

    fn update_domain(&mut self) {
        let domain = self.compute_domain();
        if domain == self.domain {
            trace!("scale domain unchanged: {domain:?}");
            return;
        }
        debug!(
            "{:?} scale domain changed to {domain:?} ({} contributors)",
            self.config.kind,
            self.contributors.len()
        );
        self.domain = domain.clone();
        self.version += 1;
        self.events.push(ScaleEvent::DomainChanged(domain));
    }

    fn compute_domain(&self) -> Domain {
        let domain = match self.config.kind {
            ScaleKind::Ordinal | ScaleKind::OrdinalColor => self.ordinal_domain(),
            ScaleKind::Linear | ScaleKind::Log | ScaleKind::Color => self.numeric_domain(),
            ScaleKind::Date | ScaleKind::DateColor => self.date_domain(),
        };
        if self.config.reverse {
            domain.reversed()
        } else {
            domain
        }
    }

    fn ordinal_domain(&self) -> Domain {
        if let Some(categories) = &self.config.categories {
            return Domain::Ordinal(categories.clone());
        }
        let mut entries: Vec<&Contribution> = self.contributors.values().collect();
        entries.sort_by_key(|c| c.seq);
        let mut categories: Vec<String> = Vec::new();
        for entry in entries {
            for cat in entry.domain.categories() {
                if !categories.contains(cat) {
                    categories.push(cat.clone());
                }
            }
        }
        if categories.is_empty() {
            Domain::Empty
        } else {
            Domain::Ordinal(categories)
        }
    }

    fn numeric_domain(&self) -> Domain {
        let auto = union(self.contributors.values().filter_map(|c| match c.domain {
            Domain::Numeric(lo, hi) => Some((lo, hi)),
            _ => None,
        }));
        let explicit_min = self.config.explicit_min.as_ref().and_then(DomainValue::as_number);
        let explicit_max = self.config.explicit_max.as_ref().and_then(DomainValue::as_number);
        let Some(((lo, hi), auto_ends)) = resolve(auto, explicit_min, explicit_max) else {
            return Domain::Empty;
        };
        let (lo, hi) = match self.active_padding() {
            Some(f) => pad_span(lo, hi, f, auto_ends),
            None => (lo, hi),
        };
        Domain::Numeric(lo, hi)
    }

    fn date_domain(&self) -> Domain {
        let extent = union(self.contributors.values().filter_map(|c| match c.domain {
            Domain::Date(lo, hi) => Some((lo, hi)),
            _ => None,
        }));
        // Nothing registered: fall back to (epoch, now) so the mapping stays defined.
        let (auto, fallback) = match extent {
            Some(extent) => (extent, false),
            None => ((date::epoch(), (self.clock)()), true),
        };
        let explicit_min = self.config.explicit_min.as_ref().and_then(DomainValue::as_date);
        let explicit_max = self.config.explicit_max.as_ref().and_then(DomainValue::as_date);
        let Some(((lo, hi), auto_ends)) = resolve(Some(auto), explicit_min, explicit_max) else {
            return Domain::Empty;
        };
        let padded = match self.active_padding() {
            Some(f) if !fallback => pad_dates(lo, hi, f, auto_ends),
            _ => None,
        };
        let (lo, hi) = padded.unwrap_or((lo, hi));
        Domain::Date(lo, hi)
    }

    fn active_padding(&self) -> Option<f64> {
        if self.config.allow_padding {
            self.padding
        } else {
            None
        }
    }
}

/// Normalizes a stored sub-domain; non-finite numeric bounds contribute nothing.
fn sanitize(domain: Domain) -> Domain {
    match domain {
        Domain::Numeric(a, b) if !a.is_finite() || !b.is_finite() => Domain::Empty,
        Domain::Ordinal(cats) if cats.is_empty() => Domain::Empty,
        other => other.normalized(),
    }
}

/// Min of mins and max of maxes over normalized extents.
fn union<T: Copy + PartialOrd>(extents: impl Iterator<Item = (T, T)>) -> Option<(T, T)> {
    extents.fold(None, |acc, (lo, hi)| match acc {
        None => Some((lo, hi)),
        Some((min, max)) => Some((
            if lo < min { lo } else { min },
            if hi > max { hi } else { max },
        )),
    })
}

/// Applies per-bound explicit overrides and keeps the result ordered.
///
/// The flags report which ends still come from the auto-computed union.
fn resolve<T: Copy + PartialOrd>(
    auto: Option<(T, T)>,
    explicit_min: Option<T>,
    explicit_max: Option<T>,
) -> Option<((T, T), (bool, bool))> {
    let lo = explicit_min
        .map(|v| (v, false))
        .or(auto.map(|(lo, _)| (lo, true)))?;
    let hi = explicit_max
        .map(|v| (v, false))
        .or(auto.map(|(_, hi)| (hi, true)))?;
    if lo.0 > hi.0 {
        Some(((hi.0, lo.0), (hi.1, lo.1)))
    } else {
        Some(((lo.0, hi.0), (lo.1, hi.1)))
    }
}

/// Widens the auto-computed ends by `fraction` of the resolved span.
fn pad_span(lo: f64, hi: f64, fraction: f64, (pad_lo, pad_hi): (bool, bool)) -> (f64, f64) {
    let pad = (hi - lo) * fraction;
    (
        if pad_lo { lo - pad } else { lo },
        if pad_hi { hi + pad } else { hi },
    )
}

fn pad_dates(
    lo: NaiveDateTime,
    hi: NaiveDateTime,
    fraction: f64,
    auto_ends: (bool, bool),
) -> Option<(NaiveDateTime, NaiveDateTime)> {
    let (lo_ms, hi_ms) = pad_span(
        date::to_millis(lo) as f64,
        date::to_millis(hi) as f64,
        fraction,
        auto_ends,
    );
    Some((millis_to_date(lo_ms)?, millis_to_date(hi_ms)?))
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use super::*;
    use crate::ValueType;

    fn id(s: &str) -> ContributorId {
        ContributorId::new(s)
    }

    fn linear() -> ScaleModel {
        ScaleModel::new(ScaleKind::Linear).unwrap()
    }

    fn fixed_now() -> NaiveDateTime {
        date::from_millis(86_400_000).unwrap()
    }

    #[test]
    fn union_then_delete_shrinks_to_remaining_contributor() {
        let mut m = linear();
        m.set_domain(Domain::Numeric(0.0, 10.0), &id("a")).unwrap();
        m.set_domain(Domain::Numeric(5.0, 20.0), &id("b")).unwrap();
        assert_eq!(m.domain(), &Domain::Numeric(0.0, 20.0));

        m.del_domain(&id("a"));
        assert_eq!(m.domain(), &Domain::Numeric(5.0, 20.0));
    }

    #[test]
    fn union_is_independent_of_insertion_order() {
        let subs = [
            Domain::Numeric(3.0, 4.0),
            Domain::Numeric(-1.0, 2.0),
            Domain::Numeric(0.5, 9.0),
        ];
        let orders = [[0, 1, 2], [2, 1, 0], [1, 2, 0], [2, 0, 1]];
        for order in orders {
            let mut m = linear();
            for i in order {
                let c = id(&alloc::format!("c{i}"));
                m.set_domain(subs[i].clone(), &c).unwrap();
            }
            assert_eq!(m.domain(), &Domain::Numeric(-1.0, 9.0), "order {order:?}");
        }
    }

    #[test]
    fn deleting_interior_contributor_keeps_domain() {
        let mut m = linear();
        m.set_domain(Domain::Numeric(0.0, 100.0), &id("wide")).unwrap();
        m.set_domain(Domain::Numeric(10.0, 20.0), &id("inner")).unwrap();
        let _ = m.drain_events().count();
        let version = m.version();

        m.del_domain(&id("inner"));
        assert_eq!(m.domain(), &Domain::Numeric(0.0, 100.0));
        assert_eq!(m.version(), version);
        assert_eq!(m.drain_events().count(), 0);
    }

    #[test]
    fn deleting_unknown_contributor_is_a_noop() {
        let mut m = linear();
        m.set_domain(Domain::Numeric(1.0, 2.0), &id("a")).unwrap();
        m.del_domain(&id("never-registered"));
        assert_eq!(m.domain(), &Domain::Numeric(1.0, 2.0));
        assert_eq!(m.contributor_count(), 1);
    }

    #[test]
    fn overwriting_a_contributor_replaces_its_span() {
        let mut m = linear();
        m.set_domain(Domain::Numeric(0.0, 50.0), &id("a")).unwrap();
        m.set_domain(Domain::Numeric(10.0, 20.0), &id("a")).unwrap();
        assert_eq!(m.domain(), &Domain::Numeric(10.0, 20.0));
        assert_eq!(m.contributor_count(), 1);
    }

    #[test]
    fn zero_contributors_is_empty() {
        let mut m = linear();
        assert_eq!(m.domain(), &Domain::Empty);
        m.set_domain(Domain::Numeric(1.0, 2.0), &id("a")).unwrap();
        m.del_domain(&id("a"));
        assert_eq!(m.domain(), &Domain::Empty);
    }

    #[test]
    fn degenerate_single_value_domain_is_legal() {
        let mut m = linear();
        m.set_domain(Domain::Numeric(4.0, 4.0), &id("a")).unwrap();
        assert_eq!(m.domain(), &Domain::Numeric(4.0, 4.0));
    }

    #[test]
    fn type_mismatch_is_rejected_without_mutation() {
        let mut m = linear();
        m.set_domain(Domain::Numeric(0.0, 1.0), &id("a")).unwrap();
        let err = m
            .set_domain(Domain::Ordinal(vec!["x".into()]), &id("b"))
            .unwrap_err();
        assert_eq!(
            err,
            ScaleError::TypeMismatch {
                expected: ValueType::Number,
                found: ValueType::Category,
            }
        );
        assert_eq!(m.contributor_count(), 1);
        assert_eq!(m.domain(), &Domain::Numeric(0.0, 1.0));
    }

    #[test]
    fn compute_and_set_domain_uses_value_extent() {
        let mut m = linear();
        let values = [3.0, -4.0, 12.0].map(DomainValue::Number);
        m.compute_and_set_domain(&values, &id("pts")).unwrap();
        assert_eq!(m.domain(), &Domain::Numeric(-4.0, 12.0));
    }

    #[test]
    fn reverse_reports_swapped_bounds() {
        let config = ScaleConfig::new(ScaleKind::Linear).with_reverse(true);
        let mut m = ScaleModel::new(config).unwrap();
        m.set_domain(Domain::Numeric(2.0, 8.0), &id("a")).unwrap();
        assert_eq!(m.domain(), &Domain::Numeric(8.0, 2.0));

        m.set_reverse(false);
        assert_eq!(m.domain(), &Domain::Numeric(2.0, 8.0));
    }

    #[test]
    fn explicit_bound_overrides_only_its_side() {
        let mut m = ScaleModel::new(ScaleConfig::new(ScaleKind::Linear).with_min(0.0)).unwrap();
        m.set_domain(Domain::Numeric(5.0, 20.0), &id("a")).unwrap();
        assert_eq!(m.domain(), &Domain::Numeric(0.0, 20.0));

        m.set_explicit_max(Some(DomainValue::Number(15.0))).unwrap();
        assert_eq!(m.domain(), &Domain::Numeric(0.0, 15.0));

        m.set_explicit_min(None).unwrap();
        assert_eq!(m.domain(), &Domain::Numeric(5.0, 15.0));
    }

    #[test]
    fn explicit_bounds_without_contributors_define_domain() {
        let config = ScaleConfig::new(ScaleKind::Linear)
            .with_min(-1.0)
            .with_max(1.0);
        let m = ScaleModel::new(config).unwrap();
        assert_eq!(m.domain(), &Domain::Numeric(-1.0, 1.0));

        let half = ScaleModel::new(ScaleConfig::new(ScaleKind::Linear).with_min(-1.0)).unwrap();
        assert_eq!(half.domain(), &Domain::Empty);
    }

    #[test]
    fn explicit_bound_type_is_validated() {
        let config = ScaleConfig::new(ScaleKind::Linear).with_min("zero");
        let err = ScaleModel::new(config).unwrap_err();
        assert_eq!(
            err,
            ScaleError::TypeMismatch {
                expected: ValueType::Number,
                found: ValueType::Category,
            }
        );
    }

    #[test]
    fn padding_expands_auto_bounds_only_when_allowed() {
        let mut m = linear();
        m.set_domain(Domain::Numeric(0.0, 10.0), &id("a")).unwrap();
        m.set_padding(Some(0.1));
        assert_eq!(m.domain(), &Domain::Numeric(-1.0, 11.0));

        m.set_allow_padding(false);
        assert_eq!(m.domain(), &Domain::Numeric(0.0, 10.0));

        m.set_allow_padding(true);
        m.set_explicit_min(Some(DomainValue::Number(0.0))).unwrap();
        assert_eq!(m.domain(), &Domain::Numeric(0.0, 11.0));
    }

    #[test]
    fn padding_uses_span_after_explicit_overrides() {
        let mut m = ScaleModel::new(ScaleConfig::new(ScaleKind::Linear).with_min(-10.0)).unwrap();
        m.set_domain(Domain::Numeric(5.0, 10.0), &id("a")).unwrap();
        m.set_padding(Some(0.1));
        assert_eq!(m.domain(), &Domain::Numeric(-10.0, 12.0));
    }

    #[test]
    fn padding_applies_before_reversal() {
        let config = ScaleConfig::new(ScaleKind::Linear).with_reverse(true);
        let mut m = ScaleModel::new(config).unwrap();
        m.set_domain(Domain::Numeric(0.0, 10.0), &id("a")).unwrap();
        m.set_padding(Some(0.5));
        assert_eq!(m.domain(), &Domain::Numeric(15.0, -5.0));
    }

    #[test]
    fn negative_padding_is_ignored() {
        let mut m = linear();
        m.set_domain(Domain::Numeric(0.0, 10.0), &id("a")).unwrap();
        m.set_padding(Some(-0.2));
        assert_eq!(m.padding(), None);
        assert_eq!(m.domain(), &Domain::Numeric(0.0, 10.0));
    }

    #[test]
    fn ordinal_union_keeps_first_seen_order_across_contributors() {
        let mut m = ScaleModel::new(ScaleKind::Ordinal).unwrap();
        m.set_domain(Domain::Ordinal(vec!["b".into(), "a".into()]), &id("m1"))
            .unwrap();
        m.set_domain(Domain::Ordinal(vec!["a".into(), "c".into()]), &id("m2"))
            .unwrap();
        assert_eq!(
            m.domain(),
            &Domain::Ordinal(vec!["b".into(), "a".into(), "c".into()])
        );

        m.del_domain(&id("m1"));
        assert_eq!(m.domain(), &Domain::Ordinal(vec!["a".into(), "c".into()]));
    }

    #[test]
    fn ordinal_fixed_categories_win() {
        let config = ScaleConfig::new(ScaleKind::Ordinal).with_categories(["x", "y"]);
        let mut m = ScaleModel::new(config).unwrap();
        m.set_domain(Domain::Ordinal(vec!["z".into()]), &id("m1")).unwrap();
        assert_eq!(m.domain(), &Domain::Ordinal(vec!["x".into(), "y".into()]));
    }

    #[test]
    fn date_scale_falls_back_to_epoch_and_now() {
        let mut m = ScaleModel::new(ScaleKind::Date).unwrap().with_clock(fixed_now);
        assert_eq!(m.domain(), &Domain::Date(date::epoch(), fixed_now()));

        let a = date::parse_date("2001-01-01T00:00:00.000000").unwrap();
        let b = date::parse_date("2002-01-01T00:00:00.000000").unwrap();
        m.set_domain(Domain::Date(a, b), &id("a")).unwrap();
        assert_eq!(m.domain(), &Domain::Date(a, b));

        m.del_domain(&id("a"));
        assert_eq!(m.domain(), &Domain::Date(date::epoch(), fixed_now()));
    }

    #[test]
    fn date_padding_widens_by_fraction_of_span() {
        let mut m = ScaleModel::new(ScaleKind::Date).unwrap().with_clock(fixed_now);
        let a = date::from_millis(1_000).unwrap();
        let b = date::from_millis(2_000).unwrap();
        m.set_domain(Domain::Date(a, b), &id("a")).unwrap();
        m.set_padding(Some(0.5));
        assert_eq!(
            m.domain(),
            &Domain::Date(
                date::from_millis(500).unwrap(),
                date::from_millis(2_500).unwrap()
            )
        );
    }

    #[test]
    fn every_intermediate_domain_is_observable() {
        let mut m = linear();
        m.set_domain(Domain::Numeric(0.0, 1.0), &id("a")).unwrap();
        m.set_domain(Domain::Numeric(0.0, 5.0), &id("b")).unwrap();
        m.set_domain(Domain::Numeric(-5.0, 2.0), &id("c")).unwrap();
        let events: Vec<ScaleEvent> = m.drain_events().collect();
        assert_eq!(
            events,
            vec![
                ScaleEvent::DomainChanged(Domain::Numeric(0.0, 1.0)),
                ScaleEvent::DomainChanged(Domain::Numeric(0.0, 5.0)),
                ScaleEvent::DomainChanged(Domain::Numeric(-5.0, 5.0)),
            ]
        );
        assert_eq!(m.version(), 3);
        assert_eq!(m.drain_events().count(), 0);
    }

    #[test]
    fn non_finite_sub_domain_contributes_nothing() {
        let mut m = linear();
        m.set_domain(Domain::Numeric(f64::NAN, 3.0), &id("a")).unwrap();
        assert_eq!(m.domain(), &Domain::Empty);
        assert_eq!(m.contributor_domain("a"), Some(&Domain::Empty));
    }

    #[test]
    fn changing_value_type_through_config_is_rejected() {
        let mut m = linear();
        assert!(m.set_config(ScaleConfig::new(ScaleKind::Log)).is_ok());
        assert_eq!(m.kind(), ScaleKind::Log);
        assert!(m.set_config(ScaleConfig::new(ScaleKind::Ordinal)).is_err());
    }

    #[test]
    fn scoped_ids_follow_owner_dimension_convention() {
        assert_eq!(ContributorId::scoped("scatter3", "x").as_str(), "scatter3_x");
    }
}
