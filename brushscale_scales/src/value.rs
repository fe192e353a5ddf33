// Copyright 2025 the Brushscale Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Domain values and domains.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use chrono::NaiveDateTime;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use crate::ScaleError;
use crate::date;

/// The tag of a [`DomainValue`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValueType {
    /// Continuous numbers.
    Number,
    /// Continuous dates.
    Date,
    /// Discrete categorical tokens.
    Category,
}

/// A single data value as seen by a scale.
///
/// Numbers and dates are ordered and interpolate; categories only take part in membership and
/// first-seen order.
#[derive(Clone, Debug, PartialEq)]
pub enum DomainValue {
    /// A numeric value.
    Number(f64),
    /// A UTC-naive date.
    Date(NaiveDateTime),
    /// A categorical token.
    Category(String),
}

impl DomainValue {
    /// Returns the tag of this value.
    pub fn value_type(&self) -> ValueType {
        match self {
            Self::Number(_) => ValueType::Number,
            Self::Date(_) => ValueType::Date,
            Self::Category(_) => ValueType::Category,
        }
    }

    /// Builds a date value from the persisted wire format.
    pub fn parse_date(s: &str) -> Result<Self, ScaleError> {
        date::parse_date(s).map(Self::Date)
    }

    /// Returns the number, if this is a numeric value.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the date, if this is a date value.
    pub fn as_date(&self) -> Option<NaiveDateTime> {
        match self {
            Self::Date(d) => Some(*d),
            _ => None,
        }
    }

    /// Returns the token, if this is a categorical value.
    pub fn as_category(&self) -> Option<&str> {
        match self {
            Self::Category(c) => Some(c),
            _ => None,
        }
    }

    /// Interpolates between two continuous values of the same tag.
    ///
    /// Dates interpolate in epoch milliseconds. Returns `None` for categories, mixed tags, or
    /// dates that fall outside the representable range.
    pub fn interpolate(&self, other: &Self, t: f64) -> Option<Self> {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => Some(Self::Number(a + (b - a) * t)),
            (Self::Date(a), Self::Date(b)) => {
                let a = date::to_millis(*a) as f64;
                let b = date::to_millis(*b) as f64;
                millis_to_date(a + (b - a) * t).map(Self::Date)
            }
            _ => None,
        }
    }
}

impl From<f64> for DomainValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<NaiveDateTime> for DomainValue {
    fn from(value: NaiveDateTime) -> Self {
        Self::Date(value)
    }
}

impl From<&str> for DomainValue {
    fn from(value: &str) -> Self {
        Self::Category(value.into())
    }
}

impl From<String> for DomainValue {
    fn from(value: String) -> Self {
        Self::Category(value)
    }
}

/// Converts fractional epoch milliseconds back to a date, rounding to the nearest millisecond.
pub(crate) fn millis_to_date(millis: f64) -> Option<NaiveDateTime> {
    if !millis.is_finite() {
        return None;
    }
    let rounded = millis.round();
    if rounded < i64::MIN as f64 || rounded > i64::MAX as f64 {
        return None;
    }
    #[allow(clippy::cast_possible_truncation, reason = "range checked against i64 above")]
    date::from_millis(rounded as i64)
}

/// A scale domain: a continuous `(min, max)` pair or an ordered list of categories.
///
/// The bounds of a continuous domain are normally ordered; a reversed scale *reports*
/// `(max, min)`.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Domain {
    /// No contributor has supplied anything. Mappings over an empty domain are undefined.
    #[default]
    Empty,
    /// A numeric extent.
    Numeric(f64, f64),
    /// A date extent.
    Date(NaiveDateTime, NaiveDateTime),
    /// Distinct categories in first-seen order.
    Ordinal(Vec<String>),
}

impl Domain {
    /// Returns the tag of the values in this domain, or `None` if it is empty.
    pub fn value_type(&self) -> Option<ValueType> {
        match self {
            Self::Empty => None,
            Self::Numeric(..) => Some(ValueType::Number),
            Self::Date(..) => Some(ValueType::Date),
            Self::Ordinal(_) => Some(ValueType::Category),
        }
    }

    /// Returns `true` if the domain holds nothing to map.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Empty => true,
            Self::Ordinal(cats) => cats.is_empty(),
            Self::Numeric(..) | Self::Date(..) => false,
        }
    }

    /// Computes the domain spanned by raw values.
    ///
    /// Numbers and dates produce an extent; non-finite numbers are ignored. Categories produce
    /// a deduplicated list in first-seen order. All values must share one tag.
    pub fn from_values(values: &[DomainValue]) -> Result<Self, ScaleError> {
        let Some(first) = values.first() else {
            return Ok(Self::Empty);
        };
        let expected = first.value_type();
        if let Some(bad) = values.iter().find(|v| v.value_type() != expected) {
            return Err(ScaleError::TypeMismatch {
                expected,
                found: bad.value_type(),
            });
        }
        Ok(match expected {
            ValueType::Number => {
                let mut min = f64::INFINITY;
                let mut max = f64::NEG_INFINITY;
                for v in values.iter().filter_map(DomainValue::as_number) {
                    if v.is_finite() {
                        min = min.min(v);
                        max = max.max(v);
                    }
                }
                if min.is_finite() && max.is_finite() {
                    Self::Numeric(min, max)
                } else {
                    Self::Empty
                }
            }
            ValueType::Date => {
                let mut dates = values.iter().filter_map(DomainValue::as_date);
                let Some(d0) = dates.next() else {
                    return Ok(Self::Empty);
                };
                let (min, max) = dates.fold((d0, d0), |(lo, hi), d| (lo.min(d), hi.max(d)));
                Self::Date(min, max)
            }
            ValueType::Category => {
                let mut cats: Vec<String> = Vec::new();
                for c in values.iter().filter_map(DomainValue::as_category) {
                    if !cats.iter().any(|seen| seen == c) {
                        cats.push(c.into());
                    }
                }
                Self::Ordinal(cats)
            }
        })
    }

    /// Returns the first reported bound (the minimum, unless reversed).
    pub fn start(&self) -> Option<DomainValue> {
        match self {
            Self::Numeric(a, _) => Some(DomainValue::Number(*a)),
            Self::Date(a, _) => Some(DomainValue::Date(*a)),
            Self::Empty | Self::Ordinal(_) => None,
        }
    }

    /// Returns the second reported bound (the maximum, unless reversed).
    pub fn end(&self) -> Option<DomainValue> {
        match self {
            Self::Numeric(_, b) => Some(DomainValue::Number(*b)),
            Self::Date(_, b) => Some(DomainValue::Date(*b)),
            Self::Empty | Self::Ordinal(_) => None,
        }
    }

    /// Returns the categories of an ordinal domain (empty otherwise).
    pub fn categories(&self) -> &[String] {
        match self {
            Self::Ordinal(cats) => cats,
            _ => &[],
        }
    }

    /// Returns a copy with continuous bounds ordered `min <= max`.
    pub fn normalized(&self) -> Self {
        match self {
            Self::Numeric(a, b) if a > b => Self::Numeric(*b, *a),
            Self::Date(a, b) if a > b => Self::Date(*b, *a),
            other => other.clone(),
        }
    }

    /// Returns the mirrored domain: swapped bounds, or reversed category order.
    pub fn reversed(&self) -> Self {
        match self {
            Self::Empty => Self::Empty,
            Self::Numeric(a, b) => Self::Numeric(*b, *a),
            Self::Date(a, b) => Self::Date(*b, *a),
            Self::Ordinal(cats) => Self::Ordinal(cats.iter().rev().cloned().collect()),
        }
    }

    /// Reported continuous bounds as plain numbers (dates in epoch milliseconds).
    pub(crate) fn continuous_bounds(&self) -> Option<(f64, f64)> {
        match self {
            Self::Numeric(a, b) => Some((*a, *b)),
            Self::Date(a, b) => Some((date::to_millis(*a) as f64, date::to_millis(*b) as f64)),
            Self::Empty | Self::Ordinal(_) => None,
        }
    }
}
