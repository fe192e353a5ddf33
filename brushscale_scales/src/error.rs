// Copyright 2025 the Brushscale Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors reported by scale models and views.

extern crate alloc;

use alloc::string::String;
use core::fmt;

use crate::{ScaleKind, ValueType};

/// Errors returned by [`ScaleModel`](crate::ScaleModel) and [`ScaleView`](crate::ScaleView).
///
/// These are local to a model/view pair. Callers typically skip the affected mark rather than
/// abort the whole figure.
#[derive(Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ScaleError {
    /// A value or sub-domain carries a different tag than the scale accepts.
    TypeMismatch {
        /// The value type the scale accepts.
        expected: ValueType,
        /// The value type that was supplied.
        found: ValueType,
    },
    /// The view's range cannot drive a mapping of this kind (e.g. pixels for a color scale).
    RangeMismatch {
        /// Kind of the scale the view was synced against.
        kind: ScaleKind,
    },
    /// A date string did not match the wire format.
    InvalidDate(String),
}

impl fmt::Display for ScaleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TypeMismatch { expected, found } => {
                write!(f, "expected a {expected:?} value, found {found:?}")
            }
            Self::RangeMismatch { kind } => {
                write!(f, "range is not compatible with a {kind:?} scale")
            }
            Self::InvalidDate(s) => write!(f, "invalid date string `{s}`"),
        }
    }
}

impl core::error::Error for ScaleError {}
