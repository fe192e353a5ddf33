// Copyright 2025 the Brushscale Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scale kinds and per-scale configuration.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use crate::{DomainValue, ScaleError, ValueType};

/// The closed set of scale kinds.
///
/// Each kind picks one value type for its domain and one mapping strategy in
/// [`ScaleView`](crate::ScaleView).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScaleKind {
    /// Affine numeric → pixel mapping.
    Linear,
    /// Symmetric-log numeric → pixel mapping (well defined across zero).
    Log,
    /// Affine date → pixel mapping.
    Date,
    /// Category → evenly spaced band position.
    Ordinal,
    /// Numeric → color gradient.
    Color,
    /// Date → color gradient.
    DateColor,
    /// Category → palette color.
    OrdinalColor,
}

impl ScaleKind {
    /// The value type this kind accepts in its domain.
    pub fn value_type(self) -> ValueType {
        match self {
            Self::Linear | Self::Log | Self::Color => ValueType::Number,
            Self::Date | Self::DateColor => ValueType::Date,
            Self::Ordinal | Self::OrdinalColor => ValueType::Category,
        }
    }

    /// Whether this kind maps to colors rather than positions.
    pub fn is_color(self) -> bool {
        matches!(self, Self::Color | Self::DateColor | Self::OrdinalColor)
    }

    /// Whether the domain is a `(min, max)` extent.
    pub fn is_continuous(self) -> bool {
        self.value_type() != ValueType::Category
    }
}

/// Configuration of a [`ScaleModel`](crate::ScaleModel).
#[derive(Clone, Debug, PartialEq)]
pub struct ScaleConfig {
    /// Scale kind.
    pub kind: ScaleKind,
    /// Report the domain mirrored (`(max, min)`, or categories in reverse order).
    pub reverse: bool,
    /// Allow a caller-supplied padding fraction to widen the auto-computed bounds.
    pub allow_padding: bool,
    /// Overrides the lower bound. The upper bound stays auto-computed unless also set.
    pub explicit_min: Option<DomainValue>,
    /// Overrides the upper bound. The lower bound stays auto-computed unless also set.
    pub explicit_max: Option<DomainValue>,
    /// Fixed category list for ordinal kinds; replaces the contributor union entirely.
    pub categories: Option<Vec<String>>,
    /// Midpoint of a diverging color gradient (color kinds only).
    pub mid: Option<DomainValue>,
    /// Width of the linear region around zero for [`ScaleKind::Log`].
    pub log_constant: f64,
}

impl ScaleConfig {
    /// Creates a config for `kind` with no overrides.
    pub fn new(kind: ScaleKind) -> Self {
        Self {
            kind,
            reverse: false,
            allow_padding: true,
            explicit_min: None,
            explicit_max: None,
            categories: None,
            mid: None,
            log_constant: 1.0,
        }
    }

    /// Enables or disables reversal.
    pub fn with_reverse(mut self, reverse: bool) -> Self {
        self.reverse = reverse;
        self
    }

    /// Enables or disables padding.
    pub fn with_allow_padding(mut self, allow_padding: bool) -> Self {
        self.allow_padding = allow_padding;
        self
    }

    /// Sets an explicit lower bound.
    pub fn with_min(mut self, min: impl Into<DomainValue>) -> Self {
        self.explicit_min = Some(min.into());
        self
    }

    /// Sets an explicit upper bound.
    pub fn with_max(mut self, max: impl Into<DomainValue>) -> Self {
        self.explicit_max = Some(max.into());
        self
    }

    /// Fixes the category list of an ordinal kind.
    pub fn with_categories<S: Into<String>>(
        mut self,
        categories: impl IntoIterator<Item = S>,
    ) -> Self {
        self.categories = Some(categories.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the diverging midpoint of a color gradient.
    pub fn with_mid(mut self, mid: impl Into<DomainValue>) -> Self {
        self.mid = Some(mid.into());
        self
    }

    /// Sets the symlog constant. Non-finite or non-positive values fall back to `1`.
    pub fn with_log_constant(mut self, constant: f64) -> Self {
        self.log_constant = if constant.is_finite() && constant > 0.0 {
            constant
        } else {
            1.0
        };
        self
    }

    /// Checks that every configured bound carries the kind's value type.
    ///
    /// Explicit bounds on categorical kinds are not meaningful and are ignored by the model;
    /// use [`ScaleConfig::with_categories`] instead.
    pub fn validate(&self) -> Result<(), ScaleError> {
        let expected = self.kind.value_type();
        for value in [&self.explicit_min, &self.explicit_max, &self.mid]
            .into_iter()
            .flatten()
        {
            let found = value.value_type();
            if found != expected {
                return Err(ScaleError::TypeMismatch { expected, found });
            }
        }
        if self.categories.is_some() && expected != ValueType::Category {
            return Err(ScaleError::TypeMismatch {
                expected,
                found: ValueType::Category,
            });
        }
        Ok(())
    }
}

impl From<ScaleKind> for ScaleConfig {
    fn from(kind: ScaleKind) -> Self {
        Self::new(kind)
    }
}
