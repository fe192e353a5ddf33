// Copyright 2025 the Brushscale Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Float helpers for `no_std` builds.
//!
//! `f64::ln`, `f64::exp` and friends are not available in `core`. This trait dispatches to
//! `libm` when the `std` feature is off.

/// Float math helpers for `f64` in `no_std` mode.
pub(crate) trait FloatExt {
    fn floor(self) -> Self;
    fn round(self) -> Self;
    fn ln(self) -> Self;
    fn exp(self) -> Self;
}

#[cfg(all(not(feature = "std"), feature = "libm"))]
impl FloatExt for f64 {
    fn floor(self) -> Self {
        libm::floor(self)
    }

    fn round(self) -> Self {
        libm::round(self)
    }

    fn ln(self) -> Self {
        libm::log(self)
    }

    fn exp(self) -> Self {
        libm::exp(self)
    }
}

#[cfg(all(not(feature = "std"), not(feature = "libm")))]
compile_error!("brushscale_scales requires either the `std` or `libm` feature");
