// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The two ways complex arithmetic can refuse to produce a value.

use failure::Fail;
use std::result;

/// Failures raised by the checked operations on
/// [`ComplexNumber`](../complex/struct.ComplexNumber.html).  Neither is
/// recoverable by the number itself; both are handed straight back to
/// the caller.
#[derive(Debug, Fail, Clone, Copy, PartialEq, Eq)]
pub enum ComplexError {
    /// The divisor had a squared modulus of exactly zero.
    #[fail(display = "division by zero in complex divide")]
    DivisionByZero,

    /// `power` was asked for a negative exponent.
    #[fail(display = "negative exponent not supported: {}", exponent)]
    InvalidExponent {
        /// The rejected exponent.
        exponent: i32,
    },
}

/// Result alias for checked complex operations.
pub type Result<T> = result::Result<T, ComplexError>;
