// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The multibrot recurrence, z -> z^n + c, starting from z = 0.  With
//! n = 2 this is the Mandelbrot set.  A point belongs to the set if
//! its orbit stays inside the escape radius forever; in practice we
//! give up after a fixed number of iterations and call it bounded.

use itertools;

use complex::ComplexNumber;
use num::traits::Zero;

/// The knobs for an escape-time evaluation.  Once built, treat as
/// read-only; the `with_` methods consume and return a modified copy.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct EscapeParams {
    // The n in z^n + c.
    exponent: u32,
    // Orbits still inside the radius after this many steps count as
    // bounded.
    max_iterations: usize,
    escape_radius: f64,
}

impl Default for EscapeParams {
    /// The classic Mandelbrot: squaring, radius 2, a thousand steps.
    fn default() -> Self {
        EscapeParams {
            exponent: 2,
            max_iterations: 1000,
            escape_radius: 2.0,
        }
    }
}

impl EscapeParams {
    /// Constructor.
    pub fn new(exponent: u32, max_iterations: usize, escape_radius: f64) -> Self {
        EscapeParams {
            exponent,
            max_iterations,
            escape_radius,
        }
    }

    /// Replace the exponent.
    pub fn with_exponent(self, exponent: u32) -> Self {
        EscapeParams { exponent, ..self }
    }

    /// Replace the iteration limit.
    pub fn with_max_iterations(self, max_iterations: usize) -> Self {
        EscapeParams {
            max_iterations,
            ..self
        }
    }

    /// Replace the escape radius.  Past about 1.3e154 the squared radius
    /// is infinite, and a point then only escapes once its orbit
    /// overflows to a non-finite value.
    pub fn with_escape_radius(self, escape_radius: f64) -> Self {
        EscapeParams {
            escape_radius,
            ..self
        }
    }

    /// The n in z^n + c.
    pub fn exponent(&self) -> u32 {
        self.exponent
    }

    /// The iteration limit.
    pub fn max_iterations(&self) -> usize {
        self.max_iterations
    }

    /// The escape radius.
    pub fn escape_radius(&self) -> f64 {
        self.escape_radius
    }
}

/// The orbit of `c` under z -> z^exponent + c, starting at z = 0.  The
/// origin itself is not yielded, so for any positive exponent the first
/// item is `c`.  The iterator never ends; bound it with `take`.
pub fn orbit(c: ComplexNumber, exponent: u32) -> impl Iterator<Item = ComplexNumber> {
    itertools::iterate(ComplexNumber::zero(), move |z| z.power_unsigned(exponent) + c).skip(1)
}

/// The 1-based step at which the orbit of `c` first lands outside the
/// escape radius, or `None` if it is still inside after
/// `max_iterations` steps.  An orbit point that has overflowed to
/// infinity or NaN counts as escaped.
pub fn escape_time(c: ComplexNumber, params: &EscapeParams) -> Option<usize> {
    let limit = params.escape_radius * params.escape_radius;
    let escaped = orbit(c, params.exponent)
        .take(params.max_iterations)
        .position(|z| !z.is_finite() || !(z.length_squared() <= limit))
        .map(|i| i + 1);
    trace!(point = %c, steps = ?escaped, "escape time");
    escaped
}

/// True when `c` has not escaped within the iteration limit.
pub fn is_bounded(c: ComplexNumber, params: &EscapeParams) -> bool {
    escape_time(c, params).is_none()
}
