#![deny(missing_docs)]
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Complex arithmetic for iterated fractal formulas
//!
//! Fractals like the Mandelbrot set are drawn by taking a point c on
//! the complex plane and repeatedly applying z -> z^n + c, starting
//! from zero, to see whether z runs off to infinity.  Everything in
//! that loop is complex arithmetic, and almost all of it is
//! multiplication: raising z to the nth power is done by repeated
//! squaring, so even large exponents cost only a handful of products.
//!
//! [`ComplexNumber`](complex/struct.ComplexNumber.html) is the value
//! type.  The [`multibrot`](multibrot/index.html) module runs the
//! recurrence itself and reports how quickly a point escapes.

extern crate failure;
extern crate itertools;
extern crate num;
#[macro_use]
extern crate tracing;

pub mod complex;
pub mod error;
pub mod multibrot;

pub use complex::ComplexNumber;
pub use error::{ComplexError, Result};
pub use multibrot::{escape_time, is_bounded, orbit, EscapeParams};
