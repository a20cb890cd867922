// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The randomness seam of the draw engine.
//!
//! Draws only need a uniform integer in `1..=upper`. Production code uses
//! the thread-local generator from `rand`; tests substitute a scripted
//! source to make draws reproducible.

/// A source of uniformly distributed integers.
pub trait NumberSource {
    /// Returns a uniformly distributed integer in `1..=upper`.
    ///
    /// Callers never pass `upper == 0`.
    fn pick(&mut self, upper: u8) -> u8;
}

impl<S: NumberSource + ?Sized> NumberSource for &mut S {
    fn pick(&mut self, upper: u8) -> u8 {
        (**self).pick(upper)
    }
}

/// Number source backed by `rand`'s thread-local generator.
///
/// Not suitable where unpredictability matters; there is no cryptographic claim.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadNumberSource;

impl NumberSource for ThreadNumberSource {
    fn pick(&mut self, upper: u8) -> u8 {
        rand::random_range(1..=upper)
    }
}
