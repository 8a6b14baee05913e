//! Deterministic pseudo-random sequence, the only source of variability.
//!
//! A 32-bit linear congruential generator with the Numerical Recipes
//! constants. String seeds are folded to a `u32` with the classic
//! `hash * 31 + unit` polynomial over UTF-16 code units, so a given seed
//! string always selects the same stream of draws.
//!
//! Every generator in this crate owns its own `Sequence`. Sharing one across
//! subsystems would couple their outputs to call order; use
//! [`Sequence::salted`] to derive an independent stream instead.

/// LCG multiplier (Numerical Recipes).
const MULTIPLIER: u32 = 1_664_525;

/// LCG increment (Numerical Recipes).
const INCREMENT: u32 = 1_013_904_223;

/// 2^32 as a float, the LCG modulus.
const MODULUS: f64 = 4_294_967_296.0;

/// Seeded LCG producing floats in `[0, 1)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence {
    state: u32,
}

impl Sequence {
    /// Build a sequence from a string seed.
    ///
    /// Any string is accepted, including the empty string.
    #[must_use]
    pub fn new(seed: &str) -> Self {
        Self::from_state(hash_seed(seed))
    }

    /// Build a sequence for one subsystem: the seed with `-<salt>` appended.
    ///
    /// `Sequence::salted("brand", "spacing")` draws the same stream as
    /// `Sequence::new("brand-spacing")`.
    #[must_use]
    pub fn salted(seed: &str, salt: &str) -> Self {
        Self::new(&format!("{seed}-{salt}"))
    }

    /// Build a sequence directly from a numeric state.
    #[must_use]
    pub const fn from_state(state: u32) -> Self {
        Self { state }
    }

    /// Current internal state. Advances on every draw.
    #[must_use]
    pub const fn state(&self) -> u32 {
        self.state
    }

    /// Advance once and return a float in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        self.state = self.state.wrapping_mul(MULTIPLIER).wrapping_add(INCREMENT);
        f64::from(self.state) / MODULUS
    }

    /// Integer in `[min, max]` inclusive. Consumes one draw.
    ///
    /// Bounds given in reverse order are swapped. The span is computed in
    /// `i128`, so the full `i64` range is accepted.
    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    pub fn next_int(&mut self, min: i64, max: i64) -> i64 {
        let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
        let (lo, hi) = (i128::from(lo), i128::from(hi));
        let span = (hi - lo + 1) as f64;
        let offset = (self.next_f64() * span).floor() as i128;
        // Float rounding on spans past 2^53 can land one past the top.
        (lo + offset).clamp(lo, hi) as i64
    }

    /// Float in `[min, max)`. Consumes one draw.
    pub fn next_float(&mut self, min: f64, max: f64) -> f64 {
        self.next_f64() * (max - min) + min
    }

    /// Pick one element uniformly. Returns `None` for an empty slice
    /// without consuming a draw.
    pub fn choice<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        let idx = self.next_index(items.len() - 1);
        items.get(idx)
    }

    /// Fisher–Yates shuffle into a new vector. The input is untouched.
    pub fn shuffle<T: Clone>(&mut self, items: &[T]) -> Vec<T> {
        let mut shuffled = items.to_vec();
        for i in (1..shuffled.len()).rev() {
            let j = self.next_index(i);
            shuffled.swap(i, j);
        }
        shuffled
    }

    /// Index in `[0, max]` via [`Self::next_int`].
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_possible_wrap)]
    fn next_index(&mut self, max: usize) -> usize {
        self.next_int(0, max as i64) as usize
    }
}

impl Iterator for Sequence {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        Some(self.next_f64())
    }
}

/// Fold a seed string into the initial LCG state.
///
/// `hash = hash * 31 + unit` over UTF-16 code units with 32-bit signed
/// wrapping, then the absolute value. `"abc"` hashes to `96354`.
#[must_use]
pub fn hash_seed(seed: &str) -> u32 {
    let hash = seed.encode_utf16().fold(0i32, |hash, unit| {
        hash.wrapping_shl(5)
            .wrapping_sub(hash)
            .wrapping_add(i32::from(unit))
    });
    hash.unsigned_abs()
}

/// State whose next draw is exactly 0.5, so any `next_float(-x, x)` is 0.
#[cfg(test)]
pub(crate) const HALF_DRAW_STATE: u32 = 2_782_269_413;

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
