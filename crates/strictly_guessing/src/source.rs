//! Injectable randomness for target draws.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::ops::RangeInclusive;
use tracing::{debug, instrument};

/// Inclusive range the target is drawn from.
pub const TARGET_RANGE: RangeInclusive<u8> = 1..=10;

/// Source of target values.
///
/// The state machine calls [`NumberSource::draw`] exactly once per round,
/// on `Start`. Implementations must return a value inside `range`.
pub trait NumberSource {
    /// Draws a value uniformly from `range`.
    fn draw(&mut self, range: RangeInclusive<u8>) -> u8;
}

impl<S: NumberSource + ?Sized> NumberSource for &mut S {
    fn draw(&mut self, range: RangeInclusive<u8>) -> u8 {
        (**self).draw(range)
    }
}

impl<S: NumberSource + ?Sized> NumberSource for Box<S> {
    fn draw(&mut self, range: RangeInclusive<u8>) -> u8 {
        (**self).draw(range)
    }
}

/// Source used when none is injected.
pub type DefaultSource = RngSource<StdRng>;

/// Number source backed by a [`rand`] generator.
#[derive(Debug, Clone)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    /// Wraps an existing generator.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSource<StdRng> {
    /// Deterministic source for reproducible sessions.
    #[instrument]
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Source seeded from operating system entropy.
    #[instrument]
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_os_rng())
    }

    /// Seeded when `seed` is given, entropy otherwise.
    pub fn from_seed_option(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }
}

impl<R: Rng> NumberSource for RngSource<R> {
    fn draw(&mut self, range: RangeInclusive<u8>) -> u8 {
        let value = self.rng.random_range(range);
        debug!(value, "Drew number");
        value
    }
}

/// Replays a fixed sequence of values and counts draws.
///
/// Values cycle when the sequence is exhausted and are clamped into the
/// requested range. An empty sequence always yields the range start.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    values: Vec<u8>,
    draws: usize,
}

impl ScriptedSource {
    /// Source that yields `values` in order, cycling.
    pub fn new(values: impl Into<Vec<u8>>) -> Self {
        Self {
            values: values.into(),
            draws: 0,
        }
    }

    /// Source that always yields `value`.
    pub fn constant(value: u8) -> Self {
        Self::new(vec![value])
    }

    /// Number of draws made so far.
    pub fn draws(&self) -> usize {
        self.draws
    }
}

impl NumberSource for ScriptedSource {
    fn draw(&mut self, range: RangeInclusive<u8>) -> u8 {
        let value = if self.values.is_empty() {
            *range.start()
        } else {
            self.values[self.draws % self.values.len()].clamp(*range.start(), *range.end())
        };
        self.draws += 1;
        value
    }
}
