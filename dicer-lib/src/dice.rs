use crate::roll;
use rand::Rng;

pub mod limits {
    /// Arbitrary limit to avoid oom, more dice than this are never thrown
    pub const MAX_DICE_AMOUNT: u64 = 5000;
}

/// Default random dice roller
pub struct RandomSource<'a, T: Rng> {
    pub generator: &'a mut T,
}

impl<T: Rng> roll::Source for RandomSource<'_, T> {
    fn throw(&mut self, sides: u64) -> u64 {
        self.generator.gen_range(1..=sides)
    }
}

/// Throw `count` dice with `sides` faces each, `None` past the dice limit.
///
/// A zero-sided die has no face to land on, so nothing is thrown for it and
/// the source is never asked for an empty range.
pub fn throw<S: roll::Source>(source: &mut S, count: u64, sides: u64) -> Option<Vec<u64>> {
    if count > limits::MAX_DICE_AMOUNT {
        return None;
    }
    if sides == 0 {
        return Some(Vec::new());
    }
    Some((0..count).map(|_| source.throw(sides)).collect())
}
