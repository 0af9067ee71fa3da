//! Injectable dice sources.
//!
//! Combat never reaches for a global RNG. Callers pass a [`DiceRoller`]:
//! [`RngDice`] for real games (seeded for reproducible runs) or
//! [`ScriptedDice`] to replay a known sequence of rolls.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Faces on a combat die.
pub const DIE_FACES: u8 = 6;

/// A source of six-sided die rolls.
pub trait DiceRoller {
    /// Roll one die, returning a value in `1..=6`.
    fn roll_d6(&mut self) -> u8;
}

impl<D: DiceRoller + ?Sized> DiceRoller for &mut D {
    fn roll_d6(&mut self) -> u8 {
        (**self).roll_d6()
    }
}

/// Uniform dice backed by any [`rand::Rng`].
#[derive(Debug, Clone)]
pub struct RngDice<R> {
    rng: R,
}

impl<R: Rng> RngDice<R> {
    /// Wrap an existing random number generator.
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngDice<StdRng> {
    /// Dice that produce the same sequence for the same seed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> DiceRoller for RngDice<R> {
    fn roll_d6(&mut self) -> u8 {
        self.rng.random_range(1..=DIE_FACES)
    }
}

/// Replays a fixed list of rolls, wrapping around when exhausted.
///
/// Values outside `1..=6` are clamped. An empty script always rolls 1.
///
/// # Example
///
/// ```
/// use conquest_core::dice::{DiceRoller, ScriptedDice};
///
/// let mut dice = ScriptedDice::new([6, 1]);
/// assert_eq!(dice.roll_d6(), 6);
/// assert_eq!(dice.roll_d6(), 1);
/// assert_eq!(dice.roll_d6(), 6);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScriptedDice {
    rolls: Vec<u8>,
    cursor: usize,
}

impl ScriptedDice {
    /// Create dice that yield `rolls` in order.
    pub fn new(rolls: impl IntoIterator<Item = u8>) -> Self {
        Self {
            rolls: rolls
                .into_iter()
                .map(|r| r.clamp(1, DIE_FACES))
                .collect(),
            cursor: 0,
        }
    }

    /// Number of rolls consumed so far.
    #[must_use]
    pub const fn rolls_made(&self) -> usize {
        self.cursor
    }
}

impl DiceRoller for ScriptedDice {
    fn roll_d6(&mut self) -> u8 {
        let roll = if self.rolls.is_empty() {
            1
        } else {
            self.rolls[self.cursor % self.rolls.len()]
        };
        self.cursor += 1;
        roll
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_dice_in_range() {
        let mut dice = RngDice::seeded(7);
        for _ in 0..1000 {
            let roll = dice.roll_d6();
            assert!((1..=DIE_FACES).contains(&roll));
        }
    }

    #[test]
    fn test_seeded_dice_repeat() {
        let mut a = RngDice::seeded(42);
        let mut b = RngDice::seeded(42);
        let first: Vec<u8> = (0..32).map(|_| a.roll_d6()).collect();
        let second: Vec<u8> = (0..32).map(|_| b.roll_d6()).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_rng_dice_hit_every_face() {
        let mut dice = RngDice::seeded(3);
        let mut seen = [false; DIE_FACES as usize];
        for _ in 0..600 {
            seen[usize::from(dice.roll_d6() - 1)] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_scripted_dice_wrap_and_clamp() {
        let mut dice = ScriptedDice::new([0, 9, 4]);
        assert_eq!(dice.roll_d6(), 1);
        assert_eq!(dice.roll_d6(), 6);
        assert_eq!(dice.roll_d6(), 4);
        assert_eq!(dice.roll_d6(), 1);
        assert_eq!(dice.rolls_made(), 4);
    }

    #[test]
    fn test_empty_script_rolls_one() {
        let mut dice = ScriptedDice::default();
        assert_eq!(dice.roll_d6(), 1);
        assert_eq!(dice.roll_d6(), 1);
    }

    #[test]
    fn test_mut_ref_is_a_roller() {
        fn roll_twice(mut dice: impl DiceRoller) -> (u8, u8) {
            (dice.roll_d6(), dice.roll_d6())
        }
        let mut dice = ScriptedDice::new([2, 5]);
        assert_eq!(roll_twice(&mut dice), (2, 5));
        assert_eq!(dice.rolls_made(), 2);
    }
}
