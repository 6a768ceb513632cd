use crate::dice;
use crate::dice::limits;
use crate::notation::RollSpec;
use crate::roll::Source;
use itertools::Itertools;

/// The dice thrown for one spec and what they add up to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    spec: RollSpec,
    rolls: Vec<u64>,
    subtotal: i64,
    /// Past the dice limit, nothing was thrown
    over_limit: bool,
}

impl Outcome {
    /// Throw every die of `spec` from `source`
    pub fn throw<S: Source>(spec: RollSpec, source: &mut S) -> Self {
        match dice::throw(source, spec.count(), spec.sides()) {
            Some(rolls) => Self::with_rolls(spec, rolls),
            None => Outcome {
                over_limit: true,
                ..Self::with_rolls(spec, Vec::new())
            },
        }
    }

    /// Build from already thrown dice
    pub fn with_rolls(spec: RollSpec, rolls: Vec<u64>) -> Self {
        let subtotal = rolls
            .iter()
            .fold(spec.modifier().unwrap_or(0), |acc, &roll| {
                acc.saturating_add(i64::try_from(roll).unwrap_or(i64::MAX))
            });
        Outcome {
            spec,
            rolls,
            subtotal,
            over_limit: false,
        }
    }

    pub fn spec(&self) -> &RollSpec {
        &self.spec
    }

    pub fn rolls(&self) -> &[u64] {
        &self.rolls
    }

    pub fn subtotal(&self) -> i64 {
        self.subtotal
    }

    pub fn is_over_limit(&self) -> bool {
        self.over_limit
    }

    /// A lone unmodified die already reads as its own total
    pub fn shows_subtotal(&self) -> bool {
        self.rolls.len() > 1 || self.spec.modifier().is_some()
    }
}

/// `2d20: 4, 17 (-3) = 18`
impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}d{}:", self.spec.count(), self.spec.sides())?;
        if self.over_limit {
            write!(f, " not rolled, over {} dice", limits::MAX_DICE_AMOUNT)?;
        } else if !self.rolls.is_empty() {
            write!(f, " {}", self.rolls.iter().format(", "))?;
        }
        if let Some(modifier) = self.spec.modifier() {
            write!(f, " ({modifier:+})")?;
        }
        if self.shows_subtotal() {
            write!(f, " = {}", self.subtotal)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(term: &str, rolls: Vec<u64>) -> Outcome {
        Outcome::with_rolls(term.parse().unwrap(), rolls)
    }

    #[test]
    fn single_die_hides_subtotal() {
        let res = outcome("1d20", vec![13]);
        assert_eq!(13, res.subtotal());
        assert_eq!("1d20: 13", res.to_string());
    }

    #[test]
    fn many_dice_show_subtotal() {
        let res = outcome("3d6", vec![2, 6, 5]);
        assert_eq!(13, res.subtotal());
        assert_eq!("3d6: 2, 6, 5 = 13", res.to_string());
    }

    #[test]
    fn modifier_shows_subtotal() {
        assert_eq!("1d8: 3 (+2) = 5", outcome("1d8+2", vec![3]).to_string());
        assert_eq!("2d20: 4, 17 (-3) = 18", outcome("2d20-3", vec![4, 17]).to_string());
        assert_eq!("1d6: 4 (+0) = 4", outcome("1d6+0", vec![4]).to_string());
    }

    #[test]
    fn no_dice_keeps_modifier() {
        let res = outcome("0d6+3", vec![]);
        assert_eq!(3, res.subtotal());
        assert_eq!("0d6: (+3) = 3", res.to_string());
        let res = outcome("0d6", vec![]);
        assert_eq!(0, res.subtotal());
        assert_eq!("0d6:", res.to_string());
    }

    struct Sixes;

    impl Source for Sixes {
        fn throw(&mut self, _sides: u64) -> u64 {
            6
        }
    }

    #[test]
    fn over_limit_keeps_modifier_only() {
        let spec = RollSpec::new(limits::MAX_DICE_AMOUNT + 1, 6, Some(2));
        let res = Outcome::throw(spec, &mut Sixes);
        assert!(res.is_over_limit());
        assert!(res.rolls().is_empty());
        assert_eq!(2, res.subtotal());
        assert_eq!("5001d6: not rolled, over 5000 dice (+2) = 2", res.to_string());

        let res = Outcome::throw(RollSpec::new(limits::MAX_DICE_AMOUNT, 6, None), &mut Sixes);
        assert!(!res.is_over_limit());
        assert_eq!(6 * limits::MAX_DICE_AMOUNT as i64, res.subtotal());
    }
}
