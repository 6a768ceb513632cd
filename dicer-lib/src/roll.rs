pub mod outcome;
pub mod report;

pub use outcome::Outcome;
pub use report::Report;

use crate::notation::RollSpec;
use itertools::Itertools;
use std::ops::Deref;

/// Interface for rolling dices
pub trait Source {
    fn throw(&mut self, sides: u64) -> u64;
}

/// Roll specs in the order their terms were typed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Batch(Vec<RollSpec>);

impl Batch {
    pub fn new(specs: Vec<RollSpec>) -> Self {
        Batch(specs)
    }

    /// Space separated notations, e.g. `1d6 2d20-3`
    pub fn title(&self) -> String {
        self.0.iter().join(" ")
    }
}

impl Deref for Batch {
    type Target = [RollSpec];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromIterator<RollSpec> for Batch {
    fn from_iter<I: IntoIterator<Item = RollSpec>>(iter: I) -> Self {
        Batch(iter.into_iter().collect())
    }
}

impl std::fmt::Display for Batch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.title())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_joins_with_spaces() {
        let batch: Batch = ["1d6", "2d20-3", "4d8+2"]
            .into_iter()
            .map(|term| term.parse::<RollSpec>().unwrap())
            .collect();
        assert_eq!("1d6 2d20-3 4d8+2", batch.title());
        assert_eq!(3, batch.len());
    }

    #[test]
    fn empty_title() {
        assert_eq!("", Batch::default().title());
    }
}
