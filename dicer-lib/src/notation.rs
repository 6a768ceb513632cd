use crate::error::Error;
use crate::parser::Parser;
use std::str::FromStr;

/// One `NdM[+/-K]` term: roll `count` dice with `sides` faces and add `modifier`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RollSpec {
    count: u64,
    sides: u64,
    modifier: Option<i64>,
}

impl RollSpec {
    pub fn new(count: u64, sides: u64, modifier: Option<i64>) -> Self {
        Self {
            count,
            sides,
            modifier,
        }
    }

    /// A single unmodified die
    pub fn die(sides: u64) -> Self {
        Self::new(1, sides, None)
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn sides(&self) -> u64 {
        self.sides
    }

    pub fn modifier(&self) -> Option<i64> {
        self.modifier
    }
}

impl FromStr for RollSpec {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Parser::roll_spec(s)
    }
}

/// Renders the notation back, a present modifier always carries its sign
impl std::fmt::Display for RollSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}d{}", self.count, self.sides)?;
        if let Some(modifier) = self.modifier {
            write!(f, "{modifier:+}")?;
        }
        Ok(())
    }
}
