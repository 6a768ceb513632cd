use crate::error::Result;
use crate::notation::RollSpec;
use pest::Parser as _;
use pest_derive::Parser;

/// Pest parser
#[derive(Parser)]
#[grammar = "dicer.pest"]
pub struct Parser;

impl Parser {
    /// Parse a whole term as `NdM[+/-K]`
    pub fn roll_spec(term: &str) -> Result<RollSpec> {
        let (mut count, mut sides, mut modifier) = (0, 0, None);
        for pair in Self::parse(Rule::notation, term)?.flatten() {
            match pair.as_rule() {
                Rule::count => count = pair.as_str().parse()?,
                Rule::sides => sides = pair.as_str().parse()?,
                Rule::modifier => modifier = Some(pair.as_str().parse()?),
                _ => (),
            }
        }
        Ok(RollSpec::new(count, sides, modifier))
    }
}
