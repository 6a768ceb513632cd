use crate::parser;
use std::num::ParseIntError;

/// Reasons a term is not a usable dice notation
#[derive(Debug)]
pub enum Error {
    /// The term does not match `NdM[+/-K]`
    Pest(Box<pest::error::Error<parser::Rule>>),
    /// A digit group does not fit its integer type
    Number(ParseIntError),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pest(e) => write!(f, "{e}"),
            Self::Number(e) => write!(f, "number out of range: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Pest(e) => Some(e.as_ref()),
            Self::Number(e) => Some(e),
        }
    }
}

impl From<pest::error::Error<parser::Rule>> for Error {
    fn from(value: pest::error::Error<parser::Rule>) -> Self {
        Self::Pest(Box::new(value))
    }
}

impl From<ParseIntError> for Error {
    fn from(value: ParseIntError) -> Self {
        Self::Number(value)
    }
}

/// Crate Result type
pub type Result<T> = std::result::Result<T, Error>;
