pub mod dice;
pub mod entry;
pub mod error;
pub mod evaluator;
pub mod host;
pub mod meta;
pub mod notation;
mod parser;
pub mod query;
pub mod roll;
