use crate::roll::Outcome;
use itertools::Itertools;

/// Everything one triggered roll produced, in batch order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    outcomes: Vec<Outcome>,
}

impl Report {
    pub fn new(outcomes: Vec<Outcome>) -> Self {
        Report { outcomes }
    }

    pub fn outcomes(&self) -> &[Outcome] {
        &self.outcomes
    }

    /// Sum of every subtotal, only for batches of more than one spec
    pub fn grand_total(&self) -> Option<i64> {
        if self.outcomes.len() > 1 {
            Some(
                self.outcomes
                    .iter()
                    .fold(0i64, |acc, outcome| acc.saturating_add(outcome.subtotal())),
            )
        } else {
            None
        }
    }

    /// Multi-line text handed to the host notification
    pub fn body(&self) -> String {
        self.to_string()
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.outcomes.iter().format("\n"))?;
        if let Some(total) = self.grand_total() {
            write!(f, "\n\nTotal: {total}")?;
        }
        Ok(())
    }
}
