use crate::entry::Entry;
use crate::evaluator::Evaluator;
use crate::meta;
use crate::notation::RollSpec;
use crate::roll::Batch;
use tracing::debug;

/// Search text split into whitespace delimited terms
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    search: String,
    terms: Vec<String>,
}

impl Query {
    pub fn new(search: &str) -> Self {
        Query {
            search: search.to_owned(),
            terms: search.split_whitespace().map(str::to_owned).collect(),
        }
    }

    pub fn from_terms<I, T>(terms: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let terms: Vec<String> = terms.into_iter().map(Into::into).collect();
        Query {
            search: terms.join(" "),
            terms,
        }
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Every term that parses, in order; the others are skipped
    pub fn batch(&self) -> Batch {
        self.terms
            .iter()
            .filter_map(|term| match term.parse::<RollSpec>() {
                Ok(spec) => Some(spec),
                Err(error) => {
                    debug!("Skipped term `{}`: {}", term, error);
                    None
                }
            })
            .collect()
    }

    /// The custom roll or the help entry, followed by the quick rolls
    pub fn results(&self) -> Vec<Entry> {
        let batch = self.batch();
        let first = if batch.is_empty() {
            Entry::new(meta::NAME)
                .with_subtitle(meta::HELP)
                .with_score(meta::HELP_SCORE)
                .with_query_text(self.search.as_str())
        } else {
            Evaluator::entry(&batch)
                .with_subtitle(meta::ADD_MORE_ROLLS)
                .with_score(meta::CUSTOM_SCORE)
        };
        std::iter::once(first).chain(quick_rolls()).collect()
    }
}

/// One single die entry per quick roll size
pub fn quick_rolls() -> impl Iterator<Item = Entry> {
    meta::QUICK_ROLLS
        .into_iter()
        .map(|(sides, score)| Evaluator::entry(&[RollSpec::die(sides)]).with_score(score))
}
