use crate::entry::Entry;
use crate::entry::Icon;
use crate::entry::RollAction;
use crate::meta;
use crate::notation::RollSpec;
use crate::roll;
use crate::roll::Batch;
use crate::roll::Outcome;
use crate::roll::Report;

/// Represent an evaluator
pub struct Evaluator;

impl Evaluator {
    /// Throw every spec in order
    pub fn eval<S: roll::Source>(specs: &[RollSpec], source: &mut S) -> Report {
        Report::new(
            specs
                .iter()
                .map(|&spec| Outcome::throw(spec, source))
                .collect(),
        )
    }

    /// Entry for `specs` with its title computed now and its roll deferred.
    /// No specs gives a neutral entry with neither title nor action.
    pub fn entry(specs: &[RollSpec]) -> Entry {
        if specs.is_empty() {
            return Entry::default();
        }
        let batch = Batch::new(specs.to_vec());
        Entry::new(batch.title())
            .with_subtitle(meta::PRESS_TO_ROLL)
            .with_icon(Icon::DICE)
            .with_action(RollAction::new(batch))
    }
}
