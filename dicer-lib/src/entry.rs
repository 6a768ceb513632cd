use crate::dice::RandomSource;
use crate::evaluator::Evaluator;
use crate::host::Notification;
use crate::host::Notifier;
use crate::meta;
use crate::roll;
use crate::roll::Batch;
use crate::roll::Report;
use rand::Rng;
use tracing::debug;

/// Reference to an image the host knows how to load
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Icon(&'static str);

impl Icon {
    pub const DICE: Icon = Icon(meta::ICON_PATH);

    pub fn path(&self) -> &'static str {
        self.0
    }
}

/// Deferred roll of a batch, nothing is thrown until it is triggered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RollAction {
    batch: Batch,
}

impl RollAction {
    pub fn new(batch: Batch) -> Self {
        RollAction { batch }
    }

    pub fn batch(&self) -> &Batch {
        &self.batch
    }

    /// Roll the batch using the default Rng source
    pub fn roll(&self) -> Report {
        self.roll_with(&mut rand::thread_rng())
    }

    /// Roll the batch using the provided Rng source
    pub fn roll_with<R: Rng>(&self, generator: &mut R) -> Report {
        self.roll_with_source(&mut RandomSource { generator })
    }

    /// Roll the batch using the provided source
    pub fn roll_with_source<S: roll::Source>(&self, source: &mut S) -> Report {
        Evaluator::eval(&self.batch, source)
    }

    /// Roll and hand the report to the host, always succeeds
    pub fn trigger<N: Notifier>(&self, notifier: &mut N) -> bool {
        self.trigger_with_source(
            &mut RandomSource {
                generator: &mut rand::thread_rng(),
            },
            notifier,
        )
    }

    pub fn trigger_with_source<S: roll::Source, N: Notifier>(
        &self,
        source: &mut S,
        notifier: &mut N,
    ) -> bool {
        let body = self.roll_with_source(source).body();
        debug!("Rolled `{}` into `{}`", self.batch, body.replace('\n', " | "));
        notifier.show_msg(&Notification::rolling(body));
        true
    }
}

/// One launcher result record
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Entry {
    title: Option<String>,
    subtitle: String,
    score: i64,
    icon: Option<Icon>,
    query_text: Option<String>,
    action: Option<RollAction>,
}

impl Entry {
    pub fn new(title: impl Into<String>) -> Self {
        Entry {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = subtitle.into();
        self
    }

    pub fn with_score(mut self, score: i64) -> Self {
        self.score = score;
        self
    }

    pub fn with_icon(mut self, icon: Icon) -> Self {
        self.icon = Some(icon);
        self
    }

    /// Text the host puts back in its search box when this entry is selected
    pub fn with_query_text(mut self, text: impl Into<String>) -> Self {
        self.query_text = Some(text.into());
        self
    }

    pub fn with_action(mut self, action: RollAction) -> Self {
        self.action = Some(action);
        self
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn subtitle(&self) -> &str {
        &self.subtitle
    }

    pub fn score(&self) -> i64 {
        self.score
    }

    pub fn icon(&self) -> Option<Icon> {
        self.icon
    }

    pub fn query_text(&self) -> Option<&str> {
        self.query_text.as_deref()
    }

    pub fn action(&self) -> Option<&RollAction> {
        self.action.as_ref()
    }

    /// Run the action if any, `false` when there is nothing to run
    pub fn trigger<N: Notifier>(&self, notifier: &mut N) -> bool {
        self.action
            .as_ref()
            .map_or(false, |action| action.trigger(notifier))
    }

    pub fn trigger_with_source<S: roll::Source, N: Notifier>(
        &self,
        source: &mut S,
        notifier: &mut N,
    ) -> bool {
        self.action
            .as_ref()
            .map_or(false, |action| action.trigger_with_source(source, notifier))
    }
}
