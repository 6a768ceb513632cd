use crate::terminal::Screen;
use dicer_lib::entry::Entry;
use dicer_lib::query::Query;
use tracing::info;
use tracing::warn;

const TRIGGER_SIGIL: char = '!';
const HELP_SIGIL: &str = "?";

/// What one input line asks for
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Command {
    Help,
    Query(Query),
    Trigger(usize),
}

impl Command {
    pub(crate) fn parse(line: &str) -> Self {
        let line = line.trim();
        if line == HELP_SIGIL {
            return Command::Help;
        }
        match line
            .strip_prefix(TRIGGER_SIGIL)
            .and_then(|index| index.trim().parse().ok())
        {
            Some(index) => Command::Trigger(index),
            None => Command::Query(Query::new(line)),
        }
    }
}

/// Keeps the last listing so its entries can be triggered later
pub(crate) struct Session {
    auto_trigger: bool,
    last: Vec<Entry>,
}

impl Session {
    pub(crate) fn new(auto_trigger: bool) -> Self {
        Session {
            auto_trigger,
            last: Vec::new(),
        }
    }

    pub(crate) fn handle<S: Screen>(&mut self, line: &str, screen: &mut S) {
        match Command::parse(line) {
            Command::Help => screen.help(),
            Command::Query(query) => {
                self.last = query.results();
                screen.list(&self.last);
                // the first entry is the typed roll, or the help entry when nothing parsed
                if self.auto_trigger {
                    if let Some(action) = self.last.first().and_then(Entry::action) {
                        action.trigger(screen);
                    }
                }
            }
            Command::Trigger(index) => match self.last.get(index) {
                Some(entry) => {
                    if !entry.trigger(screen) {
                        info!("Entry {} has nothing to roll", index);
                    }
                }
                None => warn!("No entry {} in the last listing", index),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dicer_lib::host::Notification;
    use dicer_lib::host::Notifier;
    use dicer_lib::meta;

    #[derive(Default)]
    struct Recorder {
        listed: Vec<Vec<Option<String>>>,
        shown: Vec<Notification>,
        helped: usize,
    }

    impl Notifier for Recorder {
        fn show_msg(&mut self, notification: &Notification) {
            self.shown.push(notification.clone());
        }
    }

    impl Screen for Recorder {
        fn list(&mut self, entries: &[Entry]) {
            self.listed.push(
                entries
                    .iter()
                    .map(|entry| entry.title().map(str::to_owned))
                    .collect(),
            );
        }

        fn help(&mut self) {
            self.helped += 1;
        }
    }

    #[test]
    fn parses_commands() {
        assert_eq!(Command::Help, Command::parse(" ? "));
        assert_eq!(Command::Trigger(3), Command::parse("!3"));
        assert_eq!(Command::Trigger(0), Command::parse("! 0"));
        assert_eq!(
            Command::Query(Query::new("2d6 1d20")),
            Command::parse("  2d6 1d20 ")
        );
        assert_eq!(Command::Query(Query::new("!x")), Command::parse("!x"));
    }

    #[test]
    fn auto_triggers_typed_roll() {
        let mut screen = Recorder::default();
        let mut session = Session::new(true);
        session.handle("2d6 junk", &mut screen);
        assert_eq!(1, screen.listed.len());
        assert_eq!(Some("2d6"), screen.listed[0][0].as_deref());
        assert_eq!(8, screen.listed[0].len());
        assert_eq!(1, screen.shown.len());
        assert_eq!(meta::ROLLING, screen.shown[0].title);
        assert!(screen.shown[0].body.starts_with("2d6: "));
    }

    #[test]
    fn nothing_parsed_rolls_nothing() {
        let mut screen = Recorder::default();
        let mut session = Session::new(true);
        session.handle("junk", &mut screen);
        assert_eq!(Some(meta::NAME), screen.listed[0][0].as_deref());
        assert!(screen.shown.is_empty());
    }

    #[test]
    fn triggers_listed_entry() {
        let mut screen = Recorder::default();
        let mut session = Session::new(false);
        session.handle("3d8+1", &mut screen);
        assert!(screen.shown.is_empty());

        session.handle("!0", &mut screen);
        assert_eq!(1, screen.shown.len());
        assert!(screen.shown[0].body.starts_with("3d8: "));

        session.handle("!7", &mut screen);
        assert_eq!(2, screen.shown.len());
        let value: u64 = screen.shown[1]
            .body
            .strip_prefix("1d100: ")
            .unwrap()
            .parse()
            .unwrap();
        assert!((1..=100).contains(&value));

        session.handle("!99", &mut screen);
        assert_eq!(2, screen.shown.len());
        assert_eq!(1, screen.listed.len());
    }

    #[test]
    fn help_entry_has_nothing_to_trigger() {
        let mut screen = Recorder::default();
        let mut session = Session::new(false);
        session.handle("!0", &mut screen);
        session.handle("nope", &mut screen);
        session.handle("!0", &mut screen);
        assert!(screen.shown.is_empty());
        session.handle("?", &mut screen);
        assert_eq!(1, screen.helped);
    }
}
