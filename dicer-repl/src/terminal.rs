use colored::Colorize;
use dicer_lib::entry::Entry;
use dicer_lib::meta;
use dicer_lib::host::Notification;
use dicer_lib::host::Notifier;
use termimad::crossterm::style::Color;
use termimad::MadSkin;
use tracing::debug;

/// Where a session shows its listings, help and roll notifications
pub(crate) trait Screen: Notifier {
    fn list(&mut self, entries: &[Entry]);
    fn help(&mut self);
}

/// Shows launcher entries and roll notifications on stdout
pub(crate) struct Terminal {
    skin: MadSkin,
}

impl Terminal {
    pub(crate) fn new() -> Self {
        let mut skin = MadSkin::default();
        skin.bold.set_fg(Color::Yellow);
        skin.inline_code.set_fg(Color::Magenta);
        Terminal { skin }
    }
}

impl Screen for Terminal {
    fn list(&mut self, entries: &[Entry]) {
        for (index, entry) in entries.iter().enumerate() {
            let title = entry.title().unwrap_or_default();
            let marker = if entry.action().is_some() { "!" } else { " " };
            println!(
                "{}{:>2} {} {} {}",
                marker.dimmed(),
                index,
                title.bold(),
                entry.subtitle().lines().next().unwrap_or_default().dimmed(),
                format!("[{}]", entry.score()).cyan(),
            );
            for line in entry.subtitle().lines().skip(1) {
                println!("     {}", line.dimmed());
            }
        }
    }

    fn help(&mut self) {
        println!("{}\n{}", meta::DESCRIPTION.bold(), meta::HELP);
    }
}

impl Notifier for Terminal {
    fn show_msg(&mut self, notification: &Notification) {
        debug!("Notification icon `{}`", notification.icon.path());
        let body = notification
            .body
            .lines()
            .map(|line| {
                if line.is_empty() {
                    String::new()
                } else {
                    format!("`{line}`")
                }
            })
            .collect::<Vec<_>>()
            .join("\n");
        println!(
            "{}",
            self.skin
                .term_text(&format!("**{}**\n{}", notification.title, body))
        );
    }
}
