use crate::entry::Icon;
use crate::meta;

/// A message the host shows once a roll is triggered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub body: String,
    pub icon: Icon,
}

impl Notification {
    pub fn rolling(body: String) -> Self {
        Notification {
            title: meta::ROLLING.to_owned(),
            body,
            icon: Icon::DICE,
        }
    }
}

/// Interface to the host notification mechanism
pub trait Notifier {
    fn show_msg(&mut self, notification: &Notification);
}

/// Keeps notifications around for hosts that render them later
impl Notifier for Vec<Notification> {
    fn show_msg(&mut self, notification: &Notification) {
        self.push(notification.clone());
    }
}
