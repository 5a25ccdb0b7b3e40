//! Synchronous change notification.
//!
//! Observers run in subscription order, on the caller's thread, after a
//! mutation has completed. A registry is mutably borrowed while it notifies,
//! so an observer cannot re-enter it through safe code; one that reaches the
//! registry through `Rc<RefCell<_>>` will panic on the borrow instead.

use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::{GameId, PlayerId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Observer<E> = Box<dyn FnMut(&E)>;

pub struct ChangeNotifier<E> {
    observers: Vec<(SubscriptionId, Observer<E>)>,
    next_id: u64,
}

impl<E: fmt::Debug> ChangeNotifier<E> {
    pub fn new() -> Self {
        Self {
            observers: Vec::new(),
            next_id: 0,
        }
    }

    pub fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut(&E) + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Returns whether an observer was removed
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(sub, _)| *sub != id);
        self.observers.len() != before
    }

    pub fn notify(&mut self, event: E) {
        debug!("Notifying {} observer(s) of {:?}", self.observers.len(), event);
        for (_, observer) in self.observers.iter_mut() {
            observer(&event);
        }
    }
}

impl<E: fmt::Debug> Default for ChangeNotifier<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> fmt::Debug for ChangeNotifier<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChangeNotifier")
            .field("observers", &self.observers.len())
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerEvent {
    Created { player_id: PlayerId },
    Updated { player_id: PlayerId },
    Deleted { player_id: PlayerId },
    Cleared,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    Created { game_id: GameId },
    Updated { game_id: GameId },
    Deleted { game_id: GameId },
    PlayerAdded { game_id: GameId, player_id: PlayerId },
    PlayerRemoved { game_id: GameId, player_id: PlayerId },
    Cleared,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SettingsEvent {
    Updated,
    Reset,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_observers_receive_events_in_order() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut notifier = ChangeNotifier::new();

        let first = Rc::clone(&seen);
        notifier.subscribe(move |e: &SettingsEvent| first.borrow_mut().push(("first", e.clone())));
        let second = Rc::clone(&seen);
        notifier.subscribe(move |e: &SettingsEvent| second.borrow_mut().push(("second", e.clone())));

        notifier.notify(SettingsEvent::Reset);

        assert_eq!(
            *seen.borrow(),
            vec![("first", SettingsEvent::Reset), ("second", SettingsEvent::Reset)]
        );
    }

    #[test]
    fn test_unsubscribe_stops_delivery() {
        let count = Rc::new(RefCell::new(0));
        let mut notifier = ChangeNotifier::new();

        let counter = Rc::clone(&count);
        let id = notifier.subscribe(move |_: &SettingsEvent| *counter.borrow_mut() += 1);
        notifier.notify(SettingsEvent::Updated);

        assert!(notifier.unsubscribe(id));
        assert!(!notifier.unsubscribe(id));

        notifier.notify(SettingsEvent::Updated);
        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn test_events_serialize_with_type_tag() {
        let json = serde_json::to_string(&SettingsEvent::Reset).unwrap();
        assert_eq!(json, r#"{"type":"Reset"}"#);
    }
}
