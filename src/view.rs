use anyhow::{anyhow, Context, Error, Result};
use std::str::FromStr;

use crate::observer::Observer;
use crate::store::ButtonStore;

/// A single user interaction with the light buttons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    Toggle(usize),
    Color(String),
    Clear,
    Restore(String),
    Send,
}

impl FromStr for UiEvent {
    type Err = Error;

    fn from_str(line: &str) -> Result<UiEvent> {
        let line = line.trim();
        let (command, arg) = match line.find(char::is_whitespace) {
            Some(split) => (&line[..split], line[split..].trim()),
            None => (line, ""),
        };

        match (command, arg) {
            ("toggle", arg) if !arg.is_empty() => {
                let index = arg
                    .parse()
                    .with_context(|| format!("Button index must be a non-negative integer, got {:?}", arg))?;
                Ok(UiEvent::Toggle(index))
            }
            ("color", arg) if !arg.is_empty() => Ok(UiEvent::Color(arg.to_string())),
            ("restore", arg) if !arg.is_empty() => Ok(UiEvent::Restore(arg.to_string())),
            ("clear", "") => Ok(UiEvent::Clear),
            ("send", "") => Ok(UiEvent::Send),
            _ => Err(anyhow!("Unrecognized event: {:?}", line)),
        }
    }
}

/// The view that owns the button store for as long as it is on screen.
///
/// Every mutation is followed by a notification to each observer, so the
/// store itself never has to know who is drawing it.
pub struct LightView {
    store: ButtonStore,
    observers: Vec<Box<dyn Observer>>,
}

impl LightView {
    pub fn new(store: ButtonStore) -> Self {
        Self {
            store,
            observers: Vec::new(),
        }
    }

    /// New observers get the current state straight away so they can draw the first frame.
    pub fn subscribe(&mut self, mut observer: Box<dyn Observer>) {
        observer.notify(&self.store);
        self.observers.push(observer);
    }

    pub fn store(&self) -> &ButtonStore {
        &self.store
    }

    /// Applies `event` to the store.
    ///
    /// Returns the serialized selection for `Send`, nothing otherwise.
    /// A failed event leaves the store untouched and notifies nobody.
    pub fn handle(&mut self, event: UiEvent) -> Result<Option<String>> {
        log::debug!("Handling {:?}", event);

        match event {
            UiEvent::Toggle(index) => self
                .store
                .toggle_selection(index)
                .context("Failed to toggle selection")?,
            UiEvent::Color(color) => self.store.change_color(&color),
            UiEvent::Clear => self.store.clear_selection(),
            UiEvent::Restore(json) => self
                .store
                .restore_selection(&json)
                .context("Failed to restore selection")?,
            UiEvent::Send => {
                let selection = self
                    .store
                    .serialize_selection()
                    .context("Failed to serialize selection")?;
                return Ok(Some(selection));
            }
        }

        for observer in self.observers.iter_mut() {
            observer.notify(&self.store);
        }

        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct Recorder(Rc<RefCell<Vec<Vec<usize>>>>);

    impl Observer for Recorder {
        fn notify(&mut self, store: &ButtonStore) {
            self.0.borrow_mut().push(store.selection().to_vec());
        }
    }

    fn recorded_view() -> (LightView, Rc<RefCell<Vec<Vec<usize>>>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut view = LightView::new(ButtonStore::new());
        view.subscribe(Box::new(Recorder(seen.clone())));
        (view, seen)
    }

    #[test]
    fn parses_events() {
        assert_eq!("toggle 2".parse::<UiEvent>().unwrap(), UiEvent::Toggle(2));
        assert_eq!("  color  dark red ".parse::<UiEvent>().unwrap(), UiEvent::Color("dark red".to_string()));
        assert_eq!("restore [0, 1]".parse::<UiEvent>().unwrap(), UiEvent::Restore("[0, 1]".to_string()));
        assert_eq!("clear".parse::<UiEvent>().unwrap(), UiEvent::Clear);
        assert_eq!("send".parse::<UiEvent>().unwrap(), UiEvent::Send);
    }

    #[test]
    fn rejects_malformed_events() {
        for line in &["", "toggle", "toggle -1", "toggle one", "color", "send now", "blink 3"] {
            assert!(line.parse::<UiEvent>().is_err(), "{:?} should not parse", line);
        }
    }

    #[test]
    fn subscribe_notifies_with_current_state() {
        let (_view, seen) = recorded_view();

        assert_eq!(*seen.borrow(), vec![Vec::<usize>::new()]);
    }

    #[test]
    fn mutations_notify_observers() {
        let (mut view, seen) = recorded_view();

        view.handle(UiEvent::Toggle(0)).unwrap();
        view.handle(UiEvent::Toggle(2)).unwrap();
        view.handle(UiEvent::Color("white".to_string())).unwrap();

        assert_eq!(seen.borrow().len(), 4);
        assert_eq!(seen.borrow()[3], vec![0, 2]);
    }

    #[test]
    fn send_returns_selection_without_notifying() {
        let (mut view, seen) = recorded_view();
        view.handle(UiEvent::Toggle(0)).unwrap();
        view.handle(UiEvent::Toggle(2)).unwrap();

        let sent = view.handle(UiEvent::Send).unwrap();

        assert_eq!(sent.as_deref(), Some("[0,2]"));
        assert_eq!(seen.borrow().len(), 3);
    }

    #[test]
    fn failed_event_does_not_notify() {
        let (mut view, seen) = recorded_view();

        assert!(view.handle(UiEvent::Toggle(7)).is_err());
        assert!(view.handle(UiEvent::Restore("[1, 1]".to_string())).is_err());

        assert_eq!(seen.borrow().len(), 1);
        assert!(view.store().selection().is_empty());
    }
}
