//! State-change notifications published by the controller.
//!
//! The [`EventHub`] is a plain synchronous publish layer: observers register a
//! callback, and every [`AppEvent`] is delivered to all of them before the
//! triggering operation returns. The hub holds no state of its own; event
//! payloads are recomputed from the session each time.
//!
//! Delivery order across subscribers is unspecified; events are never queued
//! or dropped.

use std::path::PathBuf;

use crate::core::result::CommandResult;

/// Notification published after controller operations.
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    /// A repository was opened, created, or cloned.
    RepositoryOpened { path: PathBuf },
    /// The open repository was closed or replaced.
    RepositoryClosed,
    /// An operation reached the engine and produced this result.
    CommandExecuted { result: CommandResult },
    /// The changed-files partition was recomputed; flattened path list.
    FilesChanged { paths: Vec<PathBuf> },
    /// The current branch changed (or the no-branch sentinel).
    BranchChanged { name: String },
    /// An operation returned a failed result with this message.
    ErrorOccurred { message: String },
}

impl AppEvent {
    /// Short event kind name, for logs.
    pub fn name(&self) -> &'static str {
        match self {
            AppEvent::RepositoryOpened { .. } => "repository_opened",
            AppEvent::RepositoryClosed => "repository_closed",
            AppEvent::CommandExecuted { .. } => "command_executed",
            AppEvent::FilesChanged { .. } => "files_changed",
            AppEvent::BranchChanged { .. } => "branch_changed",
            AppEvent::ErrorOccurred { .. } => "error_occurred",
        }
    }
}

type Subscriber = Box<dyn Fn(&AppEvent)>;

/// Synchronous publish/subscribe hub.
#[derive(Default)]
pub struct EventHub {
    subscribers: Vec<Subscriber>,
}

impl EventHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a callback for every future event.
    pub fn subscribe(&mut self, subscriber: impl Fn(&AppEvent) + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    /// Deliver `event` to every subscriber, synchronously.
    pub fn emit(&self, event: &AppEvent) {
        for subscriber in &self.subscribers {
            subscriber(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_every_subscriber_receives_every_event() {
        let first: Rc<RefCell<Vec<String>>> = Rc::new(RefCell::new(Vec::new()));
        let second: Rc<RefCell<Vec<String>>> = Rc::new(RefCell::new(Vec::new()));

        let mut hub = EventHub::new();
        let sink = Rc::clone(&first);
        hub.subscribe(move |event| sink.borrow_mut().push(event.name().to_string()));
        let sink = Rc::clone(&second);
        hub.subscribe(move |event| sink.borrow_mut().push(event.name().to_string()));

        hub.emit(&AppEvent::RepositoryClosed);
        hub.emit(&AppEvent::BranchChanged {
            name: "main".to_string(),
        });

        let expected = vec!["repository_closed".to_string(), "branch_changed".to_string()];
        assert_eq!(*first.borrow(), expected);
        assert_eq!(*second.borrow(), expected);
    }

    #[test]
    fn test_delivery_is_synchronous_with_emit() {
        let seen = Rc::new(RefCell::new(0usize));
        let mut hub = EventHub::new();
        let sink = Rc::clone(&seen);
        hub.subscribe(move |_| *sink.borrow_mut() += 1);

        hub.emit(&AppEvent::RepositoryClosed);
        assert_eq!(*seen.borrow(), 1);
    }
}
