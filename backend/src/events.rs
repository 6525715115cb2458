//! Cross-component signaling without coupling the sender to receivers.
//!
//! The view layer registers callbacks on the bus; any component can emit
//! one event and every listener sees it, in subscription order. Execution
//! is single-threaded, so listeners run inline on the emitting call.

use std::cell::RefCell;

use crate::storage::Page;

/// Application-level signals any component may emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    /// Switch the main view to a page
    Navigate(Page),
    /// Open the blank "new service" form
    AddNewService,
    /// Open the settings panel
    OpenSettingsPanel,
}

type Listener = Box<dyn Fn(&AppEvent)>;

/// Dispatches events to any number of independent listeners. The sender
/// never learns who is listening.
#[derive(Default)]
pub struct EventBus {
    listeners: RefCell<Vec<Listener>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener for every subsequent event.
    pub fn subscribe(&self, listener: impl Fn(&AppEvent) + 'static) {
        self.listeners.borrow_mut().push(Box::new(listener));
    }

    /// Deliver `event` to every registered listener.
    pub fn emit(&self, event: AppEvent) {
        for listener in self.listeners.borrow().iter() {
            listener(&event);
        }
    }
}
