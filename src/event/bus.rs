use std::cell::RefCell;

use crate::event::AppEvent;

/// Collects the events emitted by panels during one frame.
///
/// Panels only hold a shared reference, so they can emit while the app
/// state they render from is borrowed immutably. The shell drains the queue
/// once the frame's UI has been built.
#[derive(Default)]
pub struct EventBus {
    queue: RefCell<Vec<AppEvent>>,
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("queue", &format!("<{} pending>", self.queue.borrow().len()))
            .finish()
    }
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an event for the shell
    pub fn emit(&self, event: AppEvent) {
        log::debug!("event emitted: {}", event.name());
        self.queue.borrow_mut().push(event);
    }

    /// Take every queued event, oldest first
    pub fn drain(&self) -> Vec<AppEvent> {
        std::mem::take(&mut *self.queue.borrow_mut())
    }

    pub fn is_empty(&self) -> bool {
        self.queue.borrow().is_empty()
    }
}
