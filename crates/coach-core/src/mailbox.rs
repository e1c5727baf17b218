//! Single-slot mailbox for the one in-flight exchange.
//!
//! The spawned request task posts its result here; the UI takes it on the
//! next frame and applies it to the panel. The panel never has more than
//! one exchange pending, so a second result arriving before the first is
//! taken is a bug upstream: it is refused and logged.

use std::cell::RefCell;
use std::rc::Rc;
use coach_types::event::PanelEvent;

#[derive(Clone, Default)]
pub struct ReplySlot {
    slot: Rc<RefCell<Option<PanelEvent>>>,
}

impl ReplySlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deliver a result. Returns `false` if one is already waiting;
    /// the waiting result is kept.
    pub fn post(&self, event: PanelEvent) -> bool {
        let mut slot = self.slot.borrow_mut();
        if let Some(waiting) = slot.as_ref() {
            log::error!(
                "Refusing result for turn {}: turn {} not yet taken",
                event.turn_id(),
                waiting.turn_id()
            );
            return false;
        }
        *slot = Some(event);
        true
    }

    pub fn take(&self) -> Option<PanelEvent> {
        self.slot.borrow_mut().take()
    }
}
