use crate::counter::ElapsedBreakdown;
use crate::widget::host::MountedWidget;
use crate::widget::refresher::DisplaySink;
use crate::widget::SOBER_COUNTER_TAG;
use dioxus::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

impl DisplaySink for SyncSignal<ElapsedBreakdown> {
    fn publish(&mut self, breakdown: ElapsedBreakdown) {
        self.set(breakdown);
    }
}

/// Mounts the registered counter for the lifetime of the calling component.
/// The returned signal is written by the widget's refresh task; `Err` carries the mount failure.
pub fn use_elapsed_timer() -> Result<SyncSignal<ElapsedBreakdown>, String> {
    let breakdown = use_signal_sync(ElapsedBreakdown::default);
    let (mounted, error) = use_hook(move || {
        match MountedWidget::create(SOBER_COUNTER_TAG, Box::new(breakdown)) {
            Ok(widget) => (Rc::new(RefCell::new(Some(widget))), None),
            Err(e) => {
                log::error!("Failed to mount {}: {}", SOBER_COUNTER_TAG, e);
                (Rc::new(RefCell::new(None)), Some(e.to_string()))
            }
        }
    });
    use_drop(move || {
        if let Some(widget) = mounted.borrow_mut().take() {
            widget.unmount();
        }
    });
    match error {
        Some(message) => Err(message),
        None => Ok(breakdown),
    }
}
