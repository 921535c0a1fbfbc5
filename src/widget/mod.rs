// Widget module - mount/unmount lifecycle, periodic refresh and the tag registry.

pub mod counter_widget;
pub mod host;
pub mod refresher;
pub mod registry;

#[cfg(test)]
mod tests;

use crate::counter::CounterResult;

/// Tag the counter registers under.
pub const SOBER_COUNTER_TAG: &str = "sober-counter";

pub type BoxedSink = Box<dyn refresher::DisplaySink + Send>;

/// A hostable widget. Mounted instances own exactly one refresh task.
pub trait Widget: Send {
    fn tag(&self) -> &'static str;

    /// Publishes one value immediately, then keeps publishing every refresh period.
    /// Mounting an already-mounted widget replaces its refresh task.
    fn mount(&mut self, sink: BoxedSink) -> CounterResult<()>;

    /// Cancels the refresh task. A no-op when not mounted.
    fn unmount(&mut self);

    fn is_mounted(&self) -> bool;
}

// Re-export the main types and functions for easy access
pub use counter_widget::SoberCounter;
pub use host::MountedWidget;
pub use refresher::{DisplaySink, REFRESH_PERIOD, RefreshHandle};
pub use registry::{WidgetFactory, create, is_registered, register, register_builtin_widgets};
