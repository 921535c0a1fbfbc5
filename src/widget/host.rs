// Host-side ownership of a registry-created widget: create by tag, mount, unmount on drop.
use super::registry;
use super::{BoxedSink, Widget};
use crate::counter::CounterResult;

/// A widget instantiated from the registry and mounted on a sink.
/// It stays mounted until [`MountedWidget::unmount`] is called or the value is dropped.
pub struct MountedWidget {
    widget: Box<dyn Widget>,
}

impl MountedWidget {
    /// Registers the built-ins, creates the widget under `tag` and mounts it.
    /// `sink` receives one breakdown before this returns.
    pub fn create(tag: &str, sink: BoxedSink) -> CounterResult<Self> {
        registry::register_builtin_widgets();
        let mut widget = registry::create(tag)?;
        widget.mount(sink)?;
        log::debug!("Host mounted '{}'", widget.tag());
        Ok(MountedWidget { widget })
    }

    pub fn tag(&self) -> &'static str {
        self.widget.tag()
    }

    pub fn unmount(self) {
        drop(self);
    }
}

impl Drop for MountedWidget {
    fn drop(&mut self) {
        self.widget.unmount();
    }
}
