use super::refresher::{DisplaySink, RefreshHandle};
use super::{BoxedSink, SOBER_COUNTER_TAG, Widget};
use crate::counter::{Clock, CounterError, CounterResult, ElapsedBreakdown, SystemClock, origin_instant};
use time::OffsetDateTime;

/// The elapsed-time counter. Holds its refresh handle only while mounted.
pub struct SoberCounter<C: Clock + Clone = SystemClock> {
    clock: C,
    origin: OffsetDateTime,
    handle: Option<RefreshHandle>,
}

impl SoberCounter<SystemClock> {
    /// Counter against the compiled-in origin and the wall clock.
    pub fn new() -> CounterResult<Self> {
        Ok(Self::with_clock(origin_instant()?, SystemClock))
    }
}

impl<C: Clock + Clone> SoberCounter<C> {
    pub fn with_clock(origin: OffsetDateTime, clock: C) -> Self {
        Self {
            clock,
            origin,
            handle: None,
        }
    }

    /// Breakdown for the clock's current instant.
    pub fn current(&self) -> ElapsedBreakdown {
        ElapsedBreakdown::between(self.origin, self.clock.now())
    }
}

impl<C: Clock + Clone> Widget for SoberCounter<C> {
    fn tag(&self) -> &'static str {
        SOBER_COUNTER_TAG
    }

    fn mount(&mut self, mut sink: BoxedSink) -> CounterResult<()> {
        if let Some(previous) = self.handle.take() {
            log::debug!("{}: remounted while mounted, replacing refresh handle", SOBER_COUNTER_TAG);
            previous.cancel();
        }
        // Fail before publishing so a host outside a runtime sees nothing at all
        tokio::runtime::Handle::try_current().map_err(|_| CounterError::NoRuntime {
            tag: SOBER_COUNTER_TAG,
        })?;

        sink.publish(self.current());
        self.handle = Some(RefreshHandle::start(self.clock.clone(), self.origin, sink)?);
        log::info!("{} mounted", SOBER_COUNTER_TAG);
        Ok(())
    }

    fn unmount(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.cancel();
            log::info!("{} unmounted", SOBER_COUNTER_TAG);
        }
    }

    fn is_mounted(&self) -> bool {
        self.handle.is_some()
    }
}

impl<C: Clock + Clone> Drop for SoberCounter<C> {
    fn drop(&mut self) {
        self.unmount();
    }
}
