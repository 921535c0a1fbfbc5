// Periodic recompute-and-publish loop plus the handle that owns it.
use crate::counter::{Clock, CounterError, CounterResult, ElapsedBreakdown};
use std::sync::{Arc, Mutex, MutexGuard};
use time::OffsetDateTime;
use tokio::task::JoinHandle;
use tokio::time::{Duration, Instant, MissedTickBehavior};

/// Interval between recomputations.
pub const REFRESH_PERIOD: Duration = Duration::from_millis(1000);

/// Destination for freshly computed breakdowns.
pub trait DisplaySink {
    fn publish(&mut self, breakdown: ElapsedBreakdown);
}

impl<S: DisplaySink + ?Sized> DisplaySink for Box<S> {
    fn publish(&mut self, breakdown: ElapsedBreakdown) {
        (**self).publish(breakdown);
    }
}

impl DisplaySink for tokio::sync::mpsc::UnboundedSender<ElapsedBreakdown> {
    fn publish(&mut self, breakdown: ElapsedBreakdown) {
        if self.send(breakdown).is_err() {
            log::debug!("Display receiver dropped, breakdown discarded");
        }
    }
}

/// Recomputes the breakdown at `first_tick` and every [`REFRESH_PERIOD`] after it.
/// Never returns; the caller stops it by dropping or aborting the future.
pub async fn run_refresh_loop<C, S>(clock: C, origin: OffsetDateTime, first_tick: Instant, mut sink: S)
where
    C: Clock,
    S: DisplaySink,
{
    let mut interval = tokio::time::interval_at(first_tick, REFRESH_PERIOD);
    // Late ticks shift the schedule instead of bursting to catch up
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    loop {
        interval.tick().await;
        let breakdown = ElapsedBreakdown::between(origin, clock.now());
        log::trace!("tick: {:?}", breakdown);
        sink.publish(breakdown);
    }
}

/// Sink shared between the refresh task and its handle.
/// Cancelling takes the inner sink out under the lock, so a tick that has not
/// already published by then never will.
struct SharedSink<S>(Arc<Mutex<Option<S>>>);

impl<S> Clone for SharedSink<S> {
    fn clone(&self) -> Self {
        SharedSink(Arc::clone(&self.0))
    }
}

impl<S> SharedSink<S> {
    fn new(sink: S) -> Self {
        SharedSink(Arc::new(Mutex::new(Some(sink))))
    }

    // A panicked sink leaves the slot intact, so both sides keep using it
    fn slot(&self) -> MutexGuard<'_, Option<S>> {
        self.0.lock().unwrap_or_else(|poisoned| {
            log::warn!("Display sink lock poisoned, recovering");
            poisoned.into_inner()
        })
    }

    fn release(&self) -> Option<S> {
        self.slot().take()
    }
}

impl<S: DisplaySink> DisplaySink for SharedSink<S> {
    fn publish(&mut self, breakdown: ElapsedBreakdown) {
        if let Some(sink) = self.slot().as_mut() {
            sink.publish(breakdown);
        }
    }
}

/// Exclusive owner of one running refresh task.
///
/// Dropping the handle cancels the task, so a handle can never outlive the
/// widget that created it.
pub struct RefreshHandle {
    task: JoinHandle<()>,
    release: Box<dyn Fn() + Send + Sync>,
}

impl RefreshHandle {
    /// Spawns the refresh loop on the current tokio runtime. The first tick fires
    /// one [`REFRESH_PERIOD`] after this call.
    pub fn start<C, S>(clock: C, origin: OffsetDateTime, sink: S) -> CounterResult<Self>
    where
        C: Clock,
        S: DisplaySink + Send + 'static,
    {
        let runtime = tokio::runtime::Handle::try_current().map_err(|_| CounterError::NoRuntime {
            tag: super::SOBER_COUNTER_TAG,
        })?;
        let first_tick = Instant::now() + REFRESH_PERIOD;
        let shared = SharedSink::new(sink);
        let task_sink = shared.clone();
        let task = runtime.spawn(run_refresh_loop(clock, origin, first_tick, task_sink));
        Ok(RefreshHandle {
            task,
            release: Box::new(move || drop(shared.release())),
        })
    }

    /// Stops the refresh task and drops its sink. No publication happens after this returns.
    pub fn cancel(self) {
        drop(self);
    }
}

impl Drop for RefreshHandle {
    fn drop(&mut self) {
        (self.release)();
        self.task.abort();
    }
}
