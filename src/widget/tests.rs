// Lifecycle tests for the counter widget
// Focus: immediate publish on mount, one-second cadence, silence after unmount, fresh remounts

use super::{SoberCounter, Widget};
use crate::counter::{Clock, CounterError, ElapsedBreakdown, origin_instant};
use time::OffsetDateTime;
use tokio::sync::mpsc;
use tokio::time::{Duration, Instant};

/// Clock that follows tokio's (pausable) clock from a fixed wall-clock base.
#[derive(Clone)]
struct PausedClock {
    base: OffsetDateTime,
    started: Instant,
}

impl PausedClock {
    fn starting_at(base: OffsetDateTime) -> Self {
        Self {
            base,
            started: Instant::now(),
        }
    }
}

impl Clock for PausedClock {
    fn now(&self) -> OffsetDateTime {
        self.base + (Instant::now() - self.started)
    }
}

fn drain(rx: &mut mpsc::UnboundedReceiver<ElapsedBreakdown>) -> Vec<ElapsedBreakdown> {
    let mut out = Vec::new();
    while let Ok(b) = rx.try_recv() {
        out.push(b);
    }
    out
}

// ============================================================
// MOUNT
// ============================================================

#[tokio::test(start_paused = true)]
async fn test_mount_publishes_exactly_once_before_first_period() {
    let origin = origin_instant().unwrap();
    let clock = PausedClock::starting_at(origin + time::Duration::milliseconds(90_061_001));
    let mut widget = SoberCounter::with_clock(origin, clock);
    let (tx, mut rx) = mpsc::unbounded_channel();

    widget.mount(Box::new(tx)).unwrap();
    assert!(widget.is_mounted());

    tokio::time::advance(Duration::from_millis(999)).await;
    tokio::task::yield_now().await;

    let published = drain(&mut rx);
    assert_eq!(
        published,
        vec![ElapsedBreakdown {
            years: 0,
            days: 1,
            hours: 1,
            minutes: 1,
            seconds: 1
        }]
    );
    widget.unmount();
}

#[tokio::test(start_paused = true)]
async fn test_ticks_every_second() {
    let origin = origin_instant().unwrap();
    let mut widget = SoberCounter::with_clock(origin, PausedClock::starting_at(origin));
    let (tx, mut rx) = mpsc::unbounded_channel();
    widget.mount(Box::new(tx)).unwrap();

    assert_eq!(rx.recv().await.unwrap().seconds, 0);
    for expected in 1..=3 {
        tokio::time::advance(Duration::from_secs(1)).await;
        let b = rx.recv().await.unwrap();
        assert_eq!(b.seconds, expected, "tick {expected}");
    }
    widget.unmount();
}

#[test]
fn test_mount_without_runtime_publishes_nothing() {
    let origin = origin_instant().unwrap();
    let mut widget = SoberCounter::with_clock(origin, crate::counter::SystemClock);
    let (tx, mut rx) = mpsc::unbounded_channel();

    let err = widget.mount(Box::new(tx)).unwrap_err();
    assert!(matches!(err, CounterError::NoRuntime { .. }));
    assert!(!widget.is_mounted());
    assert!(rx.try_recv().is_err());
}

// ============================================================
// UNMOUNT / REMOUNT
// ============================================================

#[tokio::test(start_paused = true)]
async fn test_no_publication_after_unmount() {
    let origin = origin_instant().unwrap();
    let mut widget = SoberCounter::with_clock(origin, PausedClock::starting_at(origin));
    let (tx, mut rx) = mpsc::unbounded_channel();
    widget.mount(Box::new(tx)).unwrap();

    tokio::time::advance(Duration::from_secs(2)).await;
    tokio::task::yield_now().await;
    widget.unmount();
    assert!(!widget.is_mounted());
    let before = drain(&mut rx);
    assert!(!before.is_empty());

    tokio::time::advance(Duration::from_secs(30)).await;
    tokio::task::yield_now().await;
    // Sink was released on unmount, so the channel is closed and empty
    assert_eq!(rx.recv().await, None);
}

#[tokio::test(start_paused = true)]
async fn test_remount_publishes_fresh_value() {
    let origin = origin_instant().unwrap();
    let mut widget = SoberCounter::with_clock(origin, PausedClock::starting_at(origin));

    let (tx, mut rx) = mpsc::unbounded_channel();
    widget.mount(Box::new(tx)).unwrap();
    assert_eq!(rx.recv().await, Some(ElapsedBreakdown::default()));
    widget.unmount();

    tokio::time::advance(Duration::from_secs(75)).await;

    let (tx2, mut rx2) = mpsc::unbounded_channel();
    widget.mount(Box::new(tx2)).unwrap();
    let fresh = rx2.recv().await.unwrap();
    assert_eq!((fresh.minutes, fresh.seconds), (1, 15));

    tokio::time::advance(Duration::from_secs(1)).await;
    assert_eq!(rx2.recv().await.unwrap().seconds, 16);
    assert_eq!(rx.recv().await, None);
    widget.unmount();
}

#[tokio::test(start_paused = true)]
async fn test_mount_while_mounted_replaces_handle() {
    let origin = origin_instant().unwrap();
    let mut widget = SoberCounter::with_clock(origin, PausedClock::starting_at(origin));
    let (first_tx, mut first_rx) = mpsc::unbounded_channel();
    let (second_tx, mut second_rx) = mpsc::unbounded_channel();

    widget.mount(Box::new(first_tx)).unwrap();
    widget.mount(Box::new(second_tx)).unwrap();

    tokio::time::advance(Duration::from_secs(1)).await;
    assert_eq!(drain(&mut first_rx).len(), 1);
    assert_eq!(first_rx.recv().await, None);
    assert_eq!(second_rx.recv().await.unwrap().seconds, 0);
    assert_eq!(second_rx.recv().await.unwrap().seconds, 1);
    widget.unmount();
}

#[tokio::test(start_paused = true)]
async fn test_drop_cancels_refresh() {
    let origin = origin_instant().unwrap();
    let widget = SoberCounter::with_clock(origin, PausedClock::starting_at(origin));
    let mut widget: Box<dyn Widget> = Box::new(widget);
    let (tx, mut rx) = mpsc::unbounded_channel();
    widget.mount(Box::new(tx)).unwrap();
    drop(widget);

    tokio::time::advance(Duration::from_secs(5)).await;
    assert_eq!(drain(&mut rx).len(), 1);
    assert_eq!(rx.recv().await, None);
}
