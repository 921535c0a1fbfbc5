// Headless host: mounts the registered counter and prints one line per published breakdown.
use crate::counter::{CounterError, CounterResult};
use crate::render::{DisplayVariant, render_line};
use crate::widget::{MountedWidget, SOBER_COUNTER_TAG};
use std::io::Write;
use tokio::sync::mpsc;

/// Runs until `max_lines` breakdowns have been printed, or forever when `None`.
pub async fn run_terminal<W: Write>(
    out: &mut W,
    variant: DisplayVariant,
    max_lines: Option<u64>,
) -> CounterResult<()> {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let counter = MountedWidget::create(SOBER_COUNTER_TAG, Box::new(tx))?;
    log::debug!("Terminal host started (variant={variant})");

    let mut printed: u64 = 0;
    let result = loop {
        let Some(breakdown) = rx.recv().await else {
            break Ok(());
        };
        if let Err(e) = writeln!(out, "{}", render_line(variant, &breakdown)).and_then(|_| out.flush()) {
            break Err(CounterError::Io(e));
        }
        printed += 1;
        if max_lines.is_some_and(|max| printed >= max) {
            break Ok(());
        }
    };

    counter.unmount();
    log::debug!("Terminal host stopped after {printed} lines");
    result
}
