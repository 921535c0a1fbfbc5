pub mod args;
pub mod counter;
pub mod gui;
pub mod render;
pub mod terminal;
pub mod widget;

pub use counter::{CounterError, CounterResult, ElapsedBreakdown};
pub use widget::{SOBER_COUNTER_TAG, SoberCounter, Widget};
