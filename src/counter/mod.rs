// Counter module - elapsed-time arithmetic shared by every host
// (desktop GUI and headless terminal).

pub mod clock;
pub mod elapsed;
pub mod error;

// Re-export the main types and functions for easy access
pub use clock::{Clock, SystemClock};
pub use elapsed::{ElapsedBreakdown, ORIGIN_RFC3339, origin_instant};
pub use error::{CounterError, CounterResult};
