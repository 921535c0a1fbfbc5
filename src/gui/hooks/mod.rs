pub mod elapsed_timer;

pub use elapsed_timer::use_elapsed_timer;
