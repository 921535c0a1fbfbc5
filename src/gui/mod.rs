// gui/mod.rs
// GUI module root for sober-counter

mod components {
    pub mod header;
    pub mod motto;
    pub mod prose_display;
    pub mod segmented_display;
}
pub mod dioxus_app; // main app
pub mod hooks;

pub use dioxus_app::run_gui;
