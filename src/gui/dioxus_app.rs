use crate::gui::components::{
    header::Header, motto::Motto, prose_display::ProseDisplay,
    segmented_display::SegmentedDisplay,
};
use crate::gui::hooks::use_elapsed_timer;
use crate::render::DisplayVariant;
use crate::widget::SOBER_COUNTER_TAG;
use dioxus::prelude::*;

pub fn run_gui(variant: DisplayVariant) {
    use dioxus::desktop::{Config, WindowBuilder};
    let enable_borderless = true; // borderless window
    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Sober Counter")
            .with_decorations(!enable_borderless)
            .with_resizable(true)
            .with_inner_size(dioxus::desktop::LogicalSize::new(1100, 720)),
    );
    log::info!("Launching {} window (variant={})", SOBER_COUNTER_TAG, variant);
    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .with_context(variant)
        .launch(App);
}

#[component]
fn App() -> Element {
    use dioxus::desktop::use_window; // access desktop window for dragging
    let desktop = use_window();
    let variant = use_context::<DisplayVariant>();

    rsx! {
        div { style: "min-height:97vh; display:flex; flex-direction:column; align-items:center; background:#f4f4f4; font-family:system-ui, sans-serif;",
            Header { on_drag: move |_| { let _ = desktop.window.drag_window(); }, on_close: move |_| { std::thread::spawn(|| std::process::exit(0)); } }
            CounterPanel { variant: variant }
            // Credits/footer
            div { style: "margin-top:auto; padding:8px; font-size:0.7em; opacity:0.6; letter-spacing:0.5px;",
                {format!("v{} · {} · Built with Rust 🦀 and Dioxus ⚛️", env!("APP_VERSION_DISPLAY"), env!("APP_BUILD_YEAR"))}
            }
        }
    }
}

#[derive(Props, PartialEq, Clone)]
struct CounterPanelProps {
    variant: DisplayVariant,
}

/// Hosts the registered counter widget. Unmounting this component unmounts the widget.
#[component]
fn CounterPanel(props: CounterPanelProps) -> Element {
    let current = match use_elapsed_timer() {
        Ok(breakdown) => *breakdown.read(),
        Err(message) => {
            return rsx! {
                div { style: "background:#5a1f1f; color:#ff6262; border:1px solid #ff6262; padding:20px; border-radius:15px; margin:40px;",
                    h2 { style: "margin-top:0;", "⚠️ Counter unavailable" }
                    p { "{message}" }
                }
            };
        }
    };

    rsx! {
        h1 { style: "font-size:2rem; font-weight:500; color:#333; text-align:center; margin:0 0 40px 0;", "hrfmmymt has been sober for" }
        match props.variant {
            DisplayVariant::Segmented => rsx! { SegmentedDisplay { breakdown: current } },
            DisplayVariant::Prose => rsx! { ProseDisplay { breakdown: current } },
        }
        Motto {}
    }
}
