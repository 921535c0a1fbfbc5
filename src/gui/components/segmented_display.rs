// gui/components/segmented_display.rs
use crate::counter::ElapsedBreakdown;
use crate::render::segments;
use dioxus::prelude::*;

const GLOW: &str = "#7fdbff";

#[derive(Props, PartialEq, Clone)]
pub struct SegmentedDisplayProps {
    pub breakdown: ElapsedBreakdown,
}

/// Digital-clock rendering: five labeled seven-segment fields split by colons.
#[component]
pub fn SegmentedDisplay(props: SegmentedDisplayProps) -> Element {
    let segs = segments(&props.breakdown);
    let last = segs.len() - 1;
    rsx! {
        // Bezel
        div { style: "background:#0a0a0a; padding:24px 32px; border-radius:2px; border:6px solid #2a2a2a; outline:2px solid #1a1a1a; box-shadow: inset 0 2px 10px rgba(0,0,0,0.8), 0 4px 20px rgba(0,0,0,0.5);",
            div { style: "display:flex; align-items:flex-start; font-family:'DSEG7-Modern', monospace; font-style:italic; font-size:4rem; color:{GLOW}; text-shadow: 0 0 5px {GLOW}, 0 0 10px rgba(127,219,255,0.5); letter-spacing:0.05em;",
                for (i, seg) in segs.into_iter().enumerate() {
                    div { key: "{seg.label}", style: "display:flex; flex-direction:column; align-items:center;",
                        span { "{seg.digits}" }
                        span { style: "font-family:system-ui, sans-serif; font-style:normal; font-size:0.7rem; text-shadow:none; margin-top:8px; letter-spacing:0.05em;", "{seg.label}" }
                    }
                    if i < last {
                        Colon {}
                    }
                }
            }
        }
    }
}

#[component]
fn Colon() -> Element {
    let dot = format!("width:6px; height:10px; background-color:{GLOW}; box-shadow: 0 0 5px {GLOW}, 0 0 10px rgba(127,219,255,0.5); transform:skewX(-6deg);");
    rsx! {
        span { style: "display:flex; flex-direction:column; justify-content:center; gap:12px; margin:0 0.3em; align-self:center;",
            span { style: "{dot}" }
            span { style: "{dot}" }
        }
    }
}
