// gui/components/prose_display.rs
use crate::counter::ElapsedBreakdown;
use crate::render::prose_sentence;
use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct ProseDisplayProps {
    pub breakdown: ElapsedBreakdown,
}

#[component]
pub fn ProseDisplay(props: ProseDisplayProps) -> Element {
    let sentence = prose_sentence(&props.breakdown);
    rsx! {
        p { style: "font-family:system-ui, sans-serif; font-size:1.6rem; color:#333; text-align:center; max-width:36em; margin:0;", "{sentence}" }
    }
}
