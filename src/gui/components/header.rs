// gui/components/header.rs
use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct HeaderProps {
    pub on_drag: EventHandler<MouseEvent>,
    pub on_close: EventHandler<MouseEvent>,
}

/// Window chrome for the borderless window: drag grip and close button.
#[component]
pub fn Header(props: HeaderProps) -> Element {
    rsx! {
        div { style: "align-self:stretch; display:flex; justify-content:flex-end; gap:8px; padding:6px 10px;",
            button { style: "background:rgba(0,0,0,0.06); color:#333; border:1px solid rgba(0,0,0,0.15); padding:3px 8px; border-radius:5px; font-size:0.65em; cursor:grab;",
                onmousedown: move |e| props.on_drag.call(e), "Drag" }
            button { style: "background:linear-gradient(135deg,#ff4d4d,#d63333); color:#fff; border:1px solid rgba(0,0,0,0.2); padding:3px 8px; border-radius:5px; font-size:0.65em; cursor:pointer; font-weight:600;",
                onclick: move |e| props.on_close.call(e), "✖ Close" }
        }
    }
}
