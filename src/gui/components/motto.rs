// gui/components/motto.rs
use dioxus::prelude::*;

#[component]
pub fn Motto() -> Element {
    rsx! {
        div { style: "margin-top:40px; max-width:60%; background:linear-gradient(to bottom,#1a3a5c,#0d2840); color:#fff; font-family:'Helvetica Neue', Helvetica, Arial, sans-serif; font-size:2.2rem; padding:40px 16px; text-align:center; border-radius:2px; border:2px solid #2a2a2a; outline:1px solid #1a1a1a;",
            "EVERY SECOND COUNTS"
        }
        p { style: "font-family:system-ui, sans-serif; font-size:0.8rem; color:#666; margin-top:12px;",
            "Quote from "
            a { href: "https://www.fxnetworks.com/shows/the-bear", target: "_blank", rel: "noopener noreferrer", "The Bear" }
        }
    }
}
