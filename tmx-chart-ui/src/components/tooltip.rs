//! Floating label that follows the pointer over a cell.

use crate::state::AppState;
use dioxus::prelude::*;

#[component]
pub fn Tooltip() -> Element {
    let state = use_context::<AppState>();
    let Some(tooltip) = state.view.read().as_ref().map(|view| view.tooltip.clone()) else {
        return rsx! {};
    };
    let display = if tooltip.visible { "block" } else { "none" };
    let style = format!(
        "display: {}; position: absolute; left: {}px; top: {}px; pointer-events: none; \
         white-space: pre-line; padding: 4px 8px; font-size: 12px; \
         background: rgba(255, 255, 255, 0.95); border: 1px solid #999; border-radius: 3px;",
        display, tooltip.position.x, tooltip.position.y
    );

    rsx! {
        div {
            style: "{style}",
            "{tooltip.text}"
        }
    }
}
