//! Text naming the aggregate that currently colors the cells.

use crate::state::AppState;
use dioxus::prelude::*;

#[component]
pub fn ModeIndicator() -> Element {
    let state = use_context::<AppState>();
    let label = state
        .view
        .read()
        .as_ref()
        .map(|view| view.indicator.0.clone())
        .unwrap_or_default();

    rsx! {
        div {
            style: "margin: 4px 0 8px 0; font-size: 13px;",
            "Showing: "
            strong { id: "mode-indicator", "{label}" }
            span { style: "color: #666;", " (click any cell to switch)" }
        }
    }
}
