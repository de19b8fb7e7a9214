//! Error box shown when the data could not be loaded.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
}

/// Shows a load failure. The chart is not drawn on partial data.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    rsx! {
        div {
            role: "alert",
            style: "padding: 12px 16px; margin: 8px 0; background: #FFEBEE; color: #C62828; \
                border-radius: 4px; border: 1px solid #EF9A9A;",
            strong { "Could not load temperatures: " }
            "{props.message}"
        }
    }
}
