use dioxus::prelude::*;

/// Placeholder while the fetch is pending.
#[component]
pub fn LoadingSpinner() -> Element {
    rsx! {
        div {
            style: "display: flex; justify-content: center; align-items: center; \
                padding: 40px; color: #666;",
            "Loading daily temperatures..."
        }
    }
}
