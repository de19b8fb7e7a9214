//! Shared Dioxus components and fetch bridge for the temperature matrix app.
//!
//! This crate provides:
//! - `fetch`: loading the daily CSV through the browser's `fetch`
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: the chart, tooltip, mode indicator and page chrome

pub mod components;
pub mod fetch;
pub mod state;
