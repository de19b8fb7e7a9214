//! Monthly Temperature Matrix
//!
//! One column per year (the most recent ten in the data) and one row per
//! month. Each cell is colored by the month's maximum or minimum temperature
//! and carries a small chart of the daily max/min values. Clicking any cell
//! switches every cell between maximum and minimum.
//!
//! Data flow:
//! 1. On mount, `daily_temperature.csv` is fetched from the app's public assets.
//! 2. The CSV is parsed and grouped into month summaries.
//! 3. The chart is drawn once into an SVG scene held in `AppState`; pointer
//!    events on the cells go back to the chart, which updates the scene,
//!    the tooltip and the mode indicator.

use dioxus::prelude::*;
use tmx_chart_ui::components::{
    ChartHeader, ErrorDisplay, LoadingSpinner, ModeIndicator, TemperatureMatrix, Tooltip,
};
use tmx_chart_ui::fetch;
use tmx_chart_ui::state::{AppState, ChartView};
use tmx_data::YEARS_COUNT;

/// Daily records served next to the app.
const DATA_URL: &str = "/daily_temperature.csv";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("temperature-matrix-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // Load once on mount; nothing is drawn until the whole file is parsed
    use_future(move || async move {
        match fetch::load_dataset(DATA_URL, YEARS_COUNT).await {
            Ok(report) => {
                log::info!(
                    "Loaded {} rows ({} skipped) into {} months",
                    report.rows_read,
                    report.skipped(),
                    report.dataset.len()
                );
                state.skipped_rows.set(report.skipped());
                state.view.set(Some(ChartView::new(report.dataset)));
            }
            Err(e) => {
                log::error!("Failed to load temperatures: {:#}", e);
                state.error_msg.set(Some(format!("{:#}", e)));
            }
        }
        state.loading.set(false);
    });

    let skipped = (state.skipped_rows)();

    rsx! {
        div {
            style: "padding: 16px; \
                font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",

            ChartHeader {
                title: "Monthly Temperature Matrix".to_string(),
                description: "Cell color: monthly temperature in °C. \
                    Lines: daily maximum (dark) and minimum (blue)."
                    .to_string(),
            }

            if let Some(err) = (state.error_msg)() {
                ErrorDisplay { message: err }
            } else if (state.loading)() {
                LoadingSpinner {}
            } else {
                ModeIndicator {}
                TemperatureMatrix {}
                if skipped > 0 {
                    p {
                        style: "margin: 4px 0; font-size: 11px; color: #999;",
                        "{skipped} malformed rows were skipped."
                    }
                }
            }
        }
        Tooltip {}
    }
}
