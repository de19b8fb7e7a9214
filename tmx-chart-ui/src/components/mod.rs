//! Dioxus RSX components for the temperature matrix app.

mod chart_header;
mod error_display;
mod loading_spinner;
mod mode_indicator;
mod temperature_matrix;
mod tooltip;

pub use chart_header::ChartHeader;
pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
pub use mode_indicator::ModeIndicator;
pub use temperature_matrix::TemperatureMatrix;
pub use tooltip::Tooltip;
