//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use dioxus::prelude::*;
use tmx_chart::{
    Layout, MatrixChart, ModeLabel, PointerEvent, SvgScene, TooltipState, ViewMode,
};
use tmx_data::{Dataset, MonthKey};

/// A drawn chart together with the host-side objects it writes to.
#[derive(Debug, Clone)]
pub struct ChartView {
    pub chart: MatrixChart,
    pub scene: SvgScene,
    pub tooltip: TooltipState,
    pub indicator: ModeLabel,
}

impl ChartView {
    pub fn new(dataset: Dataset) -> Self {
        let mut scene = SvgScene::new();
        let mut indicator = ModeLabel::default();
        let chart = MatrixChart::render(
            dataset,
            Layout::default(),
            ViewMode::default(),
            &mut scene,
            &mut indicator,
        );
        ChartView {
            chart,
            scene,
            tooltip: TooltipState::default(),
            indicator,
        }
    }

    /// Route a pointer event from a cell to the chart.
    pub fn pointer(&mut self, target: MonthKey, event: PointerEvent) {
        let ChartView {
            chart,
            scene,
            tooltip,
            indicator,
        } = self;
        chart.handle_pointer(target, event, scene, tooltip, indicator);
    }
}

/// Shared application state for the temperature matrix app.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Whether the data is still being fetched
    pub loading: Signal<bool>,
    /// Error message if something went wrong
    pub error_msg: Signal<Option<String>>,
    /// The rendered chart (None until loaded)
    pub view: Signal<Option<ChartView>>,
    /// Rows dropped while loading, shown under the chart
    pub skipped_rows: Signal<usize>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            view: Signal::new(None),
            skipped_rows: Signal::new(0),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
