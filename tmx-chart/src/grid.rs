//! The year x month grid: axis labels, one colored cell per month summary,
//! a micro chart in each cell and the legend.

use crate::config::{Layout, LABEL_COLOR, MONTH_NAMES};
use crate::interaction::{Hover, InteractionController, ViewMode};
use crate::legend::{render_legend, LegendNodes};
use crate::micro_chart::render_micro_chart;
use crate::scale::Scales;
use crate::surface::{ModeIndicator, NodeId, Point, RectSpec, Surface, TextAnchor, TextSpec};
use log::{debug, info};
use std::collections::BTreeMap;
use tmx_data::{Dataset, MonthKey, MonthSummary};

/// Nodes drawn for one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellNodes {
    pub group: NodeId,
    pub rect: NodeId,
    /// `(max, min)` trend line paths.
    pub lines: Option<(NodeId, NodeId)>,
}

/// A rendered matrix. Owns the data, the scales and the active mode; the
/// surface it was drawn on stays with the caller.
#[derive(Debug, Clone)]
pub struct MatrixChart {
    dataset: Dataset,
    scales: Scales,
    layout: Layout,
    pub(crate) controller: InteractionController,
    cells: BTreeMap<MonthKey, CellNodes>,
    legend: LegendNodes,
    pub(crate) hover: Option<Hover>,
}

impl MatrixChart {
    /// Draw the whole chart on `surface` and write the initial mode label.
    pub fn render<S, M>(
        dataset: Dataset,
        layout: Layout,
        mode: ViewMode,
        surface: &mut S,
        indicator: &mut M,
    ) -> MatrixChart
    where
        S: Surface,
        M: ModeIndicator,
    {
        let scales = Scales::build(&dataset.years, &layout);
        let (width, height) = layout.canvas_size(dataset.years.len());
        let root = surface.create_canvas(width, height);
        let plot = surface.append_group(root, Point::new(layout.margin.left, layout.margin.top));

        render_axis_labels(surface, plot, &scales);

        let width = scales.x.bandwidth();
        let height = scales.y.bandwidth();
        let mut cells = BTreeMap::new();
        for summary in dataset.iter() {
            let (Some(x), Some(y)) = (
                scales.x.position(&summary.year),
                scales.y.position(&summary.month),
            ) else {
                debug!("grid: {} is outside the scales", summary.key());
                continue;
            };
            let group = surface.append_group(plot, Point::new(x, y));
            let rect = surface.append_rect(
                group,
                RectSpec {
                    x: 0.0,
                    y: 0.0,
                    width,
                    height,
                    fill: fill_for(&scales, mode, summary),
                    stroke: None,
                },
            );
            let lines = render_micro_chart(
                surface,
                group,
                &summary.days,
                width,
                height,
                layout.micro_padding,
            );
            surface.attach_pointer(group, summary.key());
            cells.insert(summary.key(), CellNodes { group, rect, lines });
        }

        let legend = render_legend(surface, plot, &scales.color, &layout, dataset.years.len());
        indicator.set_label(mode.label());

        info!(
            "grid: drew {} cells for {} years",
            cells.len(),
            dataset.years.len()
        );
        MatrixChart {
            dataset,
            scales,
            layout,
            controller: InteractionController::new(mode),
            cells,
            legend,
            hover: None,
        }
    }

    /// Fill of a cell under the active mode.
    pub fn cell_fill(&self, summary: &MonthSummary) -> String {
        fill_for(&self.scales, self.mode(), summary)
    }

    pub fn mode(&self) -> ViewMode {
        self.controller.mode()
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn scales(&self) -> &Scales {
        &self.scales
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn legend(&self) -> LegendNodes {
        self.legend
    }

    pub fn cell(&self, key: MonthKey) -> Option<&CellNodes> {
        self.cells.get(&key)
    }

    pub fn cells(&self) -> impl Iterator<Item = (&MonthKey, &CellNodes)> {
        self.cells.iter()
    }

    pub fn hover(&self) -> Option<Hover> {
        self.hover
    }
}

fn fill_for(scales: &Scales, mode: ViewMode, summary: &MonthSummary) -> String {
    scales.color.color(mode.value(summary))
}

/// Years centered above their columns, month names right-aligned left of
/// their rows.
fn render_axis_labels<S: Surface>(surface: &mut S, plot: NodeId, scales: &Scales) {
    let label = |x: f64, y: f64, text: String, anchor: TextAnchor| TextSpec {
        x,
        y,
        text,
        anchor,
        font_size: 12.0,
        fill: LABEL_COLOR.to_string(),
    };
    for year in scales.x.domain() {
        if let Some(x) = scales.x.position(year) {
            let center = x + scales.x.bandwidth() / 2.0;
            surface.append_text(plot, label(center, -10.0, year.to_string(), TextAnchor::Middle));
        }
    }
    for (month, name) in MONTH_NAMES.iter().enumerate() {
        if let Some(y) = scales.y.position(&(month as u32)) {
            let middle = y + scales.y.bandwidth() / 2.0 + 4.0;
            surface.append_text(plot, label(-8.0, middle, name.to_string(), TextAnchor::End));
        }
    }
}
