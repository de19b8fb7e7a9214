//! Max/min mode and the pointer handling shared by every cell.
//!
//! `InteractionController` is the only writer of the active [`ViewMode`].
//! A click on any cell flips the mode for the whole grid and recolors every
//! cell; hover shows a tooltip for the cell under the pointer.

use crate::config::TOOLTIP_OFFSET;
use crate::grid::MatrixChart;
use crate::surface::{ModeIndicator, Point, PointerEvent, Surface, Tooltip, Transition};
use log::debug;
use tmx_data::{MonthKey, MonthSummary};

/// Which monthly aggregate colors the cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum ViewMode {
    #[default]
    Max,
    Min,
}

impl ViewMode {
    pub fn toggled(self) -> ViewMode {
        match self {
            ViewMode::Max => ViewMode::Min,
            ViewMode::Min => ViewMode::Max,
        }
    }

    /// Text for the mode indicator.
    pub fn label(&self) -> &'static str {
        match self {
            ViewMode::Max => "Maximum",
            ViewMode::Min => "Minimum",
        }
    }

    /// Short field name used in the tooltip.
    pub fn field_name(&self) -> &'static str {
        match self {
            ViewMode::Max => "Max",
            ViewMode::Min => "Min",
        }
    }

    pub fn value(&self, summary: &MonthSummary) -> f64 {
        match self {
            ViewMode::Max => summary.monthly_max,
            ViewMode::Min => summary.monthly_min,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InteractionController {
    mode: ViewMode,
}

impl InteractionController {
    pub fn new(mode: ViewMode) -> Self {
        InteractionController { mode }
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    pub fn toggle(&mut self) -> ViewMode {
        self.mode = self.mode.toggled();
        self.mode
    }
}

/// The cell under the pointer and where the pointer last was.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hover {
    pub key: MonthKey,
    pub at: Point,
}

/// Tooltip text for one cell in the given mode.
pub fn tooltip_text(summary: &MonthSummary, mode: ViewMode) -> String {
    format!(
        "{}\n{}: {:.1} °C",
        summary.key(),
        mode.field_name(),
        mode.value(summary)
    )
}

impl MatrixChart {
    /// Handle a pointer event routed from a cell.
    pub fn handle_pointer<S, T, M>(
        &mut self,
        target: MonthKey,
        event: PointerEvent,
        surface: &mut S,
        tooltip: &mut T,
        indicator: &mut M,
    ) where
        S: Surface,
        T: Tooltip,
        M: ModeIndicator,
    {
        match event {
            PointerEvent::Enter(at) => {
                let Some(summary) = self.dataset().get(target) else {
                    return;
                };
                tooltip.show(&tooltip_text(summary, self.mode()), at.offset(TOOLTIP_OFFSET));
                self.hover = Some(Hover { key: target, at });
            }
            PointerEvent::Move(at) => {
                tooltip.move_to(at.offset(TOOLTIP_OFFSET));
                if let Some(hover) = self.hover.as_mut().filter(|h| h.key == target) {
                    hover.at = at;
                }
            }
            PointerEvent::Leave => {
                tooltip.hide();
                self.hover = None;
            }
            PointerEvent::Click => {
                self.toggle_mode(surface, indicator);
                // the hovered cell's label names the new field
                if let Some(hover) = self.hover.filter(|h| h.key == target) {
                    if let Some(summary) = self.dataset().get(target) {
                        tooltip.show(
                            &tooltip_text(summary, self.mode()),
                            hover.at.offset(TOOLTIP_OFFSET),
                        );
                    }
                }
            }
        }
    }

    /// Flip max/min, update the indicator and recolor every cell with a
    /// transition. Layout and aggregates are untouched.
    pub fn toggle_mode<S, M>(&mut self, surface: &mut S, indicator: &mut M)
    where
        S: Surface,
        M: ModeIndicator,
    {
        let mode = self.controller.toggle();
        debug!("interaction: switched to {}", mode.label());
        indicator.set_label(mode.label());

        let transition = Some(Transition {
            duration_ms: self.layout().transition_ms,
        });
        for (key, cell) in self.cells() {
            if let Some(summary) = self.dataset().get(*key) {
                surface.set_fill(cell.rect, &self.cell_fill(summary), transition);
            }
        }
    }
}
