//! Daily max/min trend lines drawn inside one cell.

use crate::config::{MAX_LINE_COLOR, MIN_LINE_COLOR, TEMP_MAX, TEMP_MIN};
use crate::curve::{monotone_x, PathCommand};
use crate::scale::LinearScale;
use crate::surface::{NodeId, PathSpec, Point, Surface};
use tmx_data::DailyRecord;

/// Cell-local scales. The y scale is the same for every cell so trends are
/// comparable across the grid; the x scale spans the cell's own day count.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MicroChartScales {
    pub x: LinearScale,
    pub y: LinearScale,
}

impl MicroChartScales {
    pub fn new(day_count: usize, width: f64, height: f64, padding: f64) -> Self {
        let last_index = day_count.saturating_sub(1) as f64;
        MicroChartScales {
            x: LinearScale::new((0.0, last_index), (padding, width - padding)),
            y: LinearScale::new((TEMP_MIN, TEMP_MAX), (height - padding, padding)),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrendLines {
    pub max: Vec<PathCommand>,
    pub min: Vec<PathCommand>,
}

/// Curves through `(day index, max)` and `(day index, min)`; `None` for no days.
pub fn trend_lines(
    days: &[DailyRecord],
    width: f64,
    height: f64,
    padding: f64,
) -> Option<TrendLines> {
    if days.is_empty() {
        return None;
    }
    let scales = MicroChartScales::new(days.len(), width, height, padding);
    let points = |value: fn(&DailyRecord) -> f64| -> Vec<Point> {
        days.iter()
            .enumerate()
            .map(|(i, day)| Point::new(scales.x.apply(i as f64), scales.y.apply(value(day))))
            .collect()
    };
    Some(TrendLines {
        max: monotone_x(&points(|d| d.max_temp)),
        min: monotone_x(&points(|d| d.min_temp)),
    })
}

/// Append both trend lines to `parent`. Returns the `(max, min)` path nodes.
pub fn render_micro_chart<S: Surface>(
    surface: &mut S,
    parent: NodeId,
    days: &[DailyRecord],
    width: f64,
    height: f64,
    padding: f64,
) -> Option<(NodeId, NodeId)> {
    let lines = trend_lines(days, width, height, padding)?;
    let max = surface.append_path(
        parent,
        PathSpec {
            commands: lines.max,
            stroke: MAX_LINE_COLOR.to_string(),
            stroke_width: 1.0,
        },
    );
    let min = surface.append_path(
        parent,
        PathSpec {
            commands: lines.min,
            stroke: MIN_LINE_COLOR.to_string(),
            stroke_width: 1.0,
        },
    );
    Some((max, min))
}
