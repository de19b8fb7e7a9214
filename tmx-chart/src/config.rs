//! Fixed geometry and styling constants for the matrix.

use crate::surface::Point;

pub const CELL_WIDTH: f64 = 100.0;
pub const CELL_HEIGHT: f64 = 70.0;

/// Temperature domain in degrees Celsius, shared by cell colors, legend and micro-charts.
pub const TEMP_MIN: f64 = 0.0;
pub const TEMP_MAX: f64 = 40.0;

pub const BAND_PADDING: f64 = 0.05;
pub const MICRO_CHART_PADDING: f64 = 4.0;

pub const LEGEND_GUTTER: f64 = 20.0;
pub const LEGEND_WIDTH: f64 = 20.0;
pub const LEGEND_STOPS: usize = 11;

/// Duration of the recolor transition after a mode toggle.
pub const TRANSITION_MS: u32 = 400;

/// Tooltip placement relative to the pointer.
pub const TOOLTIP_OFFSET: Point = Point { x: 10.0, y: -28.0 };

pub const MAX_LINE_COLOR: &str = "#252525";
pub const MIN_LINE_COLOR: &str = "#2c7fb8";
pub const LABEL_COLOR: &str = "#333333";

pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

pub const MARGIN: Margin = Margin {
    top: 50.0,
    right: 120.0,
    bottom: 20.0,
    left: 90.0,
};

/// Geometry of one rendering. `Layout::default()` is the shipping configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub cell_width: f64,
    pub cell_height: f64,
    pub margin: Margin,
    pub band_padding: f64,
    pub micro_padding: f64,
    pub legend_gutter: f64,
    pub legend_width: f64,
    pub legend_stops: usize,
    pub transition_ms: u32,
}

impl Default for Layout {
    fn default() -> Self {
        Layout {
            cell_width: CELL_WIDTH,
            cell_height: CELL_HEIGHT,
            margin: MARGIN,
            band_padding: BAND_PADDING,
            micro_padding: MICRO_CHART_PADDING,
            legend_gutter: LEGEND_GUTTER,
            legend_width: LEGEND_WIDTH,
            legend_stops: LEGEND_STOPS,
            transition_ms: TRANSITION_MS,
        }
    }
}

impl Layout {
    pub fn grid_width(&self, year_count: usize) -> f64 {
        self.cell_width * year_count as f64
    }

    pub fn grid_height(&self) -> f64 {
        self.cell_height * 12.0
    }

    /// Outer canvas size including margins.
    pub fn canvas_size(&self, year_count: usize) -> (f64, f64) {
        (
            self.margin.left + self.grid_width(year_count) + self.margin.right,
            self.margin.top + self.grid_height() + self.margin.bottom,
        )
    }
}
