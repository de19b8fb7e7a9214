//! Scales, drawing surface and renderers for the monthly temperature matrix.
//!
//! The chart draws into any [`Surface`]. [`svg::SvgScene`] is the retained
//! implementation used by both the web app and the CLI.

pub mod color;
pub mod config;
pub mod curve;
pub mod grid;
pub mod interaction;
pub mod legend;
pub mod micro_chart;
pub mod scale;
pub mod surface;
pub mod svg;

pub use color::ColorScale;
pub use config::Layout;
pub use grid::{CellNodes, MatrixChart};
pub use interaction::{InteractionController, ViewMode};
pub use scale::{BandScale, LinearScale, Scales};
pub use surface::{ModeIndicator, Point, PointerEvent, Surface, Tooltip};
pub use svg::{ModeLabel, SvgScene, TooltipState};
