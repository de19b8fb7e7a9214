//! The drawing capabilities the chart consumes.
//!
//! A `Surface` is a retained tree of positioned shapes. The chart appends
//! shapes once, registers which shapes route pointer events to which cell,
//! and later only changes fills. `Tooltip` and `ModeIndicator` are owned by
//! the host page; the chart fills and moves them.

use crate::curve::{to_svg_path, PathCommand};
use tmx_data::MonthKey;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    pub fn offset(self, by: Point) -> Point {
        Point::new(self.x + by.x, self.y + by.y)
    }
}

/// Index of a node in a surface's tree.
pub type NodeId = usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAnchor {
    #[default]
    Start,
    Middle,
    End,
}

impl TextAnchor {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextAnchor::Start => "start",
            TextAnchor::Middle => "middle",
            TextAnchor::End => "end",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RectSpec {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// CSS paint: a color or `url(#gradient-id)`.
    pub fill: String,
    pub stroke: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PathSpec {
    pub commands: Vec<PathCommand>,
    pub stroke: String,
    pub stroke_width: f64,
}

impl PathSpec {
    /// SVG path data.
    pub fn d(&self) -> String {
        to_svg_path(&self.commands)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextSpec {
    pub x: f64,
    pub y: f64,
    pub text: String,
    pub anchor: TextAnchor,
    pub font_size: f64,
    pub fill: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GradientStop {
    /// Fraction of the gradient vector, 0 to 1.
    pub offset: f64,
    pub color: String,
}

/// Linear gradient in object bounding box units.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientSpec {
    pub id: String,
    pub from: Point,
    pub to: Point,
    pub stops: Vec<GradientStop>,
}

/// Animated change of a node's fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub duration_ms: u32,
}

pub trait Surface {
    /// Start a new drawing of the given size and return its root node.
    fn create_canvas(&mut self, width: f64, height: f64) -> NodeId;
    /// Append a group whose children are positioned relative to `origin`.
    fn append_group(&mut self, parent: NodeId, origin: Point) -> NodeId;
    fn append_rect(&mut self, parent: NodeId, rect: RectSpec) -> NodeId;
    fn append_path(&mut self, parent: NodeId, path: PathSpec) -> NodeId;
    fn append_text(&mut self, parent: NodeId, text: TextSpec) -> NodeId;
    fn append_gradient(&mut self, parent: NodeId, gradient: GradientSpec) -> NodeId;
    /// Route pointer enter/move/leave/click on `node` to the cell `target`.
    fn attach_pointer(&mut self, node: NodeId, target: MonthKey);
    /// Change a rect's fill, optionally animated.
    fn set_fill(&mut self, node: NodeId, fill: &str, transition: Option<Transition>);
}

/// Pointer events a host routes back to the chart for an attached shape.
/// Positions are in host page coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Enter(Point),
    Move(Point),
    Leave,
    Click,
}

/// Externally owned floating label.
pub trait Tooltip {
    fn show(&mut self, text: &str, at: Point);
    fn move_to(&mut self, at: Point);
    fn hide(&mut self);
}

/// Externally owned text element naming the active field.
pub trait ModeIndicator {
    fn set_label(&mut self, label: &str);
}
