//! Retained SVG scene implementing [`Surface`], plus in-memory tooltip and
//! mode label.
//!
//! The scene keeps every node in an arena so hosts can walk it: the web app
//! renders it as live elements, the CLI replays it onto a plotters backend.

use crate::surface::{
    GradientSpec, ModeIndicator, NodeId, PathSpec, Point, RectSpec, Surface, TextSpec, Tooltip,
    Transition,
};
use tmx_data::MonthKey;

#[derive(Debug, Clone, PartialEq)]
pub enum SvgElement {
    Canvas { width: f64, height: f64 },
    Group { origin: Point },
    Rect {
        spec: RectSpec,
        transition: Option<Transition>,
    },
    Path(PathSpec),
    Text(TextSpec),
    Gradient(GradientSpec),
}

#[derive(Debug, Clone, PartialEq)]
pub struct SvgNode {
    pub element: SvgElement,
    pub children: Vec<NodeId>,
    /// Cell that pointer events on this node are routed to.
    pub pointer: Option<MonthKey>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SvgScene {
    nodes: Vec<SvgNode>,
    root: Option<NodeId>,
}

impl SvgScene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    pub fn node(&self, id: NodeId) -> Option<&SvgNode> {
        self.nodes.get(id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Current fill of a rect node.
    pub fn fill(&self, id: NodeId) -> Option<&str> {
        match &self.nodes.get(id)?.element {
            SvgElement::Rect { spec, .. } => Some(spec.fill.as_str()),
            _ => None,
        }
    }

    /// Nodes that route pointer events, with their cell.
    pub fn pointer_targets(&self) -> impl Iterator<Item = (NodeId, MonthKey)> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .filter_map(|(id, node)| node.pointer.map(|key| (id, key)))
    }

    /// Every text label in document order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().filter_map(|node| match &node.element {
            SvgElement::Text(t) => Some(t.text.as_str()),
            _ => None,
        })
    }

    fn append(&mut self, parent: NodeId, element: SvgElement) -> NodeId {
        let id = self.nodes.len();
        self.nodes.push(SvgNode {
            element,
            children: Vec::new(),
            pointer: None,
        });
        match self.nodes.get_mut(parent) {
            Some(p) => p.children.push(id),
            None => log::warn!("svg: parent node {} does not exist", parent),
        }
        id
    }
}

impl Surface for SvgScene {
    fn create_canvas(&mut self, width: f64, height: f64) -> NodeId {
        self.nodes.clear();
        self.nodes.push(SvgNode {
            element: SvgElement::Canvas { width, height },
            children: Vec::new(),
            pointer: None,
        });
        self.root = Some(0);
        0
    }

    fn append_group(&mut self, parent: NodeId, origin: Point) -> NodeId {
        self.append(parent, SvgElement::Group { origin })
    }

    fn append_rect(&mut self, parent: NodeId, rect: RectSpec) -> NodeId {
        self.append(
            parent,
            SvgElement::Rect {
                spec: rect,
                transition: None,
            },
        )
    }

    fn append_path(&mut self, parent: NodeId, path: PathSpec) -> NodeId {
        self.append(parent, SvgElement::Path(path))
    }

    fn append_text(&mut self, parent: NodeId, text: TextSpec) -> NodeId {
        self.append(parent, SvgElement::Text(text))
    }

    fn append_gradient(&mut self, parent: NodeId, gradient: GradientSpec) -> NodeId {
        self.append(parent, SvgElement::Gradient(gradient))
    }

    fn attach_pointer(&mut self, node: NodeId, target: MonthKey) {
        if let Some(n) = self.nodes.get_mut(node) {
            n.pointer = Some(target);
        }
    }

    fn set_fill(&mut self, node: NodeId, fill: &str, transition: Option<Transition>) {
        match self.nodes.get_mut(node).map(|n| &mut n.element) {
            Some(SvgElement::Rect {
                spec,
                transition: current,
            }) => {
                spec.fill = fill.to_string();
                *current = transition;
            }
            _ => log::debug!("svg: node {} has no fill", node),
        }
    }
}

/// Tooltip state held in memory; hosts render it as a floating element.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TooltipState {
    pub visible: bool,
    pub text: String,
    pub position: Point,
}

impl Tooltip for TooltipState {
    fn show(&mut self, text: &str, at: Point) {
        self.visible = true;
        self.text = text.to_string();
        self.position = at;
    }

    fn move_to(&mut self, at: Point) {
        self.position = at;
    }

    fn hide(&mut self) {
        self.visible = false;
    }
}

/// Mode indicator held as a plain string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModeLabel(pub String);

impl ModeIndicator for ModeLabel {
    fn set_label(&mut self, label: &str) {
        self.0 = label.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{GradientStop, TextAnchor};

    fn rect(fill: &str) -> RectSpec {
        RectSpec {
            x: 0.0,
            y: 0.0,
            width: 10.0,
            height: 5.0,
            fill: fill.to_string(),
            stroke: None,
        }
    }

    #[test]
    fn test_tree_and_pointer_targets() {
        let mut scene = SvgScene::new();
        let root = scene.create_canvas(200.0, 100.0);
        let g = scene.append_group(root, Point::new(10.0, 20.0));
        let r = scene.append_rect(g, rect("#ffffcc"));
        let t = scene.append_text(
            g,
            TextSpec {
                x: 0.0,
                y: -4.0,
                text: "0 °C".to_string(),
                anchor: TextAnchor::Middle,
                font_size: 11.0,
                fill: "#333".to_string(),
            },
        );
        scene.attach_pointer(g, MonthKey::new(2023, 0));

        assert_eq!(scene.root(), Some(root));
        assert_eq!(scene.node(root).unwrap().children, vec![g]);
        assert_eq!(scene.node(g).unwrap().children, vec![r, t]);
        assert_eq!(scene.fill(r), Some("#ffffcc"));
        assert_eq!(
            scene.pointer_targets().collect::<Vec<_>>(),
            vec![(g, MonthKey::new(2023, 0))]
        );
        assert_eq!(scene.texts().collect::<Vec<_>>(), vec!["0 °C"]);
    }

    #[test]
    fn test_set_fill_records_transition() {
        let mut scene = SvgScene::new();
        let root = scene.create_canvas(10.0, 10.0);
        let r = scene.append_rect(root, rect("#ffffcc"));
        scene.set_fill(r, "#800026", Some(Transition { duration_ms: 400 }));
        assert_eq!(scene.fill(r), Some("#800026"));
        match &scene.node(r).unwrap().element {
            SvgElement::Rect { transition, .. } => {
                assert_eq!(*transition, Some(Transition { duration_ms: 400 }))
            }
            other => panic!("expected a rect, got {:?}", other),
        }
        // fills only apply to rects
        scene.set_fill(root, "#000000", None);
        assert_eq!(scene.fill(root), None);
    }

    #[test]
    fn test_gradient_is_a_child_node() {
        let mut scene = SvgScene::new();
        let root = scene.create_canvas(10.0, 10.0);
        let stop = |offset: f64, color: &str| GradientStop {
            offset,
            color: color.to_string(),
        };
        let gradient = scene.append_gradient(
            root,
            GradientSpec {
                id: "legend".to_string(),
                from: Point::new(0.0, 0.0),
                to: Point::new(0.0, 1.0),
                stops: vec![stop(0.0, "#ffffcc"), stop(1.0, "#800026")],
            },
        );
        assert_eq!(scene.node(root).unwrap().children, vec![gradient]);
        match &scene.node(gradient).unwrap().element {
            SvgElement::Gradient(spec) => assert_eq!(spec.stops.len(), 2),
            other => panic!("expected a gradient, got {:?}", other),
        }
    }

    #[test]
    fn test_create_canvas_resets() {
        let mut scene = SvgScene::new();
        let root = scene.create_canvas(10.0, 10.0);
        scene.append_rect(root, rect("#fff"));
        scene.create_canvas(20.0, 20.0);
        assert_eq!(scene.len(), 1);
    }

    #[test]
    fn test_tooltip_state() {
        let mut tooltip = TooltipState::default();
        tooltip.show("2023-01", Point::new(1.0, 2.0));
        tooltip.move_to(Point::new(3.0, 4.0));
        assert!(tooltip.visible);
        assert_eq!(tooltip.position, Point::new(3.0, 4.0));
        tooltip.hide();
        assert!(!tooltip.visible);
    }
}
