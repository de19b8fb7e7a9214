//! Renders the chart's retained SVG scene as live elements and routes pointer
//! events on the cells back to the chart.

use crate::state::AppState;
use dioxus::prelude::*;
use tmx_chart::surface::NodeId;
use tmx_chart::svg::SvgElement;
use tmx_chart::{Point, PointerEvent, SvgScene};
use tmx_data::MonthKey;

type PointerHandler = EventHandler<(MonthKey, PointerEvent)>;

fn page_point(evt: &MouseEvent) -> Point {
    let p = evt.page_coordinates();
    Point::new(p.x, p.y)
}

#[component]
pub fn TemperatureMatrix() -> Element {
    let mut state = use_context::<AppState>();

    let on_pointer: PointerHandler =
        EventHandler::new(move |(key, event): (MonthKey, PointerEvent)| {
            if let Some(view) = state.view.write().as_mut() {
                view.pointer(key, event);
            }
        });

    let view = state.view.read();
    let Some(view) = view.as_ref() else {
        return rsx! {};
    };
    let Some(root) = view.scene.root() else {
        return rsx! {};
    };

    rsx! {
        div {
            style: "overflow-x: auto;",
            {scene_node(&view.scene, root, on_pointer)}
        }
    }
}

fn scene_node(scene: &SvgScene, id: NodeId, on_pointer: PointerHandler) -> Element {
    let Some(node) = scene.node(id) else {
        return rsx! {};
    };
    let children = node
        .children
        .iter()
        .map(|child| scene_node(scene, *child, on_pointer));

    match &node.element {
        SvgElement::Canvas { width, height } => rsx! {
            svg {
                width: "{width}",
                height: "{height}",
                view_box: "0 0 {width} {height}",
                font_family: "sans-serif",
                {children}
            }
        },
        SvgElement::Group { origin } => {
            let transform = format!("translate({},{})", origin.x, origin.y);
            match node.pointer {
                Some(key) => rsx! {
                    g {
                        transform: "{transform}",
                        style: "cursor: pointer;",
                        onmouseenter: move |evt: MouseEvent| {
                            on_pointer.call((key, PointerEvent::Enter(page_point(&evt))))
                        },
                        onmousemove: move |evt: MouseEvent| {
                            on_pointer.call((key, PointerEvent::Move(page_point(&evt))))
                        },
                        onmouseleave: move |_| on_pointer.call((key, PointerEvent::Leave)),
                        onclick: move |_| on_pointer.call((key, PointerEvent::Click)),
                        {children}
                    }
                },
                None => rsx! {
                    g {
                        transform: "{transform}",
                        {children}
                    }
                },
            }
        }
        SvgElement::Rect { spec, transition } => {
            let style = transition
                .map(|t| format!("transition: fill {}ms;", t.duration_ms))
                .unwrap_or_default();
            rsx! {
                rect {
                    x: "{spec.x}",
                    y: "{spec.y}",
                    width: "{spec.width}",
                    height: "{spec.height}",
                    fill: "{spec.fill}",
                    stroke: spec.stroke.clone(),
                    style: "{style}",
                }
            }
        }
        SvgElement::Path(line) => {
            let d = line.d();
            rsx! {
                path {
                    d: "{d}",
                    fill: "none",
                    stroke: "{line.stroke}",
                    stroke_width: "{line.stroke_width}",
                    pointer_events: "none",
                }
            }
        }
        SvgElement::Text(label) => rsx! {
            text {
                x: "{label.x}",
                y: "{label.y}",
                text_anchor: label.anchor.as_str(),
                font_size: "{label.font_size}",
                fill: "{label.fill}",
                "{label.text}"
            }
        },
        SvgElement::Gradient(gradient) => {
            let stops: Vec<(String, String)> = gradient
                .stops
                .iter()
                .map(|stop| (format!("{}%", stop.offset * 100.0), stop.color.clone()))
                .collect();
            rsx! {
                defs {
                    linearGradient {
                        id: "{gradient.id}",
                        x1: "{gradient.from.x}",
                        y1: "{gradient.from.y}",
                        x2: "{gradient.to.x}",
                        y2: "{gradient.to.y}",
                        for (offset, color) in stops {
                            stop {
                                offset: "{offset}",
                                stop_color: "{color}",
                            }
                        }
                    }
                }
            }
        }
    }
}
