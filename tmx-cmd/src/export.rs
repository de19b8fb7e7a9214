//! Replays an [`SvgScene`] onto a plotters SVG backend.
//!
//! Group origins are accumulated into absolute pixel offsets. A rect filled
//! with `url(#id)` is drawn as one band per stop of the referenced gradient.

use log::debug;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters_svg::SVGBackend;
use std::collections::HashMap;
use tmx_chart::color::Rgb;
use tmx_chart::curve::flatten;
use tmx_chart::surface::{GradientSpec, NodeId, TextAnchor};
use tmx_chart::svg::SvgElement;
use tmx_chart::{Point, SvgScene};

/// Samples per cubic segment when flattening trend lines.
const CURVE_SAMPLES: usize = 8;

type Area<'a> = DrawingArea<SVGBackend<'a>, Shift>;
type Gradients<'s> = HashMap<&'s str, &'s GradientSpec>;

/// Serialize `scene` as a standalone SVG document.
pub fn export_svg(scene: &SvgScene) -> anyhow::Result<String> {
    let Some(root) = scene.root() else {
        anyhow::bail!("scene has no canvas");
    };
    let (width, height) = match scene.node(root).map(|n| &n.element) {
        Some(SvgElement::Canvas { width, height }) => (*width, *height),
        _ => anyhow::bail!("scene root is not a canvas"),
    };
    let gradients: Gradients = (0..scene.len())
        .filter_map(|id| match scene.node(id).map(|n| &n.element) {
            Some(SvgElement::Gradient(spec)) => Some((spec.id.as_str(), spec)),
            _ => None,
        })
        .collect();

    let mut svg = String::new();
    {
        let size = (width.ceil() as u32, height.ceil() as u32);
        let area = SVGBackend::with_string(&mut svg, size).into_drawing_area();
        area.fill(&WHITE)?;
        draw_node(&area, scene, root, Point::default(), &gradients)?;
        area.present()?;
    }
    Ok(svg)
}

fn px(v: f64) -> i32 {
    v.round() as i32
}

fn rgb(paint: &str) -> Option<RGBColor> {
    Rgb::from_hex(paint).map(|c| RGBColor(c.r, c.g, c.b))
}

fn gradient_id(paint: &str) -> Option<&str> {
    paint.strip_prefix("url(#")?.strip_suffix(')')
}

fn draw_node(
    area: &Area<'_>,
    scene: &SvgScene,
    id: NodeId,
    offset: Point,
    gradients: &Gradients<'_>,
) -> anyhow::Result<()> {
    let Some(node) = scene.node(id) else {
        return Ok(());
    };
    let mut origin = offset;
    match &node.element {
        SvgElement::Canvas { .. } | SvgElement::Gradient(_) => {}
        SvgElement::Group { origin: at } => origin = offset.offset(*at),
        SvgElement::Rect { spec, .. } => {
            let (x0, y0) = (offset.x + spec.x, offset.y + spec.y);
            let (x1, y1) = (x0 + spec.width, y0 + spec.height);
            if let Some(color) = rgb(&spec.fill) {
                area.draw(&Rectangle::new(
                    [(px(x0), px(y0)), (px(x1), px(y1))],
                    color.filled(),
                ))?;
            } else if let Some(gradient) =
                gradient_id(&spec.fill).and_then(|g| gradients.get(g))
            {
                let bands = gradient.stops.len().max(1) as f64;
                for (i, stop) in gradient.stops.iter().enumerate() {
                    let Some(color) = rgb(&stop.color) else {
                        continue;
                    };
                    let top = y0 + spec.height * i as f64 / bands;
                    let bottom = y0 + spec.height * (i + 1) as f64 / bands;
                    area.draw(&Rectangle::new(
                        [(px(x0), px(top)), (px(x1), px(bottom))],
                        color.filled(),
                    ))?;
                }
            } else {
                debug!("export: unsupported fill {}", spec.fill);
            }
            if let Some(stroke) = spec.stroke.as_deref().and_then(rgb) {
                area.draw(&Rectangle::new(
                    [(px(x0), px(y0)), (px(x1), px(y1))],
                    stroke.stroke_width(1),
                ))?;
            }
        }
        SvgElement::Path(line) => {
            let points: Vec<(i32, i32)> = flatten(&line.commands, CURVE_SAMPLES)
                .into_iter()
                .map(|p| (px(offset.x + p.x), px(offset.y + p.y)))
                .collect();
            if let Some(color) = rgb(&line.stroke) {
                let width = line.stroke_width.round().max(1.0) as u32;
                area.draw(&PathElement::new(points, color.stroke_width(width)))?;
            }
        }
        SvgElement::Text(label) => {
            let color = rgb(&label.fill).unwrap_or(BLACK);
            let h_pos = match label.anchor {
                TextAnchor::Start => HPos::Left,
                TextAnchor::Middle => HPos::Center,
                TextAnchor::End => HPos::Right,
            };
            let style = TextStyle::from((FontFamily::SansSerif, label.font_size))
                .color(&color)
                .pos(Pos::new(h_pos, VPos::Bottom));
            area.draw(&Text::new(
                label.text.as_str(),
                (px(offset.x + label.x), px(offset.y + label.y)),
                style,
            ))?;
        }
    }
    for child in &node.children {
        draw_node(area, scene, *child, origin, gradients)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tmx_chart::legend::legend_stops;
    use tmx_chart::surface::{GradientStop, RectSpec, Surface};
    use tmx_chart::{ColorScale, Layout, MatrixChart, ModeLabel, ViewMode};
    use tmx_data::loader::load_str;

    const SAMPLE: &str = "date,max_temperature,min_temperature
2023-01-01,10,2
2023-01-02,14,4
2023-01-03,12,3
";

    fn rect(fill: &str) -> RectSpec {
        RectSpec {
            x: 0.0,
            y: 0.0,
            width: 20.0,
            height: 100.0,
            fill: fill.to_string(),
            stroke: None,
        }
    }

    #[test]
    fn test_export_draws_cells_lines_and_labels() {
        let dataset = load_str(SAMPLE, 10).unwrap().dataset;
        let mut scene = SvgScene::new();
        let mut label = ModeLabel::default();
        let chart = MatrixChart::render(
            dataset,
            Layout::default(),
            ViewMode::Max,
            &mut scene,
            &mut label,
        );
        let svg = export_svg(&scene).unwrap();
        let lower = svg.to_lowercase();

        assert!(svg.contains("<svg"));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert!(svg.contains(">January</text>"));
        assert!(svg.contains(">2023</text>"));
        assert!(svg.contains(">40 °C</text>"));
        assert!(lower.contains(&chart.scales().color.color(14.0)));
        assert!(svg.contains("<polyline"));
        // legend bands
        for stop in legend_stops(&chart.scales().color, 11) {
            assert!(lower.contains(&stop.color), "missing band {}", stop.color);
        }
    }

    #[test]
    fn test_gradient_fill_becomes_bands() {
        let mut scene = SvgScene::new();
        let root = scene.create_canvas(40.0, 120.0);
        let stop = |offset: f64, color: &str| GradientStop {
            offset,
            color: color.to_string(),
        };
        scene.append_gradient(
            root,
            GradientSpec {
                id: "bar".to_string(),
                from: Point::new(0.0, 0.0),
                to: Point::new(0.0, 1.0),
                stops: vec![stop(0.0, "#ffffcc"), stop(1.0, "#800026")],
            },
        );
        scene.append_rect(root, rect("url(#bar)"));
        scene.append_rect(root, rect("url(#missing)"));

        let svg = export_svg(&scene).unwrap().to_lowercase();
        assert!(svg.contains("#ffffcc"));
        assert!(svg.contains("#800026"));
        // background plus two bands
        assert_eq!(svg.matches("<rect").count(), 3);
    }

    #[test]
    fn test_groups_offset_children() {
        let mut scene = SvgScene::new();
        let root = scene.create_canvas(100.0, 100.0);
        let outer = scene.append_group(root, Point::new(10.0, 20.0));
        let inner = scene.append_group(outer, Point::new(5.0, 5.0));
        scene.append_rect(inner, rect("#fd8d3c"));
        let svg = export_svg(&scene).unwrap();
        assert!(svg.contains("x=\"15\" y=\"25\""));
    }

    #[test]
    fn test_empty_scene_is_an_error() {
        assert!(export_svg(&SvgScene::new()).is_err());
        let color = ColorScale::new(0.0, 40.0);
        assert_eq!(rgb(&color.color(0.0)), Some(RGBColor(0xff, 0xff, 0xcc)));
        assert_eq!(rgb("url(#x)"), None);
    }
}
