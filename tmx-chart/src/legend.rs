//! Vertical color legend to the right of the grid.

use crate::color::ColorScale;
use crate::config::{Layout, LABEL_COLOR};
use crate::surface::{
    GradientSpec, GradientStop, NodeId, Point, RectSpec, Surface, TextAnchor, TextSpec,
};

pub const LEGEND_GRADIENT_ID: &str = "temperature-legend-gradient";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LegendNodes {
    pub group: NodeId,
    pub bar: NodeId,
    pub top_label: NodeId,
    pub bottom_label: NodeId,
}

/// `count` evenly spaced stops over the color scale's domain, top to bottom.
pub fn legend_stops(color: &ColorScale, count: usize) -> Vec<GradientStop> {
    let count = count.max(2);
    let (d0, d1) = color.domain();
    (0..count)
        .map(|i| {
            let t = i as f64 / (count - 1) as f64;
            GradientStop {
                offset: t,
                color: color.color(d0 + (d1 - d0) * t),
            }
        })
        .collect()
}

fn degrees(value: f64) -> String {
    format!("{} °C", value)
}

/// Draw the legend into `parent` (the plot area group).
pub fn render_legend<S: Surface>(
    surface: &mut S,
    parent: NodeId,
    color: &ColorScale,
    layout: &Layout,
    year_count: usize,
) -> LegendNodes {
    let height = layout.grid_height();
    let origin = Point::new(layout.grid_width(year_count) + layout.legend_gutter, 0.0);
    let group = surface.append_group(parent, origin);

    surface.append_gradient(
        group,
        GradientSpec {
            id: LEGEND_GRADIENT_ID.to_string(),
            from: Point::new(0.0, 0.0),
            to: Point::new(0.0, 1.0),
            stops: legend_stops(color, layout.legend_stops),
        },
    );
    let bar = surface.append_rect(
        group,
        RectSpec {
            x: 0.0,
            y: 0.0,
            width: layout.legend_width,
            height,
            fill: format!("url(#{})", LEGEND_GRADIENT_ID),
            stroke: Some(LABEL_COLOR.to_string()),
        },
    );

    let (d0, d1) = color.domain();
    let label = |text: String, y: f64| TextSpec {
        x: layout.legend_width / 2.0,
        y,
        text,
        anchor: TextAnchor::Middle,
        font_size: 11.0,
        fill: LABEL_COLOR.to_string(),
    };
    let top_label = surface.append_text(group, label(degrees(d0), -6.0));
    let bottom_label = surface.append_text(group, label(degrees(d1), height + 14.0));

    LegendNodes {
        group,
        bar,
        top_label,
        bottom_label,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{TEMP_MAX, TEMP_MIN};
    use crate::svg::{SvgElement, SvgScene};

    #[test]
    fn test_stops_cover_domain() {
        let color = ColorScale::new(TEMP_MIN, TEMP_MAX);
        let stops = legend_stops(&color, 11);
        assert_eq!(stops.len(), 11);
        assert_eq!(stops[0].offset, 0.0);
        assert_eq!(stops[10].offset, 1.0);
        assert_eq!(stops[0].color, color.color(TEMP_MIN));
        assert_eq!(stops[10].color, color.color(TEMP_MAX));
        assert_eq!(stops[5].color, color.color(20.0));
    }

    #[test]
    fn test_legend_position_and_labels() {
        let mut scene = SvgScene::new();
        let root = scene.create_canvas(500.0, 500.0);
        let layout = Layout::default();
        let color = ColorScale::new(TEMP_MIN, TEMP_MAX);
        let legend = render_legend(&mut scene, root, &color, &layout, 3);

        match &scene.node(legend.group).unwrap().element {
            SvgElement::Group { origin } => assert_eq!(*origin, Point::new(320.0, 0.0)),
            other => panic!("expected a group, got {:?}", other),
        }
        assert_eq!(
            scene.fill(legend.bar),
            Some("url(#temperature-legend-gradient)")
        );
        let texts: Vec<&str> = scene.texts().collect();
        assert_eq!(texts, vec!["0 °C", "40 °C"]);
    }
}
