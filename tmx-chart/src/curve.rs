//! Monotone cubic interpolation in x.
//!
//! Tangents follow Steffen's method: the curve never overshoots the local
//! extrema of the data, so a flat run of days draws flat.

use crate::surface::Point;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    /// Cubic Bézier to the last point through two control points.
    CubicTo(Point, Point, Point),
}

fn sign(x: f64) -> f64 {
    if x < 0.0 {
        -1.0
    } else {
        1.0
    }
}

/// Tangent at `p1` from its two neighbours.
fn slope3(p0: Point, p1: Point, p2: Point) -> f64 {
    let h0 = p1.x - p0.x;
    let h1 = p2.x - p1.x;
    if h0 == 0.0 || h1 == 0.0 {
        return 0.0;
    }
    let s0 = (p1.y - p0.y) / h0;
    let s1 = (p2.y - p1.y) / h1;
    let p = (s0 * h1 + s1 * h0) / (h0 + h1);
    let t = (sign(s0) + sign(s1)) * s0.abs().min(s1.abs()).min(0.5 * p.abs());
    if t.is_nan() {
        0.0
    } else {
        t
    }
}

/// Tangent at an end point of segment `p0`-`p1`, given the tangent `t` at the
/// other end.
fn slope2(p0: Point, p1: Point, t: f64) -> f64 {
    let h = p1.x - p0.x;
    if h == 0.0 {
        t
    } else {
        (3.0 * (p1.y - p0.y) / h - t) / 2.0
    }
}

/// Path commands for a monotone-x curve through `points` (which must be
/// sorted by x).
pub fn monotone_x(points: &[Point]) -> Vec<PathCommand> {
    match points {
        [] => Vec::new(),
        [p] => vec![PathCommand::MoveTo(*p)],
        [p0, p1] => vec![PathCommand::MoveTo(*p0), PathCommand::LineTo(*p1)],
        _ => {
            let n = points.len();
            let mut tangents = vec![0.0; n];
            for i in 1..n - 1 {
                tangents[i] = slope3(points[i - 1], points[i], points[i + 1]);
            }
            tangents[0] = slope2(points[0], points[1], tangents[1]);
            tangents[n - 1] = slope2(points[n - 2], points[n - 1], tangents[n - 2]);

            let mut commands = Vec::with_capacity(n);
            commands.push(PathCommand::MoveTo(points[0]));
            for i in 0..n - 1 {
                let (a, b) = (points[i], points[i + 1]);
                let dx = (b.x - a.x) / 3.0;
                commands.push(PathCommand::CubicTo(
                    Point::new(a.x + dx, a.y + dx * tangents[i]),
                    Point::new(b.x - dx, b.y - dx * tangents[i + 1]),
                    b,
                ));
            }
            commands
        }
    }
}

/// Serialize commands as SVG path data, coordinates rounded to 0.01px.
pub fn to_svg_path(commands: &[PathCommand]) -> String {
    let mut d = String::new();
    for command in commands {
        let segment = match command {
            PathCommand::MoveTo(p) => format!("M{},{}", round_px(p.x), round_px(p.y)),
            PathCommand::LineTo(p) => format!("L{},{}", round_px(p.x), round_px(p.y)),
            PathCommand::CubicTo(c1, c2, p) => format!(
                "C{},{},{},{},{},{}",
                round_px(c1.x),
                round_px(c1.y),
                round_px(c2.x),
                round_px(c2.y),
                round_px(p.x),
                round_px(p.y)
            ),
        };
        d.push_str(&segment);
    }
    d
}

/// Approximate the path with a polyline, sampling each cubic segment at
/// `samples` evenly spaced parameter values.
pub fn flatten(commands: &[PathCommand], samples: usize) -> Vec<Point> {
    let samples = samples.max(1);
    let mut points: Vec<Point> = Vec::new();
    for command in commands {
        match *command {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => points.push(p),
            PathCommand::CubicTo(c1, c2, end) => {
                let start = points.last().copied().unwrap_or(c1);
                for k in 1..=samples {
                    points.push(cubic_at(start, c1, c2, end, k as f64 / samples as f64));
                }
            }
        }
    }
    points
}

fn cubic_at(p0: Point, p1: Point, p2: Point, p3: Point, t: f64) -> Point {
    let u = 1.0 - t;
    let (a, b, c, d) = (u * u * u, 3.0 * u * u * t, 3.0 * u * t * t, t * t * t);
    Point::new(
        a * p0.x + b * p1.x + c * p2.x + d * p3.x,
        a * p0.y + b * p1.y + c * p2.y + d * p3.y,
    )
}

/// Round to 0.01px for serialized output.
fn round_px(v: f64) -> f64 {
    let r = (v * 100.0).round() / 100.0;
    // avoid "-0"
    if r == 0.0 {
        0.0
    } else {
        r
    }
}
