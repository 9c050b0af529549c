//! Geometry of a single spawned web.

use std::f64::consts::PI;
use std::time::Duration;

use rand::Rng;

use super::WebConfig;

const NODE_STAGGER: Duration = Duration::from_millis(80);
const SPOKE_STAGGER: Duration = Duration::from_millis(100);
const SPOKE_BASE_DELAY: Duration = Duration::from_millis(200);
const CHORD_DELAY: Duration = Duration::from_millis(500);
const ANGLE_WOBBLE: f64 = 0.5;

/// A point in container coordinates, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// Horizontal offset from the container's left edge.
    pub x: f64,
    /// Vertical offset from the container's top edge.
    pub y: f64,
}

impl Point {
    /// A point at `(x, y)`.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// Left edge.
    pub left: f64,
    /// Top edge.
    pub top: f64,
    /// Width.
    pub width: f64,
    /// Height.
    pub height: f64,
}

impl Rect {
    /// A rectangle at `(left, top)` with the given size.
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Right edge.
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    /// Bottom edge.
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// This rectangle grown by `margin` on every side.
    pub fn expanded(&self, margin: f64) -> Self {
        Self::new(
            self.left - margin,
            self.top - margin,
            self.width + 2.0 * margin,
            self.height + 2.0 * margin,
        )
    }

    /// Whether `point` lies inside or on the edge.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.left
            && point.x <= self.right()
            && point.y >= self.top
            && point.y <= self.bottom()
    }

    /// `point` relative to this rectangle's top-left corner.
    pub fn to_local(&self, point: Point) -> Point {
        Point::new(point.x - self.left, point.y - self.top)
    }

    /// `other` relative to this rectangle's top-left corner.
    pub fn to_local_rect(&self, other: Rect) -> Rect {
        let origin = self.to_local(Point::new(other.left, other.top));
        Rect::new(origin.x, origin.y, other.width, other.height)
    }
}

/// A dot in the web.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WebNode {
    /// Center of the dot.
    pub at: Point,
    /// Delay before the dot animates in.
    pub delay: Duration,
}

/// A strand from `origin`, `length` pixels long at `angle_deg` degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WebLine {
    /// Where the strand starts.
    pub origin: Point,
    /// Strand length.
    pub length: f64,
    /// Rotation clockwise from the positive x axis, in degrees.
    pub angle_deg: f64,
    /// Delay before the strand animates in.
    pub delay: Duration,
}

impl WebLine {
    fn between(from: Point, to: Point, delay: Duration) -> Self {
        let dx = to.x - from.x;
        let dy = to.y - from.y;
        Self {
            origin: from,
            length: dx.hypot(dy),
            angle_deg: dy.atan2(dx).to_degrees(),
            delay,
        }
    }
}

/// One generated web: outer nodes, then the center node, plus its strands.
#[derive(Debug, Clone, PartialEq)]
pub struct WebPattern {
    /// Outer nodes followed by the center node.
    pub nodes: Vec<WebNode>,
    /// Spokes from the center, then one chord between the first two outer nodes.
    pub lines: Vec<WebLine>,
}

impl WebPattern {
    /// The node the pointer spawned the web at.
    pub fn center(&self) -> Option<&WebNode> {
        self.nodes.last()
    }

    /// Every node except the center.
    pub fn outer_nodes(&self) -> &[WebNode] {
        match self.nodes.split_last() {
            Some((_, outer)) => outer,
            None => &[],
        }
    }
}

/// Generate a web around `center` inside a container of `bounds` size.
///
/// Outer nodes are spread evenly around the circle with a small random
/// wobble and clamped inside the container; the center node is not clamped.
pub fn generate_pattern<R>(rng: &mut R, center: Point, bounds: Rect, config: &WebConfig) -> WebPattern
where
    R: Rng,
{
    let counts = config.outer_nodes();
    let count = if counts.is_empty() {
        *counts.start()
    } else {
        rng.random_range(counts)
    };
    let radius = config.min_radius() + rng.random::<f64>() * config.radius_spread();
    let pad = config.edge_padding();

    let mut points: Vec<Point> = (0..count)
        .map(|i| {
            let angle =
                (i as f64 / count as f64) * PI * 2.0 + (rng.random::<f64>() - 0.5) * ANGLE_WOBBLE;
            let distance = radius * (0.7 + rng.random::<f64>() * 0.3);
            Point::new(
                clamp_axis(center.x + angle.cos() * distance, pad, bounds.width),
                clamp_axis(center.y + angle.sin() * distance, pad, bounds.height),
            )
        })
        .collect();
    points.push(center);

    let nodes = points
        .iter()
        .enumerate()
        .map(|(i, &at)| WebNode {
            at,
            delay: NODE_STAGGER * i as u32,
        })
        .collect();

    let mut lines: Vec<WebLine> = points[..count]
        .iter()
        .enumerate()
        .map(|(i, &outer)| {
            WebLine::between(center, outer, SPOKE_BASE_DELAY + SPOKE_STAGGER * i as u32)
        })
        .collect();
    if points.len() > 3 {
        lines.push(WebLine::between(points[0], points[1], CHORD_DELAY));
    }

    WebPattern { nodes, lines }
}

// Lower bound wins when the container is narrower than twice the padding.
fn clamp_axis(value: f64, pad: f64, extent: f64) -> f64 {
    value.min(extent - pad).max(pad)
}
