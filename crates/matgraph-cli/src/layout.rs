//! Vertex placement on a drawing surface.
//!
//! # Overview
//!
//! Vertices are laid out inside a frame inset 15% from each side of a
//! `width × height` surface. Four vertices take the corners of a small
//! square-ish frame. Any other count walks the frame clockwise from the
//! top-left corner and puts the last vertex in the centre:
//!
//! - `h = order - 1` for odd orders, `order - 2` for even ones;
//! - the top and bottom edges hold `ceil(h / 4)` points each, the sides
//!   `h / 2 - ceil(h / 4)` each;
//! - for even orders the bottom edge gets one extra point, squeezed into
//!   the same span.

use serde::Serialize;

/// Inset of the frame as a fraction of the surface size.
const BORDER: f32 = 0.15;

/// A position on the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// One point per vertex, indexed by vertex.
#[must_use]
pub fn layout_points(order: usize, width: f32, height: f32) -> Vec<Point> {
    if order == 4 {
        four_points(width, height)
    } else {
        perimeter_points(order, width, height)
    }
}

#[allow(clippy::cast_precision_loss)]
fn perimeter_points(order: usize, width: f32, height: f32) -> Vec<Point> {
    let even = order % 2 == 0;
    let helper = order.saturating_sub(if even { 2 } else { 1 });
    let mut horizontal = helper.div_ceil(4);
    let vertical = helper / 2 - horizontal;

    let left = width * BORDER;
    let mut x = left;
    let mut y = height * BORDER;
    let mut dx = spacing(width, horizontal);
    let dy = spacing(height, vertical);

    let mut points = Vec::with_capacity(order);

    for _ in 0..horizontal {
        points.push(Point::new(x, y));
        x += dx;
    }
    for _ in 0..vertical {
        points.push(Point::new(x, y));
        y += dy;
    }

    if even {
        dx *= horizontal as f32 / (horizontal + 1) as f32;
        horizontal += 1;
    }
    for _ in 0..horizontal {
        points.push(Point::new(x, y));
        x -= dx;
    }

    x = left;
    for _ in 0..vertical {
        points.push(Point::new(x, y));
        y -= dy;
    }

    points.push(Point::new(width / 2.0, height / 2.0));
    points
}

/// Distance between neighbours when `intervals` of them span the frame.
#[allow(clippy::cast_precision_loss)]
fn spacing(extent: f32, intervals: usize) -> f32 {
    if intervals == 0 {
        0.0
    } else {
        extent * 2.0f32.mul_add(-BORDER, 1.0) / intervals as f32
    }
}

fn four_points(width: f32, height: f32) -> Vec<Point> {
    let (x0, y0) = (width * BORDER, height * BORDER);
    let dx = width - width * 2.0f32.mul_add(-BORDER, 1.0);
    let dy = height - height * 2.0f32.mul_add(-BORDER, 1.0);
    vec![
        Point::new(x0, y0),
        Point::new(x0 + dx, y0),
        Point::new(x0 + dx, y0 + dy),
        Point::new(x0, y0 + dy),
    ]
}
