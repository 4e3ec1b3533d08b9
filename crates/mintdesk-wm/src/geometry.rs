//! Pure drag and resize math. No state, no events.

use mintdesk_common::{Point, Rect, ResizeDirection, Size};

/// Viewport minus the bottom panel.
pub fn work_area(viewport: Size, panel_height: f64) -> Rect {
    Rect::new(
        0.0,
        0.0,
        viewport.width,
        (viewport.height - panel_height).max(0.0),
    )
}

/// Largest origin that keeps a window of `size` inside `area`.
/// Floored at the area origin for windows larger than the area.
fn max_origin(size: Size, area: Rect) -> Point {
    Point::new(
        (area.right() - size.width).max(area.x),
        (area.bottom() - size.height).max(area.y),
    )
}

/// Clamp an origin so the window stays inside `area`.
pub fn clamp_origin(origin: Point, size: Size, area: Rect) -> Point {
    let max = max_origin(size, area);
    Point::new(
        origin.x.max(area.x).min(max.x),
        origin.y.max(area.y).min(max.y),
    )
}

/// Snap to the left, right or top edge when within `threshold`.
///
/// Left wins over right when both are in range. Applying it twice gives the
/// same result.
pub fn snap_origin(origin: Point, size: Size, area: Rect, threshold: f64) -> Point {
    let max = max_origin(size, area);
    let mut snapped = origin;

    if (snapped.x - area.x).abs() <= threshold {
        snapped.x = area.x;
    } else if (max.x - snapped.x).abs() <= threshold {
        snapped.x = max.x;
    }

    if (snapped.y - area.y).abs() <= threshold {
        snapped.y = area.y;
    }

    snapped
}

/// Clamp then snap.
pub fn place(origin: Point, size: Size, area: Rect, threshold: f64) -> Point {
    snap_origin(clamp_origin(origin, size, area), size, area, threshold)
}

/// Bounds after dragging `direction` by `(dx, dy)` from `start`.
///
/// Size is floored at `min`. North and west edges move the origin by the
/// delta actually applied to the dimension, so the opposite edge stays put.
pub fn resize_bounds(start: Rect, direction: ResizeDirection, dx: f64, dy: f64, min: Size) -> Rect {
    let mut out = start;

    if direction.east() {
        out.width = (start.width + dx).max(min.width);
    } else if direction.west() {
        out.width = (start.width - dx).max(min.width);
        out.x = start.x + (start.width - out.width);
    }

    if direction.south() {
        out.height = (start.height + dy).max(min.height);
    } else if direction.north() {
        out.height = (start.height - dy).max(min.height);
        out.y = start.y + (start.height - out.height);
    }

    out
}
