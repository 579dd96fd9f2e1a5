use egui::{Pos2, Rect};

/// Pointer coordinate in the container's coordinate space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl From<Pos2> for Point {
    fn from(pos: Pos2) -> Self {
        Self::new(pos.x, pos.y)
    }
}

/// Measured rectangle of a drop zone.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoneGeometry {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl ZoneGeometry {
    pub const fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn from_rect(rect: Rect) -> Self {
        Self::new(rect.min.x, rect.min.y, rect.width(), rect.height())
    }

    pub fn right(self) -> f32 {
        self.left + self.width
    }

    pub fn bottom(self) -> f32 {
        self.top + self.height
    }

    /// Strict containment: points on an edge are outside.
    ///
    /// NaN coordinates fail every comparison and are therefore never inside.
    pub fn contains(self, point: Point) -> bool {
        self.left < point.x
            && point.x < self.right()
            && self.top < point.y
            && point.y < self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ZONE: ZoneGeometry = ZoneGeometry::new(240.0, 0.0, 288.0, 172.0);

    #[test]
    fn interior_point_is_inside() {
        assert!(ZONE.contains(Point::new(300.0, 50.0)));
    }

    #[test]
    fn edges_are_excluded() {
        assert!(!ZONE.contains(Point::new(240.0, 50.0)));
        assert!(!ZONE.contains(Point::new(528.0, 50.0)));
        assert!(!ZONE.contains(Point::new(300.0, 0.0)));
        assert!(!ZONE.contains(Point::new(300.0, 172.0)));
    }

    #[test]
    fn just_inside_edges_count() {
        assert!(ZONE.contains(Point::new(240.5, 0.5)));
        assert!(ZONE.contains(Point::new(527.5, 171.5)));
    }

    #[test]
    fn nan_is_never_inside() {
        assert!(!ZONE.contains(Point::new(f32::NAN, 50.0)));
        assert!(!ZONE.contains(Point::new(300.0, f32::NAN)));
    }

    #[test]
    fn rect_conversion_keeps_offsets() {
        let rect = Rect::from_min_size(Pos2::new(912.0, 10.0), egui::vec2(288.0, 172.0));
        let zone = ZoneGeometry::from_rect(rect);
        assert_eq!(zone, ZoneGeometry::new(912.0, 10.0, 288.0, 172.0));
        assert_eq!(zone.right(), 1200.0);
        assert_eq!(zone.bottom(), 182.0);
    }
}
