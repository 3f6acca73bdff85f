// Triad geometry: the root triangle derived from the viewport, and the
// edge-midpoint subdivision that yields three self-similar children.

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    pub fn midpoint(a: Point, b: Point) -> Point {
        Point::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    pub p1: Point,
    pub p2: Point,
    pub p3: Point,
}

impl Triangle {
    pub fn new(p1: Point, p2: Point, p3: Point) -> Self {
        Triangle { p1, p2, p3 }
    }

    /// Root triad for a logical viewport: equilateral, 90% of the smaller
    /// dimension, centered both ways. p1 is bottom-left, p2 bottom-right,
    /// p3 the apex.
    pub fn root(width: f64, height: f64) -> Self {
        let size = 0.9 * width.min(height);
        let tri_h = size * 3.0_f64.sqrt() / 2.0;
        let offset_x = (width - size) / 2.0;
        let offset_y = (height - tri_h) / 2.0;
        Triangle::new(
            Point::new(offset_x, offset_y + tri_h),
            Point::new(offset_x + size, offset_y + tri_h),
            Point::new(offset_x + size / 2.0, offset_y),
        )
    }

    /// The three corner-anchored children produced by bisecting each edge.
    /// Order is significant: p1-corner, p2-corner, p3-corner, matching the
    /// base-3 leaf index assignment in the renderer.
    pub fn children(&self) -> [Triangle; 3] {
        let mid12 = Point::midpoint(self.p1, self.p2);
        let mid23 = Point::midpoint(self.p2, self.p3);
        let mid31 = Point::midpoint(self.p3, self.p1);
        [
            Triangle::new(self.p1, mid12, mid31),
            Triangle::new(mid12, self.p2, mid23),
            Triangle::new(mid31, mid23, self.p3),
        ]
    }
}
