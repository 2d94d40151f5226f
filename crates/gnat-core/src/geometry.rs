//! Axis-aligned square boxes in the (t1, t2) plane

/// Quadrant selector for box subdivision, in fixed NW, SW, NE, SE order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quadrant {
    /// North-west: low t1, high t2
    NorthWest,
    /// South-west: low t1, low t2
    SouthWest,
    /// North-east: high t1, high t2
    NorthEast,
    /// South-east: high t1, low t2
    SouthEast,
}

impl Quadrant {
    /// All quadrants in subdivision order
    pub const ALL: [Quadrant; 4] = [
        Quadrant::NorthWest,
        Quadrant::SouthWest,
        Quadrant::NorthEast,
        Quadrant::SouthEast,
    ];
}

/// An axis-aligned square, stored as center and half-width
///
/// Containment is strict on both axes; intersection is inclusive. Both
/// follow directly from the center/half-width representation: a point sits
/// inside iff each axis separation from the center is under the half-width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    /// Center on the t1 axis
    pub cx: f64,
    /// Center on the t2 axis
    pub cy: f64,
    /// Half-width of the square
    pub half: f64,
}

impl BoundingBox {
    /// Create a box from center coordinates and half-width
    pub const fn new(cx: f64, cy: f64, half: f64) -> Self {
        Self { cx, cy, half }
    }

    /// Strict containment test for a point
    pub fn contains(&self, (x, y): (f64, f64)) -> bool {
        (x - self.cx).abs() < self.half && (y - self.cy).abs() < self.half
    }

    /// Inclusive intersection test with another box
    pub fn intersects(&self, other: &BoundingBox) -> bool {
        let d = self.half + other.half;
        (other.cx - self.cx).abs() <= d && (other.cy - self.cy).abs() <= d
    }

    /// The child box covering one quadrant, at half the half-width
    pub fn quadrant(&self, q: Quadrant) -> BoundingBox {
        let h = self.half / 2.0;
        let (cx, cy) = match q {
            Quadrant::NorthWest => (self.cx - h, self.cy + h),
            Quadrant::SouthWest => (self.cx - h, self.cy - h),
            Quadrant::NorthEast => (self.cx + h, self.cy + h),
            Quadrant::SouthEast => (self.cx + h, self.cy - h),
        };
        BoundingBox::new(cx, cy, h)
    }
}
