/// A 2D axis-aligned bounding box represented by minimum and maximum points.
///
/// Coordinates follow the image convention: the origin is the top-left
/// corner of the page, x grows rightwards and y grows downwards, so `min`
/// is the upper-left corner and `max` the lower-right corner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bbox {
    /// The minimum point of the bounding box (upper-left corner).
    pub min: glam::Vec2,
    /// The maximum point of the bounding box (lower-right corner).
    pub max: glam::Vec2,
}

impl Bbox {
    /// Creates a new bounding box from minimum and maximum points.
    ///
    /// # Example
    /// ```
    /// use glam::Vec2;
    /// use docsimp_core::analysis::bbox::Bbox;
    /// let bbox = Bbox::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 5.0));
    /// ```
    pub fn new(min: glam::Vec2, max: glam::Vec2) -> Self {
        Self { min, max }
    }

    /// Width of the bounding box along the x axis.
    ///
    /// Zero-width boxes are valid input; callers that divide by the width
    /// must handle the degenerate case themselves.
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    /// Height of the bounding box along the y axis.
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// Calculates the center point of the bounding box.
    pub fn center(&self) -> glam::Vec2 {
        (self.min + self.max) / 2.0
    }

    /// Creates a union bounding box that encompasses both this bounding box
    /// and another.
    ///
    /// The union is the smallest axis-aligned rectangle that completely
    /// contains both inputs.
    ///
    /// # Example
    /// ```
    /// use glam::Vec2;
    /// use docsimp_core::analysis::bbox::Bbox;
    ///
    /// let bbox1 = Bbox::new(Vec2::new(0.0, 0.0), Vec2::new(5.0, 5.0));
    /// let bbox2 = Bbox::new(Vec2::new(3.0, 3.0), Vec2::new(8.0, 8.0));
    /// let union = bbox1.union(&bbox2);
    ///
    /// assert_eq!(union.min, Vec2::new(0.0, 0.0));
    /// assert_eq!(union.max, Vec2::new(8.0, 8.0));
    /// ```
    pub fn union(&self, other: &Self) -> Self {
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Length of the overlap between this box's horizontal extent and the
    /// range `[ulx, lrx]`.
    ///
    /// Returns 0.0 when the extents are disjoint or merely touch at an
    /// edge. The result is at most `self.width()`.
    ///
    /// # Example
    /// ```
    /// use glam::Vec2;
    /// use docsimp_core::analysis::bbox::Bbox;
    ///
    /// let bbox = Bbox::new(Vec2::new(10.0, 0.0), Vec2::new(50.0, 20.0));
    /// assert_eq!(bbox.h_overlap(30.0, 100.0), 20.0);
    /// assert_eq!(bbox.h_overlap(60.0, 100.0), 0.0);
    /// ```
    pub fn h_overlap(&self, ulx: f32, lrx: f32) -> f32 {
        (self.max.x.min(lrx) - self.min.x.max(ulx)).max(0.0)
    }

    /// Checks whether the x coordinate lies within the range `[min.x, max.x]`,
    /// boundaries included.
    pub fn contains_x(&self, x: f32) -> bool {
        self.min.x <= x && x <= self.max.x
    }
}
