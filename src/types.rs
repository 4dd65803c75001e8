//! Core data types: catalog records and axis-aligned bounding boxes.

use geo::{Coord, Rect};
use serde::{Deserialize, Serialize};

/// A categorized geographic object with an axis-aligned bounding-box
/// footprint.
///
/// Field names match the dataset JSON schema verbatim: longitudes are x
/// coordinates, latitudes are y coordinates, both plain planar values with no
/// projection handling. The category is free-form text and is matched
/// case-sensitively in queries.
///
/// # Examples
///
/// ```
/// use georoi::GeoObject;
///
/// let building = GeoObject::new("Building", 23.3711, 23.3720, 42.6696, 42.6703);
/// assert_eq!(building.category, "Building");
/// assert!(building.bbox().width() > 0.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoObject {
    /// Category label, matched case-sensitively.
    pub category: String,
    /// Western boundary (minimum x).
    pub long_min: f64,
    /// Eastern boundary (maximum x).
    pub long_max: f64,
    /// Southern boundary (minimum y).
    pub lat_min: f64,
    /// Northern boundary (maximum y).
    pub lat_max: f64,
}

impl GeoObject {
    /// Create a new geo object. Arguments follow the dataset schema order.
    pub fn new(
        category: impl Into<String>,
        long_min: f64,
        long_max: f64,
        lat_min: f64,
        lat_max: f64,
    ) -> Self {
        Self {
            category: category.into(),
            long_min,
            long_max,
            lat_min,
            lat_max,
        }
    }

    /// The object's footprint as a [`BoundingBox`].
    pub fn bbox(&self) -> BoundingBox {
        BoundingBox::new(self.long_min, self.lat_min, self.long_max, self.lat_max)
    }
}

/// A 2D axis-aligned bounding box.
///
/// A wrapper around `geo::Rect` with the accessors and predicates the query
/// pipeline needs. All containment and overlap tests treat the bounds as
/// inclusive.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundingBox {
    /// The underlying geometric rectangle
    pub rect: Rect,
}

impl BoundingBox {
    /// Create a new bounding box from minimum and maximum coordinates.
    ///
    /// # Examples
    ///
    /// ```
    /// use georoi::BoundingBox;
    ///
    /// let bbox = BoundingBox::new(-74.0, 40.7, -73.9, 40.8);
    /// assert_eq!(bbox.min_x(), -74.0);
    /// assert_eq!(bbox.max_y(), 40.8);
    /// ```
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            rect: Rect::new(
                geo::coord! { x: min_x, y: min_y },
                geo::coord! { x: max_x, y: max_y },
            ),
        }
    }

    /// Create a bounding box from a `geo::Rect`.
    pub fn from_rect(rect: Rect) -> Self {
        Self { rect }
    }

    /// Get the minimum x coordinate.
    pub fn min_x(&self) -> f64 {
        self.rect.min().x
    }

    /// Get the minimum y coordinate.
    pub fn min_y(&self) -> f64 {
        self.rect.min().y
    }

    /// Get the maximum x coordinate.
    pub fn max_x(&self) -> f64 {
        self.rect.max().x
    }

    /// Get the maximum y coordinate.
    pub fn max_y(&self) -> f64 {
        self.rect.max().y
    }

    /// Get the center of the bounding box.
    pub fn center(&self) -> Coord {
        self.rect.center()
    }

    /// Get the width of the bounding box.
    pub fn width(&self) -> f64 {
        self.rect.width()
    }

    /// Get the height of the bounding box.
    pub fn height(&self) -> f64 {
        self.rect.height()
    }

    /// Check if a coordinate lies within this bounding box, bounds inclusive.
    pub fn contains_coord(&self, coord: Coord) -> bool {
        coord.x >= self.min_x()
            && coord.x <= self.max_x()
            && coord.y >= self.min_y()
            && coord.y <= self.max_y()
    }

    /// Check if this bounding box overlaps another, touching edges included.
    pub fn intersects(&self, other: &BoundingBox) -> bool {
        !(self.max_x() < other.min_x()
            || self.min_x() > other.max_x()
            || self.max_y() < other.min_y()
            || self.min_y() > other.max_y())
    }

    /// Expand the bounding box by a given amount in all directions.
    pub fn expand(&self, amount: f64) -> Self {
        Self::new(
            self.min_x() - amount,
            self.min_y() - amount,
            self.max_x() + amount,
            self.max_y() + amount,
        )
    }

    /// Corner coordinates in boundary-walk order: bottom-left, bottom-right,
    /// top-right, top-left.
    pub fn corners(&self) -> [Coord; 4] {
        [
            geo::coord! { x: self.min_x(), y: self.min_y() },
            geo::coord! { x: self.max_x(), y: self.min_y() },
            geo::coord! { x: self.max_x(), y: self.max_y() },
            geo::coord! { x: self.min_x(), y: self.max_y() },
        ]
    }
}
