//! Region-of-interest queries over categorized geographic bounding boxes.
//!
//! A catalog of `{category, bounding box}` records is loaded once, validated,
//! and bulk-indexed into an R-tree. The one query that matters: every object
//! of a category whose box truly intersects a polygon ring, not merely its
//! bounding box.
//!
//! ```rust
//! use geo::line_string;
//! use georoi::{GeoObject, RoiIndex};
//!
//! let objects = vec![GeoObject::new("Building", 23.3711, 23.3720, 42.6696, 42.6703)];
//! let index = RoiIndex::builder().records(objects).build()?;
//!
//! let ring = line_string![
//!     (x: 23.370, y: 42.669),
//!     (x: 23.373, y: 42.669),
//!     (x: 23.373, y: 42.671),
//!     (x: 23.370, y: 42.671),
//!     (x: 23.370, y: 42.669),
//! ];
//! let hits = index.query_category_in_polygon("Building", &ring);
//! assert_eq!(hits.len(), 1);
//! # Ok::<(), georoi::GeoRoiError>(())
//! ```

pub mod builder;
pub mod catalog;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod index;
pub mod types;

pub use builder::RoiIndexBuilder;
pub use catalog::Catalog;
pub use engine::{CategoryCount, IndexStats, RoiIndex};
pub use error::{GeoRoiError, Result};

pub use geo::{Coord, LineString};

pub use geometry::{box_intersects_ring, point_in_ring, ring_bbox, segments_intersect};

pub use index::{IndexEntry, SpatialIndex};

pub use types::{BoundingBox, GeoObject};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common imports
pub mod prelude {

    pub use crate::{GeoRoiError, Result, RoiIndex, RoiIndexBuilder};

    pub use geo::{Coord, LineString};

    pub use crate::geometry::{box_intersects_ring, point_in_ring, segments_intersect};

    pub use crate::{BoundingBox, Catalog, GeoObject};
}
