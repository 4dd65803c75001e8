//! The region-of-interest query engine.
//!
//! [`RoiIndex`] is an owned, immutable handle over a validated catalog and
//! its bulk-loaded spatial index. Construction is the only fallible step;
//! queries never fail and return empty results for anything that cannot
//! match.

use crate::builder::RoiIndexBuilder;
use crate::catalog::Catalog;
use crate::geometry;
use crate::index::SpatialIndex;
use crate::types::GeoObject;
use geo::{LineString, Polygon};
use rustc_hash::FxHashMap;

/// Per-category record count, used in [`IndexStats`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryCount {
    /// Category label.
    pub category: String,
    /// Number of records carrying the label.
    pub count: usize,
}

/// Summary statistics for a built index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexStats {
    /// Total records in the catalog.
    pub object_count: usize,
    /// Per-category counts, largest first.
    pub categories: Vec<CategoryCount>,
}

/// Immutable region-of-interest index over a categorized box catalog.
///
/// The handle owns the catalog and the spatial index and answers one
/// question: which objects of a category truly intersect a polygon ring.
/// There is no mutation path. Rebuilding means constructing a new handle
/// (typically swapped behind an `Arc`), so readers never observe a
/// half-built structure.
///
/// # Thread safety
///
/// All owned data is immutable after construction, so `RoiIndex` is `Send`
/// and `Sync` and any number of threads can query it without locking.
///
/// # Examples
///
/// ```rust
/// use geo::line_string;
/// use georoi::RoiIndex;
///
/// # fn main() -> georoi::Result<()> {
/// let index = RoiIndex::builder().demo_dataset().build()?;
///
/// let ring = line_string![
///     (x: 23.370, y: 42.669),
///     (x: 23.373, y: 42.669),
///     (x: 23.373, y: 42.671),
///     (x: 23.370, y: 42.671),
///     (x: 23.370, y: 42.669),
/// ];
/// let hits = index.query_category_in_polygon("Building", &ring);
/// assert!(!hits.is_empty());
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct RoiIndex {
    catalog: Catalog,
    index: SpatialIndex,
}

impl RoiIndex {
    /// Start building an index: pick a dataset source, then `build()`.
    pub fn builder() -> RoiIndexBuilder {
        RoiIndexBuilder::new()
    }

    /// Build an index directly over an already validated catalog.
    pub fn from_catalog(catalog: Catalog) -> Self {
        let index = SpatialIndex::build(&catalog);
        Self { catalog, index }
    }

    /// All objects of `category` whose boxes truly intersect the polygon
    /// `ring`.
    ///
    /// The ring may arrive open or closed; it is normalized to closed form
    /// before testing. The pipeline narrows candidates with a bounding-box
    /// range query, filters them by exact case-sensitive category equality,
    /// and only runs the exact box-versus-polygon test on what remains.
    ///
    /// Never fails: a ring with fewer than 3 vertices, an unknown category,
    /// or a ring far from every object all yield an empty vector. Result
    /// order follows index traversal and is unspecified.
    pub fn query_category_in_polygon(&self, category: &str, ring: &LineString) -> Vec<GeoObject> {
        if ring.0.len() < 3 {
            log::debug!("rejecting query ring with {} vertices", ring.0.len());
            return Vec::new();
        }

        // Polygon construction closes the exterior ring when it arrives open.
        let polygon = Polygon::new(ring.clone(), Vec::new());
        let closed = &polygon.exterior().0;

        let Some(query_bbox) = geometry::ring_bbox(closed) else {
            return Vec::new();
        };

        self.index
            .search(&query_bbox)
            .into_iter()
            .filter(|entry| entry.category == category)
            .filter(|entry| geometry::box_intersects_ring(&entry.bbox(), closed))
            .filter_map(|entry| self.catalog.get(entry.slot).cloned())
            .collect()
    }

    /// All objects carrying `category`, in catalog order.
    pub fn objects_in_category(&self, category: &str) -> Vec<GeoObject> {
        self.catalog
            .objects()
            .iter()
            .filter(|obj| obj.category == category)
            .cloned()
            .collect()
    }

    /// The catalog backing this index.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Number of indexed objects.
    pub fn len(&self) -> usize {
        self.catalog.len()
    }

    /// Whether the index holds no objects.
    pub fn is_empty(&self) -> bool {
        self.catalog.is_empty()
    }

    /// Distinct category labels, sorted alphabetically.
    pub fn categories(&self) -> Vec<String> {
        let mut labels: Vec<String> = self
            .stats()
            .categories
            .into_iter()
            .map(|c| c.category)
            .collect();
        labels.sort_unstable();
        labels
    }

    /// Catalog statistics with per-category counts, largest first.
    pub fn stats(&self) -> IndexStats {
        let mut counts: FxHashMap<&str, usize> = FxHashMap::default();
        for obj in self.catalog.objects() {
            *counts.entry(obj.category.as_str()).or_insert(0) += 1;
        }

        let mut categories: Vec<CategoryCount> = counts
            .into_iter()
            .map(|(category, count)| CategoryCount {
                category: category.to_string(),
                count,
            })
            .collect();
        categories
            .sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.category.cmp(&b.category)));

        IndexStats {
            object_count: self.catalog.len(),
            categories,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_index() -> RoiIndex {
        let catalog = Catalog::from_records(vec![
            GeoObject::new("Building", 0.0, 1.0, 0.0, 1.0),
            GeoObject::new("Building", 5.0, 6.0, 5.0, 6.0),
            GeoObject::new("Park", 2.0, 3.0, 2.0, 3.0),
            GeoObject::new("Building", 7.0, 8.0, 7.0, 8.0),
        ])
        .unwrap();
        RoiIndex::from_catalog(catalog)
    }

    #[test]
    fn test_len_and_is_empty() {
        let index = sample_index();
        assert_eq!(index.len(), 4);
        assert!(!index.is_empty());

        let empty = RoiIndex::from_catalog(Catalog::new());
        assert!(empty.is_empty());
    }

    #[test]
    fn test_objects_in_category() {
        let index = sample_index();
        let buildings = index.objects_in_category("Building");
        assert_eq!(buildings.len(), 3);
        assert!(buildings.iter().all(|o| o.category == "Building"));

        assert!(index.objects_in_category("Nonexistent").is_empty());
    }

    #[test]
    fn test_stats_sorted_by_count() {
        let index = sample_index();
        let stats = index.stats();
        assert_eq!(stats.object_count, 4);
        assert_eq!(stats.categories.len(), 2);
        assert_eq!(stats.categories[0].category, "Building");
        assert_eq!(stats.categories[0].count, 3);
        assert_eq!(stats.categories[1].category, "Park");
        assert_eq!(stats.categories[1].count, 1);
    }

    #[test]
    fn test_categories_sorted_alphabetically() {
        let index = sample_index();
        assert_eq!(index.categories(), vec!["Building", "Park"]);
    }
}
