//! Bulk-loaded R-tree over the catalog's bounding boxes.

use crate::catalog::Catalog;
use crate::types::BoundingBox;
use rstar::{AABB, RTree, RTreeObject};

/// One indexed box: envelope coordinates, the category, and the catalog slot
/// of the originating record.
///
/// Entries carry only what the query pipeline needs before map-back. The
/// catalog stays the single owner of the records; results are resolved
/// through the slot.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexEntry {
    /// Minimum x (longitude) of the box.
    pub min_x: f64,
    /// Minimum y (latitude) of the box.
    pub min_y: f64,
    /// Maximum x (longitude) of the box.
    pub max_x: f64,
    /// Maximum y (latitude) of the box.
    pub max_y: f64,
    /// Category of the originating record.
    pub category: String,
    /// Slot of the originating record in the catalog.
    pub slot: usize,
}

impl IndexEntry {
    /// The entry's box as a [`BoundingBox`].
    pub fn bbox(&self) -> BoundingBox {
        BoundingBox::new(self.min_x, self.min_y, self.max_x, self.max_y)
    }
}

impl RTreeObject for IndexEntry {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners([self.min_x, self.min_y], [self.max_x, self.max_y])
    }
}

/// Read-only spatial index over a catalog.
///
/// Built once with a single bulk load; there is no insert or remove path.
/// Range queries return an approximate superset: every entry whose box
/// overlaps the query box under the inclusive axis-aligned test. Exact
/// polygon refinement is the caller's concern.
#[derive(Debug)]
pub struct SpatialIndex {
    tree: RTree<IndexEntry>,
}

impl SpatialIndex {
    /// Bulk-build the index from every catalog slot.
    pub fn build(catalog: &Catalog) -> Self {
        let entries: Vec<IndexEntry> = catalog
            .objects()
            .iter()
            .enumerate()
            .map(|(slot, obj)| IndexEntry {
                min_x: obj.long_min,
                min_y: obj.lat_min,
                max_x: obj.long_max,
                max_y: obj.lat_max,
                category: obj.category.clone(),
                slot,
            })
            .collect();

        log::debug!("bulk-loading spatial index with {} entries", entries.len());
        Self {
            tree: RTree::bulk_load(entries),
        }
    }

    /// All entries whose boxes overlap `query`, bounds inclusive.
    ///
    /// Touching edges count as overlap. Result order follows tree traversal
    /// and is unspecified.
    pub fn search(&self, query: &BoundingBox) -> Vec<&IndexEntry> {
        let envelope = AABB::from_corners(
            [query.min_x(), query.min_y()],
            [query.max_x(), query.max_y()],
        );
        self.tree
            .locate_in_envelope_intersecting(&envelope)
            .collect()
    }

    /// Number of indexed entries.
    pub fn len(&self) -> usize {
        self.tree.size()
    }

    /// Whether the index holds no entries.
    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::GeoObject;

    fn catalog_of(records: Vec<GeoObject>) -> Catalog {
        Catalog::from_records(records).unwrap()
    }

    #[test]
    fn test_entry_envelope_matches_bounds() {
        let entry = IndexEntry {
            min_x: 1.0,
            min_y: 2.0,
            max_x: 3.0,
            max_y: 4.0,
            category: "Building".to_string(),
            slot: 0,
        };
        let envelope = entry.envelope();
        assert_eq!(envelope.lower(), [1.0, 2.0]);
        assert_eq!(envelope.upper(), [3.0, 4.0]);
    }

    #[test]
    fn test_build_and_search() {
        let catalog = catalog_of(vec![
            GeoObject::new("Building", 0.0, 1.0, 0.0, 1.0),
            GeoObject::new("Building", 5.0, 6.0, 5.0, 6.0),
            GeoObject::new("Park", 0.5, 1.5, 0.5, 1.5),
        ]);
        let index = SpatialIndex::build(&catalog);
        assert_eq!(index.len(), 3);

        let hits = index.search(&BoundingBox::new(0.0, 0.0, 2.0, 2.0));
        let mut slots: Vec<usize> = hits.iter().map(|e| e.slot).collect();
        slots.sort_unstable();
        assert_eq!(slots, vec![0, 2]);
    }

    #[test]
    fn test_search_touching_edge_included() {
        let catalog = catalog_of(vec![GeoObject::new("Building", 1.0, 2.0, 1.0, 2.0)]);
        let index = SpatialIndex::build(&catalog);

        // Query box that only shares the x = 1.0 edge.
        let hits = index.search(&BoundingBox::new(0.0, 0.0, 1.0, 3.0));
        assert_eq!(hits.len(), 1);
    }

    #[test]
    fn test_search_disjoint_returns_empty() {
        let catalog = catalog_of(vec![GeoObject::new("Building", 0.0, 1.0, 0.0, 1.0)]);
        let index = SpatialIndex::build(&catalog);

        let hits = index.search(&BoundingBox::new(10.0, 10.0, 11.0, 11.0));
        assert!(hits.is_empty());
    }

    #[test]
    fn test_entries_carry_category_and_slot() {
        let catalog = catalog_of(vec![
            GeoObject::new("Building", 0.0, 1.0, 0.0, 1.0),
            GeoObject::new("Park", 2.0, 3.0, 2.0, 3.0),
        ]);
        let index = SpatialIndex::build(&catalog);

        let hits = index.search(&BoundingBox::new(2.0, 2.0, 3.0, 3.0));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].category, "Park");
        assert_eq!(catalog.get(hits[0].slot).unwrap().category, "Park");
    }

    #[test]
    fn test_empty_catalog() {
        let index = SpatialIndex::build(&Catalog::new());
        assert!(index.is_empty());
        assert!(
            index
                .search(&BoundingBox::new(-180.0, -90.0, 180.0, 90.0))
                .is_empty()
        );
    }
}
