//! Region-of-Interest Query Example
//!
//! This example walks through the full query pipeline on the bundled demo
//! dataset: build an index, inspect the catalog, and run polygon queries.
//!
//! Run with `RUST_LOG=debug` to see the load and query diagnostics.

use geo::line_string;
use georoi::RoiIndex;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    println!("=== GeoRoi - Region of Interest Queries ===\n");
    println!("georoi v{}\n", georoi::VERSION);

    // ========================================
    // 1. Build the Index
    // ========================================
    println!("1. Build the Index");
    println!("------------------");

    let index = RoiIndex::builder().demo_dataset().build()?;
    println!("   ✓ Loaded {} objects around Sofia\n", index.len());

    // ========================================
    // 2. Catalog Overview
    // ========================================
    println!("2. Catalog Overview");
    println!("-------------------");

    let stats = index.stats();
    println!("   {} objects in {} categories:", stats.object_count, stats.categories.len());
    for entry in &stats.categories {
        println!("     • {}: {}", entry.category, entry.count);
    }

    // ========================================
    // 3. Buildings in a Polygon
    // ========================================
    println!("\n3. Buildings in a Polygon");
    println!("-------------------------");

    // A block in the Lozenets district; the ring closes back on its first
    // vertex.
    let block = line_string![
        (x: 23.370, y: 42.669),
        (x: 23.373, y: 42.669),
        (x: 23.373, y: 42.671),
        (x: 23.370, y: 42.671),
        (x: 23.370, y: 42.669),
    ];

    let buildings = index.query_category_in_polygon("Building", &block);
    println!("   Found {} buildings:", buildings.len());
    for b in &buildings {
        println!(
            "     • long {:.4}..{:.4}, lat {:.4}..{:.4}",
            b.long_min, b.long_max, b.lat_min, b.lat_max
        );
    }

    // ========================================
    // 4. Polygon Refinement in Action
    // ========================================
    println!("\n4. Polygon Refinement in Action");
    println!("-------------------------------");

    // A triangle whose bounding box covers both playgrounds, while the
    // triangle itself covers only one of them.
    let triangle = line_string![
        (x: 23.368, y: 42.668),
        (x: 23.376, y: 42.668),
        (x: 23.368, y: 42.673),
        (x: 23.368, y: 42.668),
    ];

    let triangle_bbox = georoi::ring_bbox(&triangle.0).ok_or("empty ring")?;
    let candidates = index
        .catalog()
        .objects()
        .iter()
        .filter(|o| o.category == "Football playground")
        .filter(|o| o.bbox().intersects(&triangle_bbox))
        .count();
    let exact = index.query_category_in_polygon("Football playground", &triangle);

    println!("   Bounding-box candidates: {}", candidates);
    println!("   Exact polygon matches:   {}", exact.len());

    // ========================================
    // 5. Listing a Whole Category
    // ========================================
    println!("\n5. Listing a Whole Category");
    println!("---------------------------");

    let all_buildings = index.objects_in_category("Building");
    println!("   {} buildings in the catalog", all_buildings.len());

    // ========================================
    // 6. Empty Results Are Not Errors
    // ========================================
    println!("\n6. Empty Results Are Not Errors");
    println!("-------------------------------");

    let far_away = line_string![
        (x: 0.0, y: 0.0),
        (x: 1.0, y: 0.0),
        (x: 1.0, y: 1.0),
        (x: 0.0, y: 1.0),
        (x: 0.0, y: 0.0),
    ];
    let nothing = index.query_category_in_polygon("Building", &far_away);
    println!("   Query far from Sofia returned {} objects\n", nothing.len());

    println!("=== Region of Interest Queries Complete! ===");
    println!("\nKey Features Demonstrated:");
    println!("  • Build an immutable index from a dataset");
    println!("  • Inspect catalog statistics");
    println!("  • Query a category inside a polygon ring");
    println!("  • Coarse bounding-box filter plus exact refinement");
    println!("  • Empty results instead of errors");

    Ok(())
}
