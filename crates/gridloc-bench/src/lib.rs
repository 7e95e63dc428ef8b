//! Benchmark profiles for gridloc.
//!
//! Provides pre-built regions at realistic scale:
//!
//! - [`reference_region`]: a 13 x 14 degree box with a notched outline,
//!   roughly the extent of mainland New Zealand
//! - [`reference_config`]: the default generation config at step 0.1

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use geo::{polygon, Polygon};
use gridloc_grid::GenerateConfig;
use gridloc_region::Region;

/// Outline covering most of the default generation box, notched so that
/// clipping exercises the exact containment test and not just the bbox.
pub fn reference_polygon() -> Polygon<f64> {
    polygon![
        (x: 166.3, y: -47.7),
        (x: 178.7, y: -47.7),
        (x: 178.7, y: -34.3),
        (x: 172.5, y: -34.3),
        (x: 172.5, y: -41.0),
        (x: 166.3, y: -41.0),
    ]
}

/// Region wrapping [`reference_polygon`].
pub fn reference_region() -> Region {
    Region::new("reference", vec![reference_polygon()])
}

/// Default generation config (step 0.1, two neighbour rings).
pub fn reference_config() -> GenerateConfig {
    GenerateConfig::default()
}
