//! Full workflow through the facade: polygon file in, grid CSV out, compare.

use std::fs;

use gridloc::io::{write_attr_grid_file, write_wkt_csv, WktRecord};
use gridloc::prelude::*;
use gridloc_test_utils::{quad_polygon, rectangle};

#[test]
fn polygon_file_to_grid_file_and_back() {
    let dir = tempfile::tempdir().unwrap();
    let poly_path = dir.path().join("land.wkt.csv");
    let records = vec![WktRecord {
        properties: [("name".to_owned(), "land".to_owned())].into_iter().collect(),
        geometry: rectangle(170.05, -44.95, 170.55, -44.45).into(),
    }];
    write_wkt_csv(&records, fs::File::create(&poly_path).unwrap()).unwrap();

    let land = load_polygon_file(&poly_path).unwrap();
    assert_eq!(land.name(), "land");

    let config = GenerateConfig {
        neighbours: 1,
        ..Default::default()
    };
    let grid = config.generate(&land).unwrap();
    assert_eq!(grid.len(), 49);

    let grid_path = dir.path().join("land_grid.csv");
    write_grid_file(&grid, &grid_path, CsvLayout::LatLon).unwrap();
    let reloaded = read_grid_file(&grid_path, 0.1, CsvLayout::LatLon).unwrap();

    let cmp = compare(&grid, &reloaded);
    assert!(cmp.is_identical());
    assert_eq!(cmp.summary().in_both, 49);
}

#[test]
fn regenerated_grid_differs_after_clip_change() {
    let land = Region::new("land", vec![rectangle(0.5, 0.5, 4.5, 4.5)]);
    let config = GenerateConfig {
        lat_min: 0.0,
        lat_max: 6.0,
        lon_min: 0.0,
        lon_max: 6.0,
        step: 1.0,
        neighbours: 0,
    };
    let before = config.generate(&land).unwrap();
    let after = before.union(&Region::new("quad", vec![quad_polygon()]));

    let cmp = compare(&before, &after);
    assert!(!cmp.is_identical());
    assert_eq!(cmp.summary().only_a, 0);
    assert_eq!(
        cmp.only_b.to_pairs(),
        vec![(4.0, 5.0), (5.0, 4.0), (5.0, 5.0), (5.0, 6.0)]
    );
}

#[test]
fn attribute_csv_through_facade() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sites.csv");
    let grid = Grid::new(1.0, [(1.0, 2.0)]).annotate("site", "A", None);
    write_attr_grid_file(&grid, &path, &gridloc::io::DEFAULT_COLUMNS).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "lat,lon\n2.0,1.0\n");
    assert_eq!(grid.attribute(Coordinate::new(1.0, 2.0), "site"), Some(&AttrValue::from("A")));
}
