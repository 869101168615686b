//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::grid::{lonlat_to_merc, merc_to_lonlat, Extent, Srs};

const MERC_MAX: f64 = 20037508.342789244;

#[test]
fn test_merc() {
    let (x, y) = lonlat_to_merc(0.0, 0.0);
    assert_eq!(x, 0.0);
    assert!(y.abs() < 1e-9);

    let (x, y) = lonlat_to_merc(-180.0, 85.0511287798066);
    assert!((x + MERC_MAX).abs() < 1e-6, "{}", x);
    assert!((y - MERC_MAX).abs() < 1e-3, "{}", y);

    let (lon, lat) = merc_to_lonlat(785657.54, 6839184.57);
    assert!((lon - 7.0577).abs() < 1e-3, "{}", lon);
    assert!((lat - 52.2155).abs() < 1e-3, "{}", lat);
    let (x, y) = lonlat_to_merc(lon, lat);
    assert!((x - 785657.54).abs() < 1e-6);
    assert!((y - 6839184.57).abs() < 1e-6);
}

#[test]
fn test_extent_size() {
    let (minx, miny) = lonlat_to_merc(-180.0, -85.0511287798066);
    let (maxx, maxy) = lonlat_to_merc(180.0, 85.0511287798066);
    let extent = Extent {
        minx,
        miny,
        maxx,
        maxy,
    };
    assert!((extent.minx + MERC_MAX).abs() < 1e-6);
    assert!((extent.maxx - MERC_MAX).abs() < 1e-6);
    assert!((extent.width() - 2.0 * MERC_MAX).abs() < 1e-6);
    assert!((extent.height() - 2.0 * MERC_MAX).abs() < 1e-3);
}

#[test]
fn test_srs() {
    assert_eq!(Srs::from_srid(4326), Some(Srs::Wgs84));
    assert_eq!(Srs::from_srid(3857), Some(Srs::WebMercator));
    assert_eq!(Srs::from_srid(900913), Some(Srs::WebMercator));
    assert_eq!(Srs::from_srid(2056), None);
    assert_eq!(Srs::WebMercator.srid(), 3857);

    assert_eq!(Srs::Wgs84.forward(7.058, 52.2384), (7.058, 52.2384));
    assert_eq!(Srs::Wgs84.inverse(7.058, 52.2384), (7.058, 52.2384));
    assert_eq!(
        Srs::WebMercator.forward(7.058, 52.2384),
        lonlat_to_merc(7.058, 52.2384)
    );
}
