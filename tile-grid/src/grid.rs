//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Extents and spatial reference systems

use std::f64::consts;

const EARTH_RADIUS: f64 = 6378137.0;

/// Geographic or projected extent
#[derive(PartialEq, Clone, Debug)]
pub struct Extent {
    pub minx: f64,
    pub miny: f64,
    pub maxx: f64,
    pub maxy: f64,
}

impl Extent {
    pub fn width(&self) -> f64 {
        self.maxx - self.minx
    }
    pub fn height(&self) -> f64 {
        self.maxy - self.miny
    }
}

/// Spatial reference systems supported for rendering
#[derive(PartialEq, Clone, Copy, Debug)]
pub enum Srs {
    /// EPSG:4326, longitude/latitude in degrees
    Wgs84,
    /// EPSG:3857, spherical Mercator in meters
    WebMercator,
}

impl Srs {
    pub fn from_srid(srid: i32) -> Option<Srs> {
        match srid {
            4326 => Some(Srs::Wgs84),
            3857 | 900913 => Some(Srs::WebMercator),
            _ => None,
        }
    }
    pub fn srid(&self) -> i32 {
        match self {
            Srs::Wgs84 => 4326,
            Srs::WebMercator => 3857,
        }
    }
    /// Project longitude/latitude into this SRS
    pub fn forward(&self, lon: f64, lat: f64) -> (f64, f64) {
        match self {
            Srs::Wgs84 => (lon, lat),
            Srs::WebMercator => lonlat_to_merc(lon, lat),
        }
    }
    /// Longitude/latitude of a coordinate in this SRS
    pub fn inverse(&self, x: f64, y: f64) -> (f64, f64) {
        match self {
            Srs::Wgs84 => (x, y),
            Srs::WebMercator => merc_to_lonlat(x, y),
        }
    }
}

/// Returns the Spherical Mercator (x, y) in meters
pub fn lonlat_to_merc(lon: f64, lat: f64) -> (f64, f64) {
    let x = EARTH_RADIUS * lon.to_radians();
    let y = EARTH_RADIUS * ((consts::PI * 0.25) + (0.5 * lat.to_radians())).tan().ln();
    (x, y)
}

/// Returns longitude/latitude of a Spherical Mercator coordinate
pub fn merc_to_lonlat(x: f64, y: f64) -> (f64, f64) {
    let lon = (x / EARTH_RADIUS).to_degrees();
    let lat = (2.0 * (y / EARTH_RADIUS).exp().atan() - consts::FRAC_PI_2).to_degrees();
    (lon, lat)
}
